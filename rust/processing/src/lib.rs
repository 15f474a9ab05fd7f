// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! District assignment pipelines shared by the command-line tools.
//!
//! Both pipelines start from a loaded [`CityDataset`] and resolve every
//! building to the first district containing its centroid:
//!
//! - [`export_assignments`] writes the assigned buildings as a JSON array
//! - [`export_meshes`] extrudes each assigned footprint and writes one OBJ
//!   file per building under a per-district directory
//!
//! Unassigned buildings are skipped by both. Processing is sequential and any
//! error aborts the run.

pub mod assignments;
pub mod error;
pub mod mesh_export;
pub mod resolver;
pub mod summary;

pub use assignments::{
    assign_districts, assignments_to_json, export_assignments, write_assignments,
    AssignmentRecord,
};
pub use citymesh_core::CityDataset;
pub use error::{Error, Result};
pub use mesh_export::{building_object_name, export_meshes, MeshExporter, DEFAULT_MESH_ROOT};
pub use resolver::{Assignment, DistrictResolver};
pub use summary::{AssignmentSummary, DistrictCount, ExportSummary, ResolutionStats};
