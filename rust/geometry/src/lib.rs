// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! CityMesh Geometry
//!
//! Footprint geometry for city datasets: area centroids and
//! boundary-exclusive containment on simple rings, extrusion of footprints
//! into polygon meshes, and Wavefront OBJ export.

pub mod error;
pub mod extrusion;
pub mod mesh;
pub mod obj;
pub mod polygon;

// Re-export nalgebra types for convenience
pub use nalgebra::{Point2, Point3, Vector3};

pub use error::{Error, Result};
pub use extrusion::{extrude_footprint, extrude_footprint_between, BASE_ELEVATION, TOP_ELEVATION};
pub use mesh::{Face, PolygonMesh};
pub use obj::{obj_string, write_obj, write_obj_to, ObjOptions, UpAxis, OBJ_EXTENSION};
pub use polygon::{centroid, contains, on_boundary, validate_ring};
