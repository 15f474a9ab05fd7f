// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # CityMesh Core
//!
//! City dataset model and loader for GeoJSON-like district/building files.
//!
//! ## Overview
//!
//! A city dataset is a JSON document with a `features` list. Two kinds of
//! features are recognized by their `id`:
//!
//! - **`"districts"`**: a `geometries` list, each entry carrying a `name` and
//!   polygon `coordinates` (the outer ring is `coordinates[0]`)
//! - **`"buildings"`**: a `coordinates` list of polygons (outer ring first)
//!
//! Every other feature is skipped. Only outer rings are kept; holes are
//! dropped at load time.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use citymesh_core::CityDataset;
//!
//! let dataset = CityDataset::from_path("greenbark_field.json".as_ref())?;
//! for district in dataset.districts() {
//!     println!("{}: {} points", district.name, district.ring.len());
//! }
//! println!("{} buildings", dataset.building_count());
//! ```

pub mod error;
pub mod loader;
pub mod model;

pub use error::{Error, Result};
pub use model::{Building, CityDataset, District};

// Re-export nalgebra point type used by the model
pub use nalgebra::Point2;
