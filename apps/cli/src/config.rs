// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Run configuration: fixed default paths with environment overrides.

use citymesh_geometry::{ObjOptions, UpAxis};
use citymesh_processing::DEFAULT_MESH_ROOT;
use std::path::PathBuf;

/// Default input dataset.
pub const DEFAULT_INPUT: &str = "greenbark_field.json";
/// Default assignment output.
pub const DEFAULT_ASSIGNMENTS_OUTPUT: &str = "buildings_with_districts.json";

/// Tool configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// City dataset to read.
    pub input: PathBuf,
    /// JSON file written by `assign-districts`.
    pub assignments_output: PathBuf,
    /// Root directory for `export-meshes`.
    pub mesh_root: PathBuf,
    /// OBJ writer settings.
    pub obj: ObjOptions,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let path = |key: &str, default: &str| {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(default))
        };

        Self {
            input: path("CITYMESH_INPUT", DEFAULT_INPUT),
            assignments_output: path("CITYMESH_ASSIGNMENTS_OUTPUT", DEFAULT_ASSIGNMENTS_OUTPUT),
            mesh_root: path("CITYMESH_MESH_ROOT", DEFAULT_MESH_ROOT),
            obj: ObjOptions {
                up_axis: lookup("CITYMESH_OBJ_UP_AXIS")
                    .and_then(|v| v.parse::<UpAxis>().ok())
                    .unwrap_or_default(),
                write_normals: lookup("CITYMESH_OBJ_NORMALS")
                    .and_then(|v| v.trim().parse::<bool>().ok())
                    .unwrap_or(true),
            },
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}
