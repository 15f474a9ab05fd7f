// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the processing pipeline.

use std::path::PathBuf;

/// Result type alias for pipeline operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that abort a pipeline run.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The input dataset could not be read or parsed.
    #[error(transparent)]
    Dataset(#[from] citymesh_core::Error),

    /// A footprint or district ring is degenerate, or mesh export failed.
    #[error(transparent)]
    Geometry(#[from] citymesh_geometry::Error),

    /// Assignment records could not be serialized.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A district ring cannot take part in containment tests.
    #[error("district {name:?}: {source}")]
    InvalidDistrict {
        name: String,
        #[source]
        source: citymesh_geometry::Error,
    },

    /// A district name cannot be used as a directory name.
    #[error("district name {0:?} is not a valid directory name")]
    InvalidDistrictName(String),

    /// Writing an output file or directory failed.
    #[error("cannot write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
