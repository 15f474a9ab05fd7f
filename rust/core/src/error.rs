// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for dataset loading
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while reading a city dataset
#[derive(Error, Debug)]
pub enum Error {
    /// Malformed JSON, or a required top-level key (`features`, `id`) is absent.
    #[error("Invalid dataset JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Missing field `{field}` in {context}")]
    MissingField {
        context: String,
        field: &'static str,
    },

    #[error("No outer ring in {context}")]
    MissingRing { context: String },

    #[error("Point {index} of {context} has fewer than 2 coordinates")]
    InvalidPoint { context: String, index: usize },

    #[error("Cannot read dataset {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
