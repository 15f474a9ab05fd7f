// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Shared setup for the CityMesh command-line tools.
//!
//! - `assign-districts` - writes `buildings_with_districts.json`
//! - `export-meshes` - writes `mesh/buildings/<district>/Building_<i>.obj`
//!
//! Neither tool takes arguments; see [`Config`] for environment overrides.

pub mod config;

pub use config::Config;

/// Initialize logging to stderr, filtered by `RUST_LOG` (default `info`).
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()))
        .with_writer(std::io::stderr)
        .init();
}
