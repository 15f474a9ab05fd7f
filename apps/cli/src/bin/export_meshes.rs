// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Extrude every assigned building footprint and write one OBJ file per
//! building, grouped into per-district directories.

use anyhow::Context;
use citymesh_cli::{init_tracing, Config};
use citymesh_core::CityDataset;
use citymesh_processing::{export_meshes, MeshExporter};

fn main() -> anyhow::Result<()> {
    init_tracing();
    let config = Config::from_env();

    tracing::info!(
        input = %config.input.display(),
        root = %config.mesh_root.display(),
        up_axis = %config.obj.up_axis,
        normals = config.obj.write_normals,
        "Exporting building meshes"
    );

    let dataset = CityDataset::from_path(&config.input)
        .with_context(|| format!("loading {}", config.input.display()))?;
    let exporter = MeshExporter::new(&config.mesh_root, config.obj);
    let summary = export_meshes(&dataset, &exporter).context("exporting building meshes")?;

    tracing::info!(
        files = summary.files.len(),
        dropped = summary.stats.dropped(),
        root = %summary.root.display(),
        "Done"
    );
    Ok(())
}
