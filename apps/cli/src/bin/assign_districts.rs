// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Assign every building to the district containing its centroid and write
//! the result as JSON.

use anyhow::Context;
use citymesh_cli::{init_tracing, Config};
use citymesh_core::CityDataset;
use citymesh_processing::export_assignments;

fn main() -> anyhow::Result<()> {
    init_tracing();
    let config = Config::from_env();

    tracing::info!(
        input = %config.input.display(),
        output = %config.assignments_output.display(),
        "Assigning buildings to districts"
    );

    let dataset = CityDataset::from_path(&config.input)
        .with_context(|| format!("loading {}", config.input.display()))?;
    let summary = export_assignments(&dataset, &config.assignments_output)
        .context("writing district assignments")?;

    tracing::info!(
        assigned = summary.stats.assigned,
        dropped = summary.stats.dropped(),
        output = %summary.output.display(),
        "Done"
    );
    Ok(())
}
