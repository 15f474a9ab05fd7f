// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Building-to-district assignment export (JSON)

use crate::error::{Error, Result};
use crate::resolver::{Assignment, DistrictResolver};
use crate::summary::{AssignmentSummary, ResolutionStats};
use citymesh_core::CityDataset;
use serde::{Deserialize, Serialize};
use serde_json::ser::PrettyFormatter;
use std::path::Path;

/// Indentation of the written JSON document
const JSON_INDENT: &[u8] = b"    ";

/// One exported building: its exterior ring and the district it belongs to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssignmentRecord {
    /// Closed exterior ring as `[x, y]` pairs
    pub coordinates: Vec<[f64; 2]>,
    pub district: String,
}

impl AssignmentRecord {
    pub fn from_assignment(assignment: &Assignment<'_>) -> Self {
        Self {
            coordinates: assignment
                .building
                .closed_ring()
                .iter()
                .map(|p| [p.x, p.y])
                .collect(),
            district: assignment.district.name.clone(),
        }
    }
}

/// Resolve every building of a dataset into assignment records
pub fn assign_districts(dataset: &CityDataset) -> Result<Vec<AssignmentRecord>> {
    let assignments = DistrictResolver::new(dataset)?.resolve_all(dataset.buildings())?;
    Ok(assignments
        .iter()
        .map(AssignmentRecord::from_assignment)
        .collect())
}

/// Serialize records as a JSON array indented with four spaces
pub fn assignments_to_json(records: &[AssignmentRecord]) -> Result<String> {
    let mut buf = Vec::new();
    let mut ser =
        serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(JSON_INDENT));
    records.serialize(&mut ser)?;
    // serde_json only emits valid UTF-8
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Write records to `path`, replacing any existing file
pub fn write_assignments(path: &Path, records: &[AssignmentRecord]) -> Result<()> {
    let json = assignments_to_json(records)?;
    std::fs::write(path, json).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Resolve a dataset and write its assignment file
pub fn export_assignments(dataset: &CityDataset, output: &Path) -> Result<AssignmentSummary> {
    let assignments = DistrictResolver::new(dataset)?.resolve_all(dataset.buildings())?;
    let stats = ResolutionStats::from_assignments(dataset, &assignments);
    stats.log("assignments");

    let records: Vec<AssignmentRecord> = assignments
        .iter()
        .map(AssignmentRecord::from_assignment)
        .collect();
    write_assignments(output, &records)?;

    tracing::info!(
        path = %output.display(),
        records = records.len(),
        "Wrote district assignments"
    );

    Ok(AssignmentSummary {
        stats,
        output: output.to_path_buf(),
    })
}
