// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Run statistics reported by the pipelines

use crate::resolver::Assignment;
use citymesh_core::CityDataset;
use rustc_hash::FxHashMap;
use std::path::PathBuf;

/// Number of buildings assigned to one district
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistrictCount {
    pub district: String,
    pub buildings: usize,
}

/// Outcome of resolving every building of a dataset
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolutionStats {
    pub total_buildings: usize,
    pub assigned: usize,
    /// One entry per district, in district definition order (zero counts included)
    pub per_district: Vec<DistrictCount>,
}

impl ResolutionStats {
    pub fn from_assignments(dataset: &CityDataset, assignments: &[Assignment<'_>]) -> Self {
        let mut counts: FxHashMap<&str, usize> = FxHashMap::default();
        for assignment in assignments {
            *counts.entry(assignment.district_name()).or_insert(0) += 1;
        }

        let per_district = dataset
            .districts()
            .iter()
            .map(|d| DistrictCount {
                district: d.name.clone(),
                buildings: counts.get(d.name.as_str()).copied().unwrap_or(0),
            })
            .collect();

        Self {
            total_buildings: dataset.building_count(),
            assigned: assignments.len(),
            per_district,
        }
    }

    /// Buildings whose centroid fell outside every district
    #[inline]
    pub fn dropped(&self) -> usize {
        self.total_buildings - self.assigned
    }

    pub(crate) fn log(&self, stage: &str) {
        tracing::info!(
            stage,
            total = self.total_buildings,
            assigned = self.assigned,
            dropped = self.dropped(),
            districts = self.per_district.len(),
            "District resolution finished"
        );
        for count in &self.per_district {
            tracing::debug!(district = %count.district, buildings = count.buildings, "District total");
        }
    }
}

/// Result of writing the assignment JSON
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssignmentSummary {
    pub stats: ResolutionStats,
    pub output: PathBuf,
}

/// Result of exporting per-district meshes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    pub stats: ResolutionStats,
    pub root: PathBuf,
    /// Written mesh files, in building order
    pub files: Vec<PathBuf>,
}
