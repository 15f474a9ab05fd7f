// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Per-district building mesh export
//!
//! Layout: `<root>/<district>/Building_<index>.obj`, where `index` is the
//! building's position in the full source list.

use crate::error::{Error, Result};
use crate::resolver::{Assignment, DistrictResolver};
use crate::summary::{ExportSummary, ResolutionStats};
use citymesh_core::CityDataset;
use citymesh_geometry::{extrude_footprint, write_obj, ObjOptions, OBJ_EXTENSION};
use std::path::{Component, Path, PathBuf};

/// Default output root, relative to the working directory
pub const DEFAULT_MESH_ROOT: &str = "mesh/buildings";

/// Object and file stem for a building
#[inline]
pub fn building_object_name(index: usize) -> String {
    format!("Building_{}", index)
}

/// Writes extruded building meshes into one directory per district
#[derive(Debug, Clone)]
pub struct MeshExporter {
    root: PathBuf,
    options: ObjOptions,
}

impl MeshExporter {
    pub fn new(root: impl Into<PathBuf>, options: ObjOptions) -> Self {
        Self {
            root: root.into(),
            options,
        }
    }

    #[inline]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directory holding one district's meshes
    ///
    /// The name must be a single plain path component so output stays under
    /// the root.
    pub fn district_dir(&self, district: &str) -> Result<PathBuf> {
        let mut components = Path::new(district).components();
        match (components.next(), components.next()) {
            (Some(Component::Normal(_)), None) => Ok(self.root.join(district)),
            _ => Err(Error::InvalidDistrictName(district.to_string())),
        }
    }

    /// Create the root directory (and parents) if missing
    pub fn prepare(&self) -> Result<()> {
        create_dir(&self.root)
    }

    /// Extrude one assigned building and write it; returns the written path.
    ///
    /// The mesh lives only for the duration of this call.
    pub fn export(&self, assignment: &Assignment<'_>) -> Result<PathBuf> {
        let dir = self.district_dir(assignment.district_name())?;
        create_dir(&dir)?;

        let name = building_object_name(assignment.building.index);
        let path = dir.join(format!("{}.{}", name, OBJ_EXTENSION));

        let mesh = extrude_footprint(&assignment.building.ring)?;
        write_obj(&path, &name, &mesh, &self.options)?;

        tracing::debug!(
            building = assignment.building.index,
            district = %assignment.district_name(),
            vertices = mesh.vertex_count(),
            faces = mesh.face_count(),
            path = %path.display(),
            "Wrote building mesh"
        );

        Ok(path)
    }
}

/// Resolve every building and export the assigned ones.
///
/// Buildings are resolved and written one at a time in source order; the
/// first failure aborts the run and leaves already written files in place.
pub fn export_meshes(dataset: &CityDataset, exporter: &MeshExporter) -> Result<ExportSummary> {
    let resolver = DistrictResolver::new(dataset)?;
    exporter.prepare()?;

    let mut assignments = Vec::new();
    let mut files = Vec::new();

    for building in dataset.buildings() {
        if let Some(district) = resolver.resolve(building)? {
            let assignment = Assignment { building, district };
            files.push(exporter.export(&assignment)?);
            assignments.push(assignment);
        }
    }

    let stats = ResolutionStats::from_assignments(dataset, &assignments);
    stats.log("meshes");
    tracing::info!(
        root = %exporter.root().display(),
        files = files.len(),
        "Exported building meshes"
    );

    Ok(ExportSummary {
        stats,
        root: exporter.root().to_path_buf(),
        files,
    })
}

fn create_dir(path: &Path) -> Result<()> {
    std::fs::create_dir_all(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })
}
