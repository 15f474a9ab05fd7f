// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! GeoJSON-like dataset loading
//!
//! The document layout is:
//!
//! ```json
//! { "features": [
//!     { "id": "districts", "geometries": [ { "name": "...", "coordinates": [ring, ...] } ] },
//!     { "id": "buildings", "coordinates": [ [ring, ...], ... ] }
//! ] }
//! ```
//!
//! A ring is a list of points; a point is a list of at least two numbers.

use crate::error::{Error, Result};
use crate::model::{CityDataset, District};
use nalgebra::Point2;
use serde::Deserialize;
use serde_json::Value;
use std::path::Path;

const DISTRICTS_FEATURE: &str = "districts";
const BUILDINGS_FEATURE: &str = "buildings";

type RawPoint = Vec<f64>;
type RawRing = Vec<RawPoint>;
type RawPolygon = Vec<RawRing>;

#[derive(Debug, Deserialize)]
struct RawCollection {
    features: Vec<RawFeature>,
}

#[derive(Debug, Deserialize)]
struct RawFeature {
    /// Any JSON value; only the two known strings are acted on
    id: Value,
    /// Payloads stay untyped until the id is known
    #[serde(default)]
    geometries: Option<Value>,
    #[serde(default)]
    coordinates: Option<Value>,
}

#[derive(Debug, Deserialize)]
struct RawDistrict {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    coordinates: Option<RawPolygon>,
}

impl CityDataset {
    /// Parse a dataset from a JSON string
    pub fn from_json_str(json: &str) -> Result<Self> {
        let raw: RawCollection = serde_json::from_str(json)?;
        build_dataset(raw)
    }

    /// Parse a dataset from JSON bytes
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        let raw: RawCollection = serde_json::from_slice(bytes)?;
        build_dataset(raw)
    }

    /// Read and parse a dataset file
    pub fn from_path(path: &Path) -> Result<Self> {
        let bytes = std::fs::read(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), bytes = bytes.len(), "Read city dataset");
        Self::from_slice(&bytes)
    }
}

fn build_dataset(raw: RawCollection) -> Result<CityDataset> {
    let mut dataset = CityDataset::new();

    for (feature_idx, feature) in raw.features.into_iter().enumerate() {
        match feature.id.as_str() {
            Some(DISTRICTS_FEATURE) => {
                let context = format!("feature {feature_idx} (districts)");
                let geometries = feature.geometries.ok_or_else(|| Error::MissingField {
                    context: context.clone(),
                    field: "geometries",
                })?;
                let geometries: Vec<RawDistrict> = serde_json::from_value(geometries)?;
                for (geom_idx, geom) in geometries.into_iter().enumerate() {
                    let context = format!("district geometry {geom_idx} of feature {feature_idx}");
                    let name = geom.name.ok_or_else(|| Error::MissingField {
                        context: context.clone(),
                        field: "name",
                    })?;
                    let polygon = geom.coordinates.ok_or_else(|| Error::MissingField {
                        context: context.clone(),
                        field: "coordinates",
                    })?;
                    let ring = outer_ring(polygon, &context)?;
                    if dataset.insert_district(District::new(name.clone(), ring)) {
                        tracing::debug!(district = %name, "District redefined, keeping latest ring");
                    }
                }
            }
            Some(BUILDINGS_FEATURE) => {
                let polygons = feature.coordinates.ok_or_else(|| Error::MissingField {
                    context: format!("feature {feature_idx} (buildings)"),
                    field: "coordinates",
                })?;
                let polygons: Vec<RawPolygon> = serde_json::from_value(polygons)?;
                for polygon in polygons {
                    let context = format!("building {}", dataset.building_count());
                    let ring = outer_ring(polygon, &context)?;
                    dataset.push_building(ring);
                }
            }
            _ => {
                tracing::trace!(feature = feature_idx, id = %feature.id, "Skipping feature");
            }
        }
    }

    tracing::debug!(
        districts = dataset.district_count(),
        buildings = dataset.building_count(),
        "Loaded city dataset"
    );

    Ok(dataset)
}

/// Take the first ring of a polygon and drop any extra coordinate components
fn outer_ring(polygon: RawPolygon, context: &str) -> Result<Vec<Point2<f64>>> {
    let ring = polygon
        .into_iter()
        .next()
        .ok_or_else(|| Error::MissingRing {
            context: context.to_string(),
        })?;

    ring.into_iter()
        .enumerate()
        .map(|(index, point)| match point.as_slice() {
            [x, y, ..] => Ok(Point2::new(*x, *y)),
            _ => Err(Error::InvalidPoint {
                context: context.to_string(),
                index,
            }),
        })
        .collect()
}
