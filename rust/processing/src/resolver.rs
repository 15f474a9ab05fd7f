// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! District lookup by centroid containment

use crate::error::{Error, Result};
use citymesh_core::{Building, CityDataset, District};
use citymesh_geometry::polygon::{centroid, contains, validate_ring};

/// A building paired with the district that contains its centroid
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Assignment<'a> {
    pub building: &'a Building,
    pub district: &'a District,
}

impl<'a> Assignment<'a> {
    #[inline]
    pub fn district_name(&self) -> &'a str {
        &self.district.name
    }
}

/// Resolves buildings to districts in district definition order
///
/// The first district whose ring strictly contains the building's area
/// centroid wins. Overlapping districts are not disambiguated, and a centroid
/// lying on a district edge does not count as inside that district.
#[derive(Debug, Clone, Copy)]
pub struct DistrictResolver<'a> {
    districts: &'a [District],
}

impl<'a> DistrictResolver<'a> {
    pub fn new(dataset: &'a CityDataset) -> Result<Self> {
        Self::from_districts(dataset.districts())
    }

    /// Every district ring needs at least 3 finite vertices
    pub fn from_districts(districts: &'a [District]) -> Result<Self> {
        for district in districts {
            validate_ring(&district.ring).map_err(|source| Error::InvalidDistrict {
                name: district.name.clone(),
                source,
            })?;
        }
        Ok(Self { districts })
    }

    /// Find the district containing the building's centroid.
    ///
    /// Fails only when the footprint has no centroid (fewer than 3 points,
    /// zero area, or non-finite coordinates).
    pub fn resolve(&self, building: &Building) -> Result<Option<&'a District>> {
        let center = centroid(&building.ring)?;
        let found = self
            .districts
            .iter()
            .find(|district| contains(&district.ring, &center));

        match found {
            Some(district) => tracing::debug!(
                building = building.index,
                district = %district.name,
                x = center.x,
                y = center.y,
                "Building assigned"
            ),
            None => tracing::warn!(
                building = building.index,
                x = center.x,
                y = center.y,
                "Building centroid outside every district, dropped"
            ),
        }

        Ok(found)
    }

    /// Resolve every building, keeping source order and skipping unassigned ones
    pub fn resolve_all(&self, buildings: &'a [Building]) -> Result<Vec<Assignment<'a>>> {
        let mut assignments = Vec::with_capacity(buildings.len());
        for building in buildings {
            if let Some(district) = self.resolve(building)? {
                assignments.push(Assignment { building, district });
            }
        }
        Ok(assignments)
    }
}
