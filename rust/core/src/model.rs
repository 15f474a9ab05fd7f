// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! In-memory city model: named districts and building footprints

use nalgebra::Point2;
use rustc_hash::FxHashMap;

/// Administrative district with its outer boundary ring
#[derive(Debug, Clone, PartialEq)]
pub struct District {
    pub name: String,
    /// Outer ring as read from the source (may or may not repeat the first point)
    pub ring: Vec<Point2<f64>>,
}

impl District {
    pub fn new(name: impl Into<String>, ring: Vec<Point2<f64>>) -> Self {
        Self {
            name: name.into(),
            ring,
        }
    }
}

/// Building footprint
#[derive(Debug, Clone, PartialEq)]
pub struct Building {
    /// Position in the source building list, counting every building
    pub index: usize,
    /// Outer ring as read from the source
    pub ring: Vec<Point2<f64>>,
}

impl Building {
    pub fn new(index: usize, ring: Vec<Point2<f64>>) -> Self {
        Self { index, ring }
    }

    /// Outer ring with the closing point repeated at the end.
    ///
    /// Rings that already end on their first point are returned as-is.
    pub fn closed_ring(&self) -> Vec<Point2<f64>> {
        let mut ring = self.ring.clone();
        if let (Some(first), Some(last)) = (ring.first().copied(), ring.last().copied()) {
            if first != last {
                ring.push(first);
            }
        }
        ring
    }
}

/// Districts and buildings of one city dataset
///
/// Districts keep the order in which their names were first defined. Defining
/// a name again replaces its ring in place.
#[derive(Debug, Clone, Default)]
pub struct CityDataset {
    districts: Vec<District>,
    district_index: FxHashMap<String, usize>,
    buildings: Vec<Building>,
}

impl CityDataset {
    /// Create an empty dataset
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a district, replacing the ring of an existing one with the same name.
    ///
    /// Returns `true` when an earlier definition was replaced.
    pub fn insert_district(&mut self, district: District) -> bool {
        if let Some(&slot) = self.district_index.get(&district.name) {
            self.districts[slot].ring = district.ring;
            return true;
        }
        self.district_index
            .insert(district.name.clone(), self.districts.len());
        self.districts.push(district);
        false
    }

    /// Append a building footprint; its index is its position in the list
    pub fn push_building(&mut self, ring: Vec<Point2<f64>>) -> &Building {
        let index = self.buildings.len();
        self.buildings.push(Building::new(index, ring));
        &self.buildings[index]
    }

    /// Districts in definition order
    #[inline]
    pub fn districts(&self) -> &[District] {
        &self.districts
    }

    /// Buildings in source order
    #[inline]
    pub fn buildings(&self) -> &[Building] {
        &self.buildings
    }

    /// Look up a district by name
    pub fn district(&self, name: &str) -> Option<&District> {
        self.district_index
            .get(name)
            .map(|&slot| &self.districts[slot])
    }

    #[inline]
    pub fn district_count(&self) -> usize {
        self.districts.len()
    }

    #[inline]
    pub fn building_count(&self) -> usize {
        self.buildings.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(x: f64, y: f64, size: f64) -> Vec<Point2<f64>> {
        vec![
            Point2::new(x, y),
            Point2::new(x, y + size),
            Point2::new(x + size, y + size),
            Point2::new(x + size, y),
        ]
    }

    #[test]
    fn redefined_district_keeps_first_position() {
        let mut dataset = CityDataset::new();
        assert!(!dataset.insert_district(District::new("North", square(0.0, 0.0, 1.0))));
        assert!(!dataset.insert_district(District::new("South", square(5.0, 5.0, 1.0))));
        assert!(dataset.insert_district(District::new("North", square(9.0, 9.0, 2.0))));

        let names: Vec<&str> = dataset.districts().iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["North", "South"]);
        assert_eq!(dataset.district("North").unwrap().ring, square(9.0, 9.0, 2.0));
        assert_eq!(dataset.district_count(), 2);
    }

    #[test]
    fn buildings_are_indexed_in_push_order() {
        let mut dataset = CityDataset::new();
        dataset.push_building(square(0.0, 0.0, 1.0));
        let second = dataset.push_building(square(3.0, 3.0, 1.0));
        assert_eq!(second.index, 1);
        assert_eq!(dataset.building_count(), 2);
        assert!(dataset.district("missing").is_none());
    }

    #[test]
    fn closed_ring_appends_first_point_once() {
        let open = Building::new(0, square(0.0, 0.0, 1.0));
        let closed = open.closed_ring();
        assert_eq!(closed.len(), 5);
        assert_eq!(closed[0], closed[4]);

        let again = Building::new(1, closed.clone());
        assert_eq!(again.closed_ring(), closed);

        assert!(Building::new(2, Vec::new()).closed_ring().is_empty());
    }
}
