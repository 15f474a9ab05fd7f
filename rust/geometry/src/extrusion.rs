// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Extrusion operations - lifting 2D footprints into building solids

use crate::error::{Error, Result};
use crate::mesh::PolygonMesh;
use crate::polygon::validate_ring;
use nalgebra::{Point2, Point3};

/// Elevation of the building base
pub const BASE_ELEVATION: f64 = 0.0;

/// Elevation of the building top ring
pub const TOP_ELEVATION: f64 = 1.0;

/// Extrude a footprint from [`BASE_ELEVATION`] to [`TOP_ELEVATION`]
#[inline]
pub fn extrude_footprint(footprint: &[Point2<f64>]) -> Result<PolygonMesh> {
    extrude_footprint_between(footprint, BASE_ELEVATION, TOP_ELEVATION)
}

/// Extrude a footprint along +Z between two elevations
///
/// For a footprint of N points the mesh has 2N vertices: the base ring at
/// `base` followed by the same ring at `top`. It has N+1 faces: the base
/// polygon `0..N`, then one quad per footprint edge
/// `[j, j+1, N+j+1, N+j]` (indices mod N). The top is left open.
///
/// The footprint is used exactly as given; a repeated closing point becomes
/// its own vertex pair and yields a zero-area wall quad.
pub fn extrude_footprint_between(
    footprint: &[Point2<f64>],
    base: f64,
    top: f64,
) -> Result<PolygonMesh> {
    validate_ring(footprint)?;
    if !base.is_finite() || !top.is_finite() || top <= base {
        return Err(Error::InvalidExtrusion(format!(
            "top elevation {} must be above base elevation {}",
            top, base
        )));
    }

    let n = footprint.len();
    let mut mesh = PolygonMesh::with_capacity(n * 2, n + 1);

    for p in footprint {
        mesh.add_vertex(Point3::new(p.x, p.y, base));
    }
    for p in footprint {
        mesh.add_vertex(Point3::new(p.x, p.y, top));
    }

    let n = n as u32;
    mesh.add_face(0..n)?;
    create_side_walls(n, &mut mesh)?;

    Ok(mesh)
}

/// Connect base edge `j` to top edge `j` for every edge of the ring
#[inline]
fn create_side_walls(n: u32, mesh: &mut PolygonMesh) -> Result<()> {
    for j in 0..n {
        let next = (j + 1) % n;
        mesh.add_face([j, next, n + next, n + j])?;
    }
    Ok(())
}
