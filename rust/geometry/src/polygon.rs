// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Planar ring operations: validation, centroid and point containment
//!
//! Rings are simple (non-self-intersecting) and implicitly closed: the last
//! point may repeat the first one or not, both forms give the same results.

use crate::error::{Error, Result};
use nalgebra::Point2;

/// Number of distinct vertices, ignoring a repeated closing point
#[inline]
pub fn vertex_count(ring: &[Point2<f64>]) -> usize {
    match (ring.first(), ring.last()) {
        (Some(first), Some(last)) if ring.len() > 1 && first == last => ring.len() - 1,
        _ => ring.len(),
    }
}

/// Check that a ring has at least 3 vertices and only finite coordinates
pub fn validate_ring(ring: &[Point2<f64>]) -> Result<()> {
    if vertex_count(ring) < 3 {
        return Err(Error::DegeneratePolygon(format!(
            "ring must have at least 3 vertices, got {}",
            vertex_count(ring)
        )));
    }
    if let Some(index) = ring
        .iter()
        .position(|p| !p.x.is_finite() || !p.y.is_finite())
    {
        return Err(Error::NonFiniteCoordinate { index });
    }
    Ok(())
}

/// Area-weighted centroid of a ring
///
/// This is the centre of mass of the enclosed region, not the vertex average.
/// Accumulation is done relative to the first vertex so large absolute
/// coordinates (projected or geographic) keep their precision.
pub fn centroid(ring: &[Point2<f64>]) -> Result<Point2<f64>> {
    validate_ring(ring)?;

    let n = ring.len();
    let origin = ring[0];
    let mut twice_area = 0.0;
    let mut cx = 0.0;
    let mut cy = 0.0;

    for i in 0..n {
        let a = ring[i] - origin;
        let b = ring[(i + 1) % n] - origin;
        let cross = a.x * b.y - b.x * a.y;
        twice_area += cross;
        cx += (a.x + b.x) * cross;
        cy += (a.y + b.y) * cross;
    }

    if twice_area == 0.0 {
        return Err(Error::DegeneratePolygon(
            "ring encloses zero area".to_string(),
        ));
    }

    let scale = 1.0 / (3.0 * twice_area);
    Ok(Point2::new(origin.x + cx * scale, origin.y + cy * scale))
}

/// Check whether a point lies on one of the ring's edges (vertices included)
pub fn on_boundary(ring: &[Point2<f64>], point: &Point2<f64>) -> bool {
    let n = ring.len();
    if n == 0 {
        return false;
    }

    (0..n).any(|i| {
        let a = &ring[i];
        let b = &ring[(i + 1) % n];
        let cross = (b.x - a.x) * (point.y - a.y) - (b.y - a.y) * (point.x - a.x);
        cross == 0.0
            && point.x >= a.x.min(b.x)
            && point.x <= a.x.max(b.x)
            && point.y >= a.y.min(b.y)
            && point.y <= a.y.max(b.y)
    })
}

/// Ray-casting parity test
///
/// Points on the boundary may land on either side; use [`contains`] for the
/// boundary-exclusive rule.
pub fn point_in_ring(ring: &[Point2<f64>], point: &Point2<f64>) -> bool {
    if vertex_count(ring) < 3 {
        return false;
    }

    let mut inside = false;
    let n = ring.len();

    let mut j = n - 1;
    for i in 0..n {
        let pi = &ring[i];
        let pj = &ring[j];

        if ((pi.y > point.y) != (pj.y > point.y))
            && (point.x < (pj.x - pi.x) * (point.y - pi.y) / (pj.y - pi.y) + pi.x)
        {
            inside = !inside;
        }
        j = i;
    }

    inside
}

/// Boundary-exclusive containment: the point is strictly inside the ring
pub fn contains(ring: &[Point2<f64>], point: &Point2<f64>) -> bool {
    if vertex_count(ring) < 3 || on_boundary(ring, point) {
        return false;
    }
    point_in_ring(ring, point)
}
