// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Polygon mesh data structures

use crate::error::{Error, Result};
use nalgebra::{Point3, Vector3};
use smallvec::SmallVec;

/// Vertex indices of one polygon face, in winding order
pub type Face = SmallVec<[u32; 4]>;

/// Indexed polygon mesh with faces of arbitrary arity
///
/// Unlike a triangle soup, faces are kept as authored (N-gon caps, quad walls)
/// so they can be exported to formats that preserve polygon faces.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PolygonMesh {
    /// Vertex positions
    pub positions: Vec<Point3<f64>>,
    /// Faces as index lists into `positions`
    pub faces: Vec<Face>,
}

impl PolygonMesh {
    /// Create a new empty mesh
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mesh with capacity
    pub fn with_capacity(vertex_count: usize, face_count: usize) -> Self {
        Self {
            positions: Vec::with_capacity(vertex_count),
            faces: Vec::with_capacity(face_count),
        }
    }

    /// Add a vertex and return its index
    #[inline]
    pub fn add_vertex(&mut self, position: Point3<f64>) -> u32 {
        self.positions.push(position);
        (self.positions.len() - 1) as u32
    }

    /// Add a face; every index must refer to an existing vertex
    pub fn add_face<I>(&mut self, indices: I) -> Result<()>
    where
        I: IntoIterator<Item = u32>,
    {
        let face: Face = indices.into_iter().collect();
        if face.len() < 3 {
            return Err(Error::InvalidFace(format!(
                "face needs at least 3 vertices, got {}",
                face.len()
            )));
        }
        if let Some(&bad) = face
            .iter()
            .find(|&&i| i as usize >= self.positions.len())
        {
            return Err(Error::InvalidFace(format!(
                "vertex index {} out of range ({} vertices)",
                bad,
                self.positions.len()
            )));
        }
        self.faces.push(face);
        Ok(())
    }

    /// Get vertex count
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Get face count
    #[inline]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Unit normal of a face using Newell's method
    ///
    /// Works for non-planar loops. Degenerate faces (zero area) yield the zero
    /// vector.
    pub fn face_normal(&self, face: &[u32]) -> Vector3<f64> {
        let mut normal = Vector3::zeros();
        let n = face.len();
        for i in 0..n {
            let a = &self.positions[face[i] as usize];
            let b = &self.positions[face[(i + 1) % n] as usize];
            normal.x += (a.y - b.y) * (a.z + b.z);
            normal.y += (a.z - b.z) * (a.x + b.x);
            normal.z += (a.x - b.x) * (a.y + b.y);
        }
        normal.try_normalize(f64::EPSILON).unwrap_or_else(Vector3::zeros)
    }

    /// Normals of all faces, in face order
    pub fn face_normals(&self) -> Vec<Vector3<f64>> {
        self.faces.iter().map(|f| self.face_normal(f)).collect()
    }
}
