// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Wavefront OBJ export for polygon meshes
//!
//! Faces are written with their full arity, so N-gon caps survive the round
//! trip to modelling tools.

use crate::error::{Error, Result};
use crate::mesh::PolygonMesh;
use nalgebra::{Point3, Vector3};
use std::fmt;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::str::FromStr;

/// File extension used for exported meshes
pub const OBJ_EXTENSION: &str = "obj";

/// Which source axis becomes "up" in the written file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UpAxis {
    /// Y-up (OBJ convention): writes `x, z, -y`
    #[default]
    Y,
    /// Z-up: coordinates are written unchanged
    Z,
}

impl UpAxis {
    #[inline]
    fn map(self, x: f64, y: f64, z: f64) -> (f64, f64, f64) {
        match self {
            // `+ 0.0` turns -0.0 into 0.0 so flat data does not print "-0.000000"
            UpAxis::Y => (x, z, -y + 0.0),
            UpAxis::Z => (x, y, z),
        }
    }
}

impl FromStr for UpAxis {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "y" | "y-up" | "yup" => Ok(UpAxis::Y),
            "z" | "z-up" | "zup" => Ok(UpAxis::Z),
            other => Err(format!("unknown up axis '{}', expected 'y' or 'z'", other)),
        }
    }
}

impl fmt::Display for UpAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UpAxis::Y => f.write_str("y"),
            UpAxis::Z => f.write_str("z"),
        }
    }
}

/// OBJ output options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ObjOptions {
    pub up_axis: UpAxis,
    /// Emit one `vn` per face and reference it from the face
    pub write_normals: bool,
}

impl Default for ObjOptions {
    fn default() -> Self {
        Self {
            up_axis: UpAxis::Y,
            write_normals: true,
        }
    }
}

/// Write a single named mesh object as OBJ text
pub fn write_obj_to<W: Write>(
    out: &mut W,
    name: &str,
    mesh: &PolygonMesh,
    options: &ObjOptions,
) -> io::Result<()> {
    writeln!(out, "# Generated by citymesh")?;
    writeln!(
        out,
        "# {} vertices, {} faces, {}-up",
        mesh.vertex_count(),
        mesh.face_count(),
        options.up_axis
    )?;
    writeln!(out, "o {}", name)?;

    for p in &mesh.positions {
        let (x, y, z) = map_point(options.up_axis, p);
        writeln!(out, "v {:.6} {:.6} {:.6}", x, y, z)?;
    }

    if options.write_normals {
        for n in mesh.face_normals() {
            let (x, y, z) = map_vector(options.up_axis, &n);
            writeln!(out, "vn {:.4} {:.4} {:.4}", x, y, z)?;
        }
    }

    writeln!(out, "s off")?;

    for (face_idx, face) in mesh.faces.iter().enumerate() {
        write!(out, "f")?;
        for &i in face {
            // OBJ indices are 1-based
            if options.write_normals {
                write!(out, " {}//{}", i + 1, face_idx + 1)?;
            } else {
                write!(out, " {}", i + 1)?;
            }
        }
        writeln!(out)?;
    }

    Ok(())
}

/// Render a mesh to an OBJ string
pub fn obj_string(name: &str, mesh: &PolygonMesh, options: &ObjOptions) -> io::Result<String> {
    let mut buf = Vec::new();
    write_obj_to(&mut buf, name, mesh, options)?;
    String::from_utf8(buf).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

/// Write a mesh to an OBJ file, replacing any existing file
pub fn write_obj(path: &Path, name: &str, mesh: &PolygonMesh, options: &ObjOptions) -> Result<()> {
    let io_err = |source| Error::Io {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(io_err)?;
    let mut out = BufWriter::new(file);
    write_obj_to(&mut out, name, mesh, options).map_err(io_err)?;
    out.flush().map_err(io_err)?;
    Ok(())
}

#[inline]
fn map_point(axis: UpAxis, p: &Point3<f64>) -> (f64, f64, f64) {
    axis.map(p.x, p.y, p.z)
}

#[inline]
fn map_vector(axis: UpAxis, v: &Vector3<f64>) -> (f64, f64, f64) {
    axis.map(v.x, v.y, v.z)
}
