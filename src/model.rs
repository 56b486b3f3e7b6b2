//! Triangle meshes loaded from OBJ files.
//!
//! A [`Model`] is a flat vertex list plus triangular faces indexing into it.
//! Every object and group in the file is merged into one model.

use std::path::Path;

use crate::error::{Error, Result};
use crate::math::Vec3;

/// A triangle defined by three 0-based indices into the vertex list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Face {
    pub a: u32,
    pub b: u32,
    pub c: u32,
}

impl Face {
    pub const fn new(a: u32, b: u32, c: u32) -> Self {
        Self { a, b, c }
    }

    pub fn indices(&self) -> [u32; 3] {
        [self.a, self.b, self.c]
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Model {
    name: String,
    vertices: Vec<Vec3>,
    faces: Vec<Face>,
}

impl Model {
    /// Build a model, checking that every face index is in range.
    pub fn new(name: impl Into<String>, vertices: Vec<Vec3>, faces: Vec<Face>) -> Result<Self> {
        for (face_index, face) in faces.iter().enumerate() {
            if let Some(&index) = face
                .indices()
                .iter()
                .find(|&&i| i as usize >= vertices.len())
            {
                return Err(Error::InvalidFace {
                    face: face_index,
                    index,
                    vertex_count: vertices.len(),
                });
            }
        }
        Ok(Self {
            name: name.into(),
            vertices,
            faces,
        })
    }

    /// Load and triangulate an OBJ file.
    pub fn from_obj(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let options = tobj::LoadOptions {
            triangulate: true,
            single_index: true,
            ..Default::default()
        };
        // Materials are irrelevant for wireframes, so their result is dropped.
        let (objects, _materials) = tobj::load_obj(path, &options)?;

        let mut vertices = Vec::new();
        let mut faces = Vec::new();
        for object in &objects {
            let offset = vertices.len() as u32;
            let mesh = &object.mesh;
            vertices.extend(
                mesh.positions
                    .chunks_exact(3)
                    .map(|p| Vec3::new(p[0], p[1], p[2])),
            );
            faces.extend(
                mesh.indices
                    .chunks_exact(3)
                    .map(|i| Face::new(i[0] + offset, i[1] + offset, i[2] + offset)),
            );
        }

        let name = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default();
        log::debug!(
            "loaded {} from {}: {} objects, {} vertices, {} faces",
            name,
            path.display(),
            objects.len(),
            vertices.len(),
            faces.len()
        );
        Self::new(name, vertices, faces)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn nverts(&self) -> usize {
        self.vertices.len()
    }

    pub fn nfaces(&self) -> usize {
        self.faces.len()
    }

    pub fn vertices(&self) -> &[Vec3] {
        &self.vertices
    }

    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    pub fn vert(&self, index: usize) -> Option<Vec3> {
        self.vertices.get(index).copied()
    }

    /// Corner `corner` (0, 1 or 2) of face `face`.
    pub fn face_vertex(&self, face: usize, corner: usize) -> Option<Vec3> {
        let face = self.faces.get(face)?;
        let index = *face.indices().get(corner)?;
        // indices were validated on construction
        self.vert(index as usize)
    }

    /// The three corners of every face.
    pub fn triangles(&self) -> impl Iterator<Item = [Vec3; 3]> + '_ {
        self.faces.iter().map(|face| {
            face.indices()
                .map(|index| self.vertices[index as usize])
        })
    }
}
