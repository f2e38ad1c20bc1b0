use std::fmt;

use crate::coords::Vec3;

/// Construction error for [`TriangleMesh`]: the vertex count does not divide
/// into whole triangles.
#[derive(Debug, Clone, PartialEq)]
pub struct MeshError {
    pub vertex_count: usize,
}

impl fmt::Display for MeshError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "triangle mesh requires a vertex count divisible by 3, got {}",
            self.vertex_count
        )
    }
}

impl std::error::Error for MeshError {}

/// Immutable triangle list: each consecutive vertex triple is one triangle,
/// in the order the source data supplies them (winding is not controlled).
#[derive(Debug, Clone, PartialEq)]
pub struct TriangleMesh {
    vertices: Vec<Vec3>,
}

impl TriangleMesh {
    /// Validates and wraps a vertex list.
    ///
    /// A count not divisible by 3 is rejected here rather than silently
    /// truncated at draw time; all geometry is known-valid once a mesh
    /// exists.
    pub fn new(vertices: Vec<Vec3>) -> Result<Self, MeshError> {
        if vertices.len() % 3 != 0 {
            return Err(MeshError { vertex_count: vertices.len() });
        }
        Ok(Self { vertices })
    }

    #[inline]
    pub fn vertices(&self) -> &[Vec3] {
        &self.vertices
    }

    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.vertices.len() / 3
    }

    /// Iterates vertex triples in mesh order.
    pub fn triangles(&self) -> impl Iterator<Item = [Vec3; 3]> + '_ {
        self.vertices
            .chunks_exact(3)
            .map(|t| [t[0], t[1], t[2]])
    }
}
