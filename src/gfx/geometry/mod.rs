//! # Procedural Geometry Generation
//!
//! This module generates the triangle meshes of the four editor primitives
//! procedurally, at one of four tessellation levels.
//!
//! ## Supported Primitives
//!
//! - **Sphere**: UV sphere, 8·2^(l−1) latitude × 16·2^(l−1) longitude bands
//! - **Box**: cube whose faces are split into a d×d grid, d = 2^(l−1)
//! - **Cylinder**: Y-axis cylinder with fan caps, 16·2^(l−1) segments
//! - **Cone**: base fan plus lateral fan to the apex, 16·2^(l−1) segments
//!
//! Generation is a pure function of `(kind, level)`: the same inputs always
//! produce bit-identical vertex and index buffers.
//!
//! ## Usage
//!
//! ```rust
//! use haggis_modeller::gfx::geometry::{generate, ShapeType, TessellationLevel};
//!
//! let mesh = generate(&ShapeType::Sphere.default_kind(), TessellationLevel::new(2));
//! assert_eq!(mesh.triangle_count(), 1024);
//! ```

pub mod bounds;
pub mod kind;
pub mod primitives;

pub use bounds::Aabb;
pub use kind::{ShapeKind, ShapeType, TessellationLevel, UnknownShapeType};
pub use primitives::*;

use crate::gfx::scene::vertex::Vertex3D;

/// Generated triangle mesh. Immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    vertices: Vec<Vertex3D>,
    /// Triangle indices (counter-clockwise winding seen from outside)
    indices: Vec<u32>,
}

impl Mesh {
    pub(crate) fn from_parts(vertices: Vec<Vertex3D>, indices: Vec<u32>) -> Self {
        debug_assert_eq!(indices.len() % 3, 0);
        Self { vertices, indices }
    }

    pub fn vertices(&self) -> &[Vertex3D] {
        &self.vertices
    }

    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// Get the number of vertices in this geometry
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Get the number of triangles in this geometry
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Iterates triangles as index triples.
    pub fn triangles(&self) -> impl Iterator<Item = [u32; 3]> + '_ {
        self.indices.chunks_exact(3).map(|t| [t[0], t[1], t[2]])
    }

    /// Vertex buffer contents ready for upload.
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Index buffer contents (u32 indices) ready for upload.
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }

    /// Local-space bounds of the vertex positions.
    pub fn bounds(&self) -> Aabb {
        Aabb::from_points(self.vertices.iter().map(|v| v.position))
    }
}
