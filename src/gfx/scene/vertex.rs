//! # Vertex Data Structures
//!
//! This module defines the vertex format produced by the primitive generators
//! and handed to the renderer collaborator as raw bytes.

use std::mem;

/// A 3D vertex with position and normal data.
///
/// The `#[repr(C)]` attribute ensures the struct has a C-compatible memory
/// layout, so a slice of vertices can be uploaded to a GPU buffer unchanged
/// via [`bytemuck::cast_slice`].
///
/// # Examples
///
/// ```
/// use haggis_modeller::gfx::scene::vertex::Vertex3D;
///
/// let vertex = Vertex3D::new([0.0, 1.0, 0.0], [0.0, 1.0, 0.0]);
/// assert_eq!(vertex.position[1], 1.0);
/// ```
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex3D {
    /// 3D position coordinates [x, y, z]
    pub position: [f32; 3],
    /// 3D normal vector [nx, ny, nz] for lighting calculations
    pub normal: [f32; 3],
}

impl Vertex3D {
    /// Byte distance between consecutive vertices in a buffer.
    pub const STRIDE: usize = mem::size_of::<Vertex3D>();
    /// Byte offset of `position` (shader location 0).
    pub const POSITION_OFFSET: usize = 0;
    /// Byte offset of `normal` (shader location 1).
    pub const NORMAL_OFFSET: usize = mem::size_of::<[f32; 3]>();

    pub fn new(position: [f32; 3], normal: [f32; 3]) -> Self {
        Self { position, normal }
    }
}
