//! Renderer abstraction.
//!
//! The model walks its tree and hands each shape to a [`Renderer`] together
//! with the shape's global model matrix. Backends own their GPU resources;
//! the model never does. [`DrawList`] is a backend that just records calls.

use cgmath::Matrix4;

use crate::gfx::geometry::{Mesh, ShapeType};
use crate::gfx::scene::shape::Rgb;

/// Per-shape draw request.
#[derive(Debug, Clone, Copy)]
pub struct DrawItem<'a> {
    pub shape_type: ShapeType,
    pub mesh: &'a Mesh,
    pub model_matrix: Matrix4<f32>,
    pub color: Rgb,
    /// Whether this shape is the model's current selection
    pub selected: bool,
}

pub trait Renderer {
    fn draw_shape(&mut self, item: DrawItem<'_>);
}

/// A recorded draw call.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawCommand {
    pub shape_type: ShapeType,
    pub vertex_count: usize,
    pub triangle_count: usize,
    pub model_matrix: Matrix4<f32>,
    pub color: Rgb,
    pub selected: bool,
}

/// Renderer that records every draw call in order.
#[derive(Debug, Default)]
pub struct DrawList {
    commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn total_triangles(&self) -> usize {
        self.commands.iter().map(|c| c.triangle_count).sum()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

impl Renderer for DrawList {
    fn draw_shape(&mut self, item: DrawItem<'_>) {
        self.commands.push(DrawCommand {
            shape_type: item.shape_type,
            vertex_count: item.mesh.vertex_count(),
            triangle_count: item.mesh.triangle_count(),
            model_matrix: item.model_matrix,
            color: item.color,
            selected: item.selected,
        });
    }
}
