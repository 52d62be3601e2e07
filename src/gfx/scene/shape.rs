use cgmath::Matrix4;

use super::transform::{Axis, Transform};
use crate::gfx::geometry::{generate, Mesh, ShapeKind, ShapeType, TessellationLevel};

/// RGB color, components nominally in 0.0-1.0.
pub type Rgb = [f32; 3];

pub const WHITE: Rgb = [1.0, 1.0, 1.0];

/// A primitive instance: kind, level, generated mesh, transform and color.
///
/// Kind, level and mesh are fixed at construction. All geometric edits go
/// through the transform; the base mesh is never regenerated.
#[derive(Debug, Clone)]
pub struct Shape {
    kind: ShapeKind,
    level: TessellationLevel,
    mesh: Mesh,
    transform: Transform,
    color: Rgb,
}

impl Shape {
    /// Create a new shape with identity transform and white color
    pub fn new(kind: ShapeKind, level: TessellationLevel) -> Self {
        Self::from_parts(kind, level, Transform::identity(), WHITE)
    }

    /// Shape of the given type with default unit dimensions.
    pub fn of_type(ty: ShapeType, level: TessellationLevel) -> Self {
        Self::new(ty.default_kind(), level)
    }

    pub fn from_parts(kind: ShapeKind, level: TessellationLevel, transform: Transform, color: Rgb) -> Self {
        Self {
            mesh: generate(&kind, level),
            kind,
            level,
            transform,
            color,
        }
    }

    pub fn kind(&self) -> &ShapeKind {
        &self.kind
    }

    pub fn shape_type(&self) -> ShapeType {
        self.kind.shape_type()
    }

    pub fn level(&self) -> TessellationLevel {
        self.level
    }

    pub fn mesh(&self) -> &Mesh {
        &self.mesh
    }

    pub fn transform(&self) -> &Transform {
        &self.transform
    }

    pub fn color(&self) -> Rgb {
        self.color
    }

    pub fn translate(&mut self, axis: Axis, delta: f32) {
        self.transform.translate(axis, delta);
    }

    pub fn rotate(&mut self, axis: Axis, delta_degrees: f32) {
        self.transform.rotate(axis, delta_degrees);
    }

    pub fn scale(&mut self, axis: Axis, factor: f32) {
        self.transform.scale(axis, factor);
    }

    /// Overwrites the color.
    pub fn set_color(&mut self, color: Rgb) {
        self.color = color;
    }

    pub fn model_matrix(&self) -> Matrix4<f32> {
        self.transform.matrix()
    }
}
