//! # Incremental Transforms
//!
//! [`Transform`] keeps the accumulated translation, per-axis rotation (in
//! degrees) and per-axis scale factors as plain state, and derives a 4×4
//! matrix from them on demand:
//!
//! ```text
//! M = T(translation) · Rx · Ry · Rz · S(scale)
//! ```
//!
//! Rotation and scale act about the local origin. Edits are incremental:
//! translation and rotation add, scale multiplies.

use std::cell::Cell;
use std::fmt;
use std::str::FromStr;

use cgmath::{Deg, Matrix4, SquareMatrix, Vector3};

/// Coordinate axis selector for transform edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Axis {
    #[default]
    X,
    Y,
    Z,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    pub fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Axis::X => 'X',
            Axis::Y => 'Y',
            Axis::Z => 'Z',
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl TryFrom<char> for Axis {
    type Error = char;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c.to_ascii_uppercase() {
            'X' => Ok(Axis::X),
            'Y' => Ok(Axis::Y),
            'Z' => Ok(Axis::Z),
            other => Err(other),
        }
    }
}

impl FromStr for Axis {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Axis::try_from(c).map_err(|_| s.to_string()),
            _ => Err(s.to_string()),
        }
    }
}

/// Accumulated translation / rotation / scale with a cached matrix.
#[derive(Debug, Clone)]
pub struct Transform {
    translation: Vector3<f32>,
    /// Euler angles in degrees, applied X then Y then Z (outermost first)
    rotation: Vector3<f32>,
    scale: Vector3<f32>,

    matrix: Cell<Option<Matrix4<f32>>>,
}

impl Transform {
    pub fn identity() -> Self {
        Self::from_parts(
            Vector3::new(0.0, 0.0, 0.0),
            Vector3::new(0.0, 0.0, 0.0),
            Vector3::new(1.0, 1.0, 1.0),
        )
    }

    /// Restores a transform from previously accumulated values.
    pub fn from_parts(translation: Vector3<f32>, rotation: Vector3<f32>, scale: Vector3<f32>) -> Self {
        Self {
            translation,
            rotation,
            scale,
            matrix: Cell::new(None),
        }
    }

    pub fn translation(&self) -> Vector3<f32> {
        self.translation
    }

    /// Accumulated rotation in degrees per axis.
    pub fn rotation(&self) -> Vector3<f32> {
        self.rotation
    }

    pub fn scale_factors(&self) -> Vector3<f32> {
        self.scale
    }

    /// Apply translation (adds to the accumulated offset)
    pub fn translate(&mut self, axis: Axis, delta: f32) {
        self.translation[axis.index()] += delta;
        self.invalidate();
    }

    /// Apply rotation in degrees around one axis (adds to the accumulated angle)
    pub fn rotate(&mut self, axis: Axis, delta_degrees: f32) {
        self.rotation[axis.index()] += delta_degrees;
        self.invalidate();
    }

    /// Apply scale along one axis (multiplies the accumulated factor).
    ///
    /// A factor of zero is accepted and flattens the shape along `axis`.
    pub fn scale(&mut self, axis: Axis, factor: f32) {
        self.scale[axis.index()] *= factor;
        self.invalidate();
    }

    /// Reset to identity
    pub fn reset(&mut self) {
        *self = Self::identity();
    }

    pub fn is_identity(&self) -> bool {
        self.translation == Vector3::new(0.0, 0.0, 0.0)
            && self.rotation == Vector3::new(0.0, 0.0, 0.0)
            && self.scale == Vector3::new(1.0, 1.0, 1.0)
    }

    /// `T · Rx · Ry · Rz · S`, recomputed only after an edit.
    pub fn matrix(&self) -> Matrix4<f32> {
        if let Some(matrix) = self.matrix.get() {
            return matrix;
        }

        let t = Matrix4::from_translation(self.translation);
        let rx = Matrix4::from_angle_x(Deg(self.rotation.x));
        let ry = Matrix4::from_angle_y(Deg(self.rotation.y));
        let rz = Matrix4::from_angle_z(Deg(self.rotation.z));
        let s = Matrix4::from_nonuniform_scale(self.scale.x, self.scale.y, self.scale.z);
        let matrix = t * rx * ry * rz * s; // Order matters

        self.matrix.set(Some(matrix));
        matrix
    }

    fn invalidate(&self) {
        self.matrix.set(None);
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}

impl PartialEq for Transform {
    fn eq(&self, other: &Self) -> bool {
        self.translation == other.translation
            && self.rotation == other.rotation
            && self.scale == other.scale
    }
}

/// `Matrix4::identity()` without importing `SquareMatrix` at call sites.
pub fn identity_matrix() -> Matrix4<f32> {
    Matrix4::identity()
}
