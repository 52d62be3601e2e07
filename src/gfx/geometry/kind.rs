//! # Shape Kinds and Tessellation Levels
//!
//! [`ShapeKind`] is the tagged variant over the four supported primitives,
//! carrying the base dimensions the generator builds from. [`ShapeType`] is
//! the field-less tag used in the hierarchy file format.

use std::fmt;
use std::str::FromStr;

/// Primitive tag as written in hierarchy files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeType {
    Sphere,
    Box,
    Cylinder,
    Cone,
}

impl ShapeType {
    pub const ALL: [ShapeType; 4] = [
        ShapeType::Sphere,
        ShapeType::Box,
        ShapeType::Cylinder,
        ShapeType::Cone,
    ];

    /// File-format token (`SPHERE`, `BOX`, `CYLINDER`, `CONE`).
    pub fn token(self) -> &'static str {
        match self {
            ShapeType::Sphere => "SPHERE",
            ShapeType::Box => "BOX",
            ShapeType::Cylinder => "CYLINDER",
            ShapeType::Cone => "CONE",
        }
    }

    /// The kind with the default unit dimensions used by the editor and the loader.
    pub fn default_kind(self) -> ShapeKind {
        match self {
            ShapeType::Sphere => ShapeKind::Sphere { radius: 1.0 },
            ShapeType::Box => ShapeKind::Box { size: 1.0 },
            ShapeType::Cylinder => ShapeKind::Cylinder {
                radius: 1.0,
                height: 1.0,
            },
            ShapeType::Cone => ShapeKind::Cone {
                radius: 1.0,
                height: 1.0,
            },
        }
    }
}

impl fmt::Display for ShapeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// Returned when a token names no known primitive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownShapeType(pub String);

impl fmt::Display for UnknownShapeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown shape type '{}'", self.0)
    }
}

impl std::error::Error for UnknownShapeType {}

impl FromStr for ShapeType {
    type Err = UnknownShapeType;

    /// Accepts the file tokens case-insensitively, so `sphere` and `SPHERE` both parse.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ShapeType::ALL
            .into_iter()
            .find(|ty| ty.token().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownShapeType(s.to_string()))
    }
}

/// A primitive together with its base (untransformed) dimensions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ShapeKind {
    Sphere { radius: f32 },
    Box { size: f32 },
    Cylinder { radius: f32, height: f32 },
    Cone { radius: f32, height: f32 },
}

impl ShapeKind {
    pub fn shape_type(&self) -> ShapeType {
        match self {
            ShapeKind::Sphere { .. } => ShapeType::Sphere,
            ShapeKind::Box { .. } => ShapeType::Box,
            ShapeKind::Cylinder { .. } => ShapeType::Cylinder,
            ShapeKind::Cone { .. } => ShapeType::Cone,
        }
    }
}

impl From<ShapeType> for ShapeKind {
    fn from(ty: ShapeType) -> Self {
        ty.default_kind()
    }
}

/// Mesh subdivision density, always within `MIN..=MAX`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TessellationLevel(u32);

impl TessellationLevel {
    pub const MIN: u32 = 1;
    pub const MAX: u32 = 4;

    /// Builds a level, clamping out-of-range requests into `[MIN, MAX]`.
    pub fn new(level: u32) -> Self {
        let clamped = level.clamp(Self::MIN, Self::MAX);
        if clamped != level {
            log::warn!(
                "tessellation level {} out of range [{}, {}], clamped to {}",
                level,
                Self::MIN,
                Self::MAX,
                clamped
            );
        }
        Self(clamped)
    }

    pub fn get(self) -> u32 {
        self.0
    }

    /// `2^(level - 1)`: 1, 2, 4 or 8.
    pub fn multiplier(self) -> u32 {
        1 << (self.0 - 1)
    }
}

impl Default for TessellationLevel {
    fn default() -> Self {
        Self(Self::MIN)
    }
}

impl fmt::Display for TessellationLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
