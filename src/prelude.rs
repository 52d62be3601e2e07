//! # Haggis Modeller Prelude
//!
//! Commonly used types in one import:
//!
//! ```rust
//! use haggis_modeller::prelude::*;
//!
//! let mut model = SceneModel::new();
//! model.add_shape(ShapeType::Box);
//! model.current_shape_mut().unwrap().rotate(Axis::Y, 45.0);
//!
//! let mut draws = DrawList::new();
//! model.render(&mut draws);
//! assert_eq!(draws.len(), 1);
//! ```

// Re-export core application types
pub use crate::app::{ModellerApp, Outcome};
pub use crate::config::ModellerConfig;
pub use crate::error::{CodecError, CommandError, ParseIssue, ParseIssueKind};
pub use crate::input::{Command, Mode, SessionState, Sign, TransformKind};

// Re-export geometry and scene types
pub use crate::gfx::geometry::{generate, Aabb, Mesh, ShapeKind, ShapeType, TessellationLevel};
pub use crate::gfx::render::{DrawCommand, DrawItem, DrawList, Renderer};
pub use crate::gfx::scene::{
    Axis, InsertPolicy, ModelCodec, NodePath, Rgb, SceneModel, SceneNode, Shape, Transform,
    Vertex3D,
};

// Re-export common external dependencies
pub use cgmath::{Matrix4, Vector3};
