//! # Scene Management Module
//!
//! The editable shape hierarchy.
//!
//! ## Key Components
//!
//! - [`Shape`] - a primitive mesh with its own transform and color
//! - [`SceneNode`] - a tree node owning an optional shape and its children
//! - [`SceneModel`] - the whole tree, the current selection, load and save
//! - [`ModelCodec`] - the line-oriented hierarchy file format
//! - [`Vertex3D`] - vertex layout shared by every generated mesh
//!
//! ## Transforms
//!
//! A shape's model matrix is `T · Rx · Ry · Rz · S` built from accumulated
//! edits (see [`Transform`]). A node's global matrix is its parent's global
//! matrix times its own local matrix, so children follow their parents.

pub mod codec;
pub mod model;
pub mod node;
pub mod shape;
pub mod transform;
pub mod vertex;

// Re-export main types
pub use codec::{DecodedModel, ModelCodec, MAX_DEPTH};
pub use model::{InsertPolicy, LoadReport, NodePath, SceneModel, SceneStatistics};
pub use node::SceneNode;
pub use shape::{Rgb, Shape};
pub use transform::{Axis, Transform};
pub use vertex::Vertex3D;
