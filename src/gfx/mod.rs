//! # Graphics Module
//!
//! Everything between a shape request and a draw call:
//!
//! - **Geometry** ([`geometry`]) - procedural meshes for the four primitives
//! - **Scene** ([`scene`]) - shapes, transforms, the node tree and its file format
//! - **Rendering** ([`render`]) - the [`Renderer`] seam the model draws through
//!
//! The model never touches GPU state. A backend implements [`Renderer`] and
//! receives each shape's mesh, global model matrix and color.

pub mod geometry;
pub mod render;
pub mod scene;

// Re-export commonly used types
pub use render::{DrawList, Renderer};
