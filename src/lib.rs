// src/lib.rs
//! Haggis Modeller
//!
//! A hierarchical shape modeller core: procedural primitive meshes, a scene
//! tree of transformed shapes, and a plain-text hierarchy file format.

pub mod app;
pub mod config;
pub mod error;
pub mod gfx;
pub mod input;
pub mod prelude;

// Re-export main types for convenience
pub use app::ModellerApp;
pub use config::ModellerConfig;
pub use error::{CodecError, CommandError, ParseIssue, ParseIssueKind};
