use std::fmt;
use std::str::FromStr;

use crate::gfx::scene::transform::Axis;

/// Editor mode. Modelling edits the selected shape; inspection only turns
/// the whole model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Modelling,
    Inspection,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Mode::Modelling => "modelling",
            Mode::Inspection => "inspection",
        })
    }
}

impl FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "modelling" | "modeling" | "m" => Ok(Mode::Modelling),
            "inspection" | "inspect" | "i" => Ok(Mode::Inspection),
            _ => Err(s.to_string()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransformKind {
    Translate,
    Rotate,
    Scale,
}

impl fmt::Display for TransformKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TransformKind::Translate => "translate",
            TransformKind::Rotate => "rotate",
            TransformKind::Scale => "scale",
        })
    }
}

impl FromStr for TransformKind {
    type Err = String;

    /// Accepts full names and the single-letter keys `t`, `r`, `g`/`s`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "translate" | "t" => Ok(TransformKind::Translate),
            "rotate" | "r" => Ok(TransformKind::Rotate),
            "scale" | "g" | "s" => Ok(TransformKind::Scale),
            _ => Err(s.to_string()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sign {
    Plus,
    Minus,
}

/// Interactive state between commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SessionState {
    pub mode: Mode,
    /// No transform is active until one is chosen.
    pub active_transform: Option<TransformKind>,
    pub active_axis: Axis,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Switching mode clears the active transform.
    pub fn set_mode(&mut self, mode: Mode) {
        if self.mode != mode {
            self.active_transform = None;
        }
        self.mode = mode;
    }
}
