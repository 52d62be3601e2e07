//! Modeller configuration.
//!
//! [`ModellerConfig`] holds the editor defaults: tessellation level for new
//! shapes, where new shapes attach, the step sizes used by nudge edits, and
//! whether hierarchy files are parsed strictly. Environment variables
//! override the defaults:
//!
//! | Variable           | Values                  |
//! |--------------------|-------------------------|
//! | `MODELLER_LEVEL`   | `1`..=`4`               |
//! | `MODELLER_INSERT`  | `top` or `child`        |
//! | `MODELLER_STRICT`  | `1`/`true` or `0`/`false` |

use crate::gfx::geometry::TessellationLevel;
use crate::gfx::scene::model::InsertPolicy;

pub const ENV_LEVEL: &str = "MODELLER_LEVEL";
pub const ENV_INSERT: &str = "MODELLER_INSERT";
pub const ENV_STRICT: &str = "MODELLER_STRICT";

#[derive(Debug, Clone, PartialEq)]
pub struct ModellerConfig {
    pub default_level: TessellationLevel,
    pub insert_policy: InsertPolicy,
    /// Degrees per rotate nudge
    pub rotate_step_degrees: f32,
    pub translate_step: f32,
    pub scale_up_factor: f32,
    pub scale_down_factor: f32,
    pub strict_parsing: bool,
}

impl Default for ModellerConfig {
    fn default() -> Self {
        Self {
            default_level: TessellationLevel::default(),
            insert_policy: InsertPolicy::TopLevel,
            rotate_step_degrees: 5.0,
            translate_step: 0.1,
            scale_up_factor: 1.1,
            scale_down_factor: 0.9,
            strict_parsing: false,
        }
    }
}

impl ModellerConfig {
    pub fn with_default_level(mut self, level: TessellationLevel) -> Self {
        self.default_level = level;
        self
    }

    pub fn with_insert_policy(mut self, policy: InsertPolicy) -> Self {
        self.insert_policy = policy;
        self
    }

    pub fn with_rotate_step(mut self, degrees: f32) -> Self {
        self.rotate_step_degrees = degrees;
        self
    }

    pub fn with_translate_step(mut self, step: f32) -> Self {
        self.translate_step = step;
        self
    }

    /// Factors applied by scale nudges in the positive and negative direction.
    pub fn with_scale_factors(mut self, up: f32, down: f32) -> Self {
        self.scale_up_factor = up;
        self.scale_down_factor = down;
        self
    }

    pub fn with_strict_parsing(mut self, strict: bool) -> Self {
        self.strict_parsing = strict;
        self
    }

    /// Defaults with environment variable overrides applied.
    pub fn from_env() -> Self {
        Self::default().apply_overrides(|key| std::env::var(key).ok())
    }

    /// Applies overrides from `lookup`. Unparseable values are logged and ignored.
    pub fn apply_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup(ENV_LEVEL) {
            match value.trim().parse::<u32>() {
                Ok(level) => self.default_level = TessellationLevel::new(level),
                Err(_) => log::warn!("ignoring {}={:?}: not a level", ENV_LEVEL, value),
            }
        }

        if let Some(value) = lookup(ENV_INSERT) {
            match value.trim().to_ascii_lowercase().as_str() {
                "top" | "toplevel" => self.insert_policy = InsertPolicy::TopLevel,
                "child" => self.insert_policy = InsertPolicy::ChildOfCurrent,
                _ => log::warn!("ignoring {}={:?}: expected top or child", ENV_INSERT, value),
            }
        }

        if let Some(value) = lookup(ENV_STRICT) {
            match value.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" => self.strict_parsing = true,
                "0" | "false" | "no" => self.strict_parsing = false,
                _ => log::warn!("ignoring {}={:?}: expected a boolean", ENV_STRICT, value),
            }
        }

        self
    }
}
