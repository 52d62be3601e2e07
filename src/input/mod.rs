//! # Editing Commands
//!
//! Every user edit arrives as a [`Command`]. Commands can be built directly
//! or parsed from one line of text:
//!
//! ```rust
//! use haggis_modeller::input::Command;
//! use haggis_modeller::gfx::geometry::ShapeType;
//!
//! let command: Command = "add cone".parse().unwrap();
//! assert_eq!(command, Command::AddShape(ShapeType::Cone));
//! ```
//!
//! [`SessionState`] carries the interactive state the nudge commands need:
//! the mode, the active transform kind and the active axis.

pub mod session;

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use crate::error::CommandError;
use crate::gfx::geometry::ShapeType;
use crate::gfx::scene::shape::Rgb;
use crate::gfx::scene::transform::Axis;

pub use session::{Mode, SessionState, Sign, TransformKind};

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    AddShape(ShapeType),
    RemoveLastShape,
    SelectNext,
    SetColor(Rgb),
    Translate(Axis, f32),
    /// Degrees
    Rotate(Axis, f32),
    Scale(Axis, f32),
    Save(PathBuf),
    Load(PathBuf),
    SetMode(Mode),
    SetTransformKind(TransformKind),
    SetAxis(Axis),
    /// One step of the active transform along the active axis
    Nudge(Sign),
}

const USAGE_ADD: &str = "add <sphere|box|cylinder|cone>";
const USAGE_COLOR: &str = "color <r> <g> <b>";
const USAGE_TRANSLATE: &str = "translate <x|y|z> <amount>";
const USAGE_ROTATE: &str = "rotate <x|y|z> <degrees>";
const USAGE_SCALE: &str = "scale <x|y|z> <factor>";
const USAGE_SAVE: &str = "save <path>";
const USAGE_LOAD: &str = "load <path>";
const USAGE_MODE: &str = "mode <modelling|inspection>";
const USAGE_TRANSFORM: &str = "transform <translate|rotate|scale>";
const USAGE_AXIS: &str = "axis <x|y|z>";

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };
        let args: Vec<&str> = rest.split_whitespace().collect();

        match word.to_ascii_lowercase().as_str() {
            "" => Err(CommandError::Empty),
            "add" => match args.as_slice() {
                [ty] => ty
                    .parse()
                    .map(Command::AddShape)
                    .map_err(|_| CommandError::Usage(USAGE_ADD)),
                _ => Err(CommandError::Usage(USAGE_ADD)),
            },
            "remove" => Ok(Command::RemoveLastShape),
            "next" | "tab" => Ok(Command::SelectNext),
            "color" => match args.as_slice() {
                [r, g, b] => Ok(Command::SetColor([number(r)?, number(g)?, number(b)?])),
                _ => Err(CommandError::Usage(USAGE_COLOR)),
            },
            "translate" => axis_amount(&args, USAGE_TRANSLATE).map(|(a, v)| Command::Translate(a, v)),
            "rotate" => axis_amount(&args, USAGE_ROTATE).map(|(a, v)| Command::Rotate(a, v)),
            "scale" => axis_amount(&args, USAGE_SCALE).map(|(a, v)| Command::Scale(a, v)),
            "save" if !rest.is_empty() => Ok(Command::Save(PathBuf::from(rest))),
            "save" => Err(CommandError::Usage(USAGE_SAVE)),
            "load" if !rest.is_empty() => Ok(Command::Load(PathBuf::from(rest))),
            "load" => Err(CommandError::Usage(USAGE_LOAD)),
            "mode" => match args.as_slice() {
                [mode] => mode
                    .parse()
                    .map(Command::SetMode)
                    .map_err(|_| CommandError::Usage(USAGE_MODE)),
                _ => Err(CommandError::Usage(USAGE_MODE)),
            },
            "transform" => match args.as_slice() {
                [kind] => kind
                    .parse()
                    .map(Command::SetTransformKind)
                    .map_err(|_| CommandError::Usage(USAGE_TRANSFORM)),
                _ => Err(CommandError::Usage(USAGE_TRANSFORM)),
            },
            "axis" => match args.as_slice() {
                [axis] => axis
                    .parse()
                    .map(Command::SetAxis)
                    .map_err(|_| CommandError::Usage(USAGE_AXIS)),
                _ => Err(CommandError::Usage(USAGE_AXIS)),
            },
            "+" => Ok(Command::Nudge(Sign::Plus)),
            "-" => Ok(Command::Nudge(Sign::Minus)),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}

fn number(token: &str) -> Result<f32, CommandError> {
    token
        .parse::<f32>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| CommandError::InvalidNumber(token.to_string()))
}

fn axis_amount(args: &[&str], usage: &'static str) -> Result<(Axis, f32), CommandError> {
    match args {
        [axis, amount] => {
            let axis = axis.parse::<Axis>().map_err(|_| CommandError::Usage(usage))?;
            Ok((axis, number(amount)?))
        }
        _ => Err(CommandError::Usage(usage)),
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::AddShape(ty) => write!(f, "add {}", ty.token().to_ascii_lowercase()),
            Command::RemoveLastShape => f.write_str("remove"),
            Command::SelectNext => f.write_str("next"),
            Command::SetColor([r, g, b]) => write!(f, "color {} {} {}", r, g, b),
            Command::Translate(axis, v) => write!(f, "translate {} {}", axis, v),
            Command::Rotate(axis, v) => write!(f, "rotate {} {}", axis, v),
            Command::Scale(axis, v) => write!(f, "scale {} {}", axis, v),
            Command::Save(path) => write!(f, "save {}", path.display()),
            Command::Load(path) => write!(f, "load {}", path.display()),
            Command::SetMode(mode) => write!(f, "mode {}", mode),
            Command::SetTransformKind(kind) => write!(f, "transform {}", kind),
            Command::SetAxis(axis) => write!(f, "axis {}", axis),
            Command::Nudge(Sign::Plus) => f.write_str("+"),
            Command::Nudge(Sign::Minus) => f.write_str("-"),
        }
    }
}
