//! # Modeller Application
//!
//! [`ModellerApp`] ties the scene model to the editing session. Each
//! [`Command`] goes through [`ModellerApp::handle`], which checks the
//! current [`Mode`], applies the edit and reports an [`Outcome`].
//! [`ModellerApp::run`] drives the same dispatch from lines of text.

use std::fmt;
use std::io::{self, BufRead, Write};
use std::path::Path;

use crate::config::ModellerConfig;
use crate::gfx::geometry::ShapeType;
use crate::gfx::render::Renderer;
use crate::gfx::scene::model::SceneModel;
use crate::gfx::scene::shape::Rgb;
use crate::gfx::scene::transform::Axis;
use crate::input::{Command, Mode, SessionState, Sign, TransformKind};

/// Result of one command: whether it took effect, and a line for the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub success: bool,
    pub message: String,
}

impl Outcome {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.success {
            f.write_str(&self.message)
        } else {
            write!(f, "error: {}", self.message)
        }
    }
}

/// The editor: a scene model plus the interactive session driving it.
pub struct ModellerApp {
    model: SceneModel,
    session: SessionState,
    config: ModellerConfig,
}

impl Default for ModellerApp {
    fn default() -> Self {
        Self::new(ModellerConfig::default())
    }
}

impl ModellerApp {
    pub fn new(config: ModellerConfig) -> Self {
        Self {
            model: SceneModel::with_config(&config),
            session: SessionState::new(),
            config,
        }
    }

    pub fn model(&self) -> &SceneModel {
        &self.model
    }

    pub fn model_mut(&mut self) -> &mut SceneModel {
        &mut self.model
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    pub fn config(&self) -> &ModellerConfig {
        &self.config
    }

    pub fn render(&self, renderer: &mut dyn Renderer) {
        self.model.render(renderer);
    }

    /// Applies one command.
    pub fn handle(&mut self, command: Command) -> Outcome {
        log::debug!("command: {}", command);
        match command {
            Command::AddShape(ty) => self.add_shape(ty),
            Command::RemoveLastShape => self.remove_last_shape(),
            Command::SelectNext => match self.model.select_next() {
                Some(path) => Outcome::ok(format!("selected {}", path)),
                None => Outcome::ok("no shapes to select"),
            },
            Command::SetColor(color) => self.set_color(color),
            Command::Translate(axis, delta) => self.apply(TransformKind::Translate, axis, delta),
            Command::Rotate(axis, degrees) => self.apply(TransformKind::Rotate, axis, degrees),
            Command::Scale(axis, factor) => self.apply(TransformKind::Scale, axis, factor),
            Command::Save(path) => self.save(&path),
            Command::Load(path) => self.load(&path),
            Command::SetMode(mode) => {
                self.session.set_mode(mode);
                Outcome::ok(format!("{} mode", mode))
            }
            Command::SetTransformKind(kind) => {
                if self.session.mode == Mode::Inspection && kind != TransformKind::Rotate {
                    return Outcome::failed("only rotation is available in inspection mode");
                }
                self.session.active_transform = Some(kind);
                Outcome::ok(format!("{} along {}", kind, self.session.active_axis))
            }
            Command::SetAxis(axis) => {
                self.session.active_axis = axis;
                Outcome::ok(format!("axis {}", axis))
            }
            Command::Nudge(sign) => self.nudge(sign),
        }
    }

    fn add_shape(&mut self, ty: ShapeType) -> Outcome {
        if self.session.mode != Mode::Modelling {
            return Outcome::failed("shapes can only be added in modelling mode");
        }
        let path = self.model.add_shape(ty);
        Outcome::ok(format!("added {} at {}", ty, path))
    }

    fn remove_last_shape(&mut self) -> Outcome {
        if self.session.mode != Mode::Modelling {
            return Outcome::failed("shapes can only be removed in modelling mode");
        }
        if self.model.remove_last_shape() {
            Outcome::ok(format!("removed; {} shapes left", self.model.shape_count()))
        } else {
            Outcome::ok("nothing to remove")
        }
    }

    fn set_color(&mut self, color: Rgb) -> Outcome {
        if self.session.mode != Mode::Modelling {
            return Outcome::failed("colors can only be changed in modelling mode");
        }
        match self.model.current_shape_mut() {
            Some(shape) => {
                shape.set_color(color);
                Outcome::ok(format!("color {} {} {}", color[0], color[1], color[2]))
            }
            None => Outcome::failed("no shape selected"),
        }
    }

    /// Routes an edit to the selected shape, or in inspection mode a rotation
    /// to the whole model.
    fn apply(&mut self, kind: TransformKind, axis: Axis, amount: f32) -> Outcome {
        match self.session.mode {
            Mode::Inspection => {
                if kind != TransformKind::Rotate {
                    return Outcome::failed("only rotation is available in inspection mode");
                }
                self.model.root_node_mut().transform_mut().rotate(axis, amount);
                Outcome::ok(format!("model rotated {} about {}", amount, axis))
            }
            Mode::Modelling => {
                let Some(shape) = self.model.current_shape_mut() else {
                    return Outcome::failed("no shape selected");
                };
                match kind {
                    TransformKind::Translate => shape.translate(axis, amount),
                    TransformKind::Rotate => shape.rotate(axis, amount),
                    TransformKind::Scale => shape.scale(axis, amount),
                }
                Outcome::ok(format!("{} {} {}", kind, axis, amount))
            }
        }
    }

    fn nudge(&mut self, sign: Sign) -> Outcome {
        let Some(kind) = self.session.active_transform else {
            return Outcome::failed("no transform selected");
        };
        let amount = match (kind, sign) {
            (TransformKind::Translate, Sign::Plus) => self.config.translate_step,
            (TransformKind::Translate, Sign::Minus) => -self.config.translate_step,
            (TransformKind::Rotate, Sign::Plus) => self.config.rotate_step_degrees,
            (TransformKind::Rotate, Sign::Minus) => -self.config.rotate_step_degrees,
            (TransformKind::Scale, Sign::Plus) => self.config.scale_up_factor,
            (TransformKind::Scale, Sign::Minus) => self.config.scale_down_factor,
        };
        self.apply(kind, self.session.active_axis, amount)
    }

    fn save(&self, path: &Path) -> Outcome {
        if self.session.mode != Mode::Modelling {
            return Outcome::failed("saving is only available in modelling mode");
        }
        match self.model.save_to_file(path) {
            Ok(()) => Outcome::ok(format!(
                "saved {} shapes to {}",
                self.model.shape_count(),
                path.display()
            )),
            Err(err) => {
                log::error!("{}", err);
                Outcome::failed(err.to_string())
            }
        }
    }

    fn load(&mut self, path: &Path) -> Outcome {
        match self.model.load_from_file(path) {
            Ok(report) if report.issues.is_empty() => {
                Outcome::ok(format!("loaded {} shapes", report.shape_count))
            }
            Ok(report) => Outcome::ok(format!(
                "loaded {} shapes with {} warnings (first: {})",
                report.shape_count,
                report.issues.len(),
                report.issues[0]
            )),
            Err(err) => {
                log::error!("{}", err);
                Outcome::failed(err.to_string())
            }
        }
    }

    /// One-line description of the model and session.
    pub fn summary(&self) -> String {
        let stats = self.model.statistics();
        let selected = match (self.model.current_shape(), self.model.current_path()) {
            (Some(shape), Some(path)) => format!("{} at {}", shape.shape_type(), path),
            _ => "nothing".to_string(),
        };
        let transform = self
            .session
            .active_transform
            .map_or("none".to_string(), |kind| kind.to_string());

        format!(
            "{} mode, {} shapes ({} top-level, depth {}), {} triangles, selected {}, transform {} axis {}",
            self.session.mode,
            stats.shape_count,
            stats.top_level_count,
            stats.max_depth,
            stats.total_triangles,
            selected,
            transform,
            self.session.active_axis
        )
    }

    /// Reads commands line by line from `input` and writes one response line
    /// per command to `output`, until end of input or `quit`.
    ///
    /// Blank lines and lines starting with `#` are skipped.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> io::Result<()> {
        for line in input.lines() {
            let line = line?;
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            match line {
                "quit" | "exit" => break,
                "stats" | "status" => writeln!(output, "{}", self.summary())?,
                "help" => writeln!(output, "{}", HELP)?,
                _ => match line.parse::<Command>() {
                    Ok(command) => {
                        let outcome = self.handle(command);
                        writeln!(output, "{}", outcome)?;
                    }
                    Err(err) => writeln!(output, "error: {}", err)?,
                },
            }
            output.flush()?;
        }
        Ok(())
    }
}

const HELP: &str = "\
commands:
  add <sphere|box|cylinder|cone>   remove   next
  color <r> <g> <b>
  translate|rotate|scale <x|y|z> <amount>
  mode <modelling|inspection>   transform <t|r|g>   axis <x|y|z>   +   -
  save <path>   load <path>   stats   help   quit";
