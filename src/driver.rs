//! Wires loading, execution and rendering together.

use std::fs;
use std::path::Path;

use crate::ast::{Command, Script};
use crate::errors::{LoadError, ScriptError, SourceContext};
use crate::log::{debug, info, warn};
use crate::parse;
use crate::render::Grid;
use crate::robot::Robot;
use crate::types::Dimension;

/// Script read by the binary, relative to the working directory.
pub const SCRIPT_PATH: &str = "commands.txt";

/// Owns the grid and the queue of commands waiting to run.
#[derive(Debug)]
pub struct Driver {
    grid: Grid,
    commands: Vec<Command>,
    diagnostics: Vec<ScriptError>,
}

impl Default for Driver {
    fn default() -> Self {
        Self::new(Dimension::DEFAULT)
    }
}

impl Driver {
    /// A driver with a blank `size` grid and nothing loaded.
    pub fn new(size: Dimension) -> Self {
        Self {
            grid: Grid::new(size),
            commands: Vec::new(),
            diagnostics: Vec::new(),
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Commands loaded but not yet run.
    pub fn pending(&self) -> &[Command] {
        &self.commands
    }

    /// Read a script from disk and load it.
    ///
    /// An unreadable file loads nothing; the grid keeps its current size.
    pub fn load_file(&mut self, path: impl AsRef<Path>) -> Result<(), LoadError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|source| {
            warn!(path = %path.display(), error = %source, "can't open script");
            LoadError::Io {
                path: path.to_path_buf(),
                source,
            }
        })?;
        self.load_source(SourceContext::new(path.display().to_string(), source));
        Ok(())
    }

    /// Load a script held in memory.
    ///
    /// A `DIMENSION` directive resizes the grid in place, discarding its marks.
    /// Rejected lines are kept until [`Driver::take_diagnostics`].
    pub fn load_source(&mut self, ctx: SourceContext) {
        match parse::parse(&ctx) {
            Ok(parsed) => {
                self.diagnostics.extend(parsed.errors);
                self.load_script(parsed.script);
            }
            Err(err) => self.diagnostics.push(err),
        }
    }

    pub fn load_script(&mut self, script: Script) {
        if let Some(size) = script.dimension {
            debug!(side = size.get(), "resizing grid");
            self.grid.resize(size);
        }
        info!(commands = script.commands.len(), "script loaded");
        self.commands.extend(script.commands);
    }

    /// Apply every pending command in order with a robot starting at the origin.
    pub fn run(&mut self) {
        let mut robot = Robot::new(&mut self.grid);
        for command in self.commands.drain(..) {
            debug!(?command, "apply");
            command.apply(&mut robot);
        }
    }

    pub fn render(&self) -> String {
        self.grid.render()
    }

    pub fn diagnostics(&self) -> &[ScriptError] {
        &self.diagnostics
    }

    pub fn take_diagnostics(&mut self) -> Vec<ScriptError> {
        std::mem::take(&mut self.diagnostics)
    }
}
