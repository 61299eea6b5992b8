use pest_derive::Parser;

pub mod ast;
pub mod driver;
pub mod errors;
pub mod log;
pub mod parse;
pub mod render;
pub mod robot;
pub mod types;

pub use ast::{Command, Script};
pub use driver::Driver;
pub use errors::{LoadError, ScriptError, SourceContext};
pub use render::Grid;
pub use robot::Robot;
pub use types::{Dimension, Point};

#[derive(Parser)]
#[grammar = "script.pest"]
pub struct ScriptParser;

/// Result of plotting a script on a default-sized grid.
#[derive(Debug)]
pub struct Plot {
    /// The rendered grid.
    pub output: String,
    /// Lines that were rejected while loading.
    pub diagnostics: Vec<ScriptError>,
}

/// Load `source`, run every command it contains and render the grid.
///
/// Rejected lines never stop the run: they are returned alongside the picture.
pub fn plot(name: &str, source: &str) -> Plot {
    let mut driver = Driver::default();
    driver.load_source(SourceContext::new(name, source));
    driver.run();
    Plot {
        output: driver.render(),
        diagnostics: driver.take_diagnostics(),
    }
}
