//! Diagnostics for script loading.
//!
//! A rejected line is reported with the script text attached and the offending
//! word underlined, so the binary can print it with miette's fancy handler.

use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// A script's text and the name it is reported under.
#[derive(Debug, Clone)]
pub struct SourceContext {
    /// Path of the script file, or a label such as `<test>` for in-memory text
    pub name: String,
    pub source: String,
}

impl SourceContext {
    pub fn new(name: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            source: source.into(),
        }
    }

    /// The script text each per-line diagnostic points into.
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.name, self.source.clone())
    }
}

// ============================================================================
// Script Errors
// ============================================================================

/// Problems found while loading a script.
///
/// Every variant except `Syntax` concerns a single line: that line is skipped
/// and loading carries on.
#[derive(Error, Diagnostic, Debug)]
pub enum ScriptError {
    #[error("unknown command: {keyword}")]
    #[diagnostic(
        code(gridplot::script::unknown_command),
        help("expected one of DIMENSION, MOVE_TO, LINE_TO (keywords are case-sensitive)")
    )]
    UnknownCommand {
        keyword: String,
        line: usize,
        #[source_code]
        src: NamedSource<String>,
        #[label("unknown command")]
        span: SourceSpan,
    },

    #[error("invalid integer: {token}")]
    #[diagnostic(code(gridplot::script::invalid_integer))]
    InvalidInteger {
        token: String,
        line: usize,
        #[source]
        cause: std::num::ParseIntError,
        #[source_code]
        src: NamedSource<String>,
        #[label("not a 32-bit integer")]
        span: SourceSpan,
    },

    #[error("{command} expects {expected} argument(s), found {found}")]
    #[diagnostic(code(gridplot::script::missing_argument))]
    MissingArgument {
        command: &'static str,
        expected: usize,
        found: usize,
        line: usize,
        #[source_code]
        src: NamedSource<String>,
        #[label("arguments missing after this")]
        span: SourceSpan,
    },

    #[error("grid dimension {value} is larger than {max}")]
    #[diagnostic(
        code(gridplot::script::dimension_too_large),
        help("the directive is ignored and the current grid is kept")
    )]
    DimensionTooLarge {
        value: i64,
        max: usize,
        line: usize,
        #[source_code]
        src: NamedSource<String>,
        #[label("too large")]
        span: SourceSpan,
    },

    #[error("malformed script: {message}")]
    #[diagnostic(code(gridplot::script::syntax))]
    Syntax { message: String },
}

impl ScriptError {
    /// One-based line number of the rejected line, if the error concerns one.
    pub fn line(&self) -> Option<usize> {
        match self {
            ScriptError::UnknownCommand { line, .. }
            | ScriptError::InvalidInteger { line, .. }
            | ScriptError::MissingArgument { line, .. }
            | ScriptError::DimensionTooLarge { line, .. } => Some(*line),
            ScriptError::Syntax { .. } => None,
        }
    }
}

// ============================================================================
// Load Errors
// ============================================================================

/// Errors that stop a script from being read at all
#[derive(Error, Diagnostic, Debug)]
pub enum LoadError {
    #[error("can't open script {}", path.display())]
    #[diagnostic(
        code(gridplot::load::io),
        help("no commands were loaded; the grid is rendered as it is")
    )]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
