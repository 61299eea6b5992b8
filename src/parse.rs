//! Parse pest pairs into a [`Script`]
//!
//! Each line is checked on its own. A bad line becomes a [`ScriptError`] and is
//! skipped; the rest of the script still loads.

use pest::Parser;
use pest::iterators::Pair;
use pest::Span;

use crate::ast::{Command, Script};
use crate::errors::{ScriptError, SourceContext};
use crate::log::{debug, warn};
use crate::render::defaults;
use crate::types::{Dimension, DimensionError, Point};
use crate::{Rule, ScriptParser};

pub const DIMENSION: &str = "DIMENSION";
pub const MOVE_TO: &str = "MOVE_TO";
pub const LINE_TO: &str = "LINE_TO";

/// A loaded script together with the lines that were rejected.
#[derive(Debug, Default)]
pub struct Parsed {
    pub script: Script,
    pub errors: Vec<ScriptError>,
}

/// What one accepted line contributes to the script.
enum Directive {
    Dimension(Option<Dimension>),
    Command(Command),
}

/// Parse a whole script
pub fn parse(ctx: &SourceContext) -> Result<Parsed, ScriptError> {
    let pairs = ScriptParser::parse(Rule::script, &ctx.source).map_err(|e| {
        ScriptError::Syntax {
            message: e.to_string(),
        }
    })?;

    let mut parsed = Parsed::default();
    let lines = pairs
        .flat_map(|pair| pair.into_inner())
        .filter(|pair| pair.as_rule() == Rule::line);

    // Every source line yields a `line` pair, blank ones included
    for (index, line) in lines.enumerate() {
        let number = index + 1;
        match parse_line(ctx, number, line) {
            Ok(Some(Directive::Dimension(Some(dimension)))) => {
                debug!(line = number, side = dimension.get(), "grid dimension");
                parsed.script.dimension = Some(dimension);
            }
            Ok(Some(Directive::Dimension(None))) => {
                debug!(line = number, "non-positive dimension ignored");
            }
            Ok(Some(Directive::Command(command))) => parsed.script.commands.push(command),
            Ok(None) => {
                debug!(line = number, "blank line skipped");
            }
            Err(err) => {
                warn!(line = number, error = %err, "line rejected");
                parsed.errors.push(err);
            }
        }
    }

    Ok(parsed)
}

fn parse_line(
    ctx: &SourceContext,
    number: usize,
    line: Pair<Rule>,
) -> Result<Option<Directive>, ScriptError> {
    let words: Vec<Pair<Rule>> = line.into_inner().collect();
    let Some((keyword, args)) = words.split_first() else {
        return Ok(None);
    };

    match keyword.as_str() {
        DIMENSION => {
            let [side] = arguments::<1>(ctx, number, DIMENSION, keyword, args)?;
            let value = parse_int(ctx, number, side)?;
            match Dimension::try_new(value.into()) {
                Ok(dimension) => Ok(Some(Directive::Dimension(Some(dimension)))),
                Err(DimensionError::NotPositive(_)) => Ok(Some(Directive::Dimension(None))),
                Err(DimensionError::TooLarge(value)) => Err(ScriptError::DimensionTooLarge {
                    value,
                    max: defaults::MAX_GRID_SIZE,
                    line: number,
                    src: ctx.named_source(),
                    span: span_of(side.as_span()),
                }),
            }
        }
        MOVE_TO => {
            let point = parse_point(ctx, number, MOVE_TO, keyword, args)?;
            Ok(Some(Directive::Command(Command::MoveTo(point))))
        }
        LINE_TO => {
            let point = parse_point(ctx, number, LINE_TO, keyword, args)?;
            Ok(Some(Directive::Command(Command::LineTo(point))))
        }
        other => Err(ScriptError::UnknownCommand {
            keyword: other.to_string(),
            line: number,
            src: ctx.named_source(),
            span: span_of(keyword.as_span()),
        }),
    }
}

fn parse_point(
    ctx: &SourceContext,
    number: usize,
    command: &'static str,
    keyword: &Pair<Rule>,
    args: &[Pair<Rule>],
) -> Result<Point, ScriptError> {
    let [x, y] = arguments::<2>(ctx, number, command, keyword, args)?;
    Ok(Point::new(
        parse_int(ctx, number, x)?,
        parse_int(ctx, number, y)?,
    ))
}

/// Hand back the first `N` argument words. Words after those are ignored.
fn arguments<'a, 'i, const N: usize>(
    ctx: &SourceContext,
    number: usize,
    command: &'static str,
    keyword: &'a Pair<'i, Rule>,
    args: &'a [Pair<'i, Rule>],
) -> Result<[&'a Pair<'i, Rule>; N], ScriptError> {
    let found = args.len();
    if found > N {
        debug!(line = number, command = command, ignored = found - N, "extra arguments ignored");
    }
    let last = args.last().unwrap_or(keyword);
    let words: Vec<&Pair<Rule>> = args.iter().take(N).collect();
    words
        .try_into()
        .map_err(|_| ScriptError::MissingArgument {
            command,
            expected: N,
            found,
            line: number,
            src: ctx.named_source(),
            span: span_of(last.as_span()),
        })
}

fn parse_int(ctx: &SourceContext, number: usize, word: &Pair<Rule>) -> Result<i32, ScriptError> {
    word.as_str()
        .parse::<i32>()
        .map_err(|cause| ScriptError::InvalidInteger {
            token: word.as_str().to_string(),
            line: number,
            cause,
            src: ctx.named_source(),
            span: span_of(word.as_span()),
        })
}

fn span_of(span: Span<'_>) -> miette::SourceSpan {
    (span.start()..span.end()).into()
}
