//! Text scripts standing in for mouse and keyboard events.
//!
//! One command per line:
//!
//! ```text
//! # comments and blank lines are ignored
//! click 0 0       # place an emitter, or one end of a segment
//! toggle          # switch between placing emitters and drawing segments
//! trace           # trace every ray, ends the session
//! quit            # ends the session without tracing
//! ```

use lumiere::Point;
use lumiere_setup::Input;
use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("line {line}: {kind}")]
pub struct ScriptError {
    /// 1-based
    pub line: usize,
    pub kind: ScriptErrorKind,
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ScriptErrorKind {
    #[error("unknown command `{0}`")]
    UnknownCommand(String),
    #[error("`{command}` expects {expected} argument(s), got {got}")]
    ArgCount {
        command: &'static str,
        expected: usize,
        got: usize,
    },
    #[error("invalid coordinate `{0}`")]
    InvalidCoordinate(String),
}

/// Parses a single line, `Ok(None)` if it holds no command.
pub fn parse_line(line: &str) -> Result<Option<Input<f64>>, ScriptErrorKind> {
    let line = line.split_once('#').map_or(line, |(code, _comment)| code);

    let mut words = line.split_whitespace();
    let Some(command) = words.next() else {
        return Ok(None);
    };
    let args: Vec<_> = words.collect();

    let expect_args = |command, expected| {
        if args.len() == expected {
            Ok(())
        } else {
            Err(ScriptErrorKind::ArgCount {
                command,
                expected,
                got: args.len(),
            })
        }
    };

    let input = match command {
        "click" => {
            expect_args("click", 2)?;
            let coord = |s: &str| {
                s.parse::<f64>()
                    .ok()
                    .filter(|c| c.is_finite())
                    .ok_or_else(|| ScriptErrorKind::InvalidCoordinate(s.into()))
            };
            Input::Click(Point::new(coord(args[0])?, coord(args[1])?))
        }
        "toggle" => {
            expect_args("toggle", 0)?;
            Input::ToggleMode
        }
        "trace" => {
            expect_args("trace", 0)?;
            Input::Trace
        }
        "quit" => {
            expect_args("quit", 0)?;
            Input::Quit
        }
        other => return Err(ScriptErrorKind::UnknownCommand(other.into())),
    };

    Ok(Some(input))
}

/// Parses a whole script, stopping at the first invalid line.
pub fn parse(script: &str) -> Result<Vec<Input<f64>>, ScriptError> {
    script
        .lines()
        .enumerate()
        .filter_map(|(i, line)| {
            parse_line(line)
                .map_err(|kind| ScriptError { line: i + 1, kind })
                .transpose()
        })
        .collect()
}
