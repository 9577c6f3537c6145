pub mod hms;
pub mod natural;
pub mod spec;

use crate::core::span::Span;
use crate::utils::error::{IntervalError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which grammar to read an interval with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputKind {
    /// Try `h:m[:s]`, then an interval spec, then a relative phrase.
    #[default]
    Auto,
    Hms,
    Spec,
    Natural,
    /// A plain number of seconds; fractions are truncated toward zero.
    Seconds,
}

impl InputKind {
    pub const fn name(self) -> &'static str {
        match self {
            InputKind::Auto => "auto",
            InputKind::Hms => "hms",
            InputKind::Spec => "spec",
            InputKind::Natural => "natural",
            InputKind::Seconds => "seconds",
        }
    }
}

impl fmt::Display for InputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for InputKind {
    type Err = IntervalError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" => Ok(InputKind::Auto),
            "hms" => Ok(InputKind::Hms),
            "spec" | "iso" | "iso8601" => Ok(InputKind::Spec),
            "natural" | "phrase" => Ok(InputKind::Natural),
            "seconds" | "secs" => Ok(InputKind::Seconds),
            _ => Err(IntervalError::invalid_argument(format!(
                "unknown input kind '{}', expected auto, hms, spec, natural or seconds",
                s
            ))),
        }
    }
}

/// Reads `text` with the grammar chosen by `kind`.
pub fn parse_as(kind: InputKind, text: &str) -> Result<Span> {
    match kind {
        InputKind::Auto => parse_any(text),
        InputKind::Hms => hms::parse(text),
        InputKind::Spec => spec::parse(text),
        InputKind::Natural => natural::parse(text),
        InputKind::Seconds => parse_seconds(text),
    }
}

/// Picks the grammar from the shape of `text`: a colon means `h:m[:s]`, a
/// leading `P` means an interval spec, a number means seconds, anything else
/// is a relative phrase. Surrounding whitespace is ignored except by the
/// `h:m[:s]` grammar, which gets the text untouched.
pub fn parse_any(text: &str) -> Result<Span> {
    if text.contains(':') {
        tracing::debug!(input = text, kind = InputKind::Hms.name(), "detected input kind");
        return hms::parse(text);
    }

    let trimmed = text.trim();
    let kind = if trimmed.trim_start_matches(['+', '-']).starts_with('P') {
        InputKind::Spec
    } else if trimmed.parse::<f64>().is_ok() {
        InputKind::Seconds
    } else {
        InputKind::Natural
    };
    tracing::debug!(input = text, kind = kind.name(), "detected input kind");
    parse_as(kind, trimmed)
}

fn parse_seconds(text: &str) -> Result<Span> {
    let trimmed = text.trim();
    if let Ok(seconds) = trimmed.parse::<i64>() {
        return Ok(Span::from_seconds(seconds));
    }
    let value = trimmed
        .parse::<f64>()
        .map_err(|e| IntervalError::parse(text, e.to_string()))?;
    Span::from_secs_f64(value)
}
