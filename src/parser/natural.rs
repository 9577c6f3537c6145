//! Relative phrases like `1 day + 12 hours`, `-90 minutes`, `2 weeks ago`.
//!
//! Terms may be joined by `+`, `,` or `and`; the joiners are dropped and
//! the rest goes to jiff's friendly span grammar, so units must appear
//! largest first and at most once. A joiner must sit between two terms.
//! A leading sign and a final `ago` negate the whole phrase; they cannot be
//! combined and `ago` may appear only once.

use crate::core::span::Span;
use crate::domain::CalendarInterval;
use crate::utils::error::{IntervalError, Result};
use jiff::fmt::friendly;

static PHRASE_PARSER: friendly::SpanParser = friendly::SpanParser::new();

fn rewrite_joiners(text: &str) -> Result<String> {
    let lowered = text.to_ascii_lowercase().replace(',', " , ");
    let mut terms: Vec<&str> = Vec::new();
    let mut pending_joiner = false;
    let mut ago = false;

    for token in lowered.split_whitespace() {
        match token {
            "+" | "," | "and" => {
                if terms.is_empty() || pending_joiner {
                    return Err(IntervalError::parse(text, "joiner without a preceding term"));
                }
                pending_joiner = true;
            }
            "ago" => {
                if ago {
                    return Err(IntervalError::parse(text, "repeated 'ago'"));
                }
                if pending_joiner {
                    return Err(IntervalError::parse(text, "'ago' after a joiner"));
                }
                ago = true;
                terms.push(token);
            }
            _ => {
                // `1 day +12 hours`: the sign of a later term only joins it
                let token = if terms.is_empty() {
                    token
                } else {
                    token.strip_prefix('+').unwrap_or(token)
                };
                pending_joiner = false;
                terms.push(token);
            }
        }
    }

    if pending_joiner {
        return Err(IntervalError::parse(text, "joiner without a following term"));
    }
    if terms.is_empty() {
        return Err(IntervalError::parse(text, "no terms"));
    }
    if ago && terms[0].starts_with(['+', '-']) {
        return Err(IntervalError::parse(text, "both a sign and 'ago'"));
    }
    Ok(terms.join(" "))
}

/// Parses a relative phrase into its fields, keeping years and months.
pub fn parse_interval(text: &str) -> Result<CalendarInterval> {
    let phrase = rewrite_joiners(text)?;
    let span = PHRASE_PARSER
        .parse_span(phrase.as_str())
        .map_err(|e| IntervalError::parse(text, e.to_string()))?;
    Ok(CalendarInterval::from_jiff(&span))
}

/// Parses a relative phrase into a span. Years or months are `InvalidArgument`.
pub fn parse(text: &str) -> Result<Span> {
    let interval = parse_interval(text)?;
    let total = interval.total_seconds()?;
    tracing::trace!(input = text, ?interval, total, "parsed relative phrase");
    Ok(Span::from_seconds(total))
}
