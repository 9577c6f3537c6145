use crate::core::span::Span;
use crate::domain::CalendarInterval;
use crate::utils::error::{IntervalError, Result};
use jiff::fmt::temporal;

static SPEC_PARSER: temporal::SpanParser = temporal::SpanParser::new();

/// Parses an ISO 8601 duration (`P1DT12H5M15S`, `P2W`, `-PT90M`) into its
/// fields. Years and months are kept so the caller decides whether they are
/// acceptable.
pub fn parse_interval(spec: &str) -> Result<CalendarInterval> {
    let span = SPEC_PARSER
        .parse_span(spec)
        .map_err(|e| IntervalError::parse(spec, e.to_string()))?;
    Ok(CalendarInterval::from_jiff(&span))
}

/// Parses an interval spec into a span. Years or months are `InvalidArgument`.
pub fn parse(spec: &str) -> Result<Span> {
    let interval = parse_interval(spec)?;
    let total = interval.total_seconds()?;
    tracing::trace!(input = spec, ?interval, total, "parsed interval spec");
    Ok(Span::from_seconds(total))
}
