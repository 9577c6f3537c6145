use crate::core::span::Span;
use crate::domain::{CalendarInterval, RoundingMode, TimeUnit};
use crate::format;
use crate::parser;
use crate::utils::error::Result;

/// Read contract and constructors shared by [`TimeInterval`](crate::TimeInterval)
/// and [`ImmutableTimeInterval`](crate::ImmutableTimeInterval). The two types
/// differ only in how `modify`, `add` and `sub` deliver their result.
pub trait Interval: Sized {
    fn span(&self) -> Span;

    fn from_span(span: Span) -> Self;

    fn from_seconds(total_seconds: i64) -> Self {
        Self::from_span(Span::from_seconds(total_seconds))
    }

    fn with_unit(value: i64, unit: TimeUnit) -> Result<Self> {
        Span::new(value, unit).map(Self::from_span)
    }

    fn from_secs_f64(value: f64) -> Result<Self> {
        Span::from_secs_f64(value).map(Self::from_span)
    }

    /// Parses `[+-]h:m[:s]`.
    fn from_hms(text: &str) -> Result<Self> {
        parser::hms::parse(text).map(Self::from_span)
    }

    /// Parses a relative phrase such as `1 day + 12 hours`.
    fn from_date_string(text: &str) -> Result<Self> {
        parser::natural::parse(text).map(Self::from_span)
    }

    /// Parses an interval spec such as `P1DT12H5M15S`.
    fn from_interval_spec(spec: &str) -> Result<Self> {
        parser::spec::parse(spec).map(Self::from_span)
    }

    fn total_seconds(&self) -> i64 {
        self.span().total_seconds()
    }

    fn is_negative(&self) -> bool {
        self.span().is_negative()
    }

    fn convert(&self, unit: TimeUnit, precision: u32, mode: RoundingMode) -> f64 {
        self.span().convert(unit, precision, mode)
    }

    fn to_days(&self, precision: u32) -> f64 {
        self.convert(TimeUnit::Day, precision, RoundingMode::HalfUp)
    }

    fn to_hours(&self, precision: u32) -> f64 {
        self.convert(TimeUnit::Hour, precision, RoundingMode::HalfUp)
    }

    fn to_minutes(&self, precision: u32) -> f64 {
        self.convert(TimeUnit::Minute, precision, RoundingMode::HalfUp)
    }

    fn to_seconds(&self, precision: u32) -> f64 {
        self.convert(TimeUnit::Second, precision, RoundingMode::HalfUp)
    }

    fn hours_part(&self) -> i64 {
        self.span().hours_part()
    }

    fn minutes_part(&self) -> i64 {
        self.span().minutes_part()
    }

    fn seconds_part(&self) -> i64 {
        self.span().seconds_part()
    }

    fn to_calendar_interval(&self) -> CalendarInterval {
        self.span().to_calendar_interval()
    }

    /// Renders `template`; see [`crate::format`] for the placeholders.
    fn format(&self, template: &str) -> String {
        format::format_span(self.span(), template)
    }
}

impl Interval for Span {
    fn span(&self) -> Span {
        *self
    }

    fn from_span(span: Span) -> Self {
        span
    }
}
