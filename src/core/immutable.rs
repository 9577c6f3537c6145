use crate::core::interval::Interval;
use crate::core::mutable::TimeInterval;
use crate::core::span::Span;
use crate::domain::TimeUnit;
use crate::format::DEFAULT_TEMPLATE;
use crate::parser;
use crate::utils::error::{IntervalError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Time interval whose `modify`, `add` and `sub` return a new value and leave
/// the receiver untouched. Prefer this one when the value is shared.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ImmutableTimeInterval {
    span: Span,
}

impl ImmutableTimeInterval {
    pub fn new(value: i64, unit: TimeUnit) -> Result<Self> {
        Self::with_unit(value, unit)
    }

    pub fn modify(&self, value: i64, unit: TimeUnit) -> Result<Self> {
        self.span.offset(value, unit).map(Self::from_span)
    }

    pub fn add(&self, other: &impl Interval) -> Result<Self> {
        self.span.checked_add(other.span()).map(Self::from_span)
    }

    pub fn sub(&self, other: &impl Interval) -> Result<Self> {
        self.span.checked_sub(other.span()).map(Self::from_span)
    }

    pub fn abs(&self) -> Result<Self> {
        self.span.checked_abs().map(Self::from_span)
    }

    pub fn negate(&self) -> Result<Self> {
        self.span.checked_neg().map(Self::from_span)
    }

    pub fn to_mutable(&self) -> TimeInterval {
        TimeInterval::from_span(self.span)
    }
}

impl Interval for ImmutableTimeInterval {
    fn span(&self) -> Span {
        self.span
    }

    fn from_span(span: Span) -> Self {
        Self { span }
    }
}

impl From<Span> for ImmutableTimeInterval {
    fn from(span: Span) -> Self {
        Self::from_span(span)
    }
}

impl PartialEq<TimeInterval> for ImmutableTimeInterval {
    fn eq(&self, other: &TimeInterval) -> bool {
        self.span == other.span()
    }
}

impl fmt::Display for ImmutableTimeInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format(DEFAULT_TEMPLATE))
    }
}

impl FromStr for ImmutableTimeInterval {
    type Err = IntervalError;

    fn from_str(s: &str) -> Result<Self> {
        parser::parse_any(s).map(Self::from_span)
    }
}
