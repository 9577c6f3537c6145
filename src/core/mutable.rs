use crate::core::immutable::ImmutableTimeInterval;
use crate::core::interval::Interval;
use crate::core::span::Span;
use crate::domain::TimeUnit;
use crate::format::DEFAULT_TEMPLATE;
use crate::parser;
use crate::utils::error::{IntervalError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Time interval changed in place by `modify`, `add` and `sub`.
///
/// Each of them returns `&mut Self` so calls can be chained with `?`:
///
/// ```
/// use time_interval::{Interval, TimeInterval, TimeUnit};
///
/// let mut time = TimeInterval::from_seconds(3600);
/// time.modify(30, TimeUnit::Minute)?.modify(-15, TimeUnit::Second)?;
/// assert_eq!(time.total_seconds(), 5385);
/// # Ok::<(), time_interval::IntervalError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TimeInterval {
    span: Span,
}

impl TimeInterval {
    pub fn new(value: i64, unit: TimeUnit) -> Result<Self> {
        Self::with_unit(value, unit)
    }

    pub fn modify(&mut self, value: i64, unit: TimeUnit) -> Result<&mut Self> {
        self.span = self.span.offset(value, unit)?;
        Ok(self)
    }

    /// Signed: adding a negative interval shortens this one.
    pub fn add(&mut self, other: &impl Interval) -> Result<&mut Self> {
        self.span = self.span.checked_add(other.span())?;
        Ok(self)
    }

    /// Signed: subtracting a negative interval lengthens this one.
    pub fn sub(&mut self, other: &impl Interval) -> Result<&mut Self> {
        self.span = self.span.checked_sub(other.span())?;
        Ok(self)
    }

    pub fn to_immutable(&self) -> ImmutableTimeInterval {
        ImmutableTimeInterval::from_span(self.span)
    }
}

impl Interval for TimeInterval {
    fn span(&self) -> Span {
        self.span
    }

    fn from_span(span: Span) -> Self {
        Self { span }
    }
}

impl From<Span> for TimeInterval {
    fn from(span: Span) -> Self {
        Self::from_span(span)
    }
}

impl PartialEq<ImmutableTimeInterval> for TimeInterval {
    fn eq(&self, other: &ImmutableTimeInterval) -> bool {
        self.span == other.span()
    }
}

impl fmt::Display for TimeInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format(DEFAULT_TEMPLATE))
    }
}

impl FromStr for TimeInterval {
    type Err = IntervalError;

    fn from_str(s: &str) -> Result<Self> {
        parser::parse_any(s).map(Self::from_span)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HOUR: i64 = 3600;

    #[test]
    fn test_new_with_units() {
        assert_eq!(TimeInterval::from_seconds(HOUR).total_seconds(), HOUR);
        assert_eq!(
            TimeInterval::new(HOUR, TimeUnit::Second).unwrap().total_seconds(),
            HOUR
        );
        assert_eq!(TimeInterval::new(1, TimeUnit::Hour).unwrap().total_seconds(), HOUR);
        assert_eq!(
            TimeInterval::new(-1, TimeUnit::Hour).unwrap().total_seconds(),
            -HOUR
        );
        assert_eq!(TimeInterval::new(2, TimeUnit::Day).unwrap().total_seconds(), 172_800);
    }

    #[test]
    fn test_modify_in_place() {
        let mut time = TimeInterval::from_seconds(HOUR);

        time.modify(55, TimeUnit::Second).unwrap();
        assert_eq!(time.total_seconds(), 55 + HOUR);

        time.modify(-55, TimeUnit::Second).unwrap();
        assert_eq!(time.total_seconds(), HOUR);

        time.modify(1, TimeUnit::Hour).unwrap();
        assert_eq!(time.total_seconds(), 2 * HOUR);

        time.modify(-1, TimeUnit::Hour).unwrap();
        assert_eq!(time.total_seconds(), HOUR);
    }

    #[test]
    fn test_add_and_sub_are_signed() {
        let mut time = TimeInterval::from_seconds(HOUR);
        let hour = TimeInterval::from_seconds(HOUR);
        let negative = TimeInterval::from_seconds(-HOUR);

        time.add(&hour).unwrap();
        assert_eq!(time.total_seconds(), 2 * HOUR);
        time.add(&negative).unwrap();
        assert_eq!(time.total_seconds(), HOUR);

        time.sub(&hour).unwrap();
        assert_eq!(time.total_seconds(), 0);
        time.sub(&negative).unwrap();
        assert_eq!(time.total_seconds(), HOUR);
    }

    #[test]
    fn test_failed_modify_leaves_value() {
        let mut time = TimeInterval::from_seconds(i64::MAX - 1);
        assert!(time.modify(1, TimeUnit::Minute).is_err());
        assert_eq!(time.total_seconds(), i64::MAX - 1);
    }

    #[test]
    fn test_display_and_parse() {
        let time: TimeInterval = "-02:04:07".parse().unwrap();
        assert_eq!(time.total_seconds(), -7447);
        assert_eq!(time.to_string(), "-02:04:07");
    }
}
