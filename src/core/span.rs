use crate::domain::{CalendarInterval, RoundingMode, TimeUnit};
use crate::utils::error::{IntervalError, Result};
use chrono::TimeDelta;
use serde::{Deserialize, Serialize};

/// Largest number of fractional digits a conversion rounds to. Requests above
/// this are clamped; an `f64` cannot carry more significant digits anyway.
pub const MAX_PRECISION: u32 = 15;

/// Signed whole-second span of time. Everything else is derived from
/// `total_seconds`; nothing is cached.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Span {
    total_seconds: i64,
}

impl Span {
    pub const ZERO: Span = Span { total_seconds: 0 };

    pub const fn from_seconds(total_seconds: i64) -> Self {
        Self { total_seconds }
    }

    pub fn new(value: i64, unit: TimeUnit) -> Result<Self> {
        value
            .checked_mul(unit.seconds())
            .map(Self::from_seconds)
            .ok_or_else(|| IntervalError::overflow("construction"))
    }

    /// Truncates toward zero, so `5.156` becomes 5 and `-0.3` becomes 0.
    pub fn from_secs_f64(value: f64) -> Result<Self> {
        if !value.is_finite() {
            return Err(IntervalError::invalid_argument(format!(
                "{} is not a finite number of seconds",
                value
            )));
        }

        let truncated = value.trunc();
        // i64::MAX is not representable as f64; 2^63 is the first value out of range.
        if truncated < i64::MIN as f64 || truncated >= 9_223_372_036_854_775_808.0 {
            return Err(IntervalError::invalid_argument(format!(
                "{} seconds is out of range",
                value
            )));
        }

        Ok(Self::from_seconds(truncated as i64))
    }

    pub const fn total_seconds(self) -> i64 {
        self.total_seconds
    }

    pub const fn is_negative(self) -> bool {
        self.total_seconds < 0
    }

    /// Adds `value` units to the span.
    pub fn offset(self, value: i64, unit: TimeUnit) -> Result<Self> {
        value
            .checked_mul(unit.seconds())
            .and_then(|delta| self.total_seconds.checked_add(delta))
            .map(Self::from_seconds)
            .ok_or_else(|| IntervalError::overflow("modify"))
    }

    pub fn checked_add(self, other: Span) -> Result<Self> {
        self.total_seconds
            .checked_add(other.total_seconds)
            .map(Self::from_seconds)
            .ok_or_else(|| IntervalError::overflow("add"))
    }

    pub fn checked_sub(self, other: Span) -> Result<Self> {
        self.total_seconds
            .checked_sub(other.total_seconds)
            .map(Self::from_seconds)
            .ok_or_else(|| IntervalError::overflow("sub"))
    }

    pub fn checked_neg(self) -> Result<Self> {
        self.total_seconds
            .checked_neg()
            .map(Self::from_seconds)
            .ok_or_else(|| IntervalError::overflow("negate"))
    }

    pub fn checked_abs(self) -> Result<Self> {
        self.total_seconds
            .checked_abs()
            .map(Self::from_seconds)
            .ok_or_else(|| IntervalError::overflow("abs"))
    }

    /// `total_seconds / unit` rounded to `precision` fractional digits.
    ///
    /// Rounding is done on the exact ratio, so `6660` seconds is `1.85` hours
    /// and rounds to `1.9` at one digit under `HalfUp`.
    pub fn convert(self, unit: TimeUnit, precision: u32, mode: RoundingMode) -> f64 {
        if precision > MAX_PRECISION {
            tracing::warn!(
                "precision {} clamped to {} fractional digits",
                precision,
                MAX_PRECISION
            );
        }
        let scale = 10i128.pow(precision.min(MAX_PRECISION));
        let scaled = mode.round_ratio(
            i128::from(self.total_seconds) * scale,
            i128::from(unit.seconds()),
        );
        scaled as f64 / scale as f64
    }

    /// Whole hours, truncated toward zero and signed like the total.
    pub const fn hours_part(self) -> i64 {
        self.total_seconds / TimeUnit::Hour.seconds()
    }

    /// Minutes left after whole hours, signed like the total.
    pub const fn minutes_part(self) -> i64 {
        self.total_seconds % TimeUnit::Hour.seconds() / TimeUnit::Minute.seconds()
    }

    /// Seconds left after whole hours and minutes, signed like the total.
    pub const fn seconds_part(self) -> i64 {
        self.total_seconds % TimeUnit::Hour.seconds() % TimeUnit::Minute.seconds()
    }

    /// Total minutes rounded half up, without sign.
    pub fn whole_minutes(self) -> u64 {
        let minutes = RoundingMode::HalfUp.round_ratio(
            i128::from(self.total_seconds),
            i128::from(TimeUnit::Minute.seconds()),
        );
        // |i64::MIN| / 60 always fits.
        minutes.unsigned_abs() as u64
    }

    pub fn to_calendar_interval(self) -> CalendarInterval {
        CalendarInterval::from_time(
            self.hours_part().abs(),
            self.minutes_part().abs(),
            self.seconds_part().abs(),
            self.is_negative(),
        )
    }

    pub fn to_time_delta(self) -> Result<TimeDelta> {
        TimeDelta::try_seconds(self.total_seconds)
            .ok_or_else(|| IntervalError::overflow("time delta"))
    }
}

impl From<i64> for Span {
    fn from(total_seconds: i64) -> Self {
        Self::from_seconds(total_seconds)
    }
}

impl TryFrom<f64> for Span {
    type Error = IntervalError;

    fn try_from(value: f64) -> Result<Self> {
        Self::from_secs_f64(value)
    }
}

/// Sub-second precision is dropped, truncating toward zero.
impl From<TimeDelta> for Span {
    fn from(delta: TimeDelta) -> Self {
        Self::from_seconds(delta.num_seconds())
    }
}

impl TryFrom<std::time::Duration> for Span {
    type Error = IntervalError;

    fn try_from(duration: std::time::Duration) -> Result<Self> {
        i64::try_from(duration.as_secs())
            .map(Self::from_seconds)
            .map_err(|_| IntervalError::invalid_argument("duration exceeds i64 seconds"))
    }
}

impl TryFrom<Span> for std::time::Duration {
    type Error = IntervalError;

    fn try_from(span: Span) -> Result<Self> {
        u64::try_from(span.total_seconds)
            .map(std::time::Duration::from_secs)
            .map_err(|_| {
                IntervalError::invalid_argument("negative span has no std::time::Duration")
            })
    }
}
