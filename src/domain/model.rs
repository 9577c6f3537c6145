use crate::domain::ports::Timestamp;
use crate::domain::unit::TimeUnit;
use crate::utils::error::{IntervalError, Result};
use chrono::TimeDelta;
use serde::{Deserialize, Serialize};

/// Structured interval with separate date and time fields plus a direction flag.
///
/// Parsers fill the fields as written (they may be signed, e.g. `-2 hours`);
/// intervals exported from a [`Span`](crate::core::Span) carry non-negative
/// hour/minute/second magnitudes and put the sign into `invert`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CalendarInterval {
    pub years: i64,
    pub months: i64,
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
    pub invert: bool,
}

impl CalendarInterval {
    pub fn from_time(hours: i64, minutes: i64, seconds: i64, invert: bool) -> Self {
        Self {
            hours,
            minutes,
            seconds,
            invert,
            ..Self::default()
        }
    }

    /// Reads the fields of a parsed [`jiff::Span`]. Magnitudes go into the
    /// fields and the span's sign into `invert`. Weeks fold into days and
    /// sub-second units are truncated toward zero.
    pub fn from_jiff(span: &jiff::Span) -> Self {
        let nanos = i128::from(span.get_milliseconds()).abs() * 1_000_000
            + i128::from(span.get_microseconds()).abs() * 1_000
            + i128::from(span.get_nanoseconds()).abs();
        let carried = (nanos / 1_000_000_000) as i64;

        Self {
            years: i64::from(span.get_years()).abs(),
            months: i64::from(span.get_months()).abs(),
            days: i64::from(span.get_weeks()).abs() * 7 + i64::from(span.get_days()).abs(),
            hours: i64::from(span.get_hours()).abs(),
            minutes: span.get_minutes().abs(),
            seconds: span.get_seconds().abs() + carried,
            invert: span.is_negative(),
        }
    }

    /// True when years or months are set.
    pub fn has_calendar_units(&self) -> bool {
        self.years != 0 || self.months != 0
    }

    /// Signed total of the day/hour/minute/second fields.
    ///
    /// Years and months are rejected with `InvalidArgument`.
    pub fn total_seconds(&self) -> Result<i64> {
        if self.has_calendar_units() {
            return Err(IntervalError::invalid_argument(
                "Wrong format, expected only values of days, hours, minutes and seconds",
            ));
        }

        let total = [
            (self.days, TimeUnit::Day),
            (self.hours, TimeUnit::Hour),
            (self.minutes, TimeUnit::Minute),
            (self.seconds, TimeUnit::Second),
        ]
        .into_iter()
        .try_fold(0i64, |acc, (value, unit)| {
            value
                .checked_mul(unit.seconds())
                .and_then(|part| acc.checked_add(part))
        })
        .ok_or_else(|| IntervalError::overflow("interval total"))?;

        if self.invert {
            total
                .checked_neg()
                .ok_or_else(|| IntervalError::overflow("interval total"))
        } else {
            Ok(total)
        }
    }

    /// Renders the interval as `P[nY][nM][nD]T<h>H<m>M<s>S`. The time part is
    /// always written out; the sign is not part of the notation.
    pub fn to_interval_spec(&self) -> String {
        let mut spec = String::from("P");
        for (value, designator) in [(self.years, 'Y'), (self.months, 'M'), (self.days, 'D')] {
            if value != 0 {
                spec.push_str(&format!("{}{}", value.unsigned_abs(), designator));
            }
        }
        spec.push_str(&format!(
            "T{}H{}M{}S",
            self.hours.unsigned_abs(),
            self.minutes.unsigned_abs(),
            self.seconds.unsigned_abs()
        ));
        spec
    }

    pub fn to_time_delta(&self) -> Result<TimeDelta> {
        let total = self.total_seconds()?;
        TimeDelta::try_seconds(total).ok_or_else(|| IntervalError::overflow("time delta"))
    }

    /// Moves `at` forward by the interval, or backward when inverted.
    pub fn add_to<T: Timestamp>(&self, at: T) -> Result<T> {
        let delta = self.to_time_delta()?;
        at.checked_shift(delta)
            .ok_or_else(|| IntervalError::overflow("timestamp addition"))
    }

    /// Moves `at` backward by the interval, or forward when inverted.
    pub fn sub_from<T: Timestamp>(&self, at: T) -> Result<T> {
        let delta = self.to_time_delta()?;
        at.checked_shift(-delta)
            .ok_or_else(|| IntervalError::overflow("timestamp subtraction"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_from_jiff_span() {
        let span = jiff::Span::new().weeks(1).days(2).hours(3).minutes(4).seconds(5);
        let interval = CalendarInterval::from_jiff(&span);
        assert_eq!(interval.days, 9);
        assert_eq!(interval.total_seconds().unwrap(), 9 * 86400 + 3 * 3600 + 4 * 60 + 5);

        let interval = CalendarInterval::from_jiff(&jiff::Span::new().hours(2).negate());
        assert!(interval.invert);
        assert_eq!(interval.hours, 2);
        assert_eq!(interval.total_seconds().unwrap(), -7200);

        let span = jiff::Span::new().seconds(1).milliseconds(1500);
        assert_eq!(CalendarInterval::from_jiff(&span).seconds, 2);

        let span = jiff::Span::new().months(1);
        assert!(CalendarInterval::from_jiff(&span).has_calendar_units());
    }

    #[test]
    fn test_total_seconds_with_invert() {
        let interval = CalendarInterval {
            days: 1,
            hours: 12,
            minutes: 5,
            seconds: 15,
            ..Default::default()
        };
        assert_eq!(interval.total_seconds().unwrap(), 86400 + 43200 + 300 + 15);

        let inverted = CalendarInterval::from_time(1, 10, 0, true);
        assert_eq!(inverted.total_seconds().unwrap(), -4200);
    }

    #[test]
    fn test_calendar_units_rejected() {
        let interval = CalendarInterval {
            years: 1,
            days: 1,
            ..Default::default()
        };
        assert!(matches!(
            interval.total_seconds(),
            Err(IntervalError::InvalidArgument { .. })
        ));
    }

    #[test]
    fn test_interval_spec() {
        assert_eq!(
            CalendarInterval::from_time(124, 9, 27, true).to_interval_spec(),
            "PT124H9M27S"
        );
        let with_days = CalendarInterval {
            days: 2,
            ..Default::default()
        };
        assert_eq!(with_days.to_interval_spec(), "P2DT0H0M0S");
    }

    #[test]
    fn test_shift_timestamp() {
        let at = NaiveDate::from_ymd_opt(2020, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        let interval = CalendarInterval::from_time(1, 10, 0, false);

        assert_eq!(
            interval.add_to(at).unwrap(),
            NaiveDate::from_ymd_opt(2020, 1, 1)
                .unwrap()
                .and_hms_opt(1, 10, 0)
                .unwrap()
        );
        assert_eq!(
            interval.sub_from(at).unwrap(),
            NaiveDate::from_ymd_opt(2019, 12, 31)
                .unwrap()
                .and_hms_opt(22, 50, 0)
                .unwrap()
        );
    }
}
