use crate::utils::error::{IntervalError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Fixed-length unit of time. Calendar units (months, years) are not
/// representable because they have no fixed length in seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeUnit {
    Day,
    Hour,
    Minute,
    #[default]
    Second,
}

impl TimeUnit {
    pub const ALL: [TimeUnit; 4] = [
        TimeUnit::Day,
        TimeUnit::Hour,
        TimeUnit::Minute,
        TimeUnit::Second,
    ];

    /// Seconds per one unit.
    pub const fn seconds(self) -> i64 {
        match self {
            TimeUnit::Day => 86_400,
            TimeUnit::Hour => 3_600,
            TimeUnit::Minute => 60,
            TimeUnit::Second => 1,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            TimeUnit::Day => "day",
            TimeUnit::Hour => "hour",
            TimeUnit::Minute => "minute",
            TimeUnit::Second => "second",
        }
    }
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TimeUnit {
    type Err = IntervalError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "d" | "day" | "days" => Ok(TimeUnit::Day),
            "h" | "hr" | "hrs" | "hour" | "hours" => Ok(TimeUnit::Hour),
            "m" | "min" | "mins" | "minute" | "minutes" => Ok(TimeUnit::Minute),
            "s" | "sec" | "secs" | "second" | "seconds" => Ok(TimeUnit::Second),
            _ => Err(IntervalError::InvalidUnit {
                unit: s.to_string(),
            }),
        }
    }
}

/// Looks a unit up by its seconds ratio (86400, 3600, 60 or 1).
impl TryFrom<i64> for TimeUnit {
    type Error = IntervalError;

    fn try_from(ratio: i64) -> Result<Self> {
        TimeUnit::ALL
            .into_iter()
            .find(|unit| unit.seconds() == ratio)
            .ok_or_else(|| IntervalError::InvalidUnit {
                unit: ratio.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ratios() {
        assert_eq!(TimeUnit::Day.seconds(), 86400);
        assert_eq!(TimeUnit::Hour.seconds(), 3600);
        assert_eq!(TimeUnit::Minute.seconds(), 60);
        assert_eq!(TimeUnit::Second.seconds(), 1);
        assert_eq!(TimeUnit::default(), TimeUnit::Second);
    }

    #[test]
    fn test_parse_names() {
        assert_eq!("Hours".parse::<TimeUnit>().unwrap(), TimeUnit::Hour);
        assert_eq!("min".parse::<TimeUnit>().unwrap(), TimeUnit::Minute);
        assert_eq!(" d ".parse::<TimeUnit>().unwrap(), TimeUnit::Day);
        assert!(matches!(
            "fortnight".parse::<TimeUnit>(),
            Err(IntervalError::InvalidUnit { .. })
        ));
    }

    #[test]
    fn test_from_ratio() {
        assert_eq!(TimeUnit::try_from(3600).unwrap(), TimeUnit::Hour);
        assert!(matches!(
            TimeUnit::try_from(999_999_999),
            Err(IntervalError::InvalidUnit { unit }) if unit == "999999999"
        ));
    }
}
