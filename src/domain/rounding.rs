use crate::utils::error::{IntervalError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How a value lying exactly halfway between two candidates is rounded.
/// Values that are not ties always go to the nearer candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundingMode {
    /// Ties away from zero: 1.85 -> 1.9, -1.85 -> -1.9.
    #[default]
    HalfUp,
    /// Ties toward zero.
    HalfDown,
    /// Ties to the even neighbour.
    HalfEven,
    /// Ties to the odd neighbour.
    HalfOdd,
}

impl RoundingMode {
    pub const fn name(self) -> &'static str {
        match self {
            RoundingMode::HalfUp => "half_up",
            RoundingMode::HalfDown => "half_down",
            RoundingMode::HalfEven => "half_even",
            RoundingMode::HalfOdd => "half_odd",
        }
    }

    /// Rounds `numerator / denominator` to an integer. `denominator` must be positive.
    pub fn round_ratio(self, numerator: i128, denominator: i128) -> i128 {
        debug_assert!(denominator > 0);

        let quotient = numerator / denominator;
        let remainder = (numerator % denominator).abs();
        if remainder == 0 {
            return quotient;
        }

        let away = quotient + numerator.signum();
        match (remainder * 2).cmp(&denominator) {
            std::cmp::Ordering::Less => quotient,
            std::cmp::Ordering::Greater => away,
            std::cmp::Ordering::Equal => match self {
                RoundingMode::HalfUp => away,
                RoundingMode::HalfDown => quotient,
                RoundingMode::HalfEven if quotient % 2 == 0 => quotient,
                RoundingMode::HalfEven => away,
                RoundingMode::HalfOdd if quotient % 2 != 0 => quotient,
                RoundingMode::HalfOdd => away,
            },
        }
    }
}

impl fmt::Display for RoundingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for RoundingMode {
    type Err = IntervalError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "half_up" | "up" => Ok(RoundingMode::HalfUp),
            "half_down" | "down" => Ok(RoundingMode::HalfDown),
            "half_even" | "even" => Ok(RoundingMode::HalfEven),
            "half_odd" | "odd" => Ok(RoundingMode::HalfOdd),
            _ => Err(IntervalError::invalid_argument(format!(
                "unknown rounding mode '{}', expected half_up, half_down, half_even or half_odd",
                s
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_ties_go_to_nearest() {
        for mode in [
            RoundingMode::HalfUp,
            RoundingMode::HalfDown,
            RoundingMode::HalfEven,
            RoundingMode::HalfOdd,
        ] {
            assert_eq!(mode.round_ratio(14, 10), 1);
            assert_eq!(mode.round_ratio(16, 10), 2);
            assert_eq!(mode.round_ratio(-16, 10), -2);
            assert_eq!(mode.round_ratio(30, 10), 3);
        }
    }

    #[test]
    fn test_ties() {
        assert_eq!(RoundingMode::HalfUp.round_ratio(185, 10), 19);
        assert_eq!(RoundingMode::HalfUp.round_ratio(-185, 10), -19);
        assert_eq!(RoundingMode::HalfDown.round_ratio(185, 10), 18);
        assert_eq!(RoundingMode::HalfDown.round_ratio(-185, 10), -18);
        assert_eq!(RoundingMode::HalfEven.round_ratio(185, 10), 18);
        assert_eq!(RoundingMode::HalfEven.round_ratio(175, 10), 18);
        assert_eq!(RoundingMode::HalfOdd.round_ratio(185, 10), 19);
        assert_eq!(RoundingMode::HalfOdd.round_ratio(175, 10), 17);
    }

    #[test]
    fn test_parse() {
        assert_eq!(
            "HALF-EVEN".parse::<RoundingMode>().unwrap(),
            RoundingMode::HalfEven
        );
        assert_eq!("up".parse::<RoundingMode>().unwrap(), RoundingMode::HalfUp);
        assert!("ceiling".parse::<RoundingMode>().is_err());
    }
}
