use crate::core::span::Span;
use crate::domain::TimeUnit;
use crate::utils::error::{IntervalError, Result};
use once_cell::sync::Lazy;
use regex::Regex;

// ASCII digits only; `\d` would also accept other Unicode decimal digits.
static HMS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([+-]?)([0-9]+):([0-9]+)(?::([0-9]+))?$").expect("valid h:m:s pattern")
});

/// Parses `[+-]h:m[:s]` into a span.
///
/// The whole string must match, so any whitespace (leading, trailing or
/// between fields) is `InvalidFormat`. Fields are not range checked:
/// `0:90` is 90 minutes.
pub fn parse(text: &str) -> Result<Span> {
    let invalid = || IntervalError::InvalidFormat {
        input: text.to_string(),
    };
    let caps = HMS.captures(text).ok_or_else(invalid)?;

    let field = |index: usize| -> Result<i64> {
        caps.get(index).map_or(Ok(0), |m| {
            m.as_str()
                .parse::<i64>()
                .map_err(|_| IntervalError::overflow("h:m:s field"))
        })
    };
    let hours = field(2)?;
    let minutes = field(3)?;
    let seconds = field(4)?;

    let magnitude = hours
        .checked_mul(TimeUnit::Hour.seconds())
        .zip(minutes.checked_mul(TimeUnit::Minute.seconds()))
        .and_then(|(h, m)| h.checked_add(m))
        .and_then(|hm| hm.checked_add(seconds))
        .ok_or_else(|| IntervalError::overflow("h:m:s total"))?;

    let total = if &caps[1] == "-" { -magnitude } else { magnitude };
    tracing::trace!(
        input = text,
        hours,
        minutes,
        seconds,
        total,
        "parsed h:m:s"
    );

    Ok(Span::from_seconds(total))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_signed() {
        assert_eq!(parse("01:12:12").unwrap().total_seconds(), 4332);
        assert_eq!(parse("+01:12:12").unwrap().total_seconds(), 4332);
        assert_eq!(parse("-01:12:12").unwrap().total_seconds(), -4332);
        assert_eq!(parse("-0:25").unwrap().total_seconds(), -1500);
    }

    #[test]
    fn test_fields_are_not_range_checked() {
        assert_eq!(parse("0:90").unwrap().total_seconds(), 5400);
        assert_eq!(parse("124:09:27").unwrap().total_seconds(), 446_967);
    }

    #[test]
    fn test_rejects_malformed() {
        for input in [
            "*1:00:10",
            " 1:00:10",
            "1:00:10 ",
            "1: 00",
            "1",
            "1:2:3:4",
            "--1:00",
            "1:-2",
            "",
        ] {
            assert!(
                matches!(parse(input), Err(IntervalError::InvalidFormat { .. })),
                "{:?} should be rejected",
                input
            );
        }
    }

    #[test]
    fn test_huge_fields_overflow() {
        assert!(matches!(
            parse("99999999999999999999:00"),
            Err(IntervalError::Overflow { .. })
        ));
        assert!(matches!(
            parse("9223372036854775807:00"),
            Err(IntervalError::Overflow { .. })
        ));
    }
}
