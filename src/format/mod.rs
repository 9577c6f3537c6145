//! Template formatting.
//!
//! | Placeholder | Output |
//! |---|---|
//! | `%y` / `%Y` | years / at least 2 digits (always 0 for a span) |
//! | `%m` / `%M` | months / at least 2 digits (always 0 for a span) |
//! | `%d` / `%D` | days / at least 2 digits (always 0 for a span) |
//! | `%a` | total days, `(unknown)` unless the interval came from a date difference |
//! | `%h` / `%H` | hours / at least 2 digits |
//! | `%i` / `%I` | minutes / at least 2 digits |
//! | `%s` / `%S` | seconds / at least 2 digits |
//! | `%f` / `%F` | microseconds / 6 digits (always 0) |
//! | `%r` | `-` when negative, empty otherwise |
//! | `%R` | `-` when negative, `+` otherwise |
//! | `%x` / `%X` | total minutes without sign, rounded half up / at least 2 digits |
//! | `%%` | `%` |
//!
//! Any other `%c` pair is copied as is.

use crate::core::span::Span;
use crate::domain::CalendarInterval;

/// Template used by `Display`.
pub const DEFAULT_TEMPLATE: &str = "%r%H:%I:%S";

/// Expands the structured-interval placeholders of `template` against `interval`.
pub fn format_interval(interval: &CalendarInterval, template: &str) -> String {
    let mut out = String::with_capacity(template.len() + 8);
    let mut chars = template.chars();

    while let Some(ch) = chars.next() {
        if ch != '%' {
            out.push(ch);
            continue;
        }
        let Some(spec) = chars.next() else {
            out.push('%');
            break;
        };
        match spec {
            'Y' => out.push_str(&format!("{:02}", interval.years)),
            'y' => out.push_str(&interval.years.to_string()),
            'M' => out.push_str(&format!("{:02}", interval.months)),
            'm' => out.push_str(&interval.months.to_string()),
            'D' => out.push_str(&format!("{:02}", interval.days)),
            'd' => out.push_str(&interval.days.to_string()),
            'a' => out.push_str("(unknown)"),
            'H' => out.push_str(&format!("{:02}", interval.hours)),
            'h' => out.push_str(&interval.hours.to_string()),
            'I' => out.push_str(&format!("{:02}", interval.minutes)),
            'i' => out.push_str(&interval.minutes.to_string()),
            'S' => out.push_str(&format!("{:02}", interval.seconds)),
            's' => out.push_str(&interval.seconds.to_string()),
            'F' => out.push_str("000000"),
            'f' => out.push('0'),
            'R' => out.push(if interval.invert { '-' } else { '+' }),
            'r' => {
                if interval.invert {
                    out.push('-');
                }
            }
            '%' => out.push('%'),
            other => {
                out.push('%');
                out.push(other);
            }
        }
    }

    out
}

/// Formats a span: the structured-interval placeholders first, then a
/// second pass for `%x` and `%X`.
pub fn format_span(span: Span, template: &str) -> String {
    let formatted = format_interval(&span.to_calendar_interval(), template);
    let minutes = span.whole_minutes();
    formatted
        .replace("%x", &minutes.to_string())
        .replace("%X", &format!("{:02}", minutes))
}
