use crate::config::OutputSettings;
use crate::core::{ImmutableTimeInterval, Interval};
use crate::domain::TimeUnit;
use crate::parser::{self, InputKind};
use crate::utils::error::Result;
use serde::Serialize;

/// Everything `tival` prints about one interval.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub input: String,
    pub kind: InputKind,
    pub total_seconds: i64,
    pub formatted: String,
    pub negative: bool,
    pub components: Components,
    pub converted: Conversion,
    pub interval_spec: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Components {
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Conversion {
    pub unit: TimeUnit,
    pub value: f64,
}

impl Report {
    pub fn build(input: &str, kind: InputKind, settings: &OutputSettings) -> Result<Self> {
        let span = parser::parse_as(kind, input)?;
        let interval = ImmutableTimeInterval::from_span(span);
        tracing::debug!(input, total = interval.total_seconds(), "parsed interval");

        Ok(Self {
            input: input.to_string(),
            kind,
            total_seconds: interval.total_seconds(),
            formatted: interval.format(&settings.template),
            negative: interval.is_negative(),
            components: Components {
                hours: interval.hours_part(),
                minutes: interval.minutes_part(),
                seconds: interval.seconds_part(),
            },
            converted: Conversion {
                unit: settings.unit,
                value: interval.convert(settings.unit, settings.precision, settings.rounding),
            },
            interval_spec: interval.to_calendar_interval().to_interval_spec(),
        })
    }

    pub fn render_text(&self) -> String {
        let sign = if self.negative { "-" } else { "" };
        format!(
            "{}\nseconds:  {}\n{:<9} {}\nh/m/s:    {} / {} / {}\nspec:     {}{}",
            self.formatted,
            self.total_seconds,
            format!("{}s:", self.converted.unit),
            self.converted.value,
            self.components.hours,
            self.components.minutes,
            self.components.seconds,
            sign,
            self.interval_spec
        )
    }

    pub fn render_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::RoundingMode;

    #[test]
    fn test_build_report() {
        let settings = OutputSettings::default();
        let report = Report::build("-01:12:12", InputKind::Auto, &settings).unwrap();

        assert_eq!(report.total_seconds, -4332);
        assert_eq!(report.formatted, "-01:12:12");
        assert!(report.negative);
        assert_eq!(
            report.components,
            Components {
                hours: -1,
                minutes: -12,
                seconds: -12
            }
        );
        // -4332 s is -1.2033 h
        assert_eq!(report.converted.value, -1.2);
        assert_eq!(report.interval_spec, "PT1H12M12S");
    }

    #[test]
    fn test_render_text() {
        let settings = OutputSettings {
            template: "%R%h:%I".to_string(),
            precision: 0,
            rounding: RoundingMode::HalfUp,
            unit: TimeUnit::Minute,
        };
        let report = Report::build("PT1H30M", InputKind::Spec, &settings).unwrap();
        let text = report.render_text();

        assert!(text.starts_with("+1:30\n"));
        assert!(text.contains("seconds:  5400"));
        assert!(text.contains("minutes:  90"));
        assert!(text.contains("h/m/s:    1 / 30 / 0\n"));
        assert!(text.ends_with("spec:     PT1H30M0S"));
        assert_eq!(text.lines().count(), 5);
    }

    #[test]
    fn test_render_json() {
        let report =
            Report::build("90", InputKind::Seconds, &OutputSettings::default()).unwrap();
        let json: serde_json::Value = serde_json::from_str(&report.render_json().unwrap()).unwrap();

        assert_eq!(json["total_seconds"], 90);
        assert_eq!(json["kind"], "seconds");
        assert_eq!(json["converted"]["unit"], "hour");
        assert_eq!(json["converted"]["value"], 0.03);
    }

    #[test]
    fn test_build_propagates_parse_errors() {
        assert!(Report::build("1 year", InputKind::Natural, &OutputSettings::default()).is_err());
    }
}
