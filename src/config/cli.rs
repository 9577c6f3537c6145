use crate::config::{OutputSettings, TomlConfig};
use crate::domain::{RoundingMode, TimeUnit};
use crate::parser::InputKind;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "tival")]
#[command(about = "Parse, convert and format signed time intervals")]
pub struct CliConfig {
    /// Interval to read: [-]h:m[:s], an interval spec (P1DT2H), a phrase ("1 day + 2 hours") or seconds
    #[arg(allow_hyphen_values = true)]
    pub input: String,

    #[arg(long, default_value = "auto", help = "Input grammar: auto, hms, spec, natural, seconds")]
    pub from: InputKind,

    #[arg(long, help = "Output template, e.g. %R%H:%I:%S")]
    pub format: Option<String>,

    #[arg(long, help = "Fractional digits for the converted value")]
    pub precision: Option<u32>,

    #[arg(long, help = "half_up, half_down, half_even or half_odd")]
    pub rounding: Option<RoundingMode>,

    #[arg(long, help = "Unit for the converted value: day, hour, minute, second")]
    pub unit: Option<TimeUnit>,

    #[arg(long, help = "TOML settings file")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Print the report as JSON")]
    pub json: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,
}

impl CliConfig {
    pub fn load_file(&self) -> Result<Option<TomlConfig>> {
        let Some(path) = &self.config else {
            return Ok(None);
        };
        tracing::debug!("Loading settings from {}", path.display());
        let file = TomlConfig::from_file(path)?;
        file.validate()?;
        Ok(Some(file))
    }

    /// Defaults, then the settings file, then command line flags.
    pub fn resolve_settings(&self, file: Option<&TomlConfig>) -> Result<OutputSettings> {
        let mut settings = match file {
            Some(file) => file.apply_to(OutputSettings::default())?,
            None => OutputSettings::default(),
        };
        if let Some(template) = &self.format {
            settings.template = template.clone();
        }
        if let Some(precision) = self.precision {
            settings.precision = precision;
        }
        if let Some(rounding) = self.rounding {
            settings.rounding = rounding;
        }
        if let Some(unit) = self.unit {
            settings.unit = unit;
        }
        settings.validate()?;
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_arguments() {
        let config = CliConfig::try_parse_from([
            "tival",
            "-01:30",
            "--from",
            "hms",
            "--rounding",
            "half-even",
            "--unit",
            "minutes",
        ])
        .unwrap();

        assert_eq!(config.input, "-01:30");
        assert_eq!(config.from, InputKind::Hms);
        assert_eq!(config.rounding, Some(RoundingMode::HalfEven));
        assert_eq!(config.unit, Some(TimeUnit::Minute));
    }

    #[test]
    fn test_rejects_unknown_unit() {
        assert!(CliConfig::try_parse_from(["tival", "1:00", "--unit", "month"]).is_err());
    }

    #[test]
    fn test_flags_override_file() {
        let file = TomlConfig::from_toml_str(
            "[format]\ntemplate = \"%h\"\n[conversion]\nprecision = 4\n",
        )
        .unwrap();
        let config =
            CliConfig::try_parse_from(["tival", "1:00", "--precision", "1"]).unwrap();

        let settings = config.resolve_settings(Some(&file)).unwrap();
        assert_eq!(settings.template, "%h");
        assert_eq!(settings.precision, 1);
    }
}
