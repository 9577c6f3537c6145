use crate::config::OutputSettings;
use crate::domain::{RoundingMode, TimeUnit};
use crate::utils::error::{IntervalError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Optional settings file:
///
/// ```toml
/// [format]
/// template = "%R%H:%I:%S"
///
/// [conversion]
/// precision = 2
/// rounding = "half_even"
/// unit = "hour"
///
/// [logging]
/// level = "debug"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub format: FormatConfig,
    #[serde(default)]
    pub conversion: ConversionConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FormatConfig {
    pub template: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConversionConfig {
    pub precision: Option<u32>,
    pub rounding: Option<String>,
    pub unit: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(IntervalError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| IntervalError::ConfigError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${TIVAL_TEMPLATE})
    fn substitute_env_vars(content: &str) -> String {
        use regex::Regex;
        use once_cell::sync::Lazy;

        static ENV_VAR: Lazy<Regex> =
            Lazy::new(|| Regex::new(r"\$\{([^}]+)\}").expect("valid env var pattern"));

        ENV_VAR
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    /// Applies the file's values over `base`.
    pub fn apply_to(&self, base: OutputSettings) -> Result<OutputSettings> {
        let mut settings = base;
        if let Some(template) = &self.format.template {
            settings.template = template.clone();
        }
        if let Some(precision) = self.conversion.precision {
            settings.precision = precision;
        }
        if let Some(rounding) = &self.conversion.rounding {
            settings.rounding =
                validation::validate_parse::<RoundingMode>("conversion.rounding", rounding)?;
        }
        if let Some(unit) = &self.conversion.unit {
            settings.unit = validation::validate_parse::<TimeUnit>("conversion.unit", unit)?;
        }
        Ok(settings)
    }

    pub fn log_level(&self) -> Option<&str> {
        self.logging.level.as_deref()
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        if let Some(template) = &self.format.template {
            validation::validate_non_empty_string("format.template", template)?;
        }
        if let Some(precision) = self.conversion.precision {
            validation::validate_range(
                "conversion.precision",
                precision,
                0,
                crate::core::MAX_PRECISION,
            )?;
        }
        if let Some(rounding) = &self.conversion.rounding {
            validation::validate_parse::<RoundingMode>("conversion.rounding", rounding)?;
        }
        if let Some(unit) = &self.conversion.unit {
            validation::validate_parse::<TimeUnit>("conversion.unit", unit)?;
        }
        if let Some(level) = &self.logging.level {
            let valid_levels = ["trace", "debug", "info", "warn", "error", "off"];
            if !valid_levels.contains(&level.to_ascii_lowercase().as_str()) {
                return Err(IntervalError::InvalidConfigValueError {
                    field: "logging.level".to_string(),
                    value: level.clone(),
                    reason: format!("Valid levels: {}", valid_levels.join(", ")),
                });
            }
        }
        Ok(())
    }
}
