#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::CliConfig;
pub use toml_config::TomlConfig;

use crate::core::MAX_PRECISION;
use crate::domain::{RoundingMode, TimeUnit};
use crate::format::DEFAULT_TEMPLATE;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};

/// How a parsed interval is rendered and converted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputSettings {
    pub template: String,
    pub precision: u32,
    pub rounding: RoundingMode,
    pub unit: TimeUnit,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            template: DEFAULT_TEMPLATE.to_string(),
            precision: 2,
            rounding: RoundingMode::HalfUp,
            unit: TimeUnit::Hour,
        }
    }
}

impl Validate for OutputSettings {
    fn validate(&self) -> Result<()> {
        validation::validate_non_empty_string("template", &self.template)?;
        validation::validate_range("precision", self.precision, 0, MAX_PRECISION)?;
        Ok(())
    }
}
