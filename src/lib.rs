pub mod config;
pub mod core;
pub mod domain;
pub mod format;
pub mod parser;
pub mod report;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::{OutputSettings, TomlConfig};

pub use core::{ImmutableTimeInterval, Interval, Span, TimeInterval, MAX_PRECISION};
pub use domain::{CalendarInterval, RoundingMode, TimeUnit, Timestamp};
pub use parser::InputKind;
pub use report::Report;
pub use utils::error::{IntervalError, Result};
