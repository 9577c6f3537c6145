pub mod immutable;
pub mod interval;
pub mod mutable;
pub mod span;

pub use crate::domain::{CalendarInterval, RoundingMode, TimeUnit};
pub use crate::utils::error::Result;
pub use immutable::ImmutableTimeInterval;
pub use interval::Interval;
pub use mutable::TimeInterval;
pub use span::{Span, MAX_PRECISION};
