// Domain layer: units, rounding policy and the structured calendar interval. No I/O.

pub mod model;
pub mod ports;
pub mod rounding;
pub mod unit;

pub use model::CalendarInterval;
pub use ports::Timestamp;
pub use rounding::RoundingMode;
pub use unit::TimeUnit;
