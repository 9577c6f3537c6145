use chrono::{DateTime, NaiveDateTime, TimeDelta, TimeZone};

/// A point in time that can be moved by a signed [`TimeDelta`].
pub trait Timestamp: Sized {
    fn checked_shift(self, delta: TimeDelta) -> Option<Self>;
}

impl Timestamp for NaiveDateTime {
    fn checked_shift(self, delta: TimeDelta) -> Option<Self> {
        self.checked_add_signed(delta)
    }
}

impl<Tz: TimeZone> Timestamp for DateTime<Tz> {
    fn checked_shift(self, delta: TimeDelta) -> Option<Self> {
        self.checked_add_signed(delta)
    }
}
