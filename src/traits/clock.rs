use chrono::{DateTime, FixedOffset, Local};

/// Source of the wall-clock time stamped on each job line.
pub trait Clock {
    fn now(&self) -> DateTime<FixedOffset>;
}

/// Local system time.
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<FixedOffset> {
        Local::now().fixed_offset()
    }
}
