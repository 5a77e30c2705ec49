//! Wall-clock source for version-history timestamps.
//!
//! Timestamps are metadata only. They never feed into any computed total,
//! so tests swap in a `SteppingClock` and get reproducible histories.

use chrono::{DateTime, Duration, TimeZone, Utc};

pub trait Clock {
    fn now(&mut self) -> DateTime<Utc>;
}

/// Reads the system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&mut self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Starts at a fixed instant and advances by `step` on every read.
#[derive(Debug, Clone)]
pub struct SteppingClock {
    current: DateTime<Utc>,
    step:    Duration,
}

impl SteppingClock {
    pub fn new(start: DateTime<Utc>, step: Duration) -> Self {
        Self { current: start, step }
    }

    /// 2024-01-01T00:00:00Z, one minute per read.
    pub fn fixed() -> Self {
        let start = Utc
            .with_ymd_and_hms(2024, 1, 1, 0, 0, 0)
            .single()
            .unwrap_or_default();
        Self::new(start, Duration::minutes(1))
    }
}

impl Clock for SteppingClock {
    fn now(&mut self) -> DateTime<Utc> {
        let t = self.current;
        self.current += self.step;
        t
    }
}
