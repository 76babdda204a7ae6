use std::sync::Mutex;

use aether_core::MINUTES_PER_DAY;
use chrono::{DateTime, Duration, Utc};

/// Tracks game time as a monotonic minute counter.
///
/// One tick is one game minute; a day is 1440 minutes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GameClock {
    minutes: u64,
}

impl GameClock {
    /// Create a clock at the given number of elapsed minutes.
    pub fn new(minutes: u64) -> Self {
        Self { minutes }
    }

    /// Advance by one minute. Returns `true` if the new minute count is a
    /// whole number of days.
    ///
    /// The counter saturates at `u64::MAX`; once there it no longer moves and
    /// never reports a new day.
    pub fn advance(&mut self) -> bool {
        let next = self.minutes.saturating_add(1);
        if next == self.minutes {
            return false;
        }
        self.minutes = next;
        next % MINUTES_PER_DAY == 0
    }

    /// Total elapsed minutes.
    pub fn minutes(&self) -> u64 {
        self.minutes
    }

    /// Completed days.
    pub fn day(&self) -> u64 {
        self.minutes / MINUTES_PER_DAY
    }

    /// Minutes into the current day (0..1440).
    pub fn minute_of_day(&self) -> u64 {
        self.minutes % MINUTES_PER_DAY
    }

    /// Hour of the current day (0..24).
    pub fn hour_of_day(&self) -> u64 {
        self.minute_of_day() / 60
    }
}

impl std::fmt::Display for GameClock {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "day {} {:02}:{:02}",
            self.day(),
            self.hour_of_day(),
            self.minute_of_day() % 60
        )
    }
}

/// Supplies wall-clock timestamps for interaction records.
pub trait TimeSource: Send + Sync {
    /// The current instant.
    fn now(&self) -> DateTime<Utc>;
}

/// Reads the system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemTimeSource;

impl TimeSource for SystemTimeSource {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A settable clock for tests and replays.
#[derive(Debug)]
pub struct FixedTimeSource {
    at: Mutex<DateTime<Utc>>,
}

impl FixedTimeSource {
    /// Create a source that always reports `at` until changed.
    pub fn new(at: DateTime<Utc>) -> Self {
        Self { at: Mutex::new(at) }
    }

    /// Move the reported instant.
    pub fn set(&self, at: DateTime<Utc>) {
        *self.at.lock().unwrap_or_else(|e| e.into_inner()) = at;
    }

    /// Move the reported instant forward.
    pub fn advance(&self, by: Duration) {
        let mut at = self.at.lock().unwrap_or_else(|e| e.into_inner());
        *at += by;
    }
}

impl TimeSource for FixedTimeSource {
    fn now(&self) -> DateTime<Utc> {
        *self.at.lock().unwrap_or_else(|e| e.into_inner())
    }
}
