//! Weekday gating for the fee pool's buyback and rebase.
//!
//! Ledger time is UTC seconds since the epoch, which fell on a Thursday.

use crate::{constants::SECONDS_PER_DAY, Error};

/// Day of week for `timestamp`, with 0 = Sunday.
pub fn weekday(timestamp: u64) -> u32 {
    ((timestamp / SECONDS_PER_DAY + 4) % 7) as u32
}

/// A once-per-week operation bound to a single weekday.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct WeeklyWindow {
    pub weekday: u32,
}

impl WeeklyWindow {
    pub const fn new(weekday: u32) -> Self {
        Self { weekday }
    }

    /// Check that `now` falls on the window's weekday and that at least a
    /// full day has passed since `last_run` (0 = never ran).
    pub fn check(&self, now: u64, last_run: u64) -> Result<(), Error> {
        if weekday(now) != self.weekday {
            return Err(Error::WrongWeekday);
        }
        if last_run != 0 && now < last_run.saturating_add(SECONDS_PER_DAY) {
            return Err(Error::AlreadyCalledToday);
        }
        Ok(())
    }

    /// First timestamp at or after `now` that falls on this weekday, at the
    /// same time of day.
    pub fn next_opening(&self, now: u64) -> u64 {
        let today = weekday(now);
        let days_ahead = (self.weekday + 7 - today) % 7;
        now + days_ahead as u64 * SECONDS_PER_DAY
    }
}
