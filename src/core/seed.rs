//! Daily puzzle seed
//!
//! The seed is the number of days from the common era for the current UTC
//! date, matching how the game server selects its word of the day. It is
//! stable for 24 hours and shared by both game variants.

use chrono::{Datelike, NaiveDate, Utc};

/// Seed for today's puzzles
#[must_use]
pub fn daily_seed() -> u64 {
    seed_for_date(Utc::now().date_naive())
}

/// Seed for a specific date (replaying a past puzzle)
#[must_use]
pub fn seed_for_date(date: NaiveDate) -> u64 {
    date.num_days_from_ce() as u64
}
