//! Trading-day calendar: weekend rule plus a configured holiday table.

use std::collections::BTreeSet;

use chrono::{Datelike, Days, NaiveDate, Weekday};
use thiserror::Error;

/// Upper bound on the forward search for a trading day.
///
/// Weekends recur every 7 days and holiday runs are short, so any sane
/// holiday table yields a trading day within a handful of steps. Exceeding
/// this bound means the table itself is wrong.
const MAX_SEARCH_DAYS: u32 = 30;

/// Calendar errors.
#[derive(Debug, Error)]
pub enum CalendarError {
    #[error("no trading day within {searched} days of {start}: holiday table looks corrupt")]
    Exhausted { start: NaiveDate, searched: u32 },
}

/// Exchange calendar answering "is this a trading day".
///
/// The holiday table is configuration data (a year's published market
/// closures), not computed from rules.
#[derive(Debug, Clone, Default)]
pub struct TradingCalendar {
    holidays: BTreeSet<NaiveDate>,
}

impl TradingCalendar {
    /// Create a calendar from a holiday table.
    pub fn new(holidays: impl IntoIterator<Item = NaiveDate>) -> Self {
        Self {
            holidays: holidays.into_iter().collect(),
        }
    }

    /// Returns true if the exchange is open on `date`.
    pub fn is_trading_day(&self, date: NaiveDate) -> bool {
        match date.weekday() {
            Weekday::Sat | Weekday::Sun => false,
            _ => !self.holidays.contains(&date),
        }
    }

    /// First trading day on or after `date`.
    ///
    /// The search is bounded: a table that closes the market for
    /// `MAX_SEARCH_DAYS` straight days is treated as a configuration defect
    /// rather than looped over.
    pub fn first_trading_day_on_or_after(
        &self,
        date: NaiveDate,
    ) -> Result<NaiveDate, CalendarError> {
        let mut candidate = date;
        for _ in 0..MAX_SEARCH_DAYS {
            if self.is_trading_day(candidate) {
                return Ok(candidate);
            }
            candidate = candidate + Days::new(1);
        }
        Err(CalendarError::Exhausted {
            start: date,
            searched: MAX_SEARCH_DAYS,
        })
    }

    /// Number of trading days in `[from, to]` inclusive.
    ///
    /// Returns 0 when `to < from`. Used to size the historical-window
    /// request to the quote source.
    pub fn count_trading_days(&self, from: NaiveDate, to: NaiveDate) -> u32 {
        let mut count = 0;
        let mut current = from;
        while current <= to {
            if self.is_trading_day(current) {
                count += 1;
            }
            current = current + Days::new(1);
        }
        count
    }
}
