//! Core computation for quoteboard.
//!
//! This crate provides the pure, synchronous pieces of the pipeline with no I/O:
//! - `TradingCalendar` - weekend/holiday rules and trading-day arithmetic
//! - `normalize_series` - raw quotes to a baseline-relative percentage series
//! - `merge_series` - date-keyed join of per-symbol series into one table
//! - `rank_series` - terminal-performance leaderboard

pub mod calendar;
pub mod merge;
pub mod rank;
pub mod series;

pub use calendar::{CalendarError, TradingCalendar};
pub use merge::{merge_series, MergedCell, MergedRow};
pub use rank::{leader, rank_series, summarize, RankEntry, SymbolSummary};
pub use series::{normalize_series, session_date, PercentagePoint, PricePoint, RawQuote, SeriesError, SymbolSeries};
