//! Run output handed to the presentation layer.

use chrono::NaiveDate;
use quoteboard_core::{leader, MergedRow, RankEntry, SymbolSeries, SymbolSummary};

/// A symbol excluded from the run, with the visible reason.
#[derive(Debug, Clone, PartialEq)]
pub struct SymbolFailure {
    pub symbol: String,
    pub reason: String,
}

/// Everything one pipeline run produced.
///
/// Built fresh per run and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct RunReport {
    /// The resolved baseline trading day.
    pub baseline: NaiveDate,
    /// Normalized per-symbol series, for charting.
    pub series: Vec<SymbolSeries>,
    /// Date-keyed merged table, one row per date.
    pub table: Vec<MergedRow>,
    /// Leaderboard, rank 1 first.
    pub ranking: Vec<RankEntry>,
    /// Per-symbol start/end summary, in basket order.
    pub summaries: Vec<SymbolSummary>,
    /// Symbols excluded from this run.
    pub failures: Vec<SymbolFailure>,
}

impl RunReport {
    /// The top-ranked symbol, for headline display.
    pub fn leader(&self) -> Option<&RankEntry> {
        leader(&self.ranking)
    }
}
