//! Pipeline orchestration for quoteboard.
//!
//! One run per user-triggered refresh: resolve the requested baseline to a
//! trading day, size the history window, fetch every basket symbol
//! concurrently, then normalize, merge and rank. A failed symbol is reported
//! and excluded; it never aborts the other symbols' work. Only a calendar
//! exhaustion (corrupt holiday table) is fatal to the run.

mod report;
mod token;

use anyhow::{Context, Result};
use chrono::{NaiveDate, Utc};
use quoteboard_core::{
    merge_series, normalize_series, rank_series, session_date, summarize, RawQuote,
    TradingCalendar,
};
use yfin_api::{HistoryPoint, Interval, YfinClient};

pub use report::{RunReport, SymbolFailure};
pub use token::{RunCoordinator, RunToken};

/// Outcome of one symbol's fetch, carried across the fan-in join point.
pub type FetchOutcome = (String, std::result::Result<Vec<HistoryPoint>, String>);

/// The quoteboard pipeline: a basket, a calendar, and a quote source.
#[derive(Debug, Clone)]
pub struct Pipeline {
    client: YfinClient,
    calendar: TradingCalendar,
    basket: Vec<String>,
    coordinator: RunCoordinator,
}

impl Pipeline {
    /// Create a pipeline for a fixed symbol basket.
    pub fn new(client: YfinClient, calendar: TradingCalendar, basket: Vec<String>) -> Self {
        Self {
            client,
            calendar,
            basket,
            coordinator: RunCoordinator::new(),
        }
    }

    /// The configured basket, in display order.
    pub fn basket(&self) -> &[String] {
        &self.basket
    }

    /// Start a new run, invalidating tokens from earlier runs.
    pub fn begin_run(&self) -> RunToken {
        self.coordinator.begin_run()
    }

    /// Run one pass, discarding the result when a newer run has started.
    ///
    /// `Ok(None)` means this run was superseded: its result must not be
    /// applied. The token is checked both before the fetch fan-out and
    /// after assembly, so neither a queued nor an in-flight stale run can
    /// clobber a newer one's output.
    pub async fn run_guarded(
        &self,
        requested: NaiveDate,
        token: &RunToken,
    ) -> Result<Option<RunReport>> {
        if !token.is_current() {
            log::debug!("skipping superseded run for {requested}");
            return Ok(None);
        }
        let report = self.run(requested).await?;
        if !token.is_current() {
            log::debug!("discarding superseded result for {requested}");
            return Ok(None);
        }
        Ok(Some(report))
    }

    /// Run one full pass for the requested baseline date.
    pub async fn run(&self, requested: NaiveDate) -> Result<RunReport> {
        let baseline = self
            .calendar
            .first_trading_day_on_or_after(requested)
            .context("resolving baseline to a trading day")?;

        // Size the window so the source returns everything since the baseline.
        let today = session_date(Utc::now().timestamp()).unwrap_or(baseline);
        let days = self.calendar.count_trading_days(baseline, today).max(1);
        log::info!(
            "run: baseline {requested} -> {baseline}, window {days} trading days, {} symbols",
            self.basket.len()
        );

        let fetched = self.fetch_all(days).await;
        Ok(assemble(baseline, fetched))
    }

    /// Fetch history for every basket symbol concurrently.
    ///
    /// Fan-out one task per symbol, then join all of them before any
    /// normalization starts. Outcomes come back in basket order.
    async fn fetch_all(&self, days: u32) -> Vec<FetchOutcome> {
        let mut handles = Vec::with_capacity(self.basket.len());
        for symbol in &self.basket {
            let client = self.client.clone();
            let symbol = symbol.clone();
            handles.push((
                symbol.clone(),
                tokio::spawn(async move { client.history(&symbol, days, Interval::OneDay).await }),
            ));
        }

        let mut outcomes = Vec::with_capacity(handles.len());
        for (symbol, handle) in handles {
            let outcome = match handle.await {
                Ok(Ok(points)) => {
                    log::debug!("fetched {}: {} points", symbol, points.len());
                    Ok(points)
                }
                Ok(Err(e)) => Err(e.to_string()),
                Err(e) => Err(format!("fetch task failed: {e}")),
            };
            outcomes.push((symbol, outcome));
        }
        outcomes
    }
}

/// Assemble a report from per-symbol fetch outcomes.
///
/// Pure except for logging; failures become `SymbolFailure` records and the
/// surviving series feed the table, the ranking and the summaries.
pub fn assemble(baseline: NaiveDate, fetched: Vec<FetchOutcome>) -> RunReport {
    let mut series = Vec::new();
    let mut failures = Vec::new();

    for (symbol, outcome) in fetched {
        let points = match outcome {
            Ok(points) => points,
            Err(reason) => {
                log::warn!("{symbol}: fetch failed: {reason}");
                failures.push(SymbolFailure { symbol, reason });
                continue;
            }
        };

        let raw: Vec<RawQuote> = points
            .iter()
            .map(|p| RawQuote {
                t: p.timestamp,
                c: p.close,
            })
            .collect();

        match normalize_series(&symbol, &raw, baseline) {
            Ok(s) => series.push(s),
            Err(e) => {
                log::warn!("{symbol}: {e}");
                failures.push(SymbolFailure {
                    symbol,
                    reason: e.to_string(),
                });
            }
        }
    }

    let table = merge_series(&series);
    let ranking = rank_series(&series);
    let summaries = summarize(&series);
    log::info!(
        "run complete: {} symbols ranked, {} failed",
        ranking.len(),
        failures.len()
    );

    RunReport {
        baseline,
        series,
        table,
        ranking,
        summaries,
        failures,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DAY: i64 = 86_400;
    const JAN_2_OPEN: i64 = 1_735_828_200;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn history(closes: &[f64]) -> Vec<HistoryPoint> {
        closes
            .iter()
            .enumerate()
            .map(|(i, &close)| HistoryPoint {
                timestamp: JAN_2_OPEN + i as i64 * DAY,
                close,
            })
            .collect()
    }

    #[test]
    fn test_assemble_ranks_all_successful_symbols() {
        let baseline = date(2025, 1, 2);
        let fetched = vec![
            ("A".to_string(), Ok(history(&[100.0, 105.0]))),
            ("B".to_string(), Ok(history(&[100.0, 110.0]))),
        ];
        let report = assemble(baseline, fetched);

        assert_eq!(report.ranking.len(), 2);
        assert_eq!(report.leader().unwrap().symbol, "B");
        assert!(report.failures.is_empty());
    }

    #[test]
    fn test_failed_symbol_is_isolated() {
        let baseline = date(2025, 1, 2);
        let mut fetched: Vec<FetchOutcome> = ["A", "B", "C", "D"]
            .iter()
            .map(|s| (s.to_string(), Ok(history(&[100.0, 101.0]))))
            .collect();
        fetched.insert(2, ("BAD".to_string(), Err("connection refused".to_string())));

        let report = assemble(baseline, fetched);
        assert_eq!(report.ranking.len(), 4);
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].symbol, "BAD");
        assert!(report.ranking.iter().all(|e| e.symbol != "BAD"));
    }

    #[test]
    fn test_empty_history_becomes_failure_record() {
        let baseline = date(2025, 1, 2);
        let fetched = vec![
            ("A".to_string(), Ok(history(&[100.0, 101.0]))),
            ("GONE".to_string(), Ok(Vec::new())),
        ];
        let report = assemble(baseline, fetched);

        assert_eq!(report.ranking.len(), 1);
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].symbol, "GONE");
    }

    #[test]
    fn test_report_table_covers_union_of_dates() {
        let baseline = date(2025, 1, 2);
        let mut short = history(&[100.0, 101.0]);
        short.remove(1); // feed gap on the second day
        let fetched = vec![
            ("FULL".to_string(), Ok(history(&[100.0, 102.0]))),
            ("GAPPY".to_string(), Ok(short)),
        ];
        let report = assemble(baseline, fetched);

        assert_eq!(report.table.len(), 2);
        assert!(report.table[1].cell("FULL").is_some());
        assert!(report.table[1].cell("GAPPY").is_none());
    }

    #[tokio::test]
    async fn test_superseded_run_is_discarded() {
        let pipeline = Pipeline::new(
            YfinClient::public().unwrap(),
            TradingCalendar::default(),
            vec!["XOM".to_string()],
        );
        let stale = pipeline.begin_run();
        let _newer = pipeline.begin_run();
        // Stale token short-circuits before any fetch is dispatched.
        let outcome = pipeline
            .run_guarded(date(2025, 1, 2), &stale)
            .await
            .unwrap();
        assert!(outcome.is_none());
    }

    #[tokio::test]
    async fn test_run_fails_on_exhausted_calendar() {
        // Holiday table that closes the market for 60 straight days.
        let start = date(2025, 3, 1);
        let holidays = (0..60).map(|i| start + chrono::Days::new(i));
        let pipeline = Pipeline::new(
            YfinClient::public().unwrap(),
            TradingCalendar::new(holidays),
            vec!["XOM".to_string()],
        );
        assert!(pipeline.run(start).await.is_err());
    }
}
