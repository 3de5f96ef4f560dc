//! Baseline-relative percentage series for a single symbol.

use chrono::{DateTime, FixedOffset, NaiveDate};
use thiserror::Error;

/// Offset used to derive the exchange-local session date from a UTC
/// timestamp (US/Eastern standard time). Daily bars are stamped at the
/// session open, so the one-hour DST drift never moves the calendar date.
const EXCHANGE_UTC_OFFSET_SECS: i32 = -5 * 3600;

/// Raw quote tuple as delivered by the history source.
///
/// Ordering by `t` is assumed but not trusted; `normalize_series` sorts
/// defensively.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RawQuote {
    /// Epoch seconds of the session.
    pub t: i64,
    /// Close price.
    pub c: f64,
}

/// A close price pinned to a session date.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PricePoint {
    pub date: NaiveDate,
    pub close: f64,
}

/// A close price with its percentage change from the baseline close.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PercentagePoint {
    pub date: NaiveDate,
    pub close: f64,
    pub percentage: f64,
}

/// One symbol's normalized series, ascending by date.
///
/// Immutable once constructed; every run builds fresh series.
#[derive(Debug, Clone)]
pub struct SymbolSeries {
    pub symbol: String,
    pub points: Vec<PercentagePoint>,
}

impl SymbolSeries {
    /// Date of the first point (the resolved baseline for this symbol).
    pub fn baseline_date(&self) -> Option<NaiveDate> {
        self.points.first().map(|p| p.date)
    }

    /// Percentage change at the most recent point.
    pub fn terminal_percentage(&self) -> Option<f64> {
        self.points.last().map(|p| p.percentage)
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Normalization errors.
#[derive(Debug, Error)]
pub enum SeriesError {
    #[error("no data for {symbol} on or after the baseline date")]
    Empty { symbol: String },
}

/// Convert an epoch-seconds timestamp to the exchange-local calendar date.
///
/// Returns `None` for timestamps outside chrono's representable range,
/// which the caller drops as malformed input.
pub fn session_date(epoch_secs: i64) -> Option<NaiveDate> {
    let offset = FixedOffset::east_opt(EXCHANGE_UTC_OFFSET_SECS).unwrap();
    DateTime::from_timestamp(epoch_secs, 0).map(|utc| utc.with_timezone(&offset).date_naive())
}

/// Convert one symbol's raw quotes into a baseline-relative percentage series.
///
/// Quotes are re-dated from their timestamps (the source's own date fields,
/// if any, are not trusted), sorted, and filtered to `date >= baseline`.
/// The close of the earliest surviving point is the fixed baseline close;
/// every percentage is measured against it, so the baseline point itself is
/// exactly `0`. A zero baseline close yields all-zero percentages instead of
/// propagating NaN/infinity.
pub fn normalize_series(
    symbol: &str,
    quotes: &[RawQuote],
    baseline: NaiveDate,
) -> Result<SymbolSeries, SeriesError> {
    let mut quotes: Vec<RawQuote> = quotes.to_vec();
    quotes.sort_by_key(|q| q.t);

    let filtered: Vec<PricePoint> = quotes
        .iter()
        .filter_map(|q| session_date(q.t).map(|date| PricePoint { date, close: q.c }))
        .filter(|p| p.date >= baseline)
        .collect();

    let baseline_close = match filtered.first() {
        Some(first) => first.close,
        None => {
            return Err(SeriesError::Empty {
                symbol: symbol.to_string(),
            })
        }
    };

    let points = filtered
        .iter()
        .map(|p| PercentagePoint {
            date: p.date,
            close: p.close,
            percentage: if baseline_close == 0.0 {
                0.0
            } else {
                (p.close - baseline_close) / baseline_close * 100.0
            },
        })
        .collect();

    Ok(SymbolSeries {
        symbol: symbol.to_string(),
        points,
    })
}
