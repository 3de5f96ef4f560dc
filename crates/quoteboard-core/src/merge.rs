//! Date-keyed merge of per-symbol series into one chartable table.

use std::collections::{BTreeMap, HashMap};

use chrono::NaiveDate;

use crate::series::SymbolSeries;

/// One symbol's values on one date.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MergedCell {
    pub close: f64,
    pub percentage: f64,
}

/// One table row: every symbol's cell for a single date.
///
/// A symbol with no point on this date is absent from `cells`. Absence is
/// the "no data" marker; it is never encoded as a zero value.
#[derive(Debug, Clone)]
pub struct MergedRow {
    pub date: NaiveDate,
    pub cells: HashMap<String, MergedCell>,
}

impl MergedRow {
    /// Cell for `symbol`, if it has data on this date.
    pub fn cell(&self, symbol: &str) -> Option<&MergedCell> {
        self.cells.get(symbol)
    }
}

/// Merge independently produced series into one row per date.
///
/// This is an outer join keyed on the session date: the output covers the
/// union of all input dates in ascending order, and a feed gap in one
/// symbol leaves a hole in that symbol's column without shifting anything
/// else. A positional, index-paired merge would misalign every later point
/// of the gapped symbol.
pub fn merge_series(series: &[SymbolSeries]) -> Vec<MergedRow> {
    let mut rows: BTreeMap<NaiveDate, HashMap<String, MergedCell>> = BTreeMap::new();

    for s in series {
        for p in &s.points {
            rows.entry(p.date).or_default().insert(
                s.symbol.clone(),
                MergedCell {
                    close: p.close,
                    percentage: p.percentage,
                },
            );
        }
    }

    rows.into_iter()
        .map(|(date, cells)| MergedRow { date, cells })
        .collect()
}
