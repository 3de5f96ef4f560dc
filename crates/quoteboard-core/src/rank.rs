//! Performance ranking over normalized series.

use std::cmp::Ordering;

use crate::series::SymbolSeries;

/// One leaderboard entry. Rank 1 is the best performer.
#[derive(Debug, Clone, PartialEq)]
pub struct RankEntry {
    pub symbol: String,
    pub percentage: f64,
    pub rank: usize,
}

/// Per-symbol start/end summary for the table view.
#[derive(Debug, Clone, PartialEq)]
pub struct SymbolSummary {
    pub symbol: String,
    pub start_close: f64,
    pub end_close: f64,
    pub percentage_change: f64,
}

/// Rank symbols by terminal percentage, descending.
///
/// The sort is stable, so symbols with equal percentages keep their basket
/// order; there is no secondary numeric tie-break. Series without points
/// are skipped.
pub fn rank_series(series: &[SymbolSeries]) -> Vec<RankEntry> {
    let mut entries: Vec<RankEntry> = series
        .iter()
        .filter_map(|s| {
            s.terminal_percentage().map(|percentage| RankEntry {
                symbol: s.symbol.clone(),
                percentage,
                rank: 0,
            })
        })
        .collect();

    entries.sort_by(|a, b| {
        b.percentage
            .partial_cmp(&a.percentage)
            .unwrap_or(Ordering::Equal)
    });

    for (i, entry) in entries.iter_mut().enumerate() {
        entry.rank = i + 1;
    }

    entries
}

/// The top-ranked entry, for headline display.
pub fn leader(ranking: &[RankEntry]) -> Option<&RankEntry> {
    ranking.first()
}

/// First/last closes and overall change per symbol, in input order.
pub fn summarize(series: &[SymbolSeries]) -> Vec<SymbolSummary> {
    series
        .iter()
        .filter_map(|s| {
            let first = s.points.first()?;
            let last = s.points.last()?;
            Some(SymbolSummary {
                symbol: s.symbol.clone(),
                start_close: first.close,
                end_close: last.close,
                percentage_change: last.percentage,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::series::{normalize_series, RawQuote};
    use chrono::NaiveDate;

    const DAY: i64 = 86_400;
    const JAN_2_OPEN: i64 = 1_735_828_200;

    fn series(symbol: &str, closes: &[f64]) -> SymbolSeries {
        let quotes: Vec<RawQuote> = closes
            .iter()
            .enumerate()
            .map(|(i, &c)| RawQuote {
                t: JAN_2_OPEN + i as i64 * DAY,
                c,
            })
            .collect();
        let baseline = NaiveDate::from_ymd_opt(2025, 1, 2).unwrap();
        normalize_series(symbol, &quotes, baseline).unwrap()
    }

    #[test]
    fn test_ranking_orders_by_terminal_percentage() {
        let a = series("A", &[100.0, 110.0]); // +10%
        let b = series("B", &[100.0, 105.0]); // +5%
        let ranking = rank_series(&[b, a]);

        assert_eq!(ranking.len(), 2);
        assert_eq!(ranking[0].symbol, "A");
        assert_eq!(ranking[0].rank, 1);
        assert_eq!(ranking[1].symbol, "B");
        assert_eq!(ranking[1].rank, 2);
    }

    #[test]
    fn test_ranking_percentages_are_non_increasing() {
        let input = [
            series("A", &[100.0, 97.0]),
            series("B", &[100.0, 112.0]),
            series("C", &[100.0, 103.0]),
            series("D", &[100.0, 103.0]),
        ];
        let ranking = rank_series(&input);
        for pair in ranking.windows(2) {
            assert!(pair[0].percentage >= pair[1].percentage);
        }
    }

    #[test]
    fn test_ties_keep_basket_order() {
        let input = [
            series("XOM", &[100.0, 103.0]),
            series("BBAI", &[200.0, 206.0]), // same +3%
        ];
        let ranking = rank_series(&input);
        assert_eq!(ranking[0].symbol, "XOM");
        assert_eq!(ranking[1].symbol, "BBAI");
    }

    #[test]
    fn test_leader_is_top_entry() {
        let ranking = rank_series(&[series("A", &[100.0, 90.0]), series("B", &[100.0, 120.0])]);
        assert_eq!(leader(&ranking).unwrap().symbol, "B");
    }

    #[test]
    fn test_leader_of_empty_ranking() {
        assert!(leader(&[]).is_none());
    }

    #[test]
    fn test_empty_series_is_skipped_without_panic() {
        let empty = SymbolSeries {
            symbol: "GONE".to_string(),
            points: Vec::new(),
        };
        let ranking = rank_series(&[empty, series("A", &[100.0, 101.0])]);
        assert_eq!(ranking.len(), 1);
        assert_eq!(ranking[0].symbol, "A");
    }

    #[test]
    fn test_summaries_expose_start_and_end_closes() {
        let summaries = summarize(&[series("A", &[100.0, 110.0, 90.0])]);
        assert_eq!(summaries.len(), 1);
        assert_eq!(summaries[0].start_close, 100.0);
        assert_eq!(summaries[0].end_close, 90.0);
        assert_eq!(summaries[0].percentage_change, -10.0);
    }
}
