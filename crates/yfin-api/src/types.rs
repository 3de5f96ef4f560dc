//! Wire types for the quote-history API.

use serde::{Deserialize, Serialize};

/// One raw history point as served by the proxy.
///
/// The wire format uses short field names (`t`, `c`). Ascending order by
/// `t` is the documented contract but is not guaranteed.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct HistoryPoint {
    /// Session timestamp in epoch seconds.
    #[serde(rename = "t")]
    pub timestamp: i64,
    /// Close price.
    #[serde(rename = "c")]
    pub close: f64,
}

/// Bar interval for history requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum Interval {
    /// Daily bars
    #[serde(rename = "1d")]
    OneDay,
    /// Weekly bars
    #[serde(rename = "1wk")]
    OneWeek,
    /// Monthly bars
    #[serde(rename = "1mo")]
    OneMonth,
}

impl std::fmt::Display for Interval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Interval::OneDay => write!(f, "1d"),
            Interval::OneWeek => write!(f, "1wk"),
            Interval::OneMonth => write!(f, "1mo"),
        }
    }
}
