//! # Quote History Client
//!
//! Client for a yfinance proxy serving daily quote history:
//! `GET {base}/api/history?symbol=XOM&period=30d&interval=1d` returns a JSON
//! array of `{"t": epochSeconds, "c": closePrice}` tuples, ascending by `t`.
//!
//! The payload is treated as untrusted input: callers should re-derive
//! calendar dates from `t` and defend against empty or short responses.
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use yfin_api::{Interval, YfinClient};
//!
//! let client = YfinClient::public()?;
//! let history = client.history("XOM", 30, Interval::OneDay).await?;
//! for point in &history {
//!     println!("{} {}", point.timestamp, point.close);
//! }
//! ```

#![warn(missing_docs)]

pub mod client;
pub mod config;
pub mod error;
pub mod types;

pub use client::YfinClient;
pub use config::Config;
pub use error::{Error, Result};
pub use types::{HistoryPoint, Interval};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default base URL for the history proxy.
pub const DEFAULT_BASE_URL: &str = "https://yfinance-server.vercel.app";
