//! HTTP client for the quote-history proxy.

use reqwest::Client;
use std::sync::Arc;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::types::{HistoryPoint, Interval};

/// HTTP client for the quote-history proxy.
#[derive(Debug, Clone)]
pub struct YfinClient {
    config: Arc<Config>,
    http: Client,
}

impl YfinClient {
    /// Create a new client with the given configuration.
    ///
    /// Fails when the configured base URL is not a valid absolute URL.
    pub fn new(config: Config) -> Result<Self> {
        url::Url::parse(&config.base_url)?;

        let http = Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()?;

        Ok(Self {
            config: Arc::new(config),
            http,
        })
    }

    /// Create a client against the default public proxy.
    pub fn public() -> Result<Self> {
        Self::new(Config::default())
    }

    /// Get the configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Fetch quote history for a symbol.
    ///
    /// # Arguments
    /// * `symbol` - Ticker symbol (e.g., "XOM")
    /// * `days` - Size of the historical window, in trading days
    /// * `interval` - Bar interval
    pub async fn history(
        &self,
        symbol: &str,
        days: u32,
        interval: Interval,
    ) -> Result<Vec<HistoryPoint>> {
        if symbol.trim().is_empty() {
            return Err(Error::InvalidParameter("symbol must not be empty".into()));
        }
        if days == 0 {
            return Err(Error::InvalidParameter("days must be at least 1".into()));
        }

        let url = format!("{}/api/history", self.config.base_url);
        let response = self
            .http
            .get(&url)
            .query(&[
                ("symbol", symbol.to_uppercase()),
                ("period", format!("{days}d")),
                ("interval", interval.to_string()),
            ])
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(Error::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let points: Vec<HistoryPoint> = serde_json::from_str(&body)?;
        Ok(points)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_public_client() {
        assert!(YfinClient::public().is_ok());
    }

    #[test]
    fn test_invalid_base_url_is_rejected() {
        let config = Config::new().with_base_url("not a url");
        let err = YfinClient::new(config).unwrap_err();
        assert!(matches!(err, Error::UrlParse(_)));
    }

    #[tokio::test]
    async fn test_empty_symbol_is_rejected() {
        let client = YfinClient::public().unwrap();
        let err = client.history("  ", 10, Interval::OneDay).await.unwrap_err();
        assert!(matches!(err, Error::InvalidParameter(_)));
    }

    #[tokio::test]
    async fn test_zero_day_window_is_rejected() {
        let client = YfinClient::public().unwrap();
        let err = client.history("XOM", 0, Interval::OneDay).await.unwrap_err();
        assert!(matches!(err, Error::InvalidParameter(_)));
    }
}
