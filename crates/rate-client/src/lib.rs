// In crates/rate-client/src/lib.rs

use app_config::types::RatesSettings;
use core_types::Currency;

pub mod error;
pub mod types;

// Re-export public types
pub use error::{Error, Result};
pub use types::LatestRates;

/// A client for the public currency-conversion API.
#[derive(Debug, Clone)]
pub struct RateClient {
    http_client: reqwest::Client,
    base_url: String,
}

impl RateClient {
    /// Constructs a new RateClient from RatesSettings.
    pub fn new(settings: &RatesSettings) -> Self {
        let http_client = reqwest::Client::new();
        // The base_url is taken directly from the settings struct
        // that was populated from the config/*.toml files.
        let base_url = settings.base_url.clone();
        RateClient {
            http_client,
            base_url,
        }
    }

    /// Resolves the conversion rate from `from` to `to`.
    ///
    /// Identical currencies resolve to `1.0` without touching the network.
    /// Otherwise this issues exactly one GET to the latest-rates endpoint and
    /// succeeds only if the HTTP status indicates success and the body carries
    /// a numeric rate for `to` under its `rates` map. No retry is attempted.
    ///
    /// # Arguments
    ///
    /// * `from`: The source currency code.
    /// * `to`: The target currency code.
    pub async fn get_rate(&self, from: Currency, to: Currency) -> Result<f64> {
        if from == to {
            return Ok(1.0);
        }

        let url = format!("{}/latest?from={}&to={}", self.base_url, from, to);

        tracing::debug!(%url, "Fetching conversion rate");

        let response = self
            .http_client
            .get(&url)
            .send()
            .await
            .map_err(Error::RequestFailed)?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::HttpStatus(status));
        }

        let text = response.text().await.map_err(Error::RequestFailed)?;
        let body: LatestRates = serde_json::from_str(&text).map_err(Error::DeserializationFailed)?;

        match body.rates.get(to.as_str()) {
            Some(rate) => Ok(*rate),
            None => Err(Error::MissingRate(to)),
        }
    }
}
