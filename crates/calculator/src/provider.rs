// In crates/calculator/src/provider.rs

use async_trait::async_trait;
use core_types::Currency;
use rate_client::RateClient;

use crate::RateProvider;

/// The live rate provider, backed by the HTTP rate client.
#[async_trait]
impl RateProvider for RateClient {
    async fn get_rate(&self, from: Currency, to: Currency) -> anyhow::Result<f64> {
        Ok(RateClient::get_rate(self, from, to).await?)
    }
}
