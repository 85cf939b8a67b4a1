// In crates/rate-client/src/types.rs

use std::collections::HashMap;

use serde::Deserialize;

/// The success body of the latest-rates endpoint.
///
/// The endpoint returns more fields (base currency, date), but only the
/// `rates` map matters here: a mapping from currency code to numeric rate,
/// e.g. `{"rates": {"JPY": 150.0}}`.
#[derive(Deserialize, Debug, Clone)]
pub struct LatestRates {
    pub rates: HashMap<String, f64>,
}
