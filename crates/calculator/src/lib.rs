// In crates/calculator/src/lib.rs

use async_trait::async_trait;
use core_types::Currency;

pub mod error;
pub mod format;
pub mod provider;
pub mod types;

// Re-export public types
pub use error::{Error, Result};
pub use format::format_jpy;
pub use types::{CalculationRequest, CalculationResult};

/// The interface for resolving a currency conversion rate.
///
/// The live implementation wraps the HTTP `RateClient`; tests substitute
/// fixed or failing providers.
#[async_trait]
pub trait RateProvider: Send + Sync {
    async fn get_rate(&self, from: Currency, to: Currency) -> anyhow::Result<f64>;
}

/// Calculates the Yen profit for a single request.
///
/// The formula is `10^(-digits) * points * contractSize * lots * rate`, where
/// `rate` converts the instrument's profit currency to JPY.
///
/// # Returns
///
/// * `Ok(Some(CalculationResult))`: The computed profit and its breakdown.
/// * `Ok(None)`: The symbol is not in the instrument table; the calculation
///   is a silent no-op.
/// * `Err(Error::RateUnavailable)`: Rate resolution failed. No partial result
///   is produced.
///
/// The rate provider is invoked at most once per request, and never for
/// instruments whose profit currency is already JPY.
pub async fn calculate(
    request: &CalculationRequest,
    rates: &dyn RateProvider,
) -> Result<Option<CalculationResult>> {
    let Some(spec) = instruments::lookup(&request.symbol) else {
        return Ok(None);
    };

    // 1. The value of one point of price movement: 10^(-digits).
    let point_value = spec.point_value();

    // 2. The conversion rate from the profit currency to JPY.
    let rate = if spec.profit_currency == Currency::Jpy {
        1.0
    } else {
        match rates.get_rate(spec.profit_currency, Currency::Jpy).await {
            Ok(rate) => rate,
            Err(e) => {
                tracing::error!(
                    error = %e,
                    currency = %spec.profit_currency,
                    "Failed to fetch JPY conversion rate"
                );
                return Err(Error::RateUnavailable);
            }
        }
    };

    // 3. profit = pointValue * points * contractSize * lots * rate
    let profit_jpy = point_value * request.points * spec.contract_size * request.lots * rate;

    let detail = format!(
        "Rate ({}JPY): {:.3} | Point value: {:.prec$}",
        spec.profit_currency,
        rate,
        point_value,
        prec = spec.digits as usize,
    );

    Ok(Some(CalculationResult {
        profit_jpy,
        rate,
        point_value,
        detail,
    }))
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use core_types::Symbol;
    use test_case::test_case;

    use super::*;

    /// Returns a fixed rate and counts how often it is consulted.
    struct FixedRate {
        rate: f64,
        calls: AtomicUsize,
    }

    impl FixedRate {
        fn new(rate: f64) -> Self {
            Self {
                rate,
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl RateProvider for FixedRate {
        async fn get_rate(&self, _from: Currency, _to: Currency) -> anyhow::Result<f64> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.rate)
        }
    }

    /// Always fails, standing in for an unreachable rate endpoint.
    struct Unavailable;

    #[async_trait]
    impl RateProvider for Unavailable {
        async fn get_rate(&self, from: Currency, to: Currency) -> anyhow::Result<f64> {
            anyhow::bail!("no rate for {}{}", from, to)
        }
    }

    fn request(symbol: &str, lots: f64, points: f64) -> CalculationRequest {
        CalculationRequest {
            symbol: Symbol(symbol.to_string()),
            lots,
            points,
        }
    }

    #[tokio::test]
    async fn usdjpy_needs_no_conversion() {
        // The fixed rate is a canary: a JPY instrument must never consult it.
        let rates = FixedRate::new(999.0);

        let result = calculate(&request("USDJPY", 1.0, 100.0), &rates)
            .await
            .unwrap()
            .unwrap();

        assert_eq!(result.rate, 1.0);
        assert!((result.profit_jpy - 10_000.0).abs() < 1e-6);
        assert_eq!(rates.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn eurusd_converts_through_usdjpy() {
        let rates = FixedRate::new(150.0);

        let result = calculate(&request("EURUSD", 1.0, 50.0), &rates)
            .await
            .unwrap()
            .unwrap();

        assert!((result.profit_jpy - 7_500.0).abs() < 1e-6);
        assert_eq!(result.rate, 150.0);
        assert_eq!(rates.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn unknown_symbol_is_a_silent_no_op() {
        let rates = FixedRate::new(150.0);

        let result = calculate(&request("DOGEJPY", 1.0, 100.0), &rates)
            .await
            .unwrap();

        assert!(result.is_none());
        assert_eq!(rates.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn rate_failure_aborts_the_whole_calculation() {
        let result = calculate(&request("EURUSD", 1.0, 50.0), &Unavailable).await;
        assert!(matches!(result, Err(Error::RateUnavailable)));
    }

    #[tokio::test]
    async fn unparsable_inputs_yield_zero_profit() {
        let req = CalculationRequest::from_input(Symbol("USDJPY".to_string()), "", "abc");
        let rates = FixedRate::new(1.0);

        let result = calculate(&req, &rates).await.unwrap().unwrap();
        assert_eq!(result.profit_jpy, 0.0);
    }

    #[test_case(2.0 ; "doubling lots doubles profit")]
    #[test_case(0.5 ; "halving lots halves profit")]
    #[tokio::test]
    async fn profit_is_linear_in_lots(factor: f64) {
        let rates = FixedRate::new(150.0);

        let base = calculate(&request("EURUSD", 1.0, 50.0), &rates)
            .await
            .unwrap()
            .unwrap();
        let scaled = calculate(&request("EURUSD", factor, 50.0), &rates)
            .await
            .unwrap()
            .unwrap();

        assert!((scaled.profit_jpy - base.profit_jpy * factor).abs() < 1e-6);
    }

    #[test_case(3.0 ; "tripling points triples profit")]
    #[test_case(-1.0 ; "negating points negates profit")]
    #[tokio::test]
    async fn profit_is_linear_in_points(factor: f64) {
        let rates = FixedRate::new(150.0);

        let base = calculate(&request("EURUSD", 1.0, 50.0), &rates)
            .await
            .unwrap()
            .unwrap();
        let scaled = calculate(&request("EURUSD", 1.0, 50.0 * factor), &rates)
            .await
            .unwrap()
            .unwrap();

        assert!((scaled.profit_jpy - base.profit_jpy * factor).abs() < 1e-6);
    }

    #[tokio::test]
    async fn detail_reports_rate_and_point_value() {
        let rates = FixedRate::new(150.1234);

        let result = calculate(&request("EURUSD", 1.0, 50.0), &rates)
            .await
            .unwrap()
            .unwrap();

        // Rate to three decimals, point value to the instrument's digits (5).
        assert_eq!(result.detail, "Rate (USDJPY): 150.123 | Point value: 0.00001");
    }

    #[tokio::test]
    async fn detail_uses_the_instrument_digits_for_the_point_value() {
        let rates = FixedRate::new(0.0);

        let result = calculate(&request("GBPJPY", 1.0, 1.0), &rates)
            .await
            .unwrap()
            .unwrap();

        assert_eq!(result.detail, "Rate (JPYJPY): 1.000 | Point value: 0.001");
    }
}
