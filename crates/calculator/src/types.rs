// In crates/calculator/src/types.rs

use core_types::Symbol;

/// One user-initiated calculation.
#[derive(Debug, Clone)]
pub struct CalculationRequest {
    pub symbol: Symbol,
    pub lots: f64,
    pub points: f64,
}

impl CalculationRequest {
    /// Builds a request from raw text inputs.
    ///
    /// Lot and point text that fails to parse as a number becomes `0.0`. An
    /// empty lot field therefore yields a zero profit, not a rejection; this
    /// input-tolerance policy is deliberate.
    pub fn from_input(symbol: Symbol, lots: &str, points: &str) -> Self {
        Self {
            symbol,
            lots: lots.trim().parse().unwrap_or(0.0),
            points: points.trim().parse().unwrap_or(0.0),
        }
    }
}

/// The outcome of a successful calculation.
#[derive(Debug, Clone)]
pub struct CalculationResult {
    /// The profit converted to JPY.
    pub profit_jpy: f64,
    /// The resolved profit-currency to JPY rate (`1.0` for JPY instruments).
    pub rate: f64,
    /// The value of one point: `10^(-digits)`.
    pub point_value: f64,
    /// Human-readable breakdown of the rate and point value.
    pub detail: String,
}
