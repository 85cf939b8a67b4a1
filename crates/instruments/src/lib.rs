// In crates/instruments/src/lib.rs

use std::sync::LazyLock;

use core_types::{Currency, InstrumentSpec, Symbol};

/// The fixed instrument table, built once at first access and read-only for
/// the lifetime of the process. Values come from the broker's contract
/// specification sheet.
static TABLE: LazyLock<Vec<InstrumentSpec>> = LazyLock::new(build_table);

fn spec(symbol: &str, digits: u32, contract_size: f64, profit_currency: Currency) -> InstrumentSpec {
    InstrumentSpec {
        symbol: Symbol(symbol.to_string()),
        digits,
        contract_size,
        profit_currency,
    }
}

fn build_table() -> Vec<InstrumentSpec> {
    vec![
        spec("AUDJPY", 3, 100_000.0, Currency::Jpy),
        spec("AUDUSD", 5, 100_000.0, Currency::Usd),
        spec("AUS200", 1, 1.0, Currency::Aud),
        spec("BTCUSD", 2, 1.0, Currency::Usd),
        spec("CADJPY", 3, 100_000.0, Currency::Jpy),
        spec("CHFJPY", 3, 100_000.0, Currency::Jpy),
        spec("CN500", 1, 1.0, Currency::Usd),
        spec("ETHUSD", 2, 1.0, Currency::Usd),
        spec("EU500", 1, 1.0, Currency::Eur),
        spec("EURAUD", 5, 100_000.0, Currency::Aud),
        spec("EURCAD", 5, 100_000.0, Currency::Cad),
        spec("EURCHF", 5, 100_000.0, Currency::Chf),
        spec("EURGBP", 5, 100_000.0, Currency::Gbp),
        spec("EURJPY", 3, 100_000.0, Currency::Jpy),
        spec("EURNZD", 5, 100_000.0, Currency::Nzd),
        spec("EURUSD", 5, 100_000.0, Currency::Usd),
        spec("FR40", 1, 1.0, Currency::Eur),
        spec("GBPAUD", 5, 100_000.0, Currency::Aud),
        spec("GBPCAD", 5, 100_000.0, Currency::Cad),
        spec("GBPCHF", 5, 100_000.0, Currency::Chf),
        spec("GBPJPY", 3, 100_000.0, Currency::Jpy),
        spec("GBPNZD", 5, 100_000.0, Currency::Nzd),
        spec("GBPUSD", 5, 100_000.0, Currency::Usd),
        spec("US30", 1, 1.0, Currency::Usd),
        spec("USDCHF", 5, 100_000.0, Currency::Chf),
        spec("USDJPY", 3, 100_000.0, Currency::Jpy),
        spec("XAUUSD", 2, 100.0, Currency::Usd),
    ]
}

/// Looks up the metadata for a symbol.
///
/// Returns `None` for every symbol outside the fixed table.
pub fn lookup(symbol: &Symbol) -> Option<&'static InstrumentSpec> {
    TABLE.iter().find(|s| &s.symbol == symbol)
}

/// All instruments in alphabetical order by symbol, for presentation.
/// The order is independent of the table's internal storage order.
pub fn all_sorted() -> Vec<&'static InstrumentSpec> {
    let mut specs: Vec<&'static InstrumentSpec> = TABLE.iter().collect();
    specs.sort_by(|a, b| a.symbol.0.cmp(&b.symbol.0));
    specs
}
