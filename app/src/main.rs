// In app/src/main.rs

use anyhow::Result;
use calculator::{CalculationRequest, format_jpy};
use clap::{Parser, Subcommand};
use core_types::{Currency, Symbol};
use rate_client::RateClient;
use tracing_subscriber::prelude::*;

// --- Command-Line Interface Definition ---

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = "Computes the JPY profit of a trading position.")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Lists the supported instruments in alphabetical order.
    List,

    /// Resolves a currency conversion rate.
    Rate {
        /// The source currency code (e.g., "USD").
        #[arg(short, long)]
        from: String,

        /// The target currency code.
        #[arg(short, long, default_value = "JPY")]
        to: String,
    },

    /// Calculates the JPY profit for an instrument, lot size and point move.
    Calc {
        /// The instrument symbol (e.g., "EURUSD").
        #[arg(short, long)]
        symbol: String,

        /// The lot size. Missing or unparsable input counts as 0.
        #[arg(short, long, default_value = "")]
        lots: String,

        /// The price movement in points. Missing or unparsable input counts as 0.
        #[arg(short, long, default_value = "")]
        points: String,
    },
}

// --- Main Application Entry Point ---

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from a .env file, if it exists.
    dotenvy::dotenv().ok();

    let settings = app_config::load_settings()?;

    // --- Tracing Setup ---
    let default_level: tracing::Level = settings
        .app
        .log_level
        .parse()
        .unwrap_or(tracing::Level::INFO);
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_filter(tracing_subscriber::filter::Targets::new().with_default(default_level));
    tracing_subscriber::registry().with(fmt_layer).init();

    // Parse command-line arguments.
    let cli = Cli::parse();

    tracing::debug!(environment = %settings.app.environment, "Starting profit calculator");

    // Match on the parsed command and call the appropriate handler.
    match cli.command {
        Commands::List => {
            handle_list();
        }
        Commands::Rate { from, to } => {
            handle_rate(&settings, &from, &to).await?;
        }
        Commands::Calc {
            symbol,
            lots,
            points,
        } => {
            handle_calc(&settings, symbol, &lots, &points).await?;
        }
    }

    Ok(())
}

// --- Subcommand Handlers ---

/// Prints the instrument table, alphabetically by symbol.
fn handle_list() {
    for spec in instruments::all_sorted() {
        // EURUSD is the pre-selected instrument in the UI; mark it here too.
        let marker = if spec.symbol.0 == "EURUSD" { "  (default)" } else { "" };
        println!(
            "{:<8} digits: {}  contract size: {:>8}  profit currency: {}{}",
            spec.symbol.0, spec.digits, spec.contract_size, spec.profit_currency, marker
        );
    }
}

/// Resolves and prints a single conversion rate.
async fn handle_rate(settings: &app_config::Settings, from: &str, to: &str) -> Result<()> {
    let from: Currency = from.parse()?;
    let to: Currency = to.parse()?;

    let client = RateClient::new(&settings.rates);
    let rate = client.get_rate(from, to).await?;

    println!("{}{}: {:.3}", from, to, rate);
    Ok(())
}

/// Runs one profit calculation and renders the result.
async fn handle_calc(
    settings: &app_config::Settings,
    symbol: String,
    lots: &str,
    points: &str,
) -> Result<()> {
    let request = CalculationRequest::from_input(Symbol(symbol), lots, points);
    let client = RateClient::new(&settings.rates);

    match calculator::calculate(&request, &client).await {
        Ok(Some(result)) => {
            println!("{}", format_jpy(result.profit_jpy));
            println!("{}", result.detail);
        }
        Ok(None) => {
            // Unknown symbols are a defined no-op; no result is rendered.
            tracing::warn!(symbol = %request.symbol, "Symbol not found in instrument table");
        }
        Err(calculator::Error::RateUnavailable) => {
            eprintln!("Error (Rate)");
            std::process::exit(1);
        }
    }

    Ok(())
}
