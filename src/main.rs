use analytics::{ComparisonParams, MetricComparison, SweepRange};
use anyhow::{Context, Result};
use clap::Parser;
use configuration::{Config, OutputFormat};
use std::path::PathBuf;

mod output;

/// Compares the Burke ratio and the Sharpe ratio of an equal-weighted portfolio.
fn main() -> Result<()> {
    // A .env file is optional; it only supplies COMPARE_* overrides.
    dotenvy::dotenv().ok();

    // Parse command-line arguments
    let cli = Cli::parse();

    let mut config = configuration::load_config(cli.config.as_deref())
        .context("Failed to load configuration")?;
    if let Some(prices) = cli.prices {
        config.data.prices_path = prices;
    }
    if let Some(format) = cli.format {
        config.output.format = format;
    }

    // Held until exit so buffered file logs are flushed.
    let _log_guard = configuration::init_logging(&config.logging)?;

    run(&config)
}

// ==============================================================================
// CLI Structure
// ==============================================================================

/// Sharpe vs. Burke ratio comparison over a daily price history.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Configuration file (defaults to ./config.toml when present).
    #[arg(long)]
    config: Option<PathBuf>,

    /// CSV price history. Overrides `data.prices_path`.
    #[arg(long)]
    prices: Option<PathBuf>,

    /// Output format. Overrides `output.format`.
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,
}

// ==============================================================================
// Comparison Logic
// ==============================================================================

fn run(config: &Config) -> Result<()> {
    let prices_path = &config.data.prices_path;
    tracing::info!(
        prices = %prices_path.display(),
        scale = config.analysis.annualization_scale,
        "Starting Sharpe vs. Burke comparison."
    );
    let prices = data_loader::load_prices(prices_path)
        .with_context(|| format!("Failed to load prices from {}", prices_path.display()))?;

    let params = comparison_params(config)?;
    let comparison = MetricComparison::new(&prices, &params)?;

    match config.output.format {
        OutputFormat::Table => print!("{}", output::render_report(&comparison, &prices)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&comparison)?),
    }

    Ok(())
}

/// Maps the loaded settings onto the analytics parameters.
fn comparison_params(config: &Config) -> Result<ComparisonParams> {
    let sweep = SweepRange::new(config.sweep.start, config.sweep.end, config.sweep.step)?;
    Ok(ComparisonParams {
        risk_free_rate: config.analysis.risk_free_rate,
        annualization_scale: config.analysis.annualization_scale,
        sweep,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_overrides() {
        let cli = Cli::parse_from([
            "compare-metrics",
            "--prices",
            "data/sp500.csv",
            "--format",
            "json",
        ]);
        assert_eq!(cli.prices, Some(PathBuf::from("data/sp500.csv")));
        assert_eq!(cli.format, Some(OutputFormat::Json));
        assert!(cli.config.is_none());
    }

    #[test]
    fn test_default_config_maps_to_default_params() {
        let params = comparison_params(&Config::default()).unwrap();
        assert_eq!(params, ComparisonParams::default());
    }
}
