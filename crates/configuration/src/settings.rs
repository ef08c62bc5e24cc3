use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// The root configuration structure for the entire application.
///
/// Every section is optional in `config.toml`; missing sections fall back to
/// their defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub analysis: AnalysisSettings,
    pub sweep: SweepSettings,
    pub data: DataSettings,
    pub output: OutputSettings,
    pub logging: LoggingSettings,
}

/// Parameters of the ratio calculations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisSettings {
    /// Annual risk-free rate (e.g., 0.0426 for 4.26%).
    pub risk_free_rate: f64,
    /// Trading periods per year used to annualize the Sharpe ratio.
    pub annualization_scale: u32,
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        Self {
            risk_free_rate: 0.0426,
            annualization_scale: 252,
        }
    }
}

/// The offsets (in rows back from the most recent one) at which both ratios
/// are re-evaluated. `end` is exclusive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SweepSettings {
    pub start: usize,
    pub end: usize,
    pub step: usize,
}

impl Default for SweepSettings {
    fn default() -> Self {
        Self {
            start: 1,
            end: 800,
            step: 15,
        }
    }
}

/// Where the price history is read from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataSettings {
    pub prices_path: PathBuf,
}

impl Default for DataSettings {
    fn default() -> Self {
        Self {
            prices_path: PathBuf::from("prices.csv"),
        }
    }
}

/// How the results are printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Numbered lines with the comparison rendered as a table.
    #[default]
    Table,
    /// The full comparison as pretty-printed JSON.
    Json,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    pub format: OutputFormat,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Default filter directive, overridden by `RUST_LOG` when set.
    pub level: String,
    /// When set, logs go to a daily-rolling file in this directory instead of stderr.
    pub directory: Option<PathBuf>,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            directory: None,
        }
    }
}
