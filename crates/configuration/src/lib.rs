use crate::error::ConfigError;
use std::path::Path;

// Declare the modules that make up this crate.
pub mod error;
pub mod logging;
pub mod settings;

// Re-export the core types to provide a clean public API.
pub use logging::init_logging;
pub use settings::{
    AnalysisSettings, Config, DataSettings, LoggingSettings, OutputFormat, OutputSettings,
    SweepSettings,
};

/// Default configuration file, looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "config.toml";

/// Prefix of environment overrides, e.g. `COMPARE_SWEEP__STEP=30`.
pub const ENV_PREFIX: &str = "COMPARE";

/// Loads the application configuration.
///
/// Reads the TOML file at `path` (or `config.toml` when `None`), then applies
/// `COMPARE_`-prefixed environment variables on top. A missing default file is
/// not an error; a missing explicitly requested file is.
pub fn load_config(path: Option<&Path>) -> Result<Config, ConfigError> {
    let file = match path {
        Some(path) => config::File::from(path).required(true),
        None => config::File::with_name(DEFAULT_CONFIG_FILE).required(false),
    };

    let builder = config::Config::builder()
        .add_source(file)
        .add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    // Attempt to deserialize the entire configuration into our `Config` struct
    let config = builder.try_deserialize::<Config>()?;
    validate(&config)?;

    Ok(config)
}

/// Rejects settings that cannot describe a meaningful comparison.
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    if !config.analysis.risk_free_rate.is_finite() {
        return Err(ConfigError::ValidationError(
            "analysis.risk_free_rate must be a finite number".to_string(),
        ));
    }
    if config.analysis.annualization_scale == 0 {
        return Err(ConfigError::ValidationError(
            "analysis.annualization_scale must be positive".to_string(),
        ));
    }
    if config.sweep.step == 0 {
        return Err(ConfigError::ValidationError(
            "sweep.step must be positive".to_string(),
        ));
    }
    if config.sweep.start >= config.sweep.end {
        return Err(ConfigError::ValidationError(format!(
            "sweep.start ({}) must be below sweep.end ({})",
            config.sweep.start, config.sweep.end
        )));
    }
    Ok(())
}
