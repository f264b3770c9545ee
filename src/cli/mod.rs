//! CLI for the sample host
//!
//! - Argument parsing with clap
//! - Configuration loading with CLI overrides
//! - Dispatch of one use case per subcommand

pub mod executor;
pub mod parser;
pub mod validation;

pub use executor::{execute_command, run_command};
pub use parser::{Cli, Commands, Environment};

use crate::config::{ConfigError, ConfigLoader, Environment as AppEnvironment, Settings};
use crate::logger::{LogLevelHandle, init_logger};

/// Load configuration honoring `--config` and `--env`.
///
/// Returns the settings together with the environment they were loaded for.
pub fn load_config(cli: &Cli) -> Result<(Settings, AppEnvironment), ConfigError> {
    let mut loader = ConfigLoader::new()?;
    if let Some(path) = &cli.config {
        loader = loader.with_config_file(path);
    }
    if let Some(env) = cli.env {
        loader = loader.with_environment(env.into());
    }

    let environment = loader.environment();
    Ok((loader.load()?, environment))
}

/// Initialize logging from settings, applying `--verbose` / `--quiet`.
pub fn init_logger_from_settings(
    settings: &Settings,
    cli: &Cli,
) -> anyhow::Result<LogLevelHandle> {
    let mut config = settings.logger.clone().into_logger_config()?;
    if let Some(level) = cli.log_level_override() {
        config = config.with_level(level);
    }
    Ok(init_logger(config)?)
}
