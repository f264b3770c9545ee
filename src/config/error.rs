//! Errors raised while loading or validating SDK settings.
//!
//! These never reach a use case: a bad configuration stops the host before
//! a [`PaymentSdk`](crate::PaymentSdk) is built.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required layer (`default.toml` or the `--config` file) is missing
    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    /// The merged layers do not deserialize into `Settings`
    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    /// A value parsed fine but is out of range, e.g. a zero timeout or a
    /// non-http gateway URL
    #[error("Invalid value for {field}: {message}")]
    ValidationError { field: String, message: String },

    /// `PAYDOCK_APP_ENV` holds an unknown environment name
    #[error("Environment variable error: {0}")]
    EnvVarError(String),

    /// `PAYDOCK_CONFIG_DIR` and `PAYDOCK_CONFIG_FILE` were both set
    #[error("Conflicting configuration sources: {0}")]
    MutualExclusivityError(String),

    #[error("Configuration error: {0}")]
    Other(#[from] config::ConfigError),
}

impl ConfigError {
    pub fn validation<S: Into<String>>(field: S, message: S) -> Self {
        ConfigError::ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn file_not_found<S: Into<String>>(path: S) -> Self {
        ConfigError::FileNotFound(path.into())
    }

    pub fn mutual_exclusivity<S: Into<String>>(message: S) -> Self {
        ConfigError::MutualExclusivityError(message.into())
    }

    /// Dotted settings key the error points at, when there is one.
    pub fn field(&self) -> Option<&str> {
        match self {
            ConfigError::ValidationError { field, .. } => Some(field),
            _ => None,
        }
    }
}
