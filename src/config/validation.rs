//! Configuration validation logic
//!
//! Checks that configuration values are within acceptable ranges and
//! formats before anything is built from them.

use crate::config::error::ConfigError;
use crate::config::settings::{FileSettings, GatewayConfig, LoggerSettings, Settings};

/// Valid log formats
const VALID_LOG_FORMATS: &[&str] = &["full", "compact", "json"];

impl GatewayConfig {
    /// Validate gateway configuration
    ///
    /// # Validation Rules
    /// - A base URL override must be an http or https URL with a host
    /// - Both timeouts must be greater than 0
    /// - The connect timeout must not exceed the request timeout
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(url) = self.base_url.as_deref().map(str::trim)
            && !url.is_empty()
            && !is_http_url(url)
        {
            return Err(ConfigError::ValidationError {
                field: "gateway.base_url".to_string(),
                message: format!(
                    "Invalid base URL '{}'. Expected format: http(s)://host[:port]",
                    url
                ),
            });
        }

        if self.request_timeout == 0 {
            return Err(ConfigError::validation(
                "gateway.request_timeout",
                "Request timeout must be greater than 0 seconds.",
            ));
        }

        if self.connect_timeout == 0 {
            return Err(ConfigError::validation(
                "gateway.connect_timeout",
                "Connect timeout must be greater than 0 seconds.",
            ));
        }

        if self.connect_timeout > self.request_timeout {
            return Err(ConfigError::ValidationError {
                field: "gateway.connect_timeout".to_string(),
                message: format!(
                    "Connect timeout ({}s) cannot exceed request timeout ({}s).",
                    self.connect_timeout, self.request_timeout
                ),
            });
        }

        Ok(())
    }
}

fn is_http_url(url: &str) -> bool {
    let rest = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"));
    match rest {
        Some(rest) => {
            let host = rest.split(['/', ':']).next().unwrap_or_default();
            !host.is_empty() && !rest.contains(char::is_whitespace)
        }
        None => false,
    }
}

impl FileSettings {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.enabled && self.path.trim().is_empty() {
            return Err(ConfigError::validation(
                "logger.file.path",
                "File path is required when file logging is enabled.",
            ));
        }

        if !VALID_LOG_FORMATS.contains(&self.format.to_lowercase().as_str()) {
            return Err(ConfigError::ValidationError {
                field: "logger.file.format".to_string(),
                message: format!(
                    "Invalid log format '{}'. Valid formats are: {}",
                    self.format,
                    VALID_LOG_FORMATS.join(", ")
                ),
            });
        }

        Ok(())
    }
}

impl LoggerSettings {
    /// Validate logger settings
    ///
    /// The level accepts anything `EnvFilter` accepts, so
    /// `"paydock_rs=debug,info"` is as valid as `"debug"`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        crate::logger::build_filter(&self.level).map_err(|e| ConfigError::ValidationError {
            field: "logger.level".to_string(),
            message: e.to_string(),
        })?;

        if !self.console.enabled && !self.file.enabled {
            return Err(ConfigError::validation(
                "logger",
                "At least one output (console or file) must be enabled.",
            ));
        }

        self.file.validate()
    }
}

impl Settings {
    /// Validate all sections, failing on the first invalid one
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.gateway.validate()?;
        self.logger.validate()?;
        Ok(())
    }
}
