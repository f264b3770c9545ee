//! Configuration settings structures for paydock-rs
//!
//! This module defines all configuration structures that can be loaded from
//! TOML files and environment variables.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::config::error::ConfigError;
use crate::error::{SdkError, SdkResult};
use crate::external::{CredentialKind, Credentials};
use crate::logger::{ConsoleConfig, FileConfig, LogFormat, LoggerConfig};

/// Default base URL of the sandbox gateway
pub const SANDBOX_BASE_URL: &str = "https://api-sandbox.paydock.com";

/// Default base URL of the production gateway
pub const PRODUCTION_BASE_URL: &str = "https://api.paydock.com";

// ============================================================================
// Default value functions
// ============================================================================

fn default_app_name() -> String {
    "paydock-rs".to_string()
}

fn default_app_version() -> String {
    crate::pkg_version().to_string()
}

fn default_request_timeout() -> u64 {
    30
}

fn default_connect_timeout() -> u64 {
    10
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

fn default_log_path() -> String {
    "logs/paydock.log".to_string()
}

fn default_log_format() -> String {
    "json".to_string()
}

// ============================================================================
// Application Configuration
// ============================================================================

/// Application basic information configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationConfig {
    #[serde(default = "default_app_name")]
    pub name: String,

    #[serde(default = "default_app_version")]
    pub version: String,
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            name: default_app_name(),
            version: default_app_version(),
        }
    }
}

// ============================================================================
// Gateway Configuration
// ============================================================================

/// Which gateway deployment to talk to
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GatewayMode {
    #[default]
    Sandbox,
    Production,
}

impl GatewayMode {
    pub fn base_url(&self) -> &'static str {
        match self {
            GatewayMode::Sandbox => SANDBOX_BASE_URL,
            GatewayMode::Production => PRODUCTION_BASE_URL,
        }
    }
}

/// Payment gateway connection settings
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GatewayConfig {
    /// Selects the default base URL
    #[serde(default)]
    pub mode: GatewayMode,

    /// Overrides the mode's base URL, e.g. for a local stub gateway
    #[serde(default)]
    pub base_url: Option<String>,

    /// Whole-request timeout in seconds
    #[serde(default = "default_request_timeout")]
    pub request_timeout: u64,

    /// TCP connect timeout in seconds
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout: u64,

    #[serde(default)]
    pub user_agent: Option<String>,

    #[serde(default)]
    pub access_token: Option<String>,

    #[serde(default)]
    pub public_key: Option<String>,

    #[serde(default)]
    pub secret_key: Option<String>,
}

impl GatewayConfig {
    pub fn resolved_base_url(&self) -> String {
        match &self.base_url {
            Some(url) if !url.trim().is_empty() => url.trim().to_string(),
            _ => self.mode.base_url().to_string(),
        }
    }

    pub fn user_agent(&self) -> String {
        self.user_agent
            .clone()
            .filter(|ua| !ua.trim().is_empty())
            .unwrap_or_else(|| format!("paydock-rs/{}", crate::pkg_version()))
    }

    /// Configured credential of the given kind, if any.
    pub fn credentials(&self, kind: CredentialKind) -> SdkResult<Credentials> {
        let (key, value) = match kind {
            CredentialKind::AccessToken => ("gateway.access_token", &self.access_token),
            CredentialKind::SecretKey => ("gateway.secret_key", &self.secret_key),
            CredentialKind::PublicKey => ("gateway.public_key", &self.public_key),
        };

        match value.as_deref().map(str::trim) {
            Some(v) if !v.is_empty() => Ok(Credentials::new(kind, v)),
            _ => Err(SdkError::configuration(
                key,
                format!("no {} configured", kind),
            )),
        }
    }

    /// First configured credential among `preferred`, in order.
    pub fn first_credentials(&self, preferred: &[CredentialKind]) -> SdkResult<Credentials> {
        preferred
            .iter()
            .find_map(|kind| self.credentials(*kind).ok())
            .ok_or_else(|| {
                let names = preferred
                    .iter()
                    .map(|k| k.as_str())
                    .collect::<Vec<_>>()
                    .join(", ");
                SdkError::configuration("gateway", format!("none of {} configured", names))
            })
    }
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            mode: GatewayMode::default(),
            base_url: None,
            request_timeout: default_request_timeout(),
            connect_timeout: default_connect_timeout(),
            user_agent: None,
            access_token: None,
            public_key: None,
            secret_key: None,
        }
    }
}

impl std::fmt::Debug for GatewayConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        fn mask(value: &Option<String>) -> &'static str {
            if value.is_some() { "****" } else { "-" }
        }

        f.debug_struct("GatewayConfig")
            .field("mode", &self.mode)
            .field("base_url", &self.base_url)
            .field("request_timeout", &self.request_timeout)
            .field("connect_timeout", &self.connect_timeout)
            .field("user_agent", &self.user_agent)
            .field("access_token", &mask(&self.access_token))
            .field("public_key", &mask(&self.public_key))
            .field("secret_key", &mask(&self.secret_key))
            .finish()
    }
}

// ============================================================================
// Logger Settings
// ============================================================================

/// Console output settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsoleSettings {
    #[serde(default = "default_true")]
    pub enabled: bool,

    #[serde(default = "default_true")]
    pub colored: bool,
}

impl Default for ConsoleSettings {
    fn default() -> Self {
        Self {
            enabled: default_true(),
            colored: default_true(),
        }
    }
}

/// File output settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileSettings {
    #[serde(default)]
    pub enabled: bool,

    #[serde(default = "default_log_path")]
    pub path: String,

    #[serde(default = "default_true")]
    pub append: bool,

    /// Log format: "full", "compact", or "json"
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for FileSettings {
    fn default() -> Self {
        Self {
            enabled: false,
            path: default_log_path(),
            append: default_true(),
            format: default_log_format(),
        }
    }
}

/// Logger configuration as written in the config files
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggerSettings {
    /// Log level or `EnvFilter` directives
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default)]
    pub console: ConsoleSettings,

    #[serde(default)]
    pub file: FileSettings,
}

impl Default for LoggerSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            console: ConsoleSettings::default(),
            file: FileSettings::default(),
        }
    }
}

impl LoggerSettings {
    /// Convert to the runtime `LoggerConfig` used by the logger module.
    pub fn into_logger_config(self) -> Result<LoggerConfig, ConfigError> {
        let console = ConsoleConfig::new(self.console.enabled, self.console.colored);
        let file = self.file.into_file_config()?;

        LoggerConfig::new(console, file, self.level).map_err(|e| ConfigError::ValidationError {
            field: "logger".to_string(),
            message: e.to_string(),
        })
    }
}

impl FileSettings {
    pub fn into_file_config(self) -> Result<FileConfig, ConfigError> {
        let format = self
            .format
            .parse::<LogFormat>()
            .map_err(|e| ConfigError::ValidationError {
                field: "logger.file.format".to_string(),
                message: e.to_string(),
            })?;

        FileConfig::new(self.enabled, PathBuf::from(self.path), self.append, format).map_err(
            |e| ConfigError::ValidationError {
                field: "logger.file".to_string(),
                message: e.to_string(),
            },
        )
    }
}

// ============================================================================
// Main Settings Structure
// ============================================================================

/// Complete application settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Settings {
    #[serde(default)]
    pub application: ApplicationConfig,

    #[serde(default)]
    pub gateway: GatewayConfig,

    #[serde(default)]
    pub logger: LoggerSettings,
}
