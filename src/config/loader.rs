//! Configuration loader for paydock-rs
//!
//! `ConfigLoader` loads configuration from multiple sources with proper
//! precedence.

use std::path::{Path, PathBuf};

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, Environment, File, FileFormat};

use crate::config::environment::Environment as AppEnvironment;
use crate::config::error::ConfigError;
use crate::config::settings::Settings;

const CONFIG_DIR_ENV: &str = "PAYDOCK_CONFIG_DIR";

const CONFIG_FILE_ENV: &str = "PAYDOCK_CONFIG_FILE";

const DEFAULT_CONFIG_DIR: &str = "config";

/// Environment variable prefix for configuration overrides
const ENV_PREFIX: &str = "PAYDOCK";

/// Separator for nested configuration keys in environment variables
const ENV_SEPARATOR: &str = "__";

/// Loads [`Settings`] from files and the environment.
///
/// Sources, lowest priority first:
/// 1. `default.toml` (required)
/// 2. `{environment}.toml` (optional)
/// 3. `local.toml` (optional)
/// 4. `PAYDOCK_*` environment variables
///
/// When a single config file is selected, steps 1 to 3 are replaced by that
/// file; environment variables still apply on top.
#[derive(Debug)]
pub struct ConfigLoader {
    config_dir: PathBuf,
    config_file: Option<PathBuf>,
    environment: AppEnvironment,
}

impl ConfigLoader {
    /// Create a loader from `PAYDOCK_CONFIG_DIR`, `PAYDOCK_CONFIG_FILE`
    /// and `PAYDOCK_APP_ENV`.
    ///
    /// # Errors
    ///
    /// Returns an error if both `PAYDOCK_CONFIG_DIR` and `PAYDOCK_CONFIG_FILE`
    /// are set, as they are mutually exclusive.
    pub fn new() -> Result<Self, ConfigError> {
        let dir_from_env = std::env::var(CONFIG_DIR_ENV).ok();
        let config_file = std::env::var(CONFIG_FILE_ENV).ok().map(PathBuf::from);

        if config_file.is_some() && dir_from_env.is_some() {
            return Err(ConfigError::mutual_exclusivity(
                "PAYDOCK_CONFIG_DIR and PAYDOCK_CONFIG_FILE cannot both be set. \
                 Use PAYDOCK_CONFIG_DIR for layered configuration or \
                 PAYDOCK_CONFIG_FILE for a single configuration file.",
            ));
        }

        Ok(Self {
            config_dir: dir_from_env
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_DIR)),
            config_file,
            environment: AppEnvironment::from_env(),
        })
    }

    /// Load exactly this file instead of the layered directory.
    pub fn with_config_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_file = Some(path.into());
        self
    }

    /// Override the environment picked up from `PAYDOCK_APP_ENV`.
    pub fn with_environment(mut self, environment: AppEnvironment) -> Self {
        self.environment = environment;
        self
    }

    pub fn environment(&self) -> AppEnvironment {
        self.environment
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    /// Load and validate configuration from all sources.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `default.toml` (or the selected file) is not found
    /// - Configuration parsing fails
    /// - Configuration validation fails
    pub fn load(&self) -> Result<Settings, ConfigError> {
        let config = self.build_config()?;
        let settings: Settings = config.try_deserialize().map_err(|e| {
            ConfigError::ParseError(format!("Failed to deserialize configuration: {}", e))
        })?;

        settings.validate()?;

        tracing::debug!(
            environment = %self.environment,
            source = %self.describe_source(),
            "Configuration loaded"
        );
        Ok(settings)
    }

    fn describe_source(&self) -> String {
        match &self.config_file {
            Some(file) => file.display().to_string(),
            None => self.config_dir.display().to_string(),
        }
    }

    fn build_config(&self) -> Result<Config, ConfigError> {
        let builder = Config::builder();

        let builder = match &self.config_file {
            Some(config_file) => Self::add_file_source(builder, config_file, true)?,
            None => self.build_layered_config(builder)?,
        };

        // PAYDOCK_GATEWAY__SECRET_KEY -> gateway.secret_key
        Self::add_env_source(builder)
            .build()
            .map_err(ConfigError::from)
    }

    fn build_layered_config(
        &self,
        builder: ConfigBuilder<DefaultState>,
    ) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        let builder = Self::add_file_source(builder, &self.config_dir.join("default.toml"), true)?;

        let env_path = self
            .config_dir
            .join(format!("{}.toml", self.environment.as_str()));
        let builder = Self::add_file_source(builder, &env_path, false)?;

        Self::add_file_source(builder, &self.config_dir.join("local.toml"), false)
    }

    fn add_file_source(
        builder: ConfigBuilder<DefaultState>,
        path: &Path,
        required: bool,
    ) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        if required && !path.is_file() {
            return Err(ConfigError::file_not_found(format!(
                "Required configuration file not found: {}",
                path.display()
            )));
        }

        let name = path.to_str().ok_or_else(|| {
            ConfigError::ParseError(format!("Non UTF-8 configuration path: {}", path.display()))
        })?;
        Ok(builder.add_source(File::new(name, FileFormat::Toml).required(required)))
    }

    fn add_env_source(builder: ConfigBuilder<DefaultState>) -> ConfigBuilder<DefaultState> {
        builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator(ENV_SEPARATOR)
                .ignore_empty(true)
                .try_parsing(true),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::settings::{GatewayMode, PRODUCTION_BASE_URL};
    use std::fs;
    use std::sync::Mutex;
    use tempfile::TempDir;

    // Tests touching process env vars must not interleave.
    static TEST_MUTEX: Mutex<()> = Mutex::new(());

    const DEFAULT_TOML: &str = r#"
[application]
name = "paydock-test"
version = "1.0.0"

[gateway]
mode = "sandbox"
request_timeout = 30
connect_timeout = 10

[logger]
level = "info"

[logger.console]
enabled = true
colored = false

[logger.file]
enabled = false
"#;

    fn setup_config_dir(files: &[(&str, &str)]) -> TempDir {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        for (name, content) in files {
            fs::write(temp_dir.path().join(name), content).expect("Failed to write config file");
        }
        temp_dir
    }

    /// Sets env vars for one test and restores the originals on drop.
    struct EnvGuard {
        vars_to_restore: Vec<(String, Option<String>)>,
    }

    impl EnvGuard {
        fn new() -> Self {
            let mut guard = Self {
                vars_to_restore: Vec::new(),
            };
            for key in [
                CONFIG_DIR_ENV,
                CONFIG_FILE_ENV,
                AppEnvironment::ENV_VAR,
                "PAYDOCK_GATEWAY__SECRET_KEY",
                "PAYDOCK_GATEWAY__REQUEST_TIMEOUT",
            ] {
                guard.remove(key);
            }
            guard
        }

        fn set(&mut self, key: &str, value: &str) {
            self.vars_to_restore
                .push((key.to_string(), std::env::var(key).ok()));
            unsafe {
                std::env::set_var(key, value);
            }
        }

        fn remove(&mut self, key: &str) {
            self.vars_to_restore
                .push((key.to_string(), std::env::var(key).ok()));
            unsafe {
                std::env::remove_var(key);
            }
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            for (key, original_value) in self.vars_to_restore.iter().rev() {
                unsafe {
                    match original_value {
                        Some(value) => std::env::set_var(key, value),
                        None => std::env::remove_var(key),
                    }
                }
            }
        }
    }

    #[test]
    fn test_config_loader_defaults() {
        let _lock = TEST_MUTEX.lock().unwrap();
        let _env = EnvGuard::new();

        let loader = ConfigLoader::new().expect("Should create loader");
        assert_eq!(loader.config_dir(), Path::new("config"));
        assert!(loader.config_file.is_none());
        assert_eq!(loader.environment(), AppEnvironment::Development);
    }

    #[test]
    fn test_config_loader_mutual_exclusivity_error() {
        let _lock = TEST_MUTEX.lock().unwrap();
        let mut env = EnvGuard::new();
        env.set(CONFIG_DIR_ENV, "/custom/config");
        env.set(CONFIG_FILE_ENV, "/path/to/config.toml");

        match ConfigLoader::new() {
            Err(ConfigError::MutualExclusivityError(msg)) => {
                assert!(msg.contains("PAYDOCK_CONFIG_DIR"));
                assert!(msg.contains("PAYDOCK_CONFIG_FILE"));
            }
            other => panic!("Expected MutualExclusivityError, got {:?}", other),
        }
    }

    #[test]
    fn test_load_missing_default_toml() {
        let _lock = TEST_MUTEX.lock().unwrap();
        let mut env = EnvGuard::new();
        let temp_dir = setup_config_dir(&[]);
        env.set(CONFIG_DIR_ENV, temp_dir.path().to_str().unwrap());

        let result = ConfigLoader::new().unwrap().load();

        match result {
            Err(ConfigError::FileNotFound(msg)) => assert!(msg.contains("default.toml")),
            other => panic!("Expected FileNotFound error, got {:?}", other),
        }
    }

    #[test]
    fn test_load_default_toml_only() {
        let _lock = TEST_MUTEX.lock().unwrap();
        let mut env = EnvGuard::new();
        let temp_dir = setup_config_dir(&[("default.toml", DEFAULT_TOML)]);
        env.set(CONFIG_DIR_ENV, temp_dir.path().to_str().unwrap());

        let settings = ConfigLoader::new().unwrap().load().expect("Should load settings");

        assert_eq!(settings.application.name, "paydock-test");
        assert_eq!(settings.gateway.mode, GatewayMode::Sandbox);
        assert_eq!(settings.gateway.request_timeout, 30);
        assert!(settings.gateway.secret_key.is_none());
    }

    #[test]
    fn test_environment_and_local_layers() {
        let _lock = TEST_MUTEX.lock().unwrap();
        let mut env = EnvGuard::new();
        let temp_dir = setup_config_dir(&[
            ("default.toml", DEFAULT_TOML),
            ("production.toml", "[gateway]\nmode = \"production\"\nrequest_timeout = 60\n"),
            ("local.toml", "[gateway]\nrequest_timeout = 45\n"),
        ]);
        env.set(CONFIG_DIR_ENV, temp_dir.path().to_str().unwrap());
        env.set(AppEnvironment::ENV_VAR, "production");

        let settings = ConfigLoader::new().unwrap().load().unwrap();

        assert_eq!(settings.gateway.mode, GatewayMode::Production);
        assert_eq!(settings.gateway.resolved_base_url(), PRODUCTION_BASE_URL);
        // local.toml wins over production.toml
        assert_eq!(settings.gateway.request_timeout, 45);
        assert_eq!(settings.gateway.connect_timeout, 10);
    }

    #[test]
    fn test_env_vars_override_files() {
        let _lock = TEST_MUTEX.lock().unwrap();
        let mut env = EnvGuard::new();
        let temp_dir = setup_config_dir(&[("default.toml", DEFAULT_TOML)]);
        env.set(CONFIG_DIR_ENV, temp_dir.path().to_str().unwrap());
        env.set("PAYDOCK_GATEWAY__SECRET_KEY", "sk_from_env");
        env.set("PAYDOCK_GATEWAY__REQUEST_TIMEOUT", "90");

        let settings = ConfigLoader::new().unwrap().load().unwrap();

        assert_eq!(settings.gateway.secret_key.as_deref(), Some("sk_from_env"));
        assert_eq!(settings.gateway.request_timeout, 90);
    }

    #[test]
    fn test_single_file_mode() {
        let _lock = TEST_MUTEX.lock().unwrap();
        let _env = EnvGuard::new();
        let temp_dir = setup_config_dir(&[(
            "stub.toml",
            "[gateway]\nbase_url = \"http://127.0.0.1:4010\"\n",
        )]);

        let settings = ConfigLoader::new()
            .unwrap()
            .with_config_file(temp_dir.path().join("stub.toml"))
            .load()
            .unwrap();

        assert_eq!(settings.gateway.resolved_base_url(), "http://127.0.0.1:4010");
    }

    #[test]
    fn test_invalid_values_fail_validation() {
        let _lock = TEST_MUTEX.lock().unwrap();
        let _env = EnvGuard::new();
        let temp_dir = setup_config_dir(&[("bad.toml", "[gateway]\nbase_url = \"ftp://nope\"\n")]);

        let result = ConfigLoader::new()
            .unwrap()
            .with_config_file(temp_dir.path().join("bad.toml"))
            .load();

        assert!(matches!(
            result,
            Err(ConfigError::ValidationError { ref field, .. }) if field == "gateway.base_url"
        ));
    }

    #[test]
    fn test_environment_override_selects_layer() {
        let _lock = TEST_MUTEX.lock().unwrap();
        let mut env = EnvGuard::new();
        let temp_dir = setup_config_dir(&[
            ("default.toml", DEFAULT_TOML),
            ("staging.toml", "[gateway]\nconnect_timeout = 3\n"),
        ]);
        env.set(CONFIG_DIR_ENV, temp_dir.path().to_str().unwrap());

        let settings = ConfigLoader::new()
            .unwrap()
            .with_environment(AppEnvironment::Staging)
            .load()
            .unwrap();

        assert_eq!(settings.gateway.connect_timeout, 3);
    }
}
