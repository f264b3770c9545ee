//! Logging setup on top of `tracing-subscriber`.
//!
//! - Console output with color control
//! - File output in full, compact or JSON format
//! - A reloadable level filter so the level can change at runtime

pub mod config;
pub mod error;

pub use config::*;
pub use error::LoggerError;

use std::fs::{File, OpenOptions};
use std::io::IsTerminal;
use std::sync::Mutex;

use tracing::Subscriber;
use tracing_subscriber::{
    EnvFilter, Layer, Registry, fmt, layer::SubscriberExt, registry::LookupSpan, reload,
    util::SubscriberInitExt,
};

type BoxedLayer<S> = Box<dyn Layer<S> + Send + Sync + 'static>;

/// Handle to the installed level filter.
#[derive(Clone)]
pub struct LogLevelHandle {
    inner: reload::Handle<EnvFilter, Registry>,
}

impl LogLevelHandle {
    /// Swap the active filter, e.g. `"debug"` or `"paydock_rs=trace,info"`.
    pub fn set_level(&self, level: &str) -> Result<(), LoggerError> {
        let filter = build_filter(level)?;
        self.inner
            .reload(filter)
            .map_err(|e| LoggerError::Reload {
                message: e.to_string(),
            })?;
        tracing::info!(level, "Log level changed");
        Ok(())
    }

    pub fn current(&self) -> Option<String> {
        self.inner.with_current(|f| f.to_string()).ok()
    }
}

/// Initialize the global subscriber with the given configuration
pub fn init_logger(config: LoggerConfig) -> Result<LogLevelHandle, LoggerError> {
    config.validate()?;

    let (filter, handle) = reload::Layer::new(build_filter(&config.level)?);

    // File layer goes first so console ANSI settings never reach the file.
    let file_layer = if config.file.enabled {
        Some(file_layer(&config.file)?)
    } else {
        None
    };
    let console_layer = config
        .console
        .enabled
        .then(|| console_layer(&config.console));

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .with(console_layer)
        .try_init()
        .map_err(|e| LoggerError::Init {
            message: e.to_string(),
        })?;

    Ok(LogLevelHandle { inner: handle })
}

pub(crate) fn build_filter(level: &str) -> Result<EnvFilter, LoggerError> {
    EnvFilter::try_new(level)
        .map_err(|e| LoggerError::config(format!("Invalid log filter '{}': {}", level, e)))
}

fn console_layer<S>(config: &ConsoleConfig) -> BoxedLayer<S>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    let use_ansi = config.colored && std::io::stdout().is_terminal();
    fmt::layer()
        .with_ansi(use_ansi)
        .with_target(true)
        .with_level(true)
        .boxed()
}

fn file_layer<S>(config: &FileConfig) -> Result<BoxedLayer<S>, LoggerError>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    let writer = Mutex::new(open_log_file(config)?);
    let layer = fmt::layer().with_ansi(false).with_writer(writer);

    Ok(match config.format {
        LogFormat::Full => layer.with_target(true).boxed(),
        LogFormat::Compact => layer.with_target(true).compact().boxed(),
        LogFormat::Json => layer.json().boxed(),
    })
}

fn open_log_file(config: &FileConfig) -> Result<File, LoggerError> {
    if let Some(parent) = config.path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }

    let file = OpenOptions::new()
        .create(true)
        .write(true)
        .append(config.append)
        .truncate(!config.append)
        .open(&config.path)?;
    Ok(file)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_build_filter_accepts_directives() {
        assert!(build_filter("info").is_ok());
        assert!(build_filter("paydock_rs=debug,reqwest=warn").is_ok());
    }

    #[test]
    fn test_build_filter_rejects_garbage() {
        assert!(build_filter("paydock_rs=loud").is_err());
    }

    #[test]
    fn test_open_log_file_creates_parent_dirs() {
        let dir = TempDir::new().unwrap();
        let config = FileConfig {
            enabled: true,
            path: dir.path().join("nested").join("sdk.log"),
            append: true,
            format: LogFormat::Json,
        };

        open_log_file(&config).unwrap();

        assert!(config.path.exists());
    }

    #[test]
    fn test_open_log_file_truncates_without_append() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("sdk.log");
        std::fs::write(&path, "old line\n").unwrap();
        let config = FileConfig {
            enabled: true,
            path: path.clone(),
            append: false,
            format: LogFormat::Full,
        };

        open_log_file(&config).unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "");
    }
}
