use std::path::{Path, PathBuf};

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::config::env_provider::EnvironmentProvider;

#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    #[error("Failed to initialize logging: {0}")]
    InitializationError(String),

    #[error("Invalid log level: {0}")]
    InvalidLogLevel(String),

    #[error("File system error: {0}")]
    FileSystemError(#[from] std::io::Error),
}

/// Console log level plus an optional daily-rotated log file
#[derive(Debug, Clone)]
struct LoggingConfig {
    log_level: String,
    app_log_file: Option<PathBuf>,
}

impl LoggingConfig {
    fn from_env(env: &dyn EnvironmentProvider) -> Self {
        Self {
            log_level: env.get_var("LOG_LEVEL").unwrap_or_else(|| "INFO".to_string()),
            app_log_file: env.get_var("APP_LOG_FILE").map(PathBuf::from),
        }
    }
}

/// Initialize the tracing subscriber
///
/// Console output always; file output only when APP_LOG_FILE is set. Must be
/// called once, before any handler runs.
pub fn init_logging(env: &dyn EnvironmentProvider) -> Result<(), LoggingError> {
    let config = LoggingConfig::from_env(env);

    let env_filter = EnvFilter::try_new(&config.log_level)
        .map_err(|e| LoggingError::InvalidLogLevel(format!("{}: {}", config.log_level, e)))?;

    let console_layer = fmt::layer()
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .with_filter(env_filter.clone());

    let subscriber = tracing_subscriber::registry().with(console_layer);

    match &config.app_log_file {
        Some(path) => {
            let file_layer = fmt::layer()
                .with_writer(file_appender(path)?)
                .with_ansi(false)
                .with_target(true)
                .with_filter(env_filter);

            subscriber
                .with(file_layer)
                .try_init()
                .map_err(|e| LoggingError::InitializationError(e.to_string()))?;
        }
        None => {
            subscriber
                .try_init()
                .map_err(|e| LoggingError::InitializationError(e.to_string()))?;
        }
    }

    Ok(())
}

fn file_appender(path: &Path) -> Result<tracing_appender::rolling::RollingFileAppender, LoggingError> {
    let directory = path.parent().unwrap_or_else(|| Path::new("."));
    std::fs::create_dir_all(directory)?;

    let file_name = path
        .file_name()
        .ok_or_else(|| LoggingError::InitializationError("Invalid log file path".to_string()))?;

    Ok(tracing_appender::rolling::daily(directory, file_name))
}
