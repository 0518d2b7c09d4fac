//! Logging setup and configuration.

use tracing_appender::rolling::RollingFileAppender;
use tracing_appender::rolling::Rotation;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::config::Config;
use crate::error::AppError;

/// Sets up console logging, plus daily rolling files when `logs_path` is set.
///
/// Records emitted through the `log` facade are forwarded to tracing.
pub fn setup_logging(config: &Config) -> Result<(), AppError> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_filter))
        .map_err(|e| AppError::ConfigurationError {
            msg: format!("Invalid log filter '{}': {}", config.log_filter, e),
        })?;

    let file_layer = match &config.logs_path {
        Some(logs_path) => {
            let file_appender = RollingFileAppender::builder()
                .rotation(Rotation::DAILY)
                .filename_prefix("event-registry")
                .filename_suffix("log")
                .max_log_files(config.log_max_files)
                .build(logs_path)
                .map_err(|e| AppError::ConfigurationError {
                    msg: format!(
                        "Failed to initialize rolling file appender at '{}': {}",
                        logs_path.to_string_lossy(),
                        e
                    ),
                })?;

            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

            // Leak the guard to prevent it from being dropped
            std::mem::forget(guard);

            Some(fmt::layer().with_writer(non_blocking).with_ansi(false))
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_writer(std::io::stdout).with_ansi(true))
        .with(file_layer)
        .try_init()
        .map_err(|e| AppError::ConfigurationError {
            msg: format!("Failed to install global subscriber: {}", e),
        })?;

    Ok(())
}
