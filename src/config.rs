use std::path::PathBuf;

use crate::error::AppError;

#[derive(Clone, Debug)]
pub struct Config {
    /// Fallback filter used when `RUST_LOG` is unset.
    pub log_filter: String,
    /// Directory for rolling log files. Console only when unset.
    pub logs_path: Option<PathBuf>,
    pub log_max_files: usize,
}

impl Config {
    pub fn new() -> Self {
        Self {
            log_filter: "event_registry=info".to_string(),
            logs_path: None,
            log_max_files: 7,
        }
    }

    /// Loads overrides from the process environment.
    pub fn load(&mut self) -> Result<(), AppError> {
        self.load_from(|key| std::env::var(key).ok())
    }

    pub fn load_from<F>(&mut self, lookup: F) -> Result<(), AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(filter) = lookup("LOG_FILTER") {
            self.log_filter = filter;
        }
        if let Some(path) = lookup("LOGS_PATH").filter(|p| !p.is_empty()) {
            self.logs_path = Some(PathBuf::from(path));
        }
        if let Some(value) = lookup("LOG_MAX_FILES") {
            self.log_max_files = value.parse().map_err(|_| AppError::InvalidConfig {
                key: "LOG_MAX_FILES".to_string(),
                value,
            })?;
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
