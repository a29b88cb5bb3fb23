use serde::{Deserialize, Serialize};

use crate::utils::DEFAULT_NOTIFICATION_TIMEOUT_MS;

/// Application settings, fixed at compile time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Base URL prepended to every `/api/...` path. Empty means same origin.
    pub backend_url: String,
    pub notification_timeout_ms: u32,
    pub enable_logging: bool,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend_url: String::new(),
            notification_timeout_ms: DEFAULT_NOTIFICATION_TIMEOUT_MS,
            enable_logging: true,
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from compile-time environment variables
    /// (forwarded from `.env` by `build.rs`).
    pub fn from_env() -> Self {
        Self::from_values(
            option_env!("BACKEND_URL"),
            option_env!("NOTIFICATION_TIMEOUT_MS"),
            option_env!("ENABLE_LOGGING"),
            option_env!("LOG_LEVEL"),
        )
    }

    fn from_values(
        backend_url: Option<&str>,
        notification_timeout_ms: Option<&str>,
        enable_logging: Option<&str>,
        log_level: Option<&str>,
    ) -> Self {
        let defaults = Self::default();
        Self {
            backend_url: backend_url
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(defaults.backend_url),
            notification_timeout_ms: notification_timeout_ms
                .and_then(|ms| ms.parse().ok())
                .unwrap_or(defaults.notification_timeout_ms),
            enable_logging: enable_logging
                .and_then(|flag| flag.parse().ok())
                .unwrap_or(defaults.enable_logging),
            log_level: log_level
                .map(|level| level.to_string())
                .unwrap_or(defaults.log_level),
        }
    }

    /// Full URL for an API path such as `/api/blogs`.
    pub fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.backend_url, path)
    }

    pub fn is_logging_enabled(&self) -> bool {
        self.enable_logging
    }

    /// Falls back to `Info` on unknown level names.
    pub fn log_level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Info)
    }
}

lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}
