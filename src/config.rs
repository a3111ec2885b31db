//! Build-time Configuration
//!
//! Values baked in at compile time from `LOOKUP_*` environment variables.

use log::LevelFilter;

const DEFAULT_API_BASE: &str = "/api";
const DEFAULT_SUCCESS_DISMISS_MS: u32 = 1500;
const DEFAULT_ERROR_DISMISS_MS: u32 = 4000;

#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    /// Absolute URL, or a path resolved against the page origin
    pub api_base_url: String,
    /// Delay before a success status clears and its dialog closes
    pub success_dismiss_ms: u32,
    /// Delay before an error status clears; the dialog stays open
    pub error_dismiss_ms: u32,
    pub log_level: LevelFilter,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE.to_string(),
            success_dismiss_ms: DEFAULT_SUCCESS_DISMISS_MS,
            error_dismiss_ms: DEFAULT_ERROR_DISMISS_MS,
            log_level: LevelFilter::Info,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_values(option_env!("LOOKUP_API_URL"), option_env!("LOOKUP_LOG_LEVEL"))
    }

    fn from_values(api_url: Option<&str>, log_level: Option<&str>) -> Self {
        let mut config = Self::default();
        if let Some(url) = api_url.filter(|u| !u.trim().is_empty()) {
            config.api_base_url = url.trim().to_string();
        }
        if let Some(level) = log_level.and_then(|l| l.parse().ok()) {
            config.log_level = level;
        }
        config
    }

    /// API base as an absolute URL
    pub fn api_url(&self, origin: &str) -> String {
        if self.api_base_url.starts_with("http://") || self.api_base_url.starts_with("https://") {
            self.api_base_url.clone()
        } else {
            format!(
                "{}/{}",
                origin.trim_end_matches('/'),
                self.api_base_url.trim_start_matches('/')
            )
        }
    }
}
