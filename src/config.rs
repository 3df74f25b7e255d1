/// Application-level constants
pub const APP_NAME: &str = "Clinic Console";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Environment variable selecting the REST API base URL.
pub const API_BASE_URL_ENV: &str = "CLINIC_API_BASE_URL";

/// Local development backend.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080";

/// Every request is capped at this many seconds.
pub const REQUEST_TIMEOUT_SECS: u64 = 10;

/// Tracing filter used when `RUST_LOG` is unset.
pub fn default_log_filter() -> &'static str {
    "clinic_console=info,clinic_console_lib=info"
}

/// Transport configuration, built once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout_secs: u64,
}

impl ApiConfig {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout_secs: REQUEST_TIMEOUT_SECS,
        }
    }

    /// Read the base URL from `CLINIC_API_BASE_URL`, falling back to the
    /// local development address when unset or blank.
    pub fn from_env() -> Self {
        Self::from_value(std::env::var(API_BASE_URL_ENV).ok())
    }

    fn from_value(value: Option<String>) -> Self {
        match value {
            Some(url) if !url.trim().is_empty() => Self::new(url.trim()),
            _ => Self::new(DEFAULT_API_BASE_URL),
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE_URL)
    }
}
