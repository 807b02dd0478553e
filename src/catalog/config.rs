//! Catalog client configuration.
//!
//! The API key must be supplied explicitly; there is no built-in fallback key.

use std::fmt;
use std::time::Duration;

use super::CatalogError;

/// Environment variable holding the API key (required).
pub const API_KEY_VAR: &str = "NASA_API_KEY";
/// Environment variable overriding the API base URL.
pub const BASE_URL_VAR: &str = "NEO_API_BASE_URL";
/// Environment variable overriding the request timeout, in seconds.
pub const TIMEOUT_VAR: &str = "NEO_API_TIMEOUT_SECS";

/// Public NEO API root.
pub const DEFAULT_BASE_URL: &str = "https://api.nasa.gov/neo/rest/v1";
/// Request timeout when none is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Connection settings for the catalog API.
#[derive(Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    pub api_key: String,
    pub base_url: String,
    pub timeout: Duration,
}

impl fmt::Debug for CatalogConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CatalogConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl CatalogConfig {
    /// Build a config with the default endpoint and timeout.
    ///
    /// # Errors
    /// `MissingApiKey` if the key is empty or whitespace.
    pub fn new(api_key: impl Into<String>) -> Result<Self, CatalogError> {
        let api_key = api_key.into().trim().to_string();
        if api_key.is_empty() {
            return Err(CatalogError::MissingApiKey);
        }
        Ok(Self {
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        })
    }

    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, CatalogError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read configuration through an arbitrary variable lookup.
    ///
    /// Split out from `from_env` so tests need not mutate the process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, CatalogError> {
        let mut config = Self::new(lookup(API_KEY_VAR).unwrap_or_default())?;

        if let Some(url) = lookup(BASE_URL_VAR) {
            let url = url.trim().trim_end_matches('/');
            if url.is_empty() {
                return Err(CatalogError::InvalidConfig(format!("{BASE_URL_VAR} is empty")));
            }
            config.base_url = url.to_string();
        }

        if let Some(raw) = lookup(TIMEOUT_VAR) {
            let secs: u64 = raw.trim().parse().map_err(|_| {
                CatalogError::InvalidConfig(format!(
                    "{TIMEOUT_VAR} must be a whole number of seconds, got {raw:?}"
                ))
            })?;
            if secs == 0 {
                return Err(CatalogError::InvalidConfig(format!(
                    "{TIMEOUT_VAR} must be at least 1 second"
                )));
            }
            config.timeout = Duration::from_secs(secs);
        }

        Ok(config)
    }

    /// URL of the browse endpoint (without the key).
    pub fn browse_url(&self) -> String {
        format!("{}/neo/browse", self.base_url)
    }

    /// URL of the single-object lookup endpoint (without the key).
    pub fn lookup_url(&self, id: &str) -> String {
        format!("{}/neo/{}", self.base_url, id)
    }
}
