//! Blocking HTTP client for the NEO catalog API.
//!
//! Calls block the current thread; the catalog plugin runs them on the IO task
//! pool so the frame loop never waits on the network.

use reqwest::blocking::Client;

use super::config::CatalogConfig;
use super::model::{CatalogPage, NeoObject};
use super::CatalogError;

/// Thin wrapper pairing a configured HTTP client with its settings.
pub struct CatalogClient {
    config: CatalogConfig,
    http: Client,
}

impl CatalogClient {
    /// Build a client with the configured timeout.
    pub fn new(config: CatalogConfig) -> Result<Self, CatalogError> {
        let http = Client::builder().timeout(config.timeout).build()?;
        Ok(Self { config, http })
    }

    /// Fetch the first page of the browse endpoint.
    pub fn browse(&self) -> Result<CatalogPage, CatalogError> {
        let body = self.get_text(&self.config.browse_url())?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Fetch a single object by catalog id.
    pub fn lookup(&self, id: &str) -> Result<NeoObject, CatalogError> {
        let id = validate_id(id)?;
        let body = self.get_text(&self.config.lookup_url(id))?;
        Ok(serde_json::from_str(&body)?)
    }

    fn get_text(&self, url: &str) -> Result<String, CatalogError> {
        // The key travels in the query string; keep it out of error messages.
        self.send(url)
            .map_err(|e| CatalogError::Http(e.without_url()))
    }

    fn send(&self, url: &str) -> reqwest::Result<String> {
        self.http
            .get(url)
            .query(&[("api_key", self.config.api_key.as_str())])
            .send()?
            .error_for_status()?
            .text()
    }
}

/// Trim an id and reject anything that would not form a single path segment.
pub fn validate_id(id: &str) -> Result<&str, CatalogError> {
    let id = id.trim();
    if id.is_empty() {
        return Err(CatalogError::EmptyId);
    }
    if !id.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(CatalogError::InvalidId(id.to_string()));
    }
    Ok(id)
}
