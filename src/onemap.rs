//! OneMap HTTP adapter for postal-code resolution.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::traits::AddressResolver;

#[derive(Debug, Clone)]
pub struct OneMapConfig {
    pub base_url: String,
    pub email: Option<String>,
    pub password: Option<String>,
    pub timeout_secs: u64,
}

impl Default for OneMapConfig {
    fn default() -> Self {
        Self {
            base_url: "https://www.onemap.gov.sg".to_string(),
            email: None,
            password: None,
            timeout_secs: 10,
        }
    }
}

impl OneMapConfig {
    /// Reads `ONEMAP_EMAIL`, `ONEMAP_PASSWORD` and optionally `ONEMAP_BASE_URL`.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            base_url: std::env::var("ONEMAP_BASE_URL").unwrap_or(defaults.base_url),
            email: std::env::var("ONEMAP_EMAIL").ok(),
            password: std::env::var("ONEMAP_PASSWORD").ok(),
            timeout_secs: defaults.timeout_secs,
        }
    }
}

#[derive(Debug, Error)]
pub enum OneMapError {
    #[error("OneMap credentials are not configured")]
    MissingCredentials,
    #[error("OneMap request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("OneMap returned an empty access token")]
    EmptyToken,
}

/// Authenticated OneMap client.
#[derive(Debug, Clone)]
pub struct OneMapClient {
    config: OneMapConfig,
    client: reqwest::blocking::Client,
    token: String,
}

impl OneMapClient {
    /// Builds the HTTP client and acquires an access token.
    pub fn connect(config: OneMapConfig) -> Result<Self, OneMapError> {
        let (Some(email), Some(password)) = (config.email.as_deref(), config.password.as_deref()) else {
            return Err(OneMapError::MissingCredentials);
        };

        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        let url = format!("{}/api/auth/post/getToken", config.base_url);
        let response = client
            .post(url)
            .json(&TokenRequest { email, password })
            .send()
            .and_then(|resp| resp.error_for_status())
            .and_then(|resp| resp.json::<TokenResponse>())?;

        if response.access_token.is_empty() {
            return Err(OneMapError::EmptyToken);
        }

        tracing::info!(expires = ?response.expiry_timestamp, "acquired OneMap access token");

        Ok(Self {
            config,
            client,
            token: response.access_token,
        })
    }

    fn search(&self, postal_code: &str) -> Result<SearchResponse, reqwest::Error> {
        let url = format!("{}/api/common/elastic/search", self.config.base_url);
        self.client
            .get(url)
            .bearer_auth(&self.token)
            .query(&[
                ("searchVal", postal_code),
                ("returnGeom", "N"),
                ("getAddrDetails", "Y"),
                ("pageNum", "1"),
            ])
            .send()
            .and_then(|resp| resp.error_for_status())
            .and_then(|resp| resp.json::<SearchResponse>())
    }
}

impl AddressResolver for OneMapClient {
    fn resolve(&self, postal_code: &str) -> Option<String> {
        match self.search(postal_code) {
            Ok(body) => body.best_address(postal_code),
            Err(err) => {
                tracing::warn!(postal_code, error = %err, "OneMap search failed");
                None
            }
        }
    }
}

#[derive(Debug, Serialize)]
struct TokenRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default)]
    expiry_timestamp: Option<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    results: Vec<SearchResult>,
}

#[derive(Debug, Deserialize)]
struct SearchResult {
    #[serde(rename = "ADDRESS", default)]
    address: String,
    #[serde(rename = "POSTAL", default)]
    postal: String,
}

impl SearchResponse {
    /// Address of the result matching the postal code exactly, else the first.
    fn best_address(self, postal_code: &str) -> Option<String> {
        let mut results = self.results;
        let position = results
            .iter()
            .position(|result| result.postal == postal_code)
            .unwrap_or(0);

        if position >= results.len() {
            return None;
        }

        Some(results.swap_remove(position).address).filter(|address| !address.is_empty())
    }
}
