//! Meraki Dashboard API client implementation

use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client as HttpClient, Url};
use serde::de::DeserializeOwned;

use super::DashboardApi;
use super::models::{Network, Organization, decode_records};
use crate::config::Config;
use crate::error::{ApiError, ConfigError, Result};

/// Header carrying the Dashboard API key
const API_KEY_HEADER: &str = "x-cisco-meraki-api-key";

/// Meraki Dashboard API client
pub struct MerakiClient {
    http: HttpClient,
    base_url: Url,
}

impl MerakiClient {
    /// Create a client for `base_url` authenticating with `api_key`.
    ///
    /// Every request carries the key plus JSON content negotiation headers and
    /// is bounded by `timeout`.
    pub fn new(api_key: &str, base_url: Url, timeout: Duration) -> Result<Self> {
        let mut key = HeaderValue::from_str(api_key)
            .map_err(|_| ConfigError::Invalid("API key contains invalid characters".to_string()))?;
        key.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(HeaderName::from_static(API_KEY_HEADER), key);

        let http = HttpClient::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(Self { http, base_url })
    }

    /// Create a client from resolved configuration
    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(&config.api_key, config.base_url.clone(), config.timeout)
    }

    /// Build an endpoint URL by appending path segments to the base URL.
    ///
    /// Segments are percent-encoded, so IDs can never escape their position.
    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ConfigError::Invalid(format!("base URL {} cannot be a base", self.base_url)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// GET a collection endpoint and decode it record by record.
    ///
    /// The status is checked before the body is parsed.
    async fn get_collection<T: DeserializeOwned>(
        &self,
        resource: &'static str,
        url: Url,
    ) -> Result<Vec<T>> {
        debug!("GET {}", url);

        let response = self.http.get(url).send().await.map_err(ApiError::from)?;
        let status = response.status();
        let body = response.text().await.map_err(ApiError::from)?;

        if !status.is_success() {
            debug!("{} request failed with {}", resource, status);
            return Err(ApiError::from_status(status, body).into());
        }

        let records = decode_records(resource, &body)?;
        debug!("Fetched {} {} records", records.len(), resource);
        Ok(records)
    }
}

#[async_trait]
impl DashboardApi for MerakiClient {
    async fn list_orgs(&self) -> Result<Vec<Organization>> {
        let url = self.endpoint(&["organizations"])?;
        self.get_collection("organization", url).await
    }

    async fn list_networks(&self, org_id: &str) -> Result<Vec<Network>> {
        let url = self.endpoint(&["organizations", org_id, "networks"])?;
        self.get_collection("network", url).await
    }
}
