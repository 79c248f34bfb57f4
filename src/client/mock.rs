//! Mock Dashboard API client for testing
//!
//! Provides a mock implementation of [`DashboardApi`] for unit testing
//! without making real API calls.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use super::api::DashboardApi;
use super::models::{Network, Organization};
use crate::error::{ApiError, Result};

/// Mock API client for testing.
///
/// # Example
/// ```ignore
/// let mock = MockDashboardClient::new()
///     .with_orgs(vec![org("1", "HQ")])
///     .with_networks("1", vec![network("10", "Net-ABC-1")]);
/// ```
#[derive(Default)]
pub struct MockDashboardClient {
    /// Organizations to return from list_orgs
    orgs: Arc<Mutex<Vec<Organization>>>,
    /// Networks keyed by organization ID
    networks: Arc<Mutex<HashMap<String, Vec<Network>>>>,
    /// Error to return (if any) - consumed on first use
    error: Arc<Mutex<Option<ApiError>>>,
    /// Error to return from list_networks only
    networks_error: Arc<Mutex<Option<ApiError>>>,
    /// Track number of calls for verification
    call_count: Arc<Mutex<CallCounts>>,
    /// Organization IDs passed to list_networks, in call order
    requested_orgs: Arc<Mutex<Vec<String>>>,
}

/// Tracks API call counts for test verification
#[derive(Default, Debug, Clone)]
pub struct CallCounts {
    pub list_orgs: usize,
    pub list_networks: usize,
}

impl MockDashboardClient {
    /// Create a new mock with no data
    pub fn new() -> Self {
        Self::default()
    }

    /// Set organizations to return
    pub fn with_orgs(self, orgs: Vec<Organization>) -> Self {
        *self.orgs.try_lock().expect("mock not shared yet") = orgs;
        self
    }

    /// Set networks to return for an organization
    pub fn with_networks(self, org_id: &str, networks: Vec<Network>) -> Self {
        self.networks
            .try_lock()
            .expect("mock not shared yet")
            .insert(org_id.to_string(), networks);
        self
    }

    /// Return this error from the next call
    pub fn with_error(self, error: ApiError) -> Self {
        *self.error.try_lock().expect("mock not shared yet") = Some(error);
        self
    }

    /// Return this error from the next list_networks call
    pub fn with_networks_error(self, error: ApiError) -> Self {
        *self.networks_error.try_lock().expect("mock not shared yet") = Some(error);
        self
    }

    /// Get call counts for verification
    pub async fn call_counts(&self) -> CallCounts {
        self.call_count.lock().await.clone()
    }

    /// Organization IDs requested via list_networks
    pub async fn requested_orgs(&self) -> Vec<String> {
        self.requested_orgs.lock().await.clone()
    }

    async fn take_error(&self) -> Result<()> {
        match self.error.lock().await.take() {
            Some(err) => Err(err.into()),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl DashboardApi for MockDashboardClient {
    async fn list_orgs(&self) -> Result<Vec<Organization>> {
        self.call_count.lock().await.list_orgs += 1;
        self.take_error().await?;
        Ok(self.orgs.lock().await.clone())
    }

    async fn list_networks(&self, org_id: &str) -> Result<Vec<Network>> {
        self.call_count.lock().await.list_networks += 1;
        self.requested_orgs.lock().await.push(org_id.to_string());
        self.take_error().await?;
        if let Some(err) = self.networks_error.lock().await.take() {
            return Err(err.into());
        }
        Ok(self
            .networks
            .lock()
            .await
            .get(org_id)
            .cloned()
            .unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::fixtures::{network, org};

    #[tokio::test]
    async fn test_mock_returns_configured_data() {
        let mock = MockDashboardClient::new()
            .with_orgs(vec![org("1", "HQ")])
            .with_networks("1", vec![network("10", "Net-ABC-1")]);

        let orgs = mock.list_orgs().await.unwrap();
        let networks = mock.list_networks("1").await.unwrap();

        assert_eq!(orgs, vec![org("1", "HQ")]);
        assert_eq!(networks, vec![network("10", "Net-ABC-1")]);
        assert_eq!(mock.requested_orgs().await, vec!["1".to_string()]);
    }

    #[tokio::test]
    async fn test_mock_unknown_org_has_no_networks() {
        let mock = MockDashboardClient::new();
        assert!(mock.list_networks("missing").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_mock_error_consumed_once() {
        let mock = MockDashboardClient::new().with_error(ApiError::Network("down".to_string()));

        assert!(mock.list_orgs().await.is_err());
        assert!(mock.list_orgs().await.is_ok());

        let counts = mock.call_counts().await;
        assert_eq!(counts.list_orgs, 2);
        assert_eq!(counts.list_networks, 0);
    }
}
