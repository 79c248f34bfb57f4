//! Listing API trait for collection operations

use async_trait::async_trait;

use crate::client::models::{Network, Organization};
use crate::error::Result;

/// Collection listing operations for the Dashboard API
#[async_trait]
pub trait DashboardApi: Send + Sync {
    /// List all organizations visible to the API key, in API order
    async fn list_orgs(&self) -> Result<Vec<Organization>>;

    /// List all networks of an organization, in API order
    async fn list_networks(&self, org_id: &str) -> Result<Vec<Network>>;
}
