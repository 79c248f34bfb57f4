//! Meraki Dashboard API client

pub mod api;
#[cfg(test)]
pub mod fixtures;
pub mod meraki;
#[cfg(test)]
pub mod mock;
pub mod models;

pub use api::DashboardApi;
pub use meraki::MerakiClient;
#[cfg(test)]
pub use mock::MockDashboardClient;
pub use models::{Network, Organization};
