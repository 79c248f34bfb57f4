//! Network models

use serde::Deserialize;

/// Network resource belonging to an organization
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Network {
    /// Network ID
    pub id: String,

    /// Network name
    pub name: String,
}
