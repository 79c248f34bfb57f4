//! Test fixtures for API model types
//!
//! Import via `use crate::client::fixtures::*` in test modules.

#![allow(dead_code)]

use super::models::{Network, Organization};

/// Create an organization with the given ID and name.
pub fn org(id: &str, name: &str) -> Organization {
    Organization {
        id: id.to_string(),
        name: name.to_string(),
    }
}

/// Create a network with the given ID and name.
pub fn network(id: &str, name: &str) -> Network {
    Network {
        id: id.to_string(),
        name: name.to_string(),
    }
}

/// Create `count` organizations named `Org 0`, `Org 1`, ...
pub fn orgs(count: usize) -> Vec<Organization> {
    (0..count)
        .map(|i| org(&i.to_string(), &format!("Org {}", i)))
        .collect()
}

/// Create networks from `(id, name)` pairs, preserving order.
pub fn networks(pairs: &[(&str, &str)]) -> Vec<Network> {
    pairs.iter().map(|(id, name)| network(id, name)).collect()
}
