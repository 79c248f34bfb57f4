//! Network name matching

use crate::client::Network;

/// Case-insensitive substring to look for in network names
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchCriteria {
    term: String,
    needle: String,
}

impl SearchCriteria {
    pub fn new(term: impl Into<String>) -> Self {
        let term = term.into();
        let needle = term.to_lowercase();
        Self { term, needle }
    }

    /// The term as the operator supplied it
    pub fn term(&self) -> &str {
        &self.term
    }

    /// Whether `name` contains the term, ignoring case.
    pub fn matches(&self, name: &str) -> bool {
        name.to_lowercase().contains(&self.needle)
    }
}

/// Networks whose name matched, in listing order
pub type MatchResult = Vec<Network>;

/// Keep the networks whose name contains the search term.
pub fn filter_networks(networks: Vec<Network>, criteria: &SearchCriteria) -> MatchResult {
    networks
        .into_iter()
        .filter(|n| criteria.matches(&n.name))
        .collect()
}
