//! API trait definitions

mod listing;

pub use listing::DashboardApi;
