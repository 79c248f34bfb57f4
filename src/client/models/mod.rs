//! Dashboard API data models
//!
//! Only the fields this tool consumes are modelled; every other field the
//! API returns is ignored during deserialization.

mod network;
mod org;

pub use network::Network;
pub use org::Organization;

use serde::de::DeserializeOwned;

use crate::error::ApiError;

/// Decode a JSON array body record by record.
///
/// A body that is not an array is an `InvalidResponse`; a record that does not
/// fit `T` is an `InvalidRecord` naming its position and the failing field.
pub(crate) fn decode_records<T: DeserializeOwned>(
    resource: &'static str,
    body: &str,
) -> Result<Vec<T>, ApiError> {
    let values: Vec<serde_json::Value> = serde_json::from_str(body).map_err(|e| {
        ApiError::InvalidResponse(format!("expected a JSON array of {}s: {}", resource, e))
    })?;

    values
        .into_iter()
        .enumerate()
        .map(|(index, value)| {
            serde_json::from_value(value).map_err(|e| ApiError::InvalidRecord {
                resource,
                index,
                reason: e.to_string(),
            })
        })
        .collect()
}
