//! Typed views over the generic client, one per API resource.

mod entries;
mod projects;
mod tasks;

pub use entries::Entries;
pub use projects::Projects;
pub use tasks::Tasks;

use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::ApiError;

/// Reads a parsed body as `D`, reporting the rendered JSON if it does not fit.
fn decode<D: DeserializeOwned>(value: &Value) -> Result<D, ApiError> {
    Deserialize::deserialize(value).map_err(|_| ApiError::Response {
        body: value.to_string(),
    })
}
