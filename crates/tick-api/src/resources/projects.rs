use serde_json::Value;
use tick_core::Project;

use crate::{ApiError, ResourceClient, Transport};

use super::decode;

#[derive(Debug)]
pub struct Projects<'a, T> {
    client: &'a ResourceClient<T>,
}

impl<'a, T: Transport> Projects<'a, T> {
    pub const fn new(client: &'a ResourceClient<T>) -> Self {
        Self { client }
    }

    /// `GET projects.json`, in server order.
    pub async fn list(&self) -> Result<Vec<Project>, ApiError> {
        decode(&self.client.list("projects.json").await?)
    }

    /// `GET projects/{id}.json`
    pub async fn get(&self, id: u64) -> Result<Value, ApiError> {
        self.client.get(&format!("projects/{id}.json")).await
    }
}
