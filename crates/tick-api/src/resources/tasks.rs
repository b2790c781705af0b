use serde_json::Value;
use tick_core::Task;

use crate::{ApiError, ResourceClient, Transport};

use super::decode;

#[derive(Debug)]
pub struct Tasks<'a, T> {
    client: &'a ResourceClient<T>,
}

impl<'a, T: Transport> Tasks<'a, T> {
    pub const fn new(client: &'a ResourceClient<T>) -> Self {
        Self { client }
    }

    /// Tasks of one project, or every task visible to the user.
    pub async fn list(&self, project_id: Option<u64>) -> Result<Vec<Task>, ApiError> {
        let path = match project_id {
            Some(id) => format!("projects/{id}/tasks.json"),
            None => "tasks.json".to_string(),
        };
        decode(&self.client.list(&path).await?)
    }

    /// `GET tasks/{id}.json`
    pub async fn get(&self, id: u64) -> Result<Value, ApiError> {
        self.client.get(&format!("tasks/{id}.json")).await
    }
}
