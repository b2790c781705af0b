use chrono::NaiveDate;
use serde_json::Value;
use tick_core::NewEntry;
use tick_core::date::format_date;

use crate::{ApiError, ResourceClient, Transport};

use super::decode;

#[derive(Debug)]
pub struct Entries<'a, T> {
    client: &'a ResourceClient<T>,
}

impl<'a, T: Transport> Entries<'a, T> {
    pub const fn new(client: &'a ResourceClient<T>) -> Self {
        Self { client }
    }

    /// Entries of one project between two dates, inclusive. Entry objects are
    /// returned raw.
    pub async fn list(
        &self,
        project_id: u64,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<Vec<Value>, ApiError> {
        let path = format!(
            "projects/{project_id}/entries.json?start_date={}&end_date={}",
            format_date(start_date),
            format_date(end_date)
        );
        decode(&self.client.get(&path).await?)
    }

    /// `POST entries.json`
    pub async fn post(&self, entry: &NewEntry) -> Result<Value, ApiError> {
        self.client.post("entries.json", entry).await
    }
}
