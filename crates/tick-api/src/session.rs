//! Facade over the typed resources used by the command handlers.

use chrono::NaiveDate;
use serde_json::Value;
use tick_core::{ApiUrls, Authorization, NewEntry, Project, Task, TodaySummary};

use crate::resources::{Entries, Projects, Tasks};
use crate::{ApiError, ResourceClient, Transport};

/// An authorized connection to one tenant.
///
/// Built from the result of [`Authorizer::authorize`](crate::Authorizer::authorize);
/// read-only afterwards.
#[derive(Debug)]
pub struct Session<T> {
    client: ResourceClient<T>,
}

impl<T: Transport> Session<T> {
    pub const fn new(transport: T, urls: ApiUrls, authorization: Authorization) -> Self {
        Self {
            client: ResourceClient::new(transport, urls, authorization),
        }
    }

    pub const fn authorization(&self) -> &Authorization {
        self.client.authorization()
    }

    pub const fn projects(&self) -> Projects<'_, T> {
        Projects::new(&self.client)
    }

    pub const fn tasks(&self) -> Tasks<'_, T> {
        Tasks::new(&self.client)
    }

    pub const fn entries(&self) -> Entries<'_, T> {
        Entries::new(&self.client)
    }

    pub async fn list_projects(&self) -> Result<Vec<Project>, ApiError> {
        self.projects().list().await
    }

    pub async fn list_tasks(&self, project_id: Option<u64>) -> Result<Vec<Task>, ApiError> {
        self.tasks().list(project_id).await
    }

    pub async fn list_entries(
        &self,
        project_id: u64,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<Vec<Value>, ApiError> {
        self.entries().list(project_id, start_date, end_date).await
    }

    /// Entries logged on `today`, for one project or for all of them.
    ///
    /// Without a project this lists every project and then fetches each one's
    /// entries in turn, in project order. The first failed fetch aborts.
    pub async fn list_entries_today(
        &self,
        project_id: Option<u64>,
        today: NaiveDate,
    ) -> Result<TodaySummary, ApiError> {
        let project_ids = match project_id {
            Some(id) => vec![id],
            None => self
                .list_projects()
                .await?
                .into_iter()
                .map(|project| project.id)
                .collect(),
        };

        let mut raw = Vec::new();
        for id in project_ids {
            raw.extend(self.list_entries(id, today, today).await?);
        }

        Ok(TodaySummary::from_entries(&raw)?)
    }

    /// Posts one entry and returns whatever the server answered.
    pub async fn create_entry(&self, entry: &NewEntry) -> Result<Value, ApiError> {
        tracing::debug!(?entry, "creating entry");
        self.entries().post(entry).await
    }
}
