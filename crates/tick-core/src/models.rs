//! Request payloads and parsed response records.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Username and password used for the one-time roles lookup.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// Result of a successful roles lookup.
///
/// Every call made after authorization uses this token and tenant.
#[derive(Clone, PartialEq, Eq)]
pub struct Authorization {
    pub api_token: String,
    /// Subscription id, embedded in every tenant scoped URL.
    pub tenant_id: String,
    pub username: String,
}

impl fmt::Debug for Authorization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Authorization")
            .field("api_token", &"[REDACTED]")
            .field("tenant_id", &self.tenant_id)
            .field("username", &self.username)
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: u64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: u64,
    pub name: String,
}

/// Payload for `POST entries.json`.
///
/// Missing values are sent as `null`; the server decides what is required.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewEntry {
    pub project_id: Option<u64>,
    pub hours: Option<f64>,
    pub date: Option<String>,
    pub task_id: Option<u64>,
    pub notes: Option<String>,
}

/// The part of a listed entry the today view needs.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LoggedEntry {
    pub hours: f64,
    #[serde(default)]
    pub notes: Option<String>,
}
