//! Core domain types for the Tick client.
//!
//! This crate contains the pieces that do not talk to the network:
//! - Models: request payloads and the parsed views of API responses
//! - URLs: the fixed endpoint layout of the Tick v2 API
//! - Summary: the "hours remaining today" aggregation

pub mod date;
pub mod models;
pub mod summary;
pub mod urls;

pub use models::{Authorization, Credentials, LoggedEntry, NewEntry, Project, Task};
pub use summary::{CoreError, NOMINAL_WORKDAY_HOURS, TodaySummary};
pub use urls::{APP_NAME, ApiUrls, DEFAULT_BASE_URL};
