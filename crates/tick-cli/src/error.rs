use thiserror::Error;

/// A command was invoked without what it needs. Raised before any request.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum UsageError {
    #[error("a project id is required (-p/--project)")]
    MissingProject,
    #[error("a task id is required (-t/--task)")]
    MissingTask,
}
