//! Error types for task domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing domain task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The task title is empty after trimming.
    #[error("task title must not be empty")]
    EmptyTitle,
}

/// Error returned while parsing task statuses from caller input or
/// persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("invalid status: {0} (expected Pending, Doing, or Done)")]
pub struct ParseTaskStatusError(pub String);
