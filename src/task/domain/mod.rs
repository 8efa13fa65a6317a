//! Domain model for task management.
//!
//! The task domain models drafting, status changes, due dates, and the
//! optional category reference while keeping all infrastructure concerns
//! outside of the domain boundary.

mod error;
mod ids;
mod query;
mod task;

pub use error::{ParseTaskStatusError, TaskDomainError};
pub use ids::TaskId;
pub use query::{TaskQuery, TaskSortKey};
pub use task::{NewTask, PersistedTaskData, Task, TaskPatch, TaskStatus};
