//! Service layer for task CRUD and listing.

use crate::category::domain::CategoryId;
use crate::listing::PageMeta;
use crate::task::{
    domain::{NewTask, Task, TaskDomainError, TaskId, TaskPatch, TaskQuery},
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};
use chrono::{DateTime, Utc};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Request payload for creating a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTaskRequest {
    title: String,
    description: Option<String>,
    due_at: Option<DateTime<Utc>>,
    category_id: Option<CategoryId>,
}

impl CreateTaskRequest {
    /// Creates a request with the required title.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            due_at: None,
            category_id: None,
        }
    }

    /// Sets the task description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the due date.
    #[must_use]
    pub const fn with_due_at(mut self, due_at: DateTime<Utc>) -> Self {
        self.due_at = Some(due_at);
        self
    }

    /// Attaches the task to a category.
    #[must_use]
    pub const fn with_category(mut self, category_id: CategoryId) -> Self {
        self.category_id = Some(category_id);
        self
    }
}

/// Service-level errors for task operations.
#[derive(Debug, Error)]
pub enum TaskServiceError {
    /// No task exists with the given identifier.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),

    /// Repository operation failed.
    #[error(transparent)]
    Repository(TaskRepositoryError),
}

impl From<TaskRepositoryError> for TaskServiceError {
    fn from(err: TaskRepositoryError) -> Self {
        match err {
            TaskRepositoryError::NotFound(id) => Self::NotFound(id),
            other => Self::Repository(other),
        }
    }
}

/// Result type for task service operations.
pub type TaskServiceResult<T> = Result<T, TaskServiceError>;

/// Task orchestration service.
#[derive(Clone)]
pub struct TaskService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> TaskService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new task service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Creates a task in `Pending` status.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Domain`] when the title is empty or
    /// [`TaskServiceError::Repository`] when persistence fails.
    pub async fn create_task(&self, request: CreateTaskRequest) -> TaskServiceResult<Task> {
        let draft = NewTask::new(
            request.title,
            request.description,
            request.due_at,
            request.category_id,
            &*self.clock,
        )?;
        Ok(self.repository.save(&draft).await?)
    }

    /// Retrieves a task by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::NotFound`] when the identifier is
    /// unknown.
    pub async fn get_task(&self, id: TaskId) -> TaskServiceResult<Task> {
        let found = self.repository.find_by_id(id).await?;
        found.ok_or(TaskServiceError::NotFound(id))
    }

    /// Lists tasks matching the query with pagination metadata.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when the listing query
    /// fails.
    pub async fn list_tasks(
        &self,
        query: &TaskQuery,
    ) -> TaskServiceResult<(Vec<Task>, PageMeta)> {
        let (tasks, total) = self.repository.find_by_query(query).await?;
        Ok((tasks, PageMeta::new(total, query.pagination())))
    }

    /// Applies a sparse update to an existing task.
    ///
    /// The whole merged entity is written back in a single call; concurrent
    /// updates are last-writer-wins.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::NotFound`] when the identifier is
    /// unknown; nothing is persisted on failure.
    pub async fn update_task(&self, id: TaskId, patch: TaskPatch) -> TaskServiceResult<Task> {
        let mut task = self.get_task(id).await?;
        task.apply_patch(patch, &*self.clock);
        Ok(self.repository.update(&task).await?)
    }

    /// Deletes a task by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::NotFound`] when the identifier is
    /// unknown.
    pub async fn delete_task(&self, id: TaskId) -> TaskServiceResult<()> {
        let result: TaskRepositoryResult<()> = self.repository.delete(id).await;
        Ok(result?)
    }
}
