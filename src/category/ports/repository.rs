//! Repository port for category persistence, lookup, and listing.

use crate::category::domain::{Category, CategoryId, CategoryQuery, NewCategory};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for category repository operations.
pub type CategoryRepositoryResult<T> = Result<T, CategoryRepositoryError>;

/// Category persistence contract.
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// Stores a new category and returns it with its assigned identifier.
    ///
    /// # Errors
    ///
    /// Returns [`CategoryRepositoryError::Persistence`] when the store
    /// rejects the write.
    async fn save(&self, category: &NewCategory) -> CategoryRepositoryResult<Category>;

    /// Finds a category by identifier.
    ///
    /// Returns `None` when the category does not exist.
    async fn find_by_id(&self, id: CategoryId) -> CategoryRepositoryResult<Option<Category>>;

    /// Returns the page of categories matching the query plus the total
    /// match count across all pages.
    async fn find_by_query(
        &self,
        query: &CategoryQuery,
    ) -> CategoryRepositoryResult<(Vec<Category>, u64)>;

    /// Persists changes to an existing category, whole-entity.
    ///
    /// # Errors
    ///
    /// Returns [`CategoryRepositoryError::NotFound`] when the category does
    /// not exist.
    async fn update(&self, category: &Category) -> CategoryRepositoryResult<Category>;

    /// Deletes a category by identifier.
    ///
    /// Tasks referencing the category keep existing; the store nullifies
    /// their reference.
    ///
    /// # Errors
    ///
    /// Returns [`CategoryRepositoryError::NotFound`] when no stored
    /// category matched the identifier.
    async fn delete(&self, id: CategoryId) -> CategoryRepositoryResult<()>;
}

/// Errors returned by category repository implementations.
#[derive(Debug, Clone, Error)]
pub enum CategoryRepositoryError {
    /// The category was not found.
    #[error("category not found: {0}")]
    NotFound(CategoryId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl CategoryRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
