//! Service layer for category CRUD and listing.

use crate::category::{
    domain::{
        Category, CategoryDomainError, CategoryId, CategoryPatch, CategoryQuery, NewCategory,
        Palette,
    },
    ports::{CategoryRepository, CategoryRepositoryError, CategoryRepositoryResult},
};
use crate::listing::PageMeta;
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Request payload for creating a category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateCategoryRequest {
    name: String,
    description: Option<String>,
}

impl CreateCategoryRequest {
    /// Creates a request with the required name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
        }
    }

    /// Sets the category description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Service-level errors for category operations.
#[derive(Debug, Error)]
pub enum CategoryServiceError {
    /// No category exists with the given identifier.
    #[error("category not found: {0}")]
    NotFound(CategoryId),

    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] CategoryDomainError),

    /// Repository operation failed.
    #[error(transparent)]
    Repository(CategoryRepositoryError),
}

impl From<CategoryRepositoryError> for CategoryServiceError {
    fn from(err: CategoryRepositoryError) -> Self {
        match err {
            CategoryRepositoryError::NotFound(id) => Self::NotFound(id),
            other => Self::Repository(other),
        }
    }
}

/// Result type for category service operations.
pub type CategoryServiceResult<T> = Result<T, CategoryServiceError>;

/// Category orchestration service.
#[derive(Clone)]
pub struct CategoryService<R, C>
where
    R: CategoryRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
    palette: Palette,
}

impl<R, C> CategoryService<R, C>
where
    R: CategoryRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new category service drawing colours from `palette`.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>, palette: Palette) -> Self {
        Self {
            repository,
            clock,
            palette,
        }
    }

    /// Creates a category with a randomly assigned palette colour.
    ///
    /// # Errors
    ///
    /// Returns [`CategoryServiceError::Domain`] when the name is empty or
    /// [`CategoryServiceError::Repository`] when persistence fails.
    pub async fn create_category(
        &self,
        request: CreateCategoryRequest,
    ) -> CategoryServiceResult<Category> {
        let color = self.palette.pick();
        let draft = NewCategory::new(request.name, request.description, color, &*self.clock)?;
        Ok(self.repository.save(&draft).await?)
    }

    /// Retrieves a category by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`CategoryServiceError::NotFound`] when the identifier is
    /// unknown.
    pub async fn get_category(&self, id: CategoryId) -> CategoryServiceResult<Category> {
        let found = self.repository.find_by_id(id).await?;
        found.ok_or(CategoryServiceError::NotFound(id))
    }

    /// Lists categories matching the query with pagination metadata.
    ///
    /// # Errors
    ///
    /// Returns [`CategoryServiceError::Repository`] when the listing query
    /// fails.
    pub async fn list_categories(
        &self,
        query: &CategoryQuery,
    ) -> CategoryServiceResult<(Vec<Category>, PageMeta)> {
        let (categories, total) = self.repository.find_by_query(query).await?;
        Ok((categories, PageMeta::new(total, query.pagination())))
    }

    /// Applies a sparse update to an existing category.
    ///
    /// The whole merged entity is written back in a single call; concurrent
    /// updates are last-writer-wins.
    ///
    /// # Errors
    ///
    /// Returns [`CategoryServiceError::NotFound`] when the identifier is
    /// unknown and [`CategoryServiceError::Domain`] when the patch carries
    /// an out-of-palette colour; nothing is persisted on failure.
    pub async fn update_category(
        &self,
        id: CategoryId,
        patch: CategoryPatch,
    ) -> CategoryServiceResult<Category> {
        let mut category = self.get_category(id).await?;
        category.apply_patch(patch, &self.palette)?;
        Ok(self.repository.update(&category).await?)
    }

    /// Deletes a category by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`CategoryServiceError::NotFound`] when the identifier is
    /// unknown.
    pub async fn delete_category(&self, id: CategoryId) -> CategoryServiceResult<()> {
        let result: CategoryRepositoryResult<()> = self.repository.delete(id).await;
        Ok(result?)
    }
}
