//! In-memory category repository for tests and embedding.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use crate::category::{
    domain::{Category, CategoryId, CategoryQuery, NewCategory, PersistedCategoryData},
    ports::{CategoryRepository, CategoryRepositoryError, CategoryRepositoryResult},
};
use crate::listing::paginate;

/// Thread-safe in-memory category repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCategoryRepository {
    state: Arc<RwLock<InMemoryCategoryState>>,
}

#[derive(Debug)]
struct InMemoryCategoryState {
    categories: BTreeMap<CategoryId, Category>,
    next_id: i64,
}

impl Default for InMemoryCategoryState {
    fn default() -> Self {
        Self {
            categories: BTreeMap::new(),
            next_id: 1,
        }
    }
}

impl InMemoryCategoryRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CategoryRepository for InMemoryCategoryRepository {
    async fn save(&self, category: &NewCategory) -> CategoryRepositoryResult<Category> {
        let mut state = self.state.write().map_err(|err| {
            CategoryRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;

        let id = CategoryId::new(state.next_id);
        state.next_id += 1;
        let persisted = Category::from_persisted(PersistedCategoryData {
            id,
            name: category.name().to_owned(),
            description: category.description().map(ToOwned::to_owned),
            color: category.color().to_owned(),
            created_at: category.created_at(),
        });
        state.categories.insert(id, persisted.clone());
        Ok(persisted)
    }

    async fn find_by_id(&self, id: CategoryId) -> CategoryRepositoryResult<Option<Category>> {
        let state = self.state.read().map_err(|err| {
            CategoryRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(state.categories.get(&id).cloned())
    }

    async fn find_by_query(
        &self,
        query: &CategoryQuery,
    ) -> CategoryRepositoryResult<(Vec<Category>, u64)> {
        let state = self.state.read().map_err(|err| {
            CategoryRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;

        let mut matching: Vec<Category> = state
            .categories
            .values()
            .filter(|category| query.matches(category))
            .cloned()
            .collect();
        matching.sort_by(|a, b| query.compare(a, b));

        let total = u64::try_from(matching.len()).unwrap_or(u64::MAX);
        Ok((paginate(matching, query.pagination()), total))
    }

    async fn update(&self, category: &Category) -> CategoryRepositoryResult<Category> {
        let mut state = self.state.write().map_err(|err| {
            CategoryRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;

        if !state.categories.contains_key(&category.id()) {
            return Err(CategoryRepositoryError::NotFound(category.id()));
        }
        state.categories.insert(category.id(), category.clone());
        Ok(category.clone())
    }

    async fn delete(&self, id: CategoryId) -> CategoryRepositoryResult<()> {
        let mut state = self.state.write().map_err(|err| {
            CategoryRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;

        if state.categories.remove(&id).is_none() {
            return Err(CategoryRepositoryError::NotFound(id));
        }
        Ok(())
    }
}
