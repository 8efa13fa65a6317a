//! `PostgreSQL` repository implementation for category storage.

use super::{
    models::{CategoryChangeset, CategoryRow, NewCategoryRow},
    schema::categories,
};
use crate::category::{
    domain::{Category, CategoryId, CategoryQuery, CategorySortKey, NewCategory,
        PersistedCategoryData},
    ports::{CategoryRepository, CategoryRepositoryError, CategoryRepositoryResult},
};
use crate::config::PgPool;
use crate::listing::{SortDirection, like_pattern};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;

/// `PostgreSQL`-backed category repository.
#[derive(Debug, Clone)]
pub struct PostgresCategoryRepository {
    pool: PgPool,
}

impl PostgresCategoryRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> CategoryRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> CategoryRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(CategoryRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(CategoryRepositoryError::persistence)?
    }
}

#[async_trait]
impl CategoryRepository for PostgresCategoryRepository {
    async fn save(&self, category: &NewCategory) -> CategoryRepositoryResult<Category> {
        let new_row = NewCategoryRow {
            name: category.name().to_owned(),
            description: category.description().map(ToOwned::to_owned),
            color: category.color().to_owned(),
            created_at: category.created_at(),
        };

        self.run_blocking(move |connection| {
            let row = diesel::insert_into(categories::table)
                .values(&new_row)
                .returning(CategoryRow::as_returning())
                .get_result::<CategoryRow>(connection)
                .map_err(CategoryRepositoryError::persistence)?;
            Ok(row_to_category(row))
        })
        .await
    }

    async fn find_by_id(&self, id: CategoryId) -> CategoryRepositoryResult<Option<Category>> {
        self.run_blocking(move |connection| {
            let row = categories::table
                .find(id.value())
                .select(CategoryRow::as_select())
                .first::<CategoryRow>(connection)
                .optional()
                .map_err(CategoryRepositoryError::persistence)?;
            Ok(row.map(row_to_category))
        })
        .await
    }

    async fn find_by_query(
        &self,
        query: &CategoryQuery,
    ) -> CategoryRepositoryResult<(Vec<Category>, u64)> {
        let list_query = query.clone();
        self.run_blocking(move |connection| {
            let total: i64 = filtered(&list_query)
                .count()
                .get_result(connection)
                .map_err(CategoryRepositoryError::persistence)?;

            let mut page_query = ordered(filtered(&list_query), &list_query);
            if let Some(window) = list_query.pagination() {
                page_query = page_query
                    .offset(i64::try_from(window.offset()).unwrap_or(i64::MAX))
                    .limit(i64::from(window.page_size()));
            }
            let rows = page_query
                .load::<CategoryRow>(connection)
                .map_err(CategoryRepositoryError::persistence)?;

            let entities = rows.into_iter().map(row_to_category).collect();
            Ok((entities, u64::try_from(total).unwrap_or(0)))
        })
        .await
    }

    async fn update(&self, category: &Category) -> CategoryRepositoryResult<Category> {
        let id = category.id();
        let changeset = CategoryChangeset {
            name: category.name().to_owned(),
            description: category.description().map(ToOwned::to_owned),
            color: category.color().to_owned(),
        };

        self.run_blocking(move |connection| {
            let row = diesel::update(categories::table.find(id.value()))
                .set(&changeset)
                .returning(CategoryRow::as_returning())
                .get_result::<CategoryRow>(connection)
                .optional()
                .map_err(CategoryRepositoryError::persistence)?
                .ok_or(CategoryRepositoryError::NotFound(id))?;
            Ok(row_to_category(row))
        })
        .await
    }

    async fn delete(&self, id: CategoryId) -> CategoryRepositoryResult<()> {
        self.run_blocking(move |connection| {
            let deleted = diesel::delete(categories::table.find(id.value()))
                .execute(connection)
                .map_err(CategoryRepositoryError::persistence)?;
            if deleted == 0 {
                return Err(CategoryRepositoryError::NotFound(id));
            }
            Ok(())
        })
        .await
    }
}

/// Builds the filter portion of a listing query.
fn filtered(query: &CategoryQuery) -> categories::BoxedQuery<'static, diesel::pg::Pg> {
    let mut sql_query = categories::table.into_boxed();
    if let Some(term) = query.search() {
        let pattern = like_pattern(term);
        sql_query = sql_query.filter(
            categories::name
                .like(pattern.clone())
                .nullable()
                .or(categories::description.like(pattern)),
        );
    }
    sql_query
}

/// Applies the allow-listed sort plus the identifier tie-break.
fn ordered<'a>(
    sql_query: categories::BoxedQuery<'a, diesel::pg::Pg>,
    query: &CategoryQuery,
) -> categories::BoxedQuery<'a, diesel::pg::Pg> {
    let sort = query.sort();
    let sorted = match (sort.key, sort.direction) {
        (CategorySortKey::Name, SortDirection::Asc) => sql_query.order(categories::name.asc()),
        (CategorySortKey::Name, SortDirection::Desc) => sql_query.order(categories::name.desc()),
        (CategorySortKey::CreatedAt, SortDirection::Asc) => {
            sql_query.order(categories::created_at.asc())
        }
        (CategorySortKey::CreatedAt, SortDirection::Desc) => {
            sql_query.order(categories::created_at.desc())
        }
    };
    sorted.then_order_by(categories::id.asc())
}

fn row_to_category(row: CategoryRow) -> Category {
    Category::from_persisted(PersistedCategoryData {
        id: CategoryId::new(row.id),
        name: row.name,
        description: row.description,
        color: row.color,
        created_at: row.created_at,
    })
}
