//! `PostgreSQL` repository implementation for task storage.

use super::{
    models::{NewTaskRow, TaskChangeset, TaskRow},
    schema::tasks,
};
use crate::category::domain::CategoryId;
use crate::config::PgPool;
use crate::listing::{SortDirection, like_pattern};
use crate::task::{
    domain::{NewTask, PersistedTaskData, Task, TaskId, TaskQuery, TaskSortKey, TaskStatus},
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;

/// `PostgreSQL`-backed task repository.
#[derive(Debug, Clone)]
pub struct PostgresTaskRepository {
    pool: PgPool,
}

impl PostgresTaskRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> TaskRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> TaskRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(TaskRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(TaskRepositoryError::persistence)?
    }
}

#[async_trait]
impl TaskRepository for PostgresTaskRepository {
    async fn save(&self, task: &NewTask) -> TaskRepositoryResult<Task> {
        let new_row = NewTaskRow {
            title: task.title().to_owned(),
            description: task.description().map(ToOwned::to_owned),
            status: task.status().as_str().to_owned(),
            due_at: task.due_at(),
            category_id: task.category_id().map(CategoryId::value),
            created_at: task.created_at(),
            updated_at: task.updated_at(),
        };

        self.run_blocking(move |connection| {
            let row = diesel::insert_into(tasks::table)
                .values(&new_row)
                .returning(TaskRow::as_returning())
                .get_result::<TaskRow>(connection)
                .map_err(TaskRepositoryError::persistence)?;
            row_to_task(row)
        })
        .await
    }

    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        self.run_blocking(move |connection| {
            let row = tasks::table
                .find(id.value())
                .select(TaskRow::as_select())
                .first::<TaskRow>(connection)
                .optional()
                .map_err(TaskRepositoryError::persistence)?;
            row.map(row_to_task).transpose()
        })
        .await
    }

    async fn find_by_query(&self, query: &TaskQuery) -> TaskRepositoryResult<(Vec<Task>, u64)> {
        let list_query = query.clone();
        self.run_blocking(move |connection| {
            let total: i64 = filtered(&list_query)
                .count()
                .get_result(connection)
                .map_err(TaskRepositoryError::persistence)?;

            let mut page_query = ordered(filtered(&list_query), &list_query);
            if let Some(window) = list_query.pagination() {
                page_query = page_query
                    .offset(i64::try_from(window.offset()).unwrap_or(i64::MAX))
                    .limit(i64::from(window.page_size()));
            }
            let rows = page_query
                .load::<TaskRow>(connection)
                .map_err(TaskRepositoryError::persistence)?;

            let entities = rows
                .into_iter()
                .map(row_to_task)
                .collect::<TaskRepositoryResult<Vec<Task>>>()?;
            Ok((entities, u64::try_from(total).unwrap_or(0)))
        })
        .await
    }

    async fn update(&self, task: &Task) -> TaskRepositoryResult<Task> {
        let id = task.id();
        let changeset = TaskChangeset {
            title: task.title().to_owned(),
            description: task.description().map(ToOwned::to_owned),
            status: task.status().as_str().to_owned(),
            due_at: task.due_at(),
            category_id: task.category_id().map(CategoryId::value),
            updated_at: task.updated_at(),
        };

        self.run_blocking(move |connection| {
            let row = diesel::update(tasks::table.find(id.value()))
                .set(&changeset)
                .returning(TaskRow::as_returning())
                .get_result::<TaskRow>(connection)
                .optional()
                .map_err(TaskRepositoryError::persistence)?
                .ok_or(TaskRepositoryError::NotFound(id))?;
            row_to_task(row)
        })
        .await
    }

    async fn delete(&self, id: TaskId) -> TaskRepositoryResult<()> {
        self.run_blocking(move |connection| {
            let deleted = diesel::delete(tasks::table.find(id.value()))
                .execute(connection)
                .map_err(TaskRepositoryError::persistence)?;
            if deleted == 0 {
                return Err(TaskRepositoryError::NotFound(id));
            }
            Ok(())
        })
        .await
    }
}

/// Builds the filter portion of a listing query.
fn filtered(query: &TaskQuery) -> tasks::BoxedQuery<'static, diesel::pg::Pg> {
    let mut sql_query = tasks::table.into_boxed();
    if let Some(term) = query.search() {
        let pattern = like_pattern(term);
        sql_query = sql_query.filter(
            tasks::title
                .like(pattern.clone())
                .nullable()
                .or(tasks::description.like(pattern)),
        );
    }
    if let Some(status) = query.status() {
        sql_query = sql_query.filter(tasks::status.eq(status.as_str()));
    }
    sql_query
}

/// Applies the allow-listed sort plus the identifier tie-break.
fn ordered<'a>(
    sql_query: tasks::BoxedQuery<'a, diesel::pg::Pg>,
    query: &TaskQuery,
) -> tasks::BoxedQuery<'a, diesel::pg::Pg> {
    let sort = query.sort();
    let sorted = match (sort.key, sort.direction) {
        (TaskSortKey::Title, SortDirection::Asc) => sql_query.order(tasks::title.asc()),
        (TaskSortKey::Title, SortDirection::Desc) => sql_query.order(tasks::title.desc()),
        (TaskSortKey::DueAt, SortDirection::Asc) => sql_query.order(tasks::due_at.asc()),
        (TaskSortKey::DueAt, SortDirection::Desc) => sql_query.order(tasks::due_at.desc()),
        (TaskSortKey::CreatedAt, SortDirection::Asc) => sql_query.order(tasks::created_at.asc()),
        (TaskSortKey::CreatedAt, SortDirection::Desc) => sql_query.order(tasks::created_at.desc()),
    };
    sorted.then_order_by(tasks::id.asc())
}

fn row_to_task(row: TaskRow) -> TaskRepositoryResult<Task> {
    let status =
        TaskStatus::try_from(row.status.as_str()).map_err(TaskRepositoryError::persistence)?;

    Ok(Task::from_persisted(PersistedTaskData {
        id: TaskId::new(row.id),
        title: row.title,
        description: row.description,
        status,
        due_at: row.due_at,
        category_id: row.category_id.map(CategoryId::new),
        created_at: row.created_at,
        updated_at: row.updated_at,
    }))
}
