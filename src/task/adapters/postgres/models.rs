//! Diesel row models for task persistence.

use super::schema::tasks;
use chrono::{DateTime, Utc};
use diesel::prelude::*;

/// Query result row for task records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = tasks)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TaskRow {
    /// Store-assigned task identifier.
    pub id: i64,
    /// Task title.
    pub title: String,
    /// Optional description.
    pub description: Option<String>,
    /// Lifecycle status in its canonical string form.
    pub status: String,
    /// Optional due date.
    pub due_at: Option<DateTime<Utc>>,
    /// Optional category reference.
    pub category_id: Option<i64>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last mutation timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Insert model for task records; the store assigns the identifier.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = tasks)]
pub struct NewTaskRow {
    /// Task title.
    pub title: String,
    /// Optional description.
    pub description: Option<String>,
    /// Lifecycle status in its canonical string form.
    pub status: String,
    /// Optional due date.
    pub due_at: Option<DateTime<Utc>>,
    /// Optional category reference.
    pub category_id: Option<i64>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last mutation timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Whole-entity changeset applied on update.
///
/// `treat_none_as_null` makes `None` values clear their columns rather
/// than skip them, matching the whole-entity write contract.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = tasks)]
#[diesel(treat_none_as_null = true)]
pub struct TaskChangeset {
    /// Replacement title.
    pub title: String,
    /// Replacement description.
    pub description: Option<String>,
    /// Replacement status.
    pub status: String,
    /// Replacement due date.
    pub due_at: Option<DateTime<Utc>>,
    /// Replacement category reference.
    pub category_id: Option<i64>,
    /// Replacement mutation timestamp.
    pub updated_at: DateTime<Utc>,
}
