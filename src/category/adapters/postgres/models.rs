//! Diesel row models for category persistence.

use super::schema::categories;
use chrono::{DateTime, Utc};
use diesel::prelude::*;

/// Query result row for category records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = categories)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct CategoryRow {
    /// Store-assigned category identifier.
    pub id: i64,
    /// Display name.
    pub name: String,
    /// Optional description.
    pub description: Option<String>,
    /// Palette colour.
    pub color: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// Insert model for category records; the store assigns the identifier.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = categories)]
pub struct NewCategoryRow {
    /// Display name.
    pub name: String,
    /// Optional description.
    pub description: Option<String>,
    /// Palette colour.
    pub color: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// Whole-entity changeset applied on update.
///
/// `treat_none_as_null` makes a `None` description clear the column rather
/// than skip it, matching the whole-entity write contract.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = categories)]
#[diesel(treat_none_as_null = true)]
pub struct CategoryChangeset {
    /// Replacement display name.
    pub name: String,
    /// Replacement description.
    pub description: Option<String>,
    /// Replacement palette colour.
    pub color: String,
}
