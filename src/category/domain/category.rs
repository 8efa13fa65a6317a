//! Category aggregate, draft form, and sparse-update patch.

use super::{CategoryDomainError, CategoryId, Palette};
use crate::patch::FieldUpdate;
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// A persisted category record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    id: CategoryId,
    name: String,
    description: Option<String>,
    color: String,
    created_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedCategoryData {
    /// Store-assigned identifier.
    pub id: CategoryId,
    /// Persisted display name.
    pub name: String,
    /// Persisted description, if any.
    pub description: Option<String>,
    /// Persisted palette colour.
    pub color: String,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl Category {
    /// Reconstructs a category from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedCategoryData) -> Self {
        Self {
            id: data.id,
            name: data.name,
            description: data.description,
            color: data.color,
            created_at: data.created_at,
        }
    }

    /// Returns the category identifier.
    #[must_use]
    pub const fn id(&self) -> CategoryId {
        self.id
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the assigned palette colour.
    #[must_use]
    pub fn color(&self) -> &str {
        &self.color
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Merges a sparse update onto this category.
    ///
    /// An empty replacement name is treated as "no change"; the name can
    /// never be cleared through an update. A colour change is only accepted
    /// when the new value is a palette member.
    ///
    /// # Errors
    ///
    /// Returns [`CategoryDomainError::InvalidColor`] when the patch carries
    /// a colour outside the palette; the category is not persisted in that
    /// case.
    pub fn apply_patch(
        &mut self,
        patch: CategoryPatch,
        palette: &Palette,
    ) -> Result<(), CategoryDomainError> {
        if let Some(color) = patch.color
            && !color.is_empty()
        {
            if !palette.contains(&color) {
                return Err(palette.invalid_color(color));
            }
            self.color = color;
        }
        if let Some(name) = patch.name
            && !name.is_empty()
        {
            self.name = name;
        }
        match patch.description {
            FieldUpdate::Unset => {}
            FieldUpdate::Clear => self.description = None,
            FieldUpdate::Set(value) => {
                self.description = if value.is_empty() { None } else { Some(value) };
            }
        }
        Ok(())
    }
}

/// An unpersisted category awaiting its store-assigned identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCategory {
    name: String,
    description: Option<String>,
    color: String,
    created_at: DateTime<Utc>,
}

impl NewCategory {
    /// Creates a category draft stamped with the current time.
    ///
    /// # Errors
    ///
    /// Returns [`CategoryDomainError::EmptyName`] when the name is empty
    /// after trimming.
    pub fn new(
        name: impl Into<String>,
        description: Option<String>,
        color: impl Into<String>,
        clock: &impl Clock,
    ) -> Result<Self, CategoryDomainError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(CategoryDomainError::EmptyName);
        }
        Ok(Self {
            name,
            description: description.filter(|value| !value.is_empty()),
            color: color.into(),
            created_at: clock.utc(),
        })
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the assigned palette colour.
    #[must_use]
    pub fn color(&self) -> &str {
        &self.color
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

/// Sparse update request for a category.
///
/// Absent fields leave the stored value untouched; the nullable description
/// distinguishes "not provided" from "explicitly cleared" via
/// [`FieldUpdate`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(default, skip_serializing_if = "FieldUpdate::is_unset")]
    description: FieldUpdate<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    color: Option<String>,
}

impl CategoryPatch {
    /// Creates an empty patch that changes nothing.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests a name replacement.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Requests a description replacement.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = FieldUpdate::Set(description.into());
        self
    }

    /// Requests the description be cleared.
    #[must_use]
    pub fn clearing_description(mut self) -> Self {
        self.description = FieldUpdate::Clear;
        self
    }

    /// Requests a colour replacement.
    #[must_use]
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }
}
