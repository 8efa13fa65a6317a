//! Shared pagination, search, and sort primitives for list operations.
//!
//! Both entity slices drive their list endpoints through the same engine:
//! a validated pagination window, an allow-listed sort key with direction,
//! and a case-sensitive substring search. Sort keys are per-entity enums so
//! an unknown field name is unrepresentable once parsed; this module owns
//! the pieces that do not depend on the entity shape.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced while constructing list queries.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ListingError {
    /// Page or page size was below the minimum of 1.
    #[error("page and page_size must both be at least 1 (got page={page}, page_size={page_size})")]
    InvalidPagination {
        /// Requested page number.
        page: u32,
        /// Requested page size.
        page_size: u32,
    },

    /// The sort field is not in the entity's allow-list.
    #[error("invalid sort_by: {0}")]
    UnknownSortKey(String),

    /// The sort direction is neither `asc` nor `desc`.
    #[error("invalid sort_order: {0}")]
    UnknownSortDirection(String),
}

/// Direction applied to a sort key.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    /// Smallest value first.
    Asc,
    /// Largest value first.
    #[default]
    Desc,
}

impl SortDirection {
    /// Returns the canonical query-string representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

impl TryFrom<&str> for SortDirection {
    type Error = ListingError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            _ => Err(ListingError::UnknownSortDirection(value.to_owned())),
        }
    }
}

/// A resolved sort: an allow-listed key plus a direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Sort<K> {
    /// Entity-specific sort key.
    pub key: K,
    /// Sort direction.
    pub direction: SortDirection,
}

impl<K: Default> Sort<K> {
    /// Resolves caller-supplied sort parameters.
    ///
    /// The explicit sort applies only when both key and direction were
    /// given; otherwise the entity default (newest first) is used.
    #[must_use]
    pub fn resolve(key: Option<K>, direction: Option<SortDirection>) -> Self {
        match (key, direction) {
            (Some(key), Some(direction)) => Self { key, direction },
            _ => Self::default(),
        }
    }
}

/// A validated pagination window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    page: u32,
    page_size: u32,
}

impl Pagination {
    /// Creates a pagination window.
    ///
    /// # Errors
    ///
    /// Returns [`ListingError::InvalidPagination`] when either value is 0.
    pub const fn new(page: u32, page_size: u32) -> Result<Self, ListingError> {
        if page == 0 || page_size == 0 {
            return Err(ListingError::InvalidPagination { page, page_size });
        }
        Ok(Self { page, page_size })
    }

    /// Returns the 1-based page number.
    #[must_use]
    pub const fn page(self) -> u32 {
        self.page
    }

    /// Returns the number of entries per page.
    #[must_use]
    pub const fn page_size(self) -> u32 {
        self.page_size
    }

    /// Returns the number of entries preceding this window.
    #[must_use]
    pub fn offset(self) -> u64 {
        (u64::from(self.page) - 1) * u64::from(self.page_size)
    }
}

/// Pagination metadata accompanying a page of list results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMeta {
    /// Total number of entities matching the filter, across all pages.
    pub total: u64,
    /// Page number the results belong to.
    pub page: u32,
    /// Size of the returned window.
    pub page_size: u64,
    /// Total number of pages at this page size.
    pub total_pages: u64,
}

impl PageMeta {
    /// Derives metadata from a match total and the requested window.
    ///
    /// An unpaginated query reports the whole result set as a single page.
    #[must_use]
    pub fn new(total: u64, pagination: Option<Pagination>) -> Self {
        match pagination {
            Some(window) => Self {
                total,
                page: window.page(),
                page_size: u64::from(window.page_size()),
                total_pages: total.div_ceil(u64::from(window.page_size())),
            },
            None => Self {
                total,
                page: 1,
                page_size: total,
                total_pages: if total == 0 { 0 } else { 1 },
            },
        }
    }
}

/// Applies a pagination window to an already filtered, sorted sequence.
///
/// Used by the in-memory adapters; the `PostgreSQL` adapters translate the
/// window into `OFFSET`/`LIMIT` instead.
#[must_use]
pub fn paginate<T>(items: Vec<T>, pagination: Option<Pagination>) -> Vec<T> {
    match pagination {
        None => items,
        Some(window) => items
            .into_iter()
            .skip(usize::try_from(window.offset()).unwrap_or(usize::MAX))
            .take(usize::try_from(window.page_size()).unwrap_or(usize::MAX))
            .collect(),
    }
}

/// Escapes a search term for use as a SQL `LIKE` substring pattern.
///
/// The term itself must match literally, so `LIKE` metacharacters are
/// escaped before the surrounding `%` wildcards are added.
#[must_use]
pub fn like_pattern(search: &str) -> String {
    let mut pattern = String::with_capacity(search.len() + 2);
    pattern.push('%');
    for ch in search.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(ch);
    }
    pattern.push('%');
    pattern
}

#[cfg(test)]
mod tests;
