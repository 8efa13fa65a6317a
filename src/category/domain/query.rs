//! List query value object for categories.

use super::Category;
use crate::listing::{ListingError, Pagination, Sort, SortDirection};
use std::cmp::Ordering;

/// Sort fields allowed for category listings.
///
/// Anything outside this allow-list is rejected at parse time, before a
/// query is built.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum CategorySortKey {
    /// Sort by display name.
    Name,
    /// Sort by creation timestamp.
    #[default]
    CreatedAt,
}

impl CategorySortKey {
    /// Returns the query-string token for this key.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::CreatedAt => "created_at",
        }
    }

    /// Compares two categories by this key alone.
    #[must_use]
    pub fn compare(self, a: &Category, b: &Category) -> Ordering {
        match self {
            Self::Name => a.name().cmp(b.name()),
            Self::CreatedAt => a.created_at().cmp(&b.created_at()),
        }
    }
}

impl TryFrom<&str> for CategorySortKey {
    type Error = ListingError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "name" => Ok(Self::Name),
            "created_at" => Ok(Self::CreatedAt),
            _ => Err(ListingError::UnknownSortKey(value.to_owned())),
        }
    }
}

/// Ephemeral filter/sort/pagination specification for a category listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryQuery {
    search: Option<String>,
    sort: Sort<CategorySortKey>,
    pagination: Option<Pagination>,
}

impl CategoryQuery {
    /// Creates a query matching everything, sorted newest first.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Restricts results to categories whose name or description contains
    /// the term. An empty term is equivalent to no search at all.
    #[must_use]
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into()).filter(|term| !term.is_empty());
        self
    }

    /// Applies an explicit sort key and direction.
    #[must_use]
    pub const fn with_sort(mut self, key: CategorySortKey, direction: SortDirection) -> Self {
        self.sort = Sort { key, direction };
        self
    }

    /// Restricts results to a pagination window.
    #[must_use]
    pub const fn with_pagination(mut self, pagination: Pagination) -> Self {
        self.pagination = Some(pagination);
        self
    }

    /// Returns the search term, if one is set.
    #[must_use]
    pub fn search(&self) -> Option<&str> {
        self.search.as_deref()
    }

    /// Returns the effective sort.
    #[must_use]
    pub const fn sort(&self) -> Sort<CategorySortKey> {
        self.sort
    }

    /// Returns the pagination window, if one is set.
    #[must_use]
    pub const fn pagination(&self) -> Option<Pagination> {
        self.pagination
    }

    /// Returns `true` when the category satisfies the search filter.
    ///
    /// The term must appear as a case-sensitive substring of the name or
    /// the description.
    #[must_use]
    pub fn matches(&self, category: &Category) -> bool {
        self.search.as_deref().is_none_or(|term| {
            category.name().contains(term)
                || category
                    .description()
                    .is_some_and(|description| description.contains(term))
        })
    }

    /// Total ordering for list results: the effective sort, with ties
    /// broken by ascending identifier for deterministic pagination.
    #[must_use]
    pub fn compare(&self, a: &Category, b: &Category) -> Ordering {
        let by_key = self.sort.key.compare(a, b);
        let directed = match self.sort.direction {
            SortDirection::Asc => by_key,
            SortDirection::Desc => by_key.reverse(),
        };
        directed.then_with(|| a.id().cmp(&b.id()))
    }
}
