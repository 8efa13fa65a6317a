//! List query value object for tasks.

use super::{Task, TaskStatus};
use crate::listing::{ListingError, Pagination, Sort, SortDirection};
use chrono::{DateTime, Utc};
use std::cmp::Ordering;

/// Sort fields allowed for task listings.
///
/// Anything outside this allow-list is rejected at parse time, before a
/// query is built.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum TaskSortKey {
    /// Sort by title.
    Title,
    /// Sort by due date; tasks without one sort after dated tasks when
    /// ascending, matching SQL `NULL` ordering.
    DueAt,
    /// Sort by creation timestamp.
    #[default]
    CreatedAt,
}

impl TaskSortKey {
    /// Returns the query-string token for this key.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::DueAt => "due_at",
            Self::CreatedAt => "created_at",
        }
    }

    /// Compares two tasks by this key alone.
    #[must_use]
    pub fn compare(self, a: &Task, b: &Task) -> Ordering {
        match self {
            Self::Title => a.title().cmp(b.title()),
            Self::DueAt => compare_due_dates(a.due_at(), b.due_at()),
            Self::CreatedAt => a.created_at().cmp(&b.created_at()),
        }
    }
}

/// Orders optional due dates the way `PostgreSQL` orders `NULL`s: absent
/// values sort last ascending, so both adapters paginate identically.
fn compare_due_dates(a: Option<DateTime<Utc>>, b: Option<DateTime<Utc>>) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(left), Some(right)) => left.cmp(&right),
    }
}

impl TryFrom<&str> for TaskSortKey {
    type Error = ListingError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "title" => Ok(Self::Title),
            "due_at" => Ok(Self::DueAt),
            "created_at" => Ok(Self::CreatedAt),
            _ => Err(ListingError::UnknownSortKey(value.to_owned())),
        }
    }
}

/// Ephemeral filter/sort/pagination specification for a task listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskQuery {
    search: Option<String>,
    status: Option<TaskStatus>,
    sort: Sort<TaskSortKey>,
    pagination: Option<Pagination>,
}

impl TaskQuery {
    /// Creates a query matching everything, sorted newest first.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Restricts results to tasks whose title or description contains the
    /// term. An empty term is equivalent to no search at all.
    #[must_use]
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into()).filter(|term| !term.is_empty());
        self
    }

    /// Restricts results to tasks in the given status.
    #[must_use]
    pub const fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Applies an explicit sort key and direction.
    #[must_use]
    pub const fn with_sort(mut self, key: TaskSortKey, direction: SortDirection) -> Self {
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

    /// Returns the status filter, if one is set.
    #[must_use]
    pub const fn status(&self) -> Option<TaskStatus> {
        self.status
    }

    /// Returns the effective sort.
    #[must_use]
    pub const fn sort(&self) -> Sort<TaskSortKey> {
        self.sort
    }

    /// Returns the pagination window, if one is set.
    #[must_use]
    pub const fn pagination(&self) -> Option<Pagination> {
        self.pagination
    }

    /// Returns `true` when the task satisfies both the search and status
    /// filters.
    ///
    /// The search term must appear as a case-sensitive substring of the
    /// title or the description; the status filter is an exact match.
    #[must_use]
    pub fn matches(&self, task: &Task) -> bool {
        let matches_search = self.search.as_deref().is_none_or(|term| {
            task.title().contains(term)
                || task
                    .description()
                    .is_some_and(|description| description.contains(term))
        });
        let matches_status = self
            .status
            .is_none_or(|status| task.status() == status);
        matches_search && matches_status
    }

    /// Total ordering for list results: the effective sort, with ties
    /// broken by ascending identifier for deterministic pagination.
    #[must_use]
    pub fn compare(&self, a: &Task, b: &Task) -> Ordering {
        let by_key = self.sort.key.compare(a, b);
        let directed = match self.sort.direction {
            SortDirection::Asc => by_key,
            SortDirection::Desc => by_key.reverse(),
        };
        directed.then_with(|| a.id().cmp(&b.id()))
    }
}
