//! Filter and ordering tests for the task list query.

use crate::listing::{ListingError, Pagination, SortDirection};
use crate::task::domain::{PersistedTaskData, Task, TaskId, TaskQuery, TaskSortKey, TaskStatus};
use crate::testing::base_time;
use chrono::{DateTime, Duration, Utc};
use rstest::rstest;

fn task(id: i64, title: &str, description: Option<&str>, status: TaskStatus) -> Task {
    task_with_times(id, title, description, status, None, 0)
}

fn task_with_times(
    id: i64,
    title: &str,
    description: Option<&str>,
    status: TaskStatus,
    due_at: Option<DateTime<Utc>>,
    created_offset_secs: i64,
) -> Task {
    let created_at = base_time() + Duration::seconds(created_offset_secs);
    Task::from_persisted(PersistedTaskData {
        id: TaskId::new(id),
        title: title.to_owned(),
        description: description.map(ToOwned::to_owned),
        status,
        due_at,
        category_id: None,
        created_at,
        updated_at: created_at,
    })
}

#[rstest]
fn search_matches_substring_of_title_or_description() {
    let query = TaskQuery::new().with_search("plan");

    assert!(query.matches(&task(1, "Write plan", None, TaskStatus::Pending)));
    assert!(query.matches(&task(2, "Review", Some("the plan draft"), TaskStatus::Pending)));
    assert!(!query.matches(&task(3, "Groceries", Some("milk"), TaskStatus::Pending)));
}

#[rstest]
fn search_is_case_sensitive() {
    let query = TaskQuery::new().with_search("Plan");
    assert!(!query.matches(&task(1, "write plan", None, TaskStatus::Pending)));
}

#[rstest]
fn empty_search_matches_everything() {
    let blank = TaskQuery::new().with_search("");
    let omitted = TaskQuery::new();
    let subject = task(1, "anything", None, TaskStatus::Done);

    assert_eq!(blank.matches(&subject), omitted.matches(&subject));
    assert!(blank.matches(&subject));
}

#[rstest]
fn status_filter_is_exact_and_anded_with_search() {
    let query = TaskQuery::new()
        .with_search("plan")
        .with_status(TaskStatus::Doing);

    assert!(query.matches(&task(1, "Write plan", None, TaskStatus::Doing)));
    assert!(!query.matches(&task(2, "Write plan", None, TaskStatus::Done)));
    assert!(!query.matches(&task(3, "Groceries", None, TaskStatus::Doing)));
}

#[rstest]
#[case::title("title", TaskSortKey::Title)]
#[case::due_at("due_at", TaskSortKey::DueAt)]
#[case::created_at("created_at", TaskSortKey::CreatedAt)]
fn sort_key_parses_allow_listed_fields(#[case] raw: &str, #[case] expected: TaskSortKey) {
    assert_eq!(TaskSortKey::try_from(raw), Ok(expected));
    assert_eq!(expected.as_str(), raw);
}

#[rstest]
#[case::status_column("status")]
#[case::injection("created_at; DROP TABLE tasks")]
#[case::empty("")]
fn sort_key_rejects_fields_outside_allow_list(#[case] raw: &str) {
    assert_eq!(
        TaskSortKey::try_from(raw),
        Err(ListingError::UnknownSortKey(raw.to_owned()))
    );
}

#[rstest]
fn default_sort_is_created_at_descending_with_id_tie_break() {
    let query = TaskQuery::new();
    let older = task_with_times(1, "a", None, TaskStatus::Pending, None, 0);
    let newer = task_with_times(2, "b", None, TaskStatus::Pending, None, 60);
    let newer_twin = task_with_times(3, "c", None, TaskStatus::Pending, None, 60);

    let mut items = vec![newer_twin.clone(), older.clone(), newer.clone()];
    items.sort_by(|a, b| query.compare(a, b));

    let ids: Vec<i64> = items.iter().map(|t| t.id().value()).collect();
    assert_eq!(ids, vec![2, 3, 1]);
}

#[rstest]
fn ascending_title_sort_is_ordered() {
    let query = TaskQuery::new().with_sort(TaskSortKey::Title, SortDirection::Asc);
    let mut items = vec![
        task(1, "pear", None, TaskStatus::Pending),
        task(2, "apple", None, TaskStatus::Pending),
        task(3, "mango", None, TaskStatus::Pending),
    ];
    items.sort_by(|a, b| query.compare(a, b));

    let titles: Vec<&str> = items.iter().map(Task::title).collect();
    assert_eq!(titles, vec!["apple", "mango", "pear"]);
    for pair in items.windows(2) {
        if let [a, b] = pair {
            assert!(a.title() <= b.title());
        }
    }
}

#[rstest]
fn undated_tasks_sort_after_dated_ones_ascending() {
    let query = TaskQuery::new().with_sort(TaskSortKey::DueAt, SortDirection::Asc);
    let due_soon = base_time() + Duration::days(1);
    let due_later = base_time() + Duration::days(9);
    let mut items = vec![
        task_with_times(1, "undated", None, TaskStatus::Pending, None, 0),
        task_with_times(2, "later", None, TaskStatus::Pending, Some(due_later), 0),
        task_with_times(3, "soon", None, TaskStatus::Pending, Some(due_soon), 0),
    ];
    items.sort_by(|a, b| query.compare(a, b));

    let titles: Vec<&str> = items.iter().map(Task::title).collect();
    assert_eq!(titles, vec!["soon", "later", "undated"]);
}

#[rstest]
fn undated_tasks_sort_first_descending() {
    let query = TaskQuery::new().with_sort(TaskSortKey::DueAt, SortDirection::Desc);
    let due_soon = base_time() + Duration::days(1);
    let due_later = base_time() + Duration::days(9);
    let mut items = vec![
        task_with_times(1, "soon", None, TaskStatus::Pending, Some(due_soon), 0),
        task_with_times(2, "undated", None, TaskStatus::Pending, None, 0),
        task_with_times(3, "later", None, TaskStatus::Pending, Some(due_later), 0),
    ];
    items.sort_by(|a, b| query.compare(a, b));

    // Postgres puts NULLs first when descending; the comparator agrees.
    let titles: Vec<&str> = items.iter().map(Task::title).collect();
    assert_eq!(titles, vec!["undated", "later", "soon"]);
}

#[rstest]
fn pagination_is_validated_before_any_query_runs() {
    assert!(Pagination::new(0, 10).is_err());
    assert!(Pagination::new(1, 0).is_err());
    let window = Pagination::new(2, 5).expect("valid window");
    let query = TaskQuery::new().with_pagination(window);
    assert_eq!(query.pagination(), Some(window));
}
