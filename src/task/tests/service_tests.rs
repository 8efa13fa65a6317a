//! Service orchestration tests for task CRUD and listing.

use std::sync::Arc;

use crate::listing::{Pagination, SortDirection};
use crate::task::{
    adapters::memory::InMemoryTaskRepository,
    domain::{NewTask, Task, TaskId, TaskPatch, TaskQuery, TaskSortKey, TaskStatus},
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
    services::{CreateTaskRequest, TaskService, TaskServiceError},
};
use crate::testing::StepClock;
use rstest::{fixture, rstest};

type TestService = TaskService<InMemoryTaskRepository, StepClock>;

#[fixture]
fn service() -> TestService {
    TaskService::new(
        Arc::new(InMemoryTaskRepository::new()),
        Arc::new(StepClock::default()),
    )
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_assigns_id_defaults_and_timestamps(service: TestService) {
    let created = service
        .create_task(CreateTaskRequest::new("Write plan").with_description(""))
        .await
        .expect("creation should succeed");

    assert_eq!(created.id(), TaskId::new(1));
    assert_eq!(created.title(), "Write plan");
    assert_eq!(created.description(), None);
    assert_eq!(created.status(), TaskStatus::Pending);
    assert_eq!(created.updated_at(), created.created_at());

    let fetched = service
        .get_task(created.id())
        .await
        .expect("lookup should succeed");
    assert_eq!(fetched, created);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn empty_title_update_keeps_title_while_status_changes(service: TestService) {
    let created = service
        .create_task(CreateTaskRequest::new("Write plan"))
        .await
        .expect("creation should succeed");

    let updated = service
        .update_task(
            created.id(),
            TaskPatch::new().with_title("").with_status(TaskStatus::Doing),
        )
        .await
        .expect("update should succeed");

    assert_eq!(updated.title(), "Write plan");
    assert_eq!(updated.status(), TaskStatus::Doing);
    assert!(updated.updated_at() > created.updated_at());

    let stored = service
        .get_task(created.id())
        .await
        .expect("lookup should succeed");
    assert_eq!(stored, updated);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_of_unknown_task_is_not_found(service: TestService) {
    let missing = TaskId::new(404);
    let err = service
        .update_task(missing, TaskPatch::new().with_title("anything"))
        .await
        .expect_err("update should fail");
    assert!(matches!(err, TaskServiceError::NotFound(id) if id == missing));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn get_and_delete_report_not_found_consistently(service: TestService) {
    let missing = TaskId::new(9);

    let get_err = service.get_task(missing).await.expect_err("get should fail");
    assert!(matches!(get_err, TaskServiceError::NotFound(id) if id == missing));

    let delete_err = service
        .delete_task(missing)
        .await
        .expect_err("delete should fail");
    assert!(matches!(delete_err, TaskServiceError::NotFound(id) if id == missing));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn delete_removes_the_task(service: TestService) {
    let created = service
        .create_task(CreateTaskRequest::new("Disposable"))
        .await
        .expect("creation should succeed");

    service
        .delete_task(created.id())
        .await
        .expect("delete should succeed");

    let err = service
        .get_task(created.id())
        .await
        .expect_err("get should fail after delete");
    assert!(matches!(err, TaskServiceError::NotFound(_)));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn listing_filters_sorts_and_paginates(service: TestService) {
    for (title, status) in [
        ("plan draft", TaskStatus::Doing),
        ("plan review", TaskStatus::Doing),
        ("plan signoff", TaskStatus::Done),
        ("groceries", TaskStatus::Doing),
    ] {
        let created = service
            .create_task(CreateTaskRequest::new(title))
            .await
            .expect("creation should succeed");
        if status != TaskStatus::Pending {
            service
                .update_task(created.id(), TaskPatch::new().with_status(status))
                .await
                .expect("status update should succeed");
        }
    }

    let window = Pagination::new(1, 1).expect("valid window");
    let query = TaskQuery::new()
        .with_search("plan")
        .with_status(TaskStatus::Doing)
        .with_sort(TaskSortKey::Title, SortDirection::Asc)
        .with_pagination(window);

    let (tasks, meta) = service
        .list_tasks(&query)
        .await
        .expect("listing should succeed");

    let titles: Vec<&str> = tasks.iter().map(Task::title).collect();
    assert_eq!(titles, vec!["plan draft"]);
    assert_eq!(meta.total, 2);
    assert_eq!(meta.page, 1);
    assert_eq!(meta.page_size, 1);
    assert_eq!(meta.total_pages, 2);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn unpaginated_listing_returns_the_full_matching_set(service: TestService) {
    for title in ["one", "two", "three"] {
        service
            .create_task(CreateTaskRequest::new(title))
            .await
            .expect("creation should succeed");
    }

    let (tasks, meta) = service
        .list_tasks(&TaskQuery::new())
        .await
        .expect("listing should succeed");

    assert_eq!(tasks.len(), 3);
    assert_eq!(meta.total, 3);
    assert_eq!(meta.total_pages, 1);
}

mockall::mock! {
    Repo {}

    #[async_trait::async_trait]
    impl TaskRepository for Repo {
        async fn save(&self, task: &NewTask) -> TaskRepositoryResult<Task>;
        async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>>;
        async fn find_by_query(&self, query: &TaskQuery) -> TaskRepositoryResult<(Vec<Task>, u64)>;
        async fn update(&self, task: &Task) -> TaskRepositoryResult<Task>;
        async fn delete(&self, id: TaskId) -> TaskRepositoryResult<()>;
    }
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn store_failures_surface_as_repository_errors() {
    let mut repo = MockRepo::new();
    repo.expect_find_by_query().returning(|_| {
        Err(TaskRepositoryError::persistence(std::io::Error::other(
            "connection refused",
        )))
    });
    let failing = TaskService::new(Arc::new(repo), Arc::new(StepClock::default()));

    let err = failing
        .list_tasks(&TaskQuery::new())
        .await
        .expect_err("listing should fail");
    assert!(matches!(err, TaskServiceError::Repository(_)));
}
