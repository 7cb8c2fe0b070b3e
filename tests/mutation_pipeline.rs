//! Mutation pipeline wired over in-memory stores through the public API.

use eyre::{Result, eyre};
use mockable::DefaultClock;
use rstest::{fixture, rstest};
use serde_json::json;
use std::sync::Arc;
use taskledger::audit::{
    adapters::memory::InMemoryAuditLogRepository,
    domain::AuditAction,
    services::{AuditLogQueryService, AuditRecorder},
};
use taskledger::pagination::PageNumber;
use taskledger::task::{
    adapters::memory::InMemoryTaskRepository,
    domain::SearchTerm,
    services::{
        CreateTaskRequest, ListTasksRequest, TaskMutationService, TaskQueryService,
        UpdateTaskRequest,
    },
};

struct Pipeline {
    mutations: TaskMutationService<InMemoryTaskRepository, InMemoryAuditLogRepository, DefaultClock>,
    tasks: TaskQueryService<InMemoryTaskRepository>,
    logs: AuditLogQueryService<InMemoryAuditLogRepository>,
}

#[fixture]
fn pipeline() -> Pipeline {
    let task_store = Arc::new(InMemoryTaskRepository::new());
    let audit_store = Arc::new(InMemoryAuditLogRepository::new());
    let clock = Arc::new(DefaultClock);
    let recorder = AuditRecorder::new(Arc::clone(&audit_store), Arc::clone(&clock));
    Pipeline {
        mutations: TaskMutationService::new(Arc::clone(&task_store), recorder, clock),
        tasks: TaskQueryService::new(task_store),
        logs: AuditLogQueryService::new(audit_store),
    }
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_then_partial_update_audits_full_then_diff(pipeline: Pipeline) -> Result<()> {
    let created = pipeline
        .mutations
        .create(CreateTaskRequest::new("Buy milk", "2% milk from store"))
        .await?;
    assert_eq!(created.title().as_str(), "Buy milk");

    pipeline
        .mutations
        .update(
            created.id(),
            UpdateTaskRequest::new()
                .with_title("Buy milk")
                .with_description("Whole milk"),
        )
        .await?;
    pipeline.mutations.recorder().flush().await;

    let page = pipeline.logs.list(PageNumber::FIRST).await?;
    let [update, create] = page.items() else {
        return Err(eyre!("expected two audit entries, got {}", page.items().len()));
    };
    assert_eq!(create.action(), AuditAction::CreateTask);
    assert_eq!(
        create.change_set().clone().into_value(),
        json!({"title": "Buy milk", "description": "2% milk from store"})
    );
    assert_eq!(update.action(), AuditAction::UpdateTask);
    assert_eq!(
        update.change_set().clone().into_value(),
        json!({"description": "Whole milk"})
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn search_returns_matching_subset_newest_first(pipeline: Pipeline) -> Result<()> {
    for (title, description) in [
        ("Groceries", "buy MILK"),
        ("Laundry", "whites"),
        ("Milkshake", "vanilla"),
    ] {
        pipeline
            .mutations
            .create(CreateTaskRequest::new(title, description))
            .await?;
    }

    let page = pipeline
        .tasks
        .list(ListTasksRequest::new(PageNumber::FIRST).with_search(SearchTerm::parse(Some("milk"))))
        .await?;
    let titles: Vec<&str> = page.items().iter().map(|t| t.title().as_str()).collect();

    assert_eq!(titles, vec!["Milkshake", "Groceries"]);
    assert_eq!(page.total_pages(), 1);

    let beyond = pipeline
        .tasks
        .list(ListTasksRequest::new(PageNumber::new(2)))
        .await?;
    assert!(beyond.items().is_empty());
    Ok(())
}
