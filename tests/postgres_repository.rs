//! `PostgreSQL` adapter tests.
//!
//! These run only when `TASKLEDGER_TEST_DATABASE_URL` points at a database
//! the tests may write to; otherwise each test returns early.

use eyre::{Result, WrapErr};
use mockable::DefaultClock;
use rstest::rstest;
use taskledger::audit::{
    adapters::postgres::PostgresAuditLogRepository,
    domain::{AuditAction, AuditLogEntry, ChangeSet},
    ports::AuditLogRepository,
};
use taskledger::pagination::{PageNumber, PageSize, PageWindow};
use taskledger::postgres::{PgPool, apply_schema, connect};
use taskledger::task::{
    adapters::postgres::PostgresTaskRepository,
    domain::{SearchTerm, Task, TaskChanges, TaskDescription, TaskTitle},
    ports::{TaskRepository, TaskRepositoryError},
};

const DATABASE_URL_VAR: &str = "TASKLEDGER_TEST_DATABASE_URL";

async fn pool() -> Result<Option<PgPool>> {
    let Ok(url) = std::env::var(DATABASE_URL_VAR) else {
        return Ok(None);
    };
    let pool = tokio::task::spawn_blocking(move || {
        let pool = connect(&url, 2)?;
        apply_schema(&pool)?;
        Ok::<_, taskledger::postgres::BoxError>(pool)
    })
    .await?
    .map_err(|err| eyre::eyre!(err))
    .wrap_err("connect to test database")?;
    Ok(Some(pool))
}

fn task(title: &str, description: &str) -> Result<Task> {
    Ok(Task::new(
        TaskTitle::new(title)?,
        TaskDescription::new(description)?,
        &DefaultClock,
    ))
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn task_round_trip_update_and_delete() -> Result<()> {
    let Some(pool) = pool().await? else {
        return Ok(());
    };
    let repository = PostgresTaskRepository::new(pool);
    let created = task("Postgres round trip", "first")?;
    repository.store(&created).await?;

    let duplicate = repository.store(&created).await;
    assert!(matches!(
        duplicate,
        Err(TaskRepositoryError::DuplicateTask(_))
    ));

    let changes = TaskChanges::between(
        &created,
        None,
        Some(TaskDescription::new("second")?),
    );
    let updated = repository.apply_changes(created.id(), &changes).await?;
    assert_eq!(updated.title(), created.title());
    assert_eq!(updated.description().as_str(), "second");

    let removed = repository.remove(created.id()).await?;
    assert_eq!(removed.map(|t| t.id()), Some(created.id()));
    assert!(repository.find_by_id(created.id()).await?.is_none());
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn search_escapes_like_wildcards() -> Result<()> {
    let Some(pool) = pool().await? else {
        return Ok(());
    };
    let repository = PostgresTaskRepository::new(pool);
    let marker = uuid_marker();
    let literal = task(&format!("{marker} 100% done"), "percent")?;
    let other = task(&format!("{marker} 1000 done"), "plain")?;
    repository.store(&literal).await?;
    repository.store(&other).await?;

    let term = SearchTerm::parse(Some(&format!("{marker} 100%")));
    let window = PageWindow::new(PageNumber::FIRST, PageSize::new(5));
    let found = repository.find_page(term.as_ref(), window).await?;
    let count = repository.count_matching(term.as_ref()).await?;

    assert_eq!(found.iter().map(Task::id).collect::<Vec<_>>(), vec![literal.id()]);
    assert_eq!(count, 1);

    repository.remove(literal.id()).await?;
    repository.remove(other.id()).await?;
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn audit_entries_persist_change_sets() -> Result<()> {
    let Some(pool) = pool().await? else {
        return Ok(());
    };
    let repository = PostgresAuditLogRepository::new(pool);
    let stored = task("Audited", "entry")?;
    let entry = AuditLogEntry::new(
        AuditAction::UpdateTask,
        stored.id(),
        ChangeSet::new().with_field("description", "entry"),
        &DefaultClock,
    );
    let before = repository.count().await?;

    repository.append(&entry).await?;

    assert_eq!(repository.count().await?, before + 1);
    let newest = repository
        .find_page(PageWindow::new(PageNumber::FIRST, PageSize::new(10)))
        .await?;
    let found = newest
        .iter()
        .find(|candidate| candidate.id() == entry.id())
        .ok_or_else(|| eyre::eyre!("appended entry not listed"))?;
    assert_eq!(found.action(), AuditAction::UpdateTask);
    assert_eq!(found.change_set(), entry.change_set());
    Ok(())
}

fn uuid_marker() -> String {
    taskledger::task::domain::TaskId::new().to_string()
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn page_far_past_the_end_is_empty() -> Result<()> {
    let Some(pool) = pool().await? else {
        return Ok(());
    };
    let tasks = PostgresTaskRepository::new(pool.clone());
    let audit_log = PostgresAuditLogRepository::new(pool);
    let window = PageWindow::new(PageNumber::new(u64::MAX), PageSize::new(5));

    assert!(tasks.find_page(None, window).await?.is_empty());
    assert!(audit_log.find_page(window).await?.is_empty());
    Ok(())
}
