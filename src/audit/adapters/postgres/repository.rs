//! `PostgreSQL` repository implementation for the audit log.

use super::{
    models::{AuditLogRow, NewAuditLogRow},
    schema::audit_logs,
};
use crate::audit::{
    domain::{AuditAction, AuditLogEntry, AuditLogId, ChangeSet, PersistedAuditLogData},
    ports::{AuditLogRepository, AuditLogRepositoryError, AuditLogRepositoryResult},
};
use crate::pagination::PageWindow;
use crate::postgres::{PgPool, get_conn_with, run_blocking_with};
use crate::task::domain::TaskId;
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};

/// `PostgreSQL`-backed audit log.
#[derive(Debug, Clone)]
pub struct PostgresAuditLogRepository {
    pool: PgPool,
}

impl PostgresAuditLogRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> AuditLogRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> AuditLogRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        run_blocking_with(
            move || {
                let mut connection = get_conn_with(&pool, AuditLogRepositoryError::persistence)?;
                f(&mut connection)
            },
            AuditLogRepositoryError::persistence,
        )
        .await
    }
}

#[async_trait]
impl AuditLogRepository for PostgresAuditLogRepository {
    async fn append(&self, entry: &AuditLogEntry) -> AuditLogRepositoryResult<()> {
        let entry_id = entry.id();
        let new_row = to_new_row(entry);

        self.run_blocking(move |connection| {
            diesel::insert_into(audit_logs::table)
                .values(&new_row)
                .execute(connection)
                .map_err(|err| match err {
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                        AuditLogRepositoryError::DuplicateEntry(entry_id)
                    }
                    _ => AuditLogRepositoryError::persistence(err),
                })?;
            Ok(())
        })
        .await
    }

    async fn find_page(&self, window: PageWindow) -> AuditLogRepositoryResult<Vec<AuditLogEntry>> {
        let offset =
            i64::try_from(window.offset()).map_err(AuditLogRepositoryError::persistence)?;
        let limit = i64::try_from(window.limit()).map_err(AuditLogRepositoryError::persistence)?;

        self.run_blocking(move |connection| {
            let rows = audit_logs::table
                .select(AuditLogRow::as_select())
                .order((audit_logs::recorded_at.desc(), audit_logs::id.desc()))
                .offset(offset)
                .limit(limit)
                .load::<AuditLogRow>(connection)
                .map_err(AuditLogRepositoryError::persistence)?;
            rows.into_iter().map(row_to_entry).collect()
        })
        .await
    }

    async fn count(&self) -> AuditLogRepositoryResult<u64> {
        self.run_blocking(move |connection| {
            let count = audit_logs::table
                .count()
                .get_result::<i64>(connection)
                .map_err(AuditLogRepositoryError::persistence)?;
            u64::try_from(count).map_err(AuditLogRepositoryError::persistence)
        })
        .await
    }
}

fn to_new_row(entry: &AuditLogEntry) -> NewAuditLogRow {
    NewAuditLogRow {
        id: entry.id().into_inner(),
        action: entry.action().as_str().to_owned(),
        task_id: entry.task_id().into_inner(),
        change_set: entry.change_set().clone().into_value(),
        recorded_at: entry.timestamp(),
    }
}

fn row_to_entry(row: AuditLogRow) -> AuditLogRepositoryResult<AuditLogEntry> {
    let AuditLogRow {
        id,
        action: persisted_action,
        task_id,
        change_set: persisted_change_set,
        recorded_at,
    } = row;

    let action = AuditAction::try_from(persisted_action.as_str())
        .map_err(AuditLogRepositoryError::persistence)?;
    let change_set = ChangeSet::try_from(persisted_change_set)
        .map_err(AuditLogRepositoryError::persistence)?;

    let data = PersistedAuditLogData {
        id: AuditLogId::from_uuid(id),
        timestamp: recorded_at,
        action,
        task_id: TaskId::from_uuid(task_id),
        change_set,
    };
    Ok(AuditLogEntry::from_persisted(data))
}
