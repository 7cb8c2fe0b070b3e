//! Best-effort recording of audit entries.
//!
//! [`AuditRecorder::record`] stamps the entry synchronously and hands the
//! write to a detached Tokio task. The caller never sees the outcome: a
//! failed append is logged and dropped, never retried. Audit completeness is
//! therefore not transactional with the mutation it describes, and an entry
//! may become queryable after the mutation's response has been sent.

use crate::audit::{
    domain::{AuditAction, AuditLogEntry, ChangeSet},
    ports::AuditLogRepository,
};
use crate::task::domain::TaskId;
use mockable::Clock;
use std::sync::{Arc, Mutex, PoisonError};
use tokio::task::{JoinError, JoinSet};
use tracing::{debug, error};

/// Dispatches audit writes without blocking or failing the caller.
pub struct AuditRecorder<L, C>
where
    L: AuditLogRepository + ?Sized + 'static,
    C: Clock + Send + Sync,
{
    repository: Arc<L>,
    clock: Arc<C>,
    pending: Arc<Mutex<JoinSet<()>>>,
}

impl<L, C> Clone for AuditRecorder<L, C>
where
    L: AuditLogRepository + ?Sized + 'static,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            clock: Arc::clone(&self.clock),
            pending: Arc::clone(&self.pending),
        }
    }
}

impl<L, C> AuditRecorder<L, C>
where
    L: AuditLogRepository + ?Sized + 'static,
    C: Clock + Send + Sync,
{
    /// Creates a recorder writing to `repository`.
    #[must_use]
    pub fn new(repository: Arc<L>, clock: Arc<C>) -> Self {
        Self {
            repository,
            clock,
            pending: Arc::new(Mutex::new(JoinSet::new())),
        }
    }

    /// Builds an entry stamped with the current time and schedules its
    /// append.
    ///
    /// # Panics
    ///
    /// Panics when called outside a Tokio runtime.
    pub fn record(&self, action: AuditAction, task_id: TaskId, change_set: ChangeSet) {
        let entry = AuditLogEntry::new(action, task_id, change_set, &*self.clock);
        let repository = Arc::clone(&self.repository);

        let mut pending = self.pending.lock().unwrap_or_else(PoisonError::into_inner);
        while let Some(outcome) = pending.try_join_next() {
            report_join_outcome(outcome);
        }
        pending.spawn(async move {
            match repository.append(&entry).await {
                Ok(()) => debug!(
                    audit_log_id = %entry.id(),
                    task_id = %entry.task_id(),
                    action = %entry.action(),
                    "audit log entry recorded"
                ),
                Err(err) => error!(
                    audit_log_id = %entry.id(),
                    task_id = %entry.task_id(),
                    action = %entry.action(),
                    error = %err,
                    "failed to record audit log entry"
                ),
            }
        });
    }

    /// Waits for every write scheduled so far to finish.
    ///
    /// Used on shutdown so in-flight entries are not lost with the runtime.
    pub async fn flush(&self) {
        let mut drained = {
            let mut pending = self.pending.lock().unwrap_or_else(PoisonError::into_inner);
            std::mem::take(&mut *pending)
        };
        while let Some(outcome) = drained.join_next().await {
            report_join_outcome(outcome);
        }
    }
}

fn report_join_outcome(outcome: Result<(), JoinError>) {
    if let Err(err) = outcome {
        error!(error = %err, "audit log write task did not complete");
    }
}
