//! Shared state handed to every handler.

use crate::audit::{
    ports::AuditLogRepository,
    services::{AuditLogQueryService, AuditRecorder},
};
use crate::auth::CredentialVerifier;
use crate::task::{
    ports::TaskRepository,
    services::{TaskMutationService, TaskQueryService},
};
use mockable::DefaultClock;
use std::sync::Arc;

type Mutations = TaskMutationService<dyn TaskRepository, dyn AuditLogRepository, DefaultClock>;

/// Services and collaborators behind the HTTP surface.
#[derive(Clone)]
pub struct AppState {
    mutations: Arc<Mutations>,
    tasks: Arc<TaskQueryService<dyn TaskRepository>>,
    audit_logs: Arc<AuditLogQueryService<dyn AuditLogRepository>>,
    verifier: Arc<dyn CredentialVerifier>,
}

impl AppState {
    /// Wires the services over the given stores and credential check.
    #[must_use]
    pub fn new(
        task_repository: Arc<dyn TaskRepository>,
        audit_log_repository: Arc<dyn AuditLogRepository>,
        verifier: Arc<dyn CredentialVerifier>,
    ) -> Self {
        let clock = Arc::new(DefaultClock);
        let recorder = AuditRecorder::new(Arc::clone(&audit_log_repository), Arc::clone(&clock));
        Self {
            mutations: Arc::new(TaskMutationService::new(
                Arc::clone(&task_repository),
                recorder,
                clock,
            )),
            tasks: Arc::new(TaskQueryService::new(task_repository)),
            audit_logs: Arc::new(AuditLogQueryService::new(audit_log_repository)),
            verifier,
        }
    }

    /// Waits for audit writes dispatched so far to complete.
    pub async fn flush_audit_log(&self) {
        self.mutations.recorder().flush().await;
    }

    pub(crate) fn mutations(&self) -> &Mutations {
        &self.mutations
    }

    pub(crate) fn tasks(&self) -> &TaskQueryService<dyn TaskRepository> {
        &self.tasks
    }

    pub(crate) fn audit_logs(&self) -> &AuditLogQueryService<dyn AuditLogRepository> {
        &self.audit_logs
    }

    pub(crate) fn verifier(&self) -> &dyn CredentialVerifier {
        &*self.verifier
    }
}
