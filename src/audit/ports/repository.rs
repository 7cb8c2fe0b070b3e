//! Repository port for the append-only audit log.

use crate::audit::domain::{AuditLogEntry, AuditLogId};
use crate::pagination::PageWindow;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for audit log repository operations.
pub type AuditLogRepositoryResult<T> = Result<T, AuditLogRepositoryError>;

/// Append-only audit log persistence contract. There is no update or
/// delete operation.
#[async_trait]
pub trait AuditLogRepository: Send + Sync {
    /// Appends one entry.
    ///
    /// # Errors
    ///
    /// Returns [`AuditLogRepositoryError::DuplicateEntry`] when the entry ID
    /// already exists.
    async fn append(&self, entry: &AuditLogEntry) -> AuditLogRepositoryResult<()>;

    /// Returns the entries inside `window`, newest timestamp first.
    async fn find_page(&self, window: PageWindow) -> AuditLogRepositoryResult<Vec<AuditLogEntry>>;

    /// Counts all entries.
    async fn count(&self) -> AuditLogRepositoryResult<u64>;
}

/// Errors returned by audit log repository implementations.
#[derive(Debug, Clone, Error)]
pub enum AuditLogRepositoryError {
    /// An entry with the same identifier already exists.
    #[error("duplicate audit log entry: {0}")]
    DuplicateEntry(AuditLogId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl AuditLogRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
