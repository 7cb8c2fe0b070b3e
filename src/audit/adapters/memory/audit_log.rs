//! In-memory append-only audit log.

use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::{Arc, RwLock};

use crate::audit::{
    domain::{AuditLogEntry, AuditLogId},
    ports::{AuditLogRepository, AuditLogRepositoryError, AuditLogRepositoryResult},
};
use crate::pagination::PageWindow;

/// Thread-safe in-memory audit log.
#[derive(Debug, Clone, Default)]
pub struct InMemoryAuditLogRepository {
    state: Arc<RwLock<InMemoryAuditLogState>>,
}

#[derive(Debug, Default)]
struct InMemoryAuditLogState {
    entries: Vec<AuditLogEntry>,
    ids: HashSet<AuditLogId>,
}

impl InMemoryAuditLogRepository {
    /// Creates an empty in-memory audit log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AuditLogRepository for InMemoryAuditLogRepository {
    async fn append(&self, entry: &AuditLogEntry) -> AuditLogRepositoryResult<()> {
        let mut state = self.state.write().map_err(|err| {
            AuditLogRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        if !state.ids.insert(entry.id()) {
            return Err(AuditLogRepositoryError::DuplicateEntry(entry.id()));
        }
        state.entries.push(entry.clone());
        Ok(())
    }

    async fn find_page(&self, window: PageWindow) -> AuditLogRepositoryResult<Vec<AuditLogEntry>> {
        let state = self.state.read().map_err(|err| {
            AuditLogRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        // Entries are appended in order, so the reverse walk breaks
        // timestamp ties newest-first.
        let mut ordered: Vec<&AuditLogEntry> = state.entries.iter().rev().collect();
        ordered.sort_by(|left, right| right.timestamp().cmp(&left.timestamp()));
        Ok(window.apply(ordered).cloned().collect())
    }

    async fn count(&self) -> AuditLogRepositoryResult<u64> {
        let state = self.state.read().map_err(|err| {
            AuditLogRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        u64::try_from(state.entries.len()).map_err(AuditLogRepositoryError::persistence)
    }
}
