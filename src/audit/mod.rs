//! Append-only audit trail of task mutations.
//!
//! Every create, update, and delete of a task is followed by one
//! [`domain::AuditLogEntry`]. Recording is best-effort: see
//! [`services::AuditRecorder`].
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Recording and query services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
