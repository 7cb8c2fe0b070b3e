//! Taskledger: task tracking over HTTP with an append-only audit trail.
//!
//! Clients create, list, search, update, and delete short text tasks. Every
//! successful mutation is followed by a best-effort audit entry recording
//! what changed.
//!
//! # Architecture
//!
//! Each bounded context follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for storage
//! - **Adapters**: In-memory and `PostgreSQL` implementations of ports
//! - **Services**: Orchestration used by the HTTP surface
//!
//! # Modules
//!
//! - [`task`]: Task validation, mutation pipeline, and listing
//! - [`audit`]: Audit entries, best-effort recorder, and listing
//! - [`auth`]: HTTP Basic credential checking
//! - [`http`]: Axum router, handlers, and error mapping
//! - [`pagination`]: Fixed-size page windows
//! - [`config`]: Command-line and environment configuration
//! - [`postgres`]: Shared connection pool and schema setup

pub mod audit;
pub mod auth;
pub mod config;
pub mod http;
pub mod pagination;
pub mod postgres;
pub mod task;
