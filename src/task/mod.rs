//! Task storage, mutation, and listing.
//!
//! Mutations flow through [`services::TaskMutationService`], which pairs
//! each durable write with an audit record. The module follows hexagonal
//! architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
