//! Adapter implementations for audit log ports.

pub mod memory;
pub mod postgres;
