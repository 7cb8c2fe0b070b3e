//! Unit tests for the audit bounded context.
