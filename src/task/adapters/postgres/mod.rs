//! `PostgreSQL` adapter for task storage.

mod models;
mod repository;
mod schema;

pub use repository::PostgresTaskRepository;
