//! `PostgreSQL` adapters for inspection task persistence.

mod models;
mod repository;
mod schema;

pub use repository::PostgresInspectionTaskRepository;
