//! In-memory inspection task repository.

mod task;

pub use task::InMemoryInspectionTaskRepository;
