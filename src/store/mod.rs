//! Task persistence.
//!
//! [`TaskStore`] is implemented by [`PgTaskStore`] for a configured
//! database and by [`MemoryTaskStore`] otherwise. Read paths go through
//! [`fallback::list_tasks`], which substitutes the fixed sample dataset
//! when the store is empty or unreachable.

pub mod fallback;
pub mod memory;
pub mod postgres;
pub mod sample;

use async_trait::async_trait;

use crate::models::{NewTask, Task, TaskFilter, UpdateTask};

pub use fallback::{list_tasks, TaskListing, TaskSource};
pub use memory::MemoryTaskStore;
pub use postgres::PgTaskStore;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("task {0} not found")]
    NotFound(i64),

    #[error("task storage unavailable: {0}")]
    Unavailable(#[from] sqlx::Error),

    #[error("stored task is invalid: {0}")]
    Corrupt(String),
}

#[async_trait]
pub trait TaskStore: Send + Sync {
    /// Matching tasks, newest first.
    async fn list(&self, filter: &TaskFilter) -> Result<Vec<Task>, StoreError>;

    async fn create(&self, task: NewTask) -> Result<Task, StoreError>;

    async fn update(&self, id: i64, changes: UpdateTask) -> Result<Task, StoreError>;

    async fn delete(&self, id: i64) -> Result<(), StoreError>;
}
