//! Two-tier task lookup: the store first, the sample dataset second.

use chrono::Utc;
use serde::Serialize;

use super::{sample::sample_tasks, StoreError, TaskStore};
use crate::models::{Task, TaskFilter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskSource {
    Store,
    Fallback,
}

#[derive(Debug, Clone)]
pub struct TaskListing {
    pub tasks: Vec<Task>,
    pub source: TaskSource,
}

/// List tasks, substituting the filtered sample dataset when the store has no
/// match or cannot be reached.
///
/// Only persistence failures trigger the fallback; a corrupt row is still an error.
pub async fn list_tasks(store: &dyn TaskStore, filter: &TaskFilter) -> Result<TaskListing, StoreError> {
    match store.list(filter).await {
        Ok(tasks) if !tasks.is_empty() => Ok(TaskListing {
            tasks,
            source: TaskSource::Store,
        }),
        Ok(_) => {
            tracing::debug!(?filter, "No stored tasks match; serving sample dataset");
            Ok(fallback(filter))
        }
        Err(StoreError::Unavailable(e)) => {
            tracing::warn!(error = %e, "Task store unreachable; serving sample dataset");
            Ok(fallback(filter))
        }
        Err(e) => Err(e),
    }
}

fn fallback(filter: &TaskFilter) -> TaskListing {
    let mut tasks: Vec<Task> = sample_tasks(Utc::now())
        .into_iter()
        .filter(|t| filter.matches(t))
        .collect();
    tasks.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));

    TaskListing {
        tasks,
        source: TaskSource::Fallback,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{NewTask, TaskPriority, TaskStatus, UpdateTask};
    use crate::store::MemoryTaskStore;
    use async_trait::async_trait;

    struct UnreachableStore;

    #[async_trait]
    impl TaskStore for UnreachableStore {
        async fn list(&self, _: &TaskFilter) -> Result<Vec<Task>, StoreError> {
            Err(StoreError::Unavailable(sqlx::Error::PoolTimedOut))
        }
        async fn create(&self, _: NewTask) -> Result<Task, StoreError> {
            Err(StoreError::Unavailable(sqlx::Error::PoolTimedOut))
        }
        async fn update(&self, _: i64, _: UpdateTask) -> Result<Task, StoreError> {
            Err(StoreError::Unavailable(sqlx::Error::PoolTimedOut))
        }
        async fn delete(&self, _: i64) -> Result<(), StoreError> {
            Err(StoreError::Unavailable(sqlx::Error::PoolTimedOut))
        }
    }

    struct CorruptStore;

    #[async_trait]
    impl TaskStore for CorruptStore {
        async fn list(&self, _: &TaskFilter) -> Result<Vec<Task>, StoreError> {
            Err(StoreError::Corrupt("unknown task status `archived`".into()))
        }
        async fn create(&self, _: NewTask) -> Result<Task, StoreError> {
            unreachable!()
        }
        async fn update(&self, _: i64, _: UpdateTask) -> Result<Task, StoreError> {
            unreachable!()
        }
        async fn delete(&self, _: i64) -> Result<(), StoreError> {
            unreachable!()
        }
    }

    #[tokio::test]
    async fn empty_store_serves_filtered_sample() {
        let store = MemoryTaskStore::new();
        let filter = TaskFilter { state: Some("Bihar".into()), ..Default::default() };

        let listing = list_tasks(&store, &filter).await.unwrap();
        assert_eq!(listing.source, TaskSource::Fallback);
        assert_eq!(listing.tasks.len(), 2);
        assert!(listing.tasks.iter().all(|t| t.state.as_deref() == Some("Bihar")));
    }

    #[tokio::test]
    async fn unreachable_store_serves_sample() {
        let listing = list_tasks(&UnreachableStore, &TaskFilter::default()).await.unwrap();
        assert_eq!(listing.source, TaskSource::Fallback);
        assert_eq!(listing.tasks.len(), 6);
    }

    #[tokio::test]
    async fn fallback_lists_newest_first() {
        let listing = list_tasks(&MemoryTaskStore::new(), &TaskFilter::default()).await.unwrap();
        assert!(listing
            .tasks
            .windows(2)
            .all(|pair| pair[0].created_at >= pair[1].created_at));
        assert_eq!(listing.tasks[0].title, "Manual verification - suspicious bulk enrollments");
    }

    #[tokio::test]
    async fn stored_tasks_win() {
        let store = MemoryTaskStore::new();
        store
            .create(NewTask {
                title: "Stored".into(),
                description: None,
                status: TaskStatus::Pending,
                priority: TaskPriority::Low,
                state: None,
                anomaly_type: None,
                assigned_to: None,
            })
            .await
            .unwrap();

        let listing = list_tasks(&store, &TaskFilter::default()).await.unwrap();
        assert_eq!(listing.source, TaskSource::Store);
        assert_eq!(listing.tasks.len(), 1);
        assert_eq!(listing.tasks[0].title, "Stored");
    }

    #[tokio::test]
    async fn corrupt_rows_are_not_masked() {
        let result = list_tasks(&CorruptStore, &TaskFilter::default()).await;
        assert!(matches!(result, Err(StoreError::Corrupt(_))));
    }
}
