//! In-process task store, used when no database is configured.

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use super::{StoreError, TaskStore};
use crate::models::{NewTask, Task, TaskFilter, UpdateTask};

#[derive(Debug, Default)]
struct Inner {
    next_id: i64,
    tasks: Vec<Task>,
}

#[derive(Debug, Default)]
pub struct MemoryTaskStore {
    inner: RwLock<Inner>,
}

impl MemoryTaskStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TaskStore for MemoryTaskStore {
    async fn list(&self, filter: &TaskFilter) -> Result<Vec<Task>, StoreError> {
        let inner = self.inner.read().await;
        let mut tasks: Vec<Task> = inner
            .tasks
            .iter()
            .filter(|t| filter.matches(t))
            .cloned()
            .collect();
        tasks.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(tasks)
    }

    async fn create(&self, task: NewTask) -> Result<Task, StoreError> {
        let mut inner = self.inner.write().await;
        inner.next_id += 1;

        let now = Utc::now();
        let task = Task {
            id: inner.next_id,
            title: task.title,
            description: task.description,
            status: task.status,
            priority: task.priority,
            state: task.state,
            anomaly_type: task.anomaly_type,
            assigned_to: task.assigned_to,
            created_at: now,
            updated_at: now,
        };
        inner.tasks.push(task.clone());
        Ok(task)
    }

    async fn update(&self, id: i64, changes: UpdateTask) -> Result<Task, StoreError> {
        let mut inner = self.inner.write().await;
        let task = inner
            .tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(StoreError::NotFound(id))?;

        changes.apply(task);
        task.updated_at = Utc::now();
        Ok(task.clone())
    }

    async fn delete(&self, id: i64) -> Result<(), StoreError> {
        let mut inner = self.inner.write().await;
        let before = inner.tasks.len();
        inner.tasks.retain(|t| t.id != id);

        if inner.tasks.len() == before {
            return Err(StoreError::NotFound(id));
        }
        Ok(())
    }
}
