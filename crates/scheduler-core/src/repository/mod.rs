use crate::db::DbPool;
use crate::error::CoreError;
use crate::models::{CompletionResult, NewTaskData, Task};
use async_trait::async_trait;
use chrono::NaiveDate;

pub mod tasks;

/// Maximum number of tasks returned by a listing.
pub const DEFAULT_LIST_LIMIT: u32 = 50;

/// Persistence operations over tasks.
#[async_trait]
pub trait TaskRepository {
    /// Stores a normalized task and returns its new id.
    async fn add_task(&self, data: NewTaskData) -> Result<i64, CoreError>;
    async fn find_task_by_id(&self, id: i64) -> Result<Option<Task>, CoreError>;
    /// Tasks ordered by date ascending, at most `limit` of them.
    async fn find_tasks(&self, limit: u32) -> Result<Vec<Task>, CoreError>;
    /// Replaces every field of task `id`; `NotFound` unless exactly one row changed.
    async fn update_task(&self, id: i64, data: NewTaskData) -> Result<Task, CoreError>;
    async fn delete_task(&self, id: i64) -> Result<(), CoreError>;
    /// Marks a task as done: one-shot tasks are deleted, recurring ones move
    /// to their first occurrence after `today`.
    async fn complete_task(&self, id: i64, today: NaiveDate) -> Result<CompletionResult, CoreError>;
}

/// SQLite implementation of the repository pattern
pub struct SqliteRepository {
    pool: DbPool,
}

impl SqliteRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Get a reference to the database pool for internal use across modules
    pub(crate) fn pool(&self) -> &DbPool {
        &self.pool
    }
}
