use crate::dates::format_date;
use crate::error::CoreError;
use crate::models::{CompletionResult, NewTaskData, Task, TaskRow};
use crate::recurrence::{advance, RecurrenceRule};
use crate::repository::{SqliteRepository, TaskRepository};
use async_trait::async_trait;
use chrono::NaiveDate;

#[async_trait]
impl TaskRepository for SqliteRepository {
    async fn add_task(&self, data: NewTaskData) -> Result<i64, CoreError> {
        let result = sqlx::query(
            r#"INSERT INTO scheduler (date, title, comment, repeat)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(format_date(data.date))
        .bind(&data.title)
        .bind(&data.comment)
        .bind(&data.repeat)
        .execute(self.pool())
        .await?;

        let id = result.last_insert_rowid();
        tracing::debug!(id, title = %data.title, "task added");
        Ok(id)
    }

    async fn find_task_by_id(&self, id: i64) -> Result<Option<Task>, CoreError> {
        let row: Option<TaskRow> = sqlx::query_as(
            "SELECT id, date, title, comment, repeat FROM scheduler WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(self.pool())
        .await?;
        row.map(Task::try_from).transpose()
    }

    async fn find_tasks(&self, limit: u32) -> Result<Vec<Task>, CoreError> {
        let rows: Vec<TaskRow> = sqlx::query_as(
            "SELECT id, date, title, comment, repeat FROM scheduler ORDER BY date, id LIMIT $1",
        )
        .bind(i64::from(limit))
        .fetch_all(self.pool())
        .await?;
        rows.into_iter().map(Task::try_from).collect()
    }

    async fn update_task(&self, id: i64, data: NewTaskData) -> Result<Task, CoreError> {
        let result = sqlx::query(
            "UPDATE scheduler SET date = $1, title = $2, comment = $3, repeat = $4 WHERE id = $5",
        )
        .bind(format_date(data.date))
        .bind(&data.title)
        .bind(&data.comment)
        .bind(&data.repeat)
        .bind(id)
        .execute(self.pool())
        .await?;

        if result.rows_affected() != 1 {
            return Err(CoreError::NotFound(id.to_string()));
        }
        tracing::debug!(id, "task updated");
        Ok(data.with_id(id))
    }

    async fn delete_task(&self, id: i64) -> Result<(), CoreError> {
        let result = sqlx::query("DELETE FROM scheduler WHERE id = $1")
            .bind(id)
            .execute(self.pool())
            .await?;

        if result.rows_affected() != 1 {
            return Err(CoreError::NotFound(id.to_string()));
        }
        tracing::debug!(id, "task deleted");
        Ok(())
    }

    async fn complete_task(&self, id: i64, today: NaiveDate) -> Result<CompletionResult, CoreError> {
        // Each write only applies to the row as it was read; a concurrent
        // change makes it miss, and the task is read again.
        loop {
            let mut task = self
                .find_task_by_id(id)
                .await?
                .ok_or_else(|| CoreError::NotFound(id.to_string()))?;
            let read_date = format_date(task.date);

            let rule = RecurrenceRule::parse_optional(&task.repeat)?;
            if !rule.is_recurring() {
                let result = sqlx::query(
                    "DELETE FROM scheduler WHERE id = $1 AND date = $2 AND repeat = $3",
                )
                .bind(id)
                .bind(&read_date)
                .bind(&task.repeat)
                .execute(self.pool())
                .await?;

                if result.rows_affected() == 1 {
                    tracing::info!(id, "one-shot task done, deleted");
                    return Ok(CompletionResult::Deleted(task));
                }
            } else {
                task.date = advance(rule, task.date, today)?;
                let result = sqlx::query(
                    "UPDATE scheduler SET date = $1 WHERE id = $2 AND date = $3 AND repeat = $4",
                )
                .bind(format_date(task.date))
                .bind(id)
                .bind(&read_date)
                .bind(&task.repeat)
                .execute(self.pool())
                .await?;

                if result.rows_affected() == 1 {
                    tracing::info!(id, next = %task.date, "recurring task done, rescheduled");
                    return Ok(CompletionResult::Rescheduled(task));
                }
            }
            tracing::debug!(id, "task changed while completing, retrying");
        }
    }
}
