use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DisplayFromStr};
use sqlx::FromRow;

use crate::dates::parse_date;
use crate::error::CoreError;

/// A stored task.
///
/// Serialized with the id as a decimal string and the date as `YYYYMMDD`,
/// which is the shape web clients exchange.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    #[serde_as(as = "DisplayFromStr")]
    pub id: i64,
    #[serde(with = "crate::dates::compact")]
    pub date: NaiveDate,
    pub title: String,
    pub comment: String,
    /// Raw repeat rule, empty for one-shot tasks.
    pub repeat: String,
}

/// Raw task fields as submitted by a client.
///
/// Every field is free text; missing fields are empty. Nothing here is
/// validated until the draft goes through [`crate::normalizer::normalize`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TaskDraft {
    pub id: String,
    pub date: String,
    pub title: String,
    pub comment: String,
    pub repeat: String,
}

/// A normalized task ready to be stored; the store assigns the id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTaskData {
    pub date: NaiveDate,
    pub title: String,
    pub comment: String,
    pub repeat: String,
}

impl NewTaskData {
    pub fn with_id(self, id: i64) -> Task {
        Task {
            id,
            date: self.date,
            title: self.title,
            comment: self.comment,
            repeat: self.repeat,
        }
    }
}

/// Row as laid out in the `scheduler` table.
#[derive(Debug, Clone, FromRow)]
pub(crate) struct TaskRow {
    pub id: i64,
    pub date: String,
    pub title: String,
    pub comment: String,
    pub repeat: String,
}

impl TryFrom<TaskRow> for Task {
    type Error = CoreError;

    fn try_from(row: TaskRow) -> Result<Self, Self::Error> {
        Ok(Task {
            id: row.id,
            date: parse_date(&row.date)?,
            title: row.title,
            comment: row.comment,
            repeat: row.repeat,
        })
    }
}

/// Outcome of marking a task as done.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompletionResult {
    /// One-shot task, removed from the store.
    Deleted(Task),
    /// Recurring task, moved to its next occurrence.
    Rescheduled(Task),
}

/// Parses a task id received as text.
pub fn parse_task_id(text: &str) -> Result<i64, CoreError> {
    text.parse()
        .map_err(|_| CoreError::InvalidId(text.to_string()))
}
