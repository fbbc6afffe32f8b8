use scheduler_core::models::Task;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TaskIdResponse {
    pub id: i64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TasksResponse {
    pub tasks: Vec<Task>,
}

/// Serializes as `{}`.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct EmptyResponse {}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct IdParams {
    pub id: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct NextDateParams {
    pub now: String,
    pub date: String,
    pub repeat: String,
}
