//! HTTP API: task endpoints under `/api`, static front-end everywhere else.

pub mod error;
pub mod handlers;
pub mod routes;
pub mod types;

pub use error::ApiError;
pub use routes::{router, shutdown_signal, start_server, AppState};
