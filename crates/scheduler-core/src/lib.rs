//! # Scheduler Core Library
//!
//! Date and recurrence logic plus task storage for the scheduler service.
//!
//! ## Core Modules
//!
//! - [`dates`]: Canonical `YYYYMMDD` date parsing and formatting
//! - [`recurrence`]: Repeat-rule parser and occurrence advancer
//! - [`normalizer`]: Date policy applied to tasks on create/update
//! - [`models`]: Task records and client drafts
//! - [`db`]: Database connection and migration management
//! - [`repository`]: Data access layer with Repository pattern
//! - [`clock`]: Source of "today"
//! - [`error`]: Error taxonomy shared by every layer
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use scheduler_core::{
//!     clock::{Clock, SystemClock}, db, models::TaskDraft, normalizer::normalize,
//!     repository::{SqliteRepository, TaskRepository},
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let pool = db::establish_connection("scheduler.db").await?;
//!     let repo = SqliteRepository::new(pool);
//!
//!     let draft = TaskDraft {
//!         title: "Water the plants".to_string(),
//!         repeat: "d 3".to_string(),
//!         ..Default::default()
//!     };
//!     let data = normalize(draft, SystemClock.today())?;
//!     let id = repo.add_task(data).await?;
//!     println!("Created task {}", id);
//!
//!     Ok(())
//! }
//! ```

pub mod clock;
pub mod dates;
pub mod db;
pub mod error;
pub mod models;
pub mod normalizer;
pub mod recurrence;
pub mod repository;
