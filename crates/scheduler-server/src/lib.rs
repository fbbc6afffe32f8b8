//! Scheduler server library.
//!
//! Exposes configuration, logging bootstrap and the HTTP API so the binary
//! and the integration tests build the same server.

pub mod api;
pub mod config;
pub mod logging;
