//! Shared types for the embroidery order-management core
//!
//! Data models and error types used by the quotation engine and the
//! reporting aggregator. This crate performs no I/O; everything here is
//! plain data owned by the caller.

pub mod error;
pub mod models;

// Re-exports
pub use error::{AppError, AppResult};
pub use serde::{Deserialize, Serialize};
