//! Quotation and reporting engine
//!
//! The two computation components behind the order-management UI:
//!
//! - [`pricing`] — tiered unit/add-on price resolution and quote totaling,
//!   called synchronously by the quotation form as the user edits an order;
//! - [`reports`] — period filtering and sales aggregation over a snapshot
//!   of lead records, called by the report pages.
//!
//! Both are pure functions over in-memory data: no I/O, no shared mutable
//! state between calls. The pricing table is loaded once via [`config`] and
//! treated as read-only for the life of the process.

pub mod config;
pub mod pricing;
pub mod reports;
pub mod utils;

pub use config::Config;
