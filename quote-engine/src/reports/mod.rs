//! Reporting Aggregator
//!
//! Time-windowed filtering and grouped summation over a snapshot of lead
//! records. Every function is a single-pass pure reduction; malformed
//! records degrade per-record with a logged warning instead of failing the
//! whole report.

mod aggregator;
mod period;

pub use aggregator::*;
pub use period::*;
