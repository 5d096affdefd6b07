//! Data models
//!
//! Plain serde models shared by the pricing engine and the reporting
//! aggregator. Leads and line items mirror the intake form's document
//! shape; pricing models mirror the static configuration file.

mod lead;
mod pricing;
mod quote;

pub use lead::*;
pub use pricing::*;
pub use quote::*;
