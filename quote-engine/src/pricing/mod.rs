//! Pricing Engine
//!
//! Deterministic price resolution and quotation totaling over the static
//! pricing configuration. Resolution failures abort the whole quote and
//! carry the offending line so the form can highlight it.

mod quote_calculator;
mod tiers;

pub use quote_calculator::*;
pub use tiers::*;
