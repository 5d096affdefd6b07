//! Error types for pricing and configuration
//!
//! Pricing errors are per-computation and abort that single total; they
//! carry the offending line index and product type so the intake form can
//! highlight the row. Reporting problems (malformed timestamps, invalid
//! period selections) are deliberately *not* represented here: they degrade
//! per-record with a logged warning instead of failing the whole page.

use thiserror::Error;

/// Application error for the quotation engine and configuration loader
#[derive(Debug, Clone, Error, PartialEq)]
pub enum AppError {
    /// A line item's product type has no entry in the product group mapping.
    /// Data-entry error; never silently defaulted.
    #[error("unknown product type '{product_type}'")]
    UnknownProductType {
        product_type: String,
        /// Index of the offending line item, when raised from a quote total
        line_index: Option<usize>,
    },

    /// An add-on selection references a kind absent from the add-on table.
    #[error("unknown add-on '{add_on}'")]
    UnknownAddOn { add_on: String },

    /// A Patches line item has no per-patch price.
    #[error("line {line_index}: Patches item is missing its per-patch price")]
    MissingPatchPrice { line_index: usize },

    /// No tier matched the quantity. Defensive: a well-formed table has an
    /// unbounded final tier, so this indicates a gap or a quantity below
    /// the first tier's minimum.
    #[error("no pricing tier for group '{group}', kind '{kind}', quantity {quantity}")]
    NoMatchingTier {
        group: String,
        kind: String,
        quantity: u32,
    },

    /// The pricing table failed structural validation at load time.
    /// Startup-time defect, not runtime-recoverable.
    #[error("invalid pricing table: {reason}")]
    InvalidPricingTable { reason: String },

    /// The pricing configuration file could not be read or parsed.
    #[error("failed to load pricing configuration from '{path}': {message}")]
    ConfigLoad { path: String, message: String },
}

impl AppError {
    /// Unknown product type raised outside a quote computation
    pub fn unknown_product_type(product_type: impl Into<String>) -> Self {
        Self::UnknownProductType {
            product_type: product_type.into(),
            line_index: None,
        }
    }

    /// Attach a line index to a per-line pricing error.
    ///
    /// Used by the quote calculator so resolution failures surface the row
    /// that caused them. Errors without a per-line dimension pass through.
    pub fn at_line(self, index: usize) -> Self {
        match self {
            Self::UnknownProductType { product_type, .. } => Self::UnknownProductType {
                product_type,
                line_index: Some(index),
            },
            other => other,
        }
    }

    /// Create a table-validation error
    pub fn invalid_table(reason: impl Into<String>) -> Self {
        Self::InvalidPricingTable {
            reason: reason.into(),
        }
    }
}

/// Type alias for Result with AppError
pub type AppResult<T> = Result<T, AppError>;
