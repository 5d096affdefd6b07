//! Quotation models
//!
//! Selection state owned by the quotation form (add-on toggles, discount
//! specifications) and the computed breakdown returned to it. None of this
//! is persisted by the core.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Add-on kind → quantity of items receiving that add-on.
///
/// Add-ons are priced against this quantity, not the order's total
/// quantity.
pub type AddOnSelection = HashMap<String, u32>;

/// Discount specification attached to a quote
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Discount {
    /// Line item the form attached this discount to (display only; the
    /// amounts apply to the quote as a whole)
    #[serde(default)]
    pub line_item_id: Option<String>,
    #[serde(flatten)]
    pub kind: DiscountKind,
}

/// Flat currency amount or percentage of the pre-discount subtotal
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "value", rename_all = "camelCase")]
pub enum DiscountKind {
    Flat(f64),
    Percent(f64),
}

/// Quote breakdown rendered live by the quotation form
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct QuoteBreakdown {
    /// Unit-priced lines plus Patches lines (per-patch price × quantity)
    pub subtotal: f64,
    /// Sum of selected add-on charges
    pub add_ons: f64,
    /// Flat discounts plus percentage discounts of the subtotal
    pub discount_amount: f64,
    /// subtotal + add_ons − discount_amount, floored at zero
    pub total: f64,
}
