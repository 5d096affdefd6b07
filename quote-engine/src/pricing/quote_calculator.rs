//! Quote Calculator
//!
//! Compose per-line prices, add-on charges and discounts into a quote
//! breakdown with support for:
//! - Tiered unit pricing per line (Patches priced per patch instead)
//! - Add-on charges resolved against the selected add-on quantities
//! - Flat and percentage discounts
//!
//! Uses rust_decimal for precision calculations.

use rust_decimal::prelude::*;
use shared::error::{AppError, AppResult};
use shared::models::{
    AddOnChargeMode, AddOnSelection, Discount, DiscountKind, LineItem, PricingConfig,
    QuoteBreakdown,
};

use super::tiers::{add_on_price, unit_price};

/// Rounding strategy for monetary values (2 decimal places, half-up)
const DECIMAL_PLACES: u32 = 2;

// ==================== Conversion Helpers ====================

/// Convert f64 to Decimal for calculation
#[inline]
pub fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_default()
}

/// Convert Decimal back to f64 for display, rounded to 2 decimal places
#[inline]
pub fn to_f64(value: Decimal) -> f64 {
    value
        .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        .unwrap_or_default()
}

// ==================== Subtotal ====================

/// Sum the order's line items.
///
/// Non-Patches lines resolve a unit price from the tier tables; Patches
/// lines use their explicit per-patch price. Any resolution failure aborts
/// the sum and carries the line index.
fn compute_subtotal(config: &PricingConfig, order: &[LineItem]) -> AppResult<Decimal> {
    let mut subtotal = Decimal::ZERO;

    for (index, item) in order.iter().enumerate() {
        let quantity = Decimal::from(item.quantity);

        if item.is_patches() {
            let price = item
                .price_per_patch
                .ok_or(AppError::MissingPatchPrice { line_index: index })?;
            subtotal += to_decimal(price) * quantity;
        } else {
            let price = unit_price(
                config,
                &item.product_type,
                item.quantity,
                item.embroidery_or_default(),
            )
            .map_err(|e| e.at_line(index))?;
            subtotal += to_decimal(price) * quantity;
        }
    }

    Ok(subtotal)
}

// ==================== Add-On Charges ====================

/// Sum the selected add-on charges.
///
/// Each add-on resolves its tier price against the quantity of items
/// receiving it; per-item add-ons multiply by that quantity, flat fees
/// charge once. Zero-quantity selections contribute nothing.
fn compute_add_ons(config: &PricingConfig, selection: &AddOnSelection) -> AppResult<Decimal> {
    let mut total = Decimal::ZERO;

    for (add_on, &quantity) in selection {
        if quantity == 0 {
            continue;
        }
        let price = to_decimal(add_on_price(config, add_on, quantity)?);
        // charge_mode is known to exist: add_on_price resolved the entry
        let charge = match config.add_on_pricing[add_on].charge_mode {
            AddOnChargeMode::PerItem => price * Decimal::from(quantity),
            AddOnChargeMode::Flat => price,
        };
        total += charge;
    }

    Ok(total)
}

// ==================== Discounts ====================

/// Sum the discount specifications.
///
/// Percentage discounts apply to the pre-discount subtotal *before*
/// add-ons. That basis is load-bearing for numeric parity with the
/// quotation form and must not drift to subtotal + add_ons.
fn compute_discounts(discounts: &[Discount], subtotal: Decimal) -> Decimal {
    let hundred = Decimal::ONE_HUNDRED;

    discounts
        .iter()
        .map(|d| match d.kind {
            DiscountKind::Flat(amount) => to_decimal(amount),
            DiscountKind::Percent(percent) => subtotal * to_decimal(percent) / hundred,
        })
        .sum()
}

// ==================== Main Calculator ====================

/// Compute the full quote breakdown for an order.
///
/// # Calculation Steps
/// 1. Subtotal: tiered unit price × quantity per line, Patches via
///    per-patch price × quantity
/// 2. Add-on charges from the selection map
/// 3. Discounts: flat amounts plus percentages of the subtotal (step 1)
/// 4. total = subtotal + add_ons − discount_amount, floored at zero
///
/// Any resolution failure aborts the whole computation; no partial totals.
pub fn compute_order_total(
    config: &PricingConfig,
    order: &[LineItem],
    add_on_selection: &AddOnSelection,
    discounts: &[Discount],
) -> AppResult<QuoteBreakdown> {
    let subtotal = compute_subtotal(config, order)?;
    let add_ons = compute_add_ons(config, add_on_selection)?;
    let discount_amount = compute_discounts(discounts, subtotal);

    let total = (subtotal + add_ons - discount_amount).max(Decimal::ZERO);

    Ok(QuoteBreakdown {
        subtotal: to_f64(subtotal),
        add_ons: to_f64(add_ons),
        discount_amount: to_f64(discount_amount),
        total: to_f64(total),
    })
}

// ==================== Tests ====================
