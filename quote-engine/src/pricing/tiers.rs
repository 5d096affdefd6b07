//! Tier resolution
//!
//! Quantity → price lookups against the static pricing configuration.
//! Tier runs are small (≤7 entries), so lookup is a linear scan in
//! ascending order; the first matching tier wins. Non-overlap is enforced
//! when the table is loaded, not here.

use shared::error::{AppError, AppResult};
use shared::models::{EmbroideryKind, PricingConfig, Tier};

/// Resolve a product type to its pricing group.
///
/// Fails with [`AppError::UnknownProductType`] when the type has no mapping
/// entry; callers must treat that as a data-entry error, never a default.
pub fn resolve_group<'a>(config: &'a PricingConfig, product_type: &str) -> AppResult<&'a str> {
    config
        .product_group_mapping
        .get(product_type)
        .map(String::as_str)
        .ok_or_else(|| AppError::unknown_product_type(product_type))
}

/// Resolve the unit price for a product type, quantity and embroidery kind.
///
/// Fails with [`AppError::NoMatchingTier`] when no tier covers the
/// quantity. A well-formed table ends in an unbounded tier, so in practice
/// this only fires for quantities below the first tier's minimum or for a
/// malformed table.
pub fn unit_price(
    config: &PricingConfig,
    product_type: &str,
    quantity: u32,
    kind: EmbroideryKind,
) -> AppResult<f64> {
    let group = resolve_group(config, product_type)?;
    let tiers = config
        .pricing_tiers
        .get(group)
        .map(|t| t.tiers_for(kind))
        .unwrap_or_default();

    scan_tiers(tiers, quantity).ok_or_else(|| AppError::NoMatchingTier {
        group: group.to_string(),
        kind: kind.as_str().to_string(),
        quantity,
    })
}

/// Resolve an add-on's tier price for the quantity of items receiving it.
///
/// Fixed-fee add-ons carry a single unbounded tier, so they return their
/// constant for any quantity ≥ 1.
pub fn add_on_price(config: &PricingConfig, add_on: &str, quantity: u32) -> AppResult<f64> {
    let pricing = config
        .add_on_pricing
        .get(add_on)
        .ok_or_else(|| AppError::UnknownAddOn {
            add_on: add_on.to_string(),
        })?;

    scan_tiers(&pricing.tiers, quantity).ok_or_else(|| AppError::NoMatchingTier {
        group: add_on.to_string(),
        kind: "addOn".to_string(),
        quantity,
    })
}

/// First tier covering the quantity, scanning in table order
fn scan_tiers(tiers: &[Tier], quantity: u32) -> Option<f64> {
    tiers.iter().find(|t| t.matches(quantity)).map(|t| t.price)
}
