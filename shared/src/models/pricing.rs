//! Pricing configuration models
//!
//! Static configuration with the shape `{productGroupMapping, pricingTiers,
//! addOnPricing}`. Loaded once per process and read-only thereafter; hot
//! reload is an atomic reference swap by the caller. A structurally invalid
//! table is a startup-time defect, so [`PricingConfig::validate`] runs at
//! load time, never during a quote.

use crate::error::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::EmbroideryKind;

/// A quantity range with its unit price.
///
/// `max: None` is the unbounded final tier. Ranges within a run are
/// contiguous, non-overlapping and ascending; that is a table-authoring
/// invariant checked by [`PricingConfig::validate`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Tier {
    pub min: u32,
    #[serde(default)]
    pub max: Option<u32>,
    pub price: f64,
}

impl Tier {
    pub fn matches(&self, quantity: u32) -> bool {
        quantity >= self.min && self.max.is_none_or(|max| quantity <= max)
    }
}

/// Tier runs for one pricing group, one run per embroidery kind
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct GroupTiers {
    pub logo: Vec<Tier>,
    pub logo_and_text: Vec<Tier>,
    pub name: Vec<Tier>,
}

impl GroupTiers {
    pub fn tiers_for(&self, kind: EmbroideryKind) -> &[Tier] {
        match kind {
            EmbroideryKind::Logo => &self.logo,
            EmbroideryKind::LogoAndText => &self.logo_and_text,
            EmbroideryKind::Name => &self.name,
        }
    }
}

/// How an add-on's resolved tier price turns into a charge
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub enum AddOnChargeMode {
    /// Tier price × quantity of items receiving the add-on
    #[default]
    PerItem,
    /// Tier price charged once (fixed program fees)
    Flat,
}

/// Tier run for one add-on kind, keyed by the quantity of items receiving
/// the add-on rather than the order's total quantity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddOnPricing {
    #[serde(default)]
    pub charge_mode: AddOnChargeMode,
    pub tiers: Vec<Tier>,
}

/// Full pricing configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct PricingConfig {
    /// Product-type name → group id
    pub product_group_mapping: HashMap<String, String>,
    /// Group id → tier runs per embroidery kind
    pub pricing_tiers: HashMap<String, GroupTiers>,
    /// Add-on kind → its tier run
    pub add_on_pricing: HashMap<String, AddOnPricing>,
}

impl PricingConfig {
    /// Structural validation of the whole table.
    ///
    /// Checks, for every group/kind run and every add-on run:
    /// - the run is non-empty;
    /// - `min <= max` within each bounded tier;
    /// - tiers are contiguous (`next.min == prev.max + 1`) with no gaps or
    ///   overlaps;
    /// - only the final tier is unbounded, and the final tier is unbounded.
    ///
    /// Also checks that every mapped product type points at a group present
    /// in the tier table.
    pub fn validate(&self) -> AppResult<()> {
        for (group, tiers) in &self.pricing_tiers {
            for kind in [
                EmbroideryKind::Logo,
                EmbroideryKind::LogoAndText,
                EmbroideryKind::Name,
            ] {
                validate_tier_run(
                    tiers.tiers_for(kind),
                    &format!("group '{}', kind '{}'", group, kind.as_str()),
                )?;
            }
        }

        for (add_on, pricing) in &self.add_on_pricing {
            validate_tier_run(&pricing.tiers, &format!("add-on '{}'", add_on))?;
        }

        for (product_type, group) in &self.product_group_mapping {
            if !self.pricing_tiers.contains_key(group) {
                return Err(AppError::invalid_table(format!(
                    "product type '{}' maps to group '{}' which has no tier table",
                    product_type, group
                )));
            }
        }

        Ok(())
    }
}

/// Validate one ordered tier run
fn validate_tier_run(tiers: &[Tier], context: &str) -> AppResult<()> {
    let Some(last) = tiers.last() else {
        return Err(AppError::invalid_table(format!("{}: empty tier run", context)));
    };

    if last.max.is_some() {
        return Err(AppError::invalid_table(format!(
            "{}: final tier must be unbounded",
            context
        )));
    }

    for pair in tiers.windows(2) {
        let (prev, next) = (&pair[0], &pair[1]);
        let Some(prev_max) = prev.max else {
            return Err(AppError::invalid_table(format!(
                "{}: unbounded tier [{}..] is not the final tier",
                context, prev.min
            )));
        };
        if prev_max < prev.min {
            return Err(AppError::invalid_table(format!(
                "{}: tier [{}..{}] has max below min",
                context, prev.min, prev_max
            )));
        }
        if next.min != prev_max + 1 {
            return Err(AppError::invalid_table(format!(
                "{}: tier [{}..] does not start at {} (gap or overlap after [{}..{}])",
                context,
                next.min,
                prev_max + 1,
                prev.min,
                prev_max
            )));
        }
    }

    Ok(())
}
