//! Sales aggregations
//!
//! Grouped sums over an already-filtered lead set. All four aggregations
//! share the quantity rule: Patches line items are excluded, and the
//! lead-level groupings skip leads whose non-Patches quantity is zero.
//! The by-product-type aggregation sums at line-item granularity instead.
//!
//! Descending sorts tie-break by name ascending so repeated runs over the
//! same snapshot produce identical output.

use chrono::NaiveDate;
use chrono_tz::Tz;
use serde::Serialize;
use shared::models::Lead;
use std::collections::{BTreeMap, HashMap, HashSet};

use crate::utils::time::parse_submission;

/// Per-sales-representative totals
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RepSales {
    pub name: String,
    pub quantity: u32,
    /// Distinct customer names contributing quantity to this rep
    pub customer_count: usize,
}

/// Per-priority totals
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PrioritySales {
    pub name: String,
    pub value: u32,
}

/// Per-day totals
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DailySales {
    /// Calendar day formatted `MMM-dd-yyyy` in the business timezone
    pub date: String,
    pub quantity: u32,
}

/// Per-product-type totals
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ProductTypeSales {
    pub name: String,
    pub quantity: u32,
}

/// Priority reported for leads with no priority set
const DEFAULT_PRIORITY: &str = "Regular";

/// Quantity per sales representative with distinct customer counts,
/// descending by quantity
pub fn aggregate_by_sales_rep(leads: &[&Lead]) -> Vec<RepSales> {
    let mut by_rep: HashMap<&str, (u32, HashSet<&str>)> = HashMap::new();

    for lead in leads {
        let quantity = lead.non_patch_quantity();
        if quantity == 0 {
            continue;
        }
        let entry = by_rep
            .entry(lead.sales_representative.as_str())
            .or_default();
        entry.0 += quantity;
        entry.1.insert(lead.customer_name.as_str());
    }

    let mut rows: Vec<RepSales> = by_rep
        .into_iter()
        .map(|(name, (quantity, customers))| RepSales {
            name: name.to_string(),
            quantity,
            customer_count: customers.len(),
        })
        .collect();

    rows.sort_by(|a, b| b.quantity.cmp(&a.quantity).then_with(|| a.name.cmp(&b.name)));
    rows
}

/// Quantity per priority, missing priority reported as "Regular",
/// descending by value
pub fn aggregate_by_priority(leads: &[&Lead]) -> Vec<PrioritySales> {
    let mut by_priority: HashMap<&str, u32> = HashMap::new();

    for lead in leads {
        let quantity = lead.non_patch_quantity();
        if quantity == 0 {
            continue;
        }
        let priority = lead.priority_type.as_deref().unwrap_or(DEFAULT_PRIORITY);
        *by_priority.entry(priority).or_default() += quantity;
    }

    let mut rows: Vec<PrioritySales> = by_priority
        .into_iter()
        .map(|(name, value)| PrioritySales {
            name: name.to_string(),
            value,
        })
        .collect();

    rows.sort_by(|a, b| b.value.cmp(&a.value).then_with(|| a.name.cmp(&b.name)));
    rows
}

/// Quantity per calendar day in the business timezone, ascending by date
pub fn aggregate_by_day(leads: &[&Lead], tz: Tz) -> Vec<DailySales> {
    let mut by_day: BTreeMap<NaiveDate, u32> = BTreeMap::new();

    for lead in leads {
        let quantity = lead.non_patch_quantity();
        if quantity == 0 {
            continue;
        }
        let Some(dt) = parse_submission(&lead.submission_date_time, tz) else {
            continue;
        };
        *by_day.entry(dt.date_naive()).or_default() += quantity;
    }

    by_day
        .into_iter()
        .map(|(date, quantity)| DailySales {
            date: date.format("%b-%d-%Y").to_string(),
            quantity,
        })
        .collect()
}

/// Quantity per product type at line-item granularity, Patches excluded,
/// descending by quantity
pub fn aggregate_by_product_type(leads: &[&Lead]) -> Vec<ProductTypeSales> {
    let mut by_type: HashMap<&str, u32> = HashMap::new();

    for lead in leads {
        for item in lead.orders.iter().filter(|item| !item.is_patches()) {
            *by_type.entry(item.product_type.as_str()).or_default() += item.quantity;
        }
    }

    let mut rows: Vec<ProductTypeSales> = by_type
        .into_iter()
        .map(|(name, quantity)| ProductTypeSales {
            name: name.to_string(),
            quantity,
        })
        .collect();

    rows.sort_by(|a, b| b.quantity.cmp(&a.quantity).then_with(|| a.name.cmp(&b.name)));
    rows
}
