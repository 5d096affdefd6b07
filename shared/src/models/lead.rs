//! Lead and line-item models

use serde::{Deserialize, Serialize};

/// Product type priced per patch rather than through the tier tables.
/// Excluded from standard quantity aggregations.
pub const PATCHES: &str = "Patches";

/// Embroidery option on a line item, selects which tier run prices it
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "camelCase")]
pub enum EmbroideryKind {
    #[default]
    Logo,
    LogoAndText,
    Name,
}

impl EmbroideryKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Logo => "logo",
            Self::LogoAndText => "logoAndText",
            Self::Name => "name",
        }
    }
}

/// A single product/color/size/quantity entry within a lead's order list
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    /// Line identifier assigned by the intake form (discount selections
    /// reference it)
    #[serde(default)]
    pub id: Option<String>,
    pub product_type: String,
    pub color: String,
    pub size: String,
    /// Positive integer by the intake form's validation
    pub quantity: u32,
    /// Absent on Patches lines; absent elsewhere means plain logo
    #[serde(default)]
    pub embroidery_kind: Option<EmbroideryKind>,
    /// Per-unit price for Patches lines, which bypass the tier tables
    #[serde(default)]
    pub price_per_patch: Option<f64>,
}

impl LineItem {
    pub fn is_patches(&self) -> bool {
        self.product_type == PATCHES
    }

    /// Embroidery kind with the missing-field default applied
    pub fn embroidery_or_default(&self) -> EmbroideryKind {
        self.embroidery_kind.unwrap_or_default()
    }
}

/// A customer order record, the unit of reporting aggregation
///
/// Created by the intake form and mutated by downstream departments; the
/// aggregator only ever reads a snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lead {
    pub id: String,
    pub customer_name: String,
    pub sales_representative: String,
    /// Missing priority is reported as "Regular"
    #[serde(default)]
    pub priority_type: Option<String>,
    pub orders: Vec<LineItem>,
    /// ISO 8601 submission timestamp as stored by the intake form
    pub submission_date_time: String,
}

impl Lead {
    /// Total quantity across line items, Patches excluded.
    ///
    /// Leads where this is zero are skipped by the lead-level aggregations.
    pub fn non_patch_quantity(&self) -> u32 {
        self.orders
            .iter()
            .filter(|item| !item.is_patches())
            .map(|item| item.quantity)
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_lead(orders: Vec<LineItem>) -> Lead {
        Lead {
            id: "lead-1".into(),
            customer_name: "Acme Corp".into(),
            sales_representative: "A".into(),
            priority_type: None,
            orders,
            submission_date_time: "2024-03-04T10:00:00Z".into(),
        }
    }

    fn make_item(product_type: &str, quantity: u32) -> LineItem {
        LineItem {
            id: None,
            product_type: product_type.into(),
            color: "Black".into(),
            size: "L".into(),
            quantity,
            embroidery_kind: None,
            price_per_patch: None,
        }
    }

    #[test]
    fn test_non_patch_quantity_excludes_patches() {
        let lead = make_lead(vec![
            make_item("Executive Jacket 1", 10),
            make_item(PATCHES, 50),
        ]);
        assert_eq!(lead.non_patch_quantity(), 10);
    }

    #[test]
    fn test_non_patch_quantity_patches_only_is_zero() {
        let lead = make_lead(vec![make_item(PATCHES, 50)]);
        assert_eq!(lead.non_patch_quantity(), 0);
    }

    #[test]
    fn test_embroidery_kind_defaults_to_logo() {
        let item = make_item("Executive Jacket 1", 1);
        assert_eq!(item.embroidery_or_default(), EmbroideryKind::Logo);
    }

    #[test]
    fn test_lead_deserializes_camel_case() {
        let json = r#"{
            "id": "l1",
            "customerName": "Acme Corp",
            "salesRepresentative": "A",
            "priorityType": "Rush",
            "orders": [{
                "productType": "Patches",
                "color": "Red",
                "size": "M",
                "quantity": 5,
                "pricePerPatch": 12.5
            }],
            "submissionDateTime": "2024-03-04T10:00:00Z"
        }"#;
        let lead: Lead = serde_json::from_str(json).unwrap();
        assert_eq!(lead.priority_type.as_deref(), Some("Rush"));
        assert!(lead.orders[0].is_patches());
        assert_eq!(lead.orders[0].price_per_patch, Some(12.5));
    }

    #[test]
    fn test_embroidery_kind_wire_names() {
        assert_eq!(
            serde_json::to_string(&EmbroideryKind::LogoAndText).unwrap(),
            "\"logoAndText\""
        );
        let kind: EmbroideryKind = serde_json::from_str("\"name\"").unwrap();
        assert_eq!(kind, EmbroideryKind::Name);
    }
}
