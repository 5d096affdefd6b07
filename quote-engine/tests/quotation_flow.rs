//! End-to-end flow: load a pricing table from disk, quote an order the way
//! the intake form does, then run the report pages' period filter and
//! aggregations over a batch of leads.

use quote_engine::config::load_pricing_config;
use quote_engine::pricing::compute_order_total;
use quote_engine::reports::{
    aggregate_by_day, aggregate_by_product_type, aggregate_by_sales_rep, available_weeks,
    available_years, filter_by_period,
};
use shared::models::{Discount, DiscountKind, EmbroideryKind, Lead, LineItem, PATCHES};
use std::collections::HashMap;
use std::io::Write;

const TZ: chrono_tz::Tz = chrono_tz::America::New_York;

const PRICING_TABLE: &str = r#"{
    "productGroupMapping": {
        "Executive Jacket 1": "GroupA",
        "Executive Jacket 2": "GroupA",
        "Varsity Jacket": "GroupB"
    },
    "pricingTiers": {
        "GroupA": {
            "logo": [
                { "min": 1, "max": 3, "price": 1099 },
                { "min": 4, "max": 10, "price": 999 },
                { "min": 11, "max": 50, "price": 949 },
                { "min": 51, "max": 200, "price": 899 },
                { "min": 201, "price": 799 }
            ],
            "logoAndText": [
                { "min": 1, "max": 10, "price": 1199 },
                { "min": 11, "price": 1049 }
            ],
            "name": [ { "min": 1, "price": 949 } ]
        },
        "GroupB": {
            "logo": [
                { "min": 1, "max": 10, "price": 899 },
                { "min": 11, "price": 799 }
            ],
            "logoAndText": [ { "min": 1, "price": 999 } ],
            "name": [ { "min": 1, "price": 849 } ]
        }
    },
    "addOnPricing": {
        "backLogo": {
            "tiers": [
                { "min": 1, "max": 3, "price": 200 },
                { "min": 4, "max": 10, "price": 100 },
                { "min": 11, "price": 50 }
            ]
        },
        "names": {
            "tiers": [ { "min": 1, "price": 25 } ]
        },
        "programFee": {
            "chargeMode": "flat",
            "tiers": [ { "min": 1, "price": 150 } ]
        }
    }
}"#;

fn item(product_type: &str, quantity: u32, kind: Option<EmbroideryKind>) -> LineItem {
    LineItem {
        id: None,
        product_type: product_type.into(),
        color: "Navy".into(),
        size: "L".into(),
        quantity,
        embroidery_kind: kind,
        price_per_patch: None,
    }
}

fn lead(id: &str, rep: &str, customer: &str, submitted: &str, orders: Vec<LineItem>) -> Lead {
    Lead {
        id: id.into(),
        customer_name: customer.into(),
        sales_representative: rep.into(),
        priority_type: None,
        orders,
        submission_date_time: submitted.into(),
    }
}

#[test]
fn quotation_and_reporting_flow() {
    // Startup: logging plus the pricing table, loaded and validated from disk
    quote_engine::utils::logger::init_logger();
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(PRICING_TABLE.as_bytes()).unwrap();
    let pricing = load_pricing_config(file.path()).unwrap();

    // Quotation form: 5 jackets with logo embroidery, 20 patches at 12.50,
    // back logo on 2 items, program fee, 10% discount
    let mut patches = item(PATCHES, 20, None);
    patches.price_per_patch = Some(12.5);
    let order = vec![
        item("Executive Jacket 1", 5, Some(EmbroideryKind::Logo)),
        patches,
    ];
    let selection = HashMap::from([("backLogo".to_string(), 2), ("programFee".to_string(), 1)]);
    let discounts = vec![Discount {
        line_item_id: None,
        kind: DiscountKind::Percent(10.0),
    }];

    let quote = compute_order_total(&pricing, &order, &selection, &discounts).unwrap();

    // Subtotal: 5 × 999 + 20 × 12.50 = 5245
    // Add-ons: backLogo 2 × 200 + flat 150 = 550
    // Discount: 10% of 5245 = 524.50 (of the subtotal, not subtotal+add-ons)
    assert_eq!(quote.subtotal, 5245.0);
    assert_eq!(quote.add_ons, 550.0);
    assert_eq!(quote.discount_amount, 524.5);
    assert_eq!(quote.total, 5270.5);

    // Report page: a March 2024 batch plus noise from other periods
    let leads = vec![
        lead("l1", "A", "Acme", "2024-03-04T10:00:00", vec![
            item("Executive Jacket 1", 10, None),
        ]),
        lead("l2", "A", "Acme", "2024-03-06T09:00:00", vec![
            item("Varsity Jacket", 4, None),
        ]),
        lead("l3", "B", "Beta", "2024-03-14T16:00:00", vec![
            item("Executive Jacket 2", 25, None),
            item(PATCHES, 100, None),
        ]),
        lead("l4", "A", "Gamma", "2023-07-01T12:00:00", vec![
            item("Executive Jacket 1", 7, None),
        ]),
        lead("l5", "C", "Delta", "2024-03-20T12:00:00", vec![
            item(PATCHES, 30, None),
        ]),
    ];

    assert_eq!(available_years(&leads, TZ), vec![2024, 2023]);
    assert_eq!(
        available_weeks(&leads, 2024, TZ),
        vec!["03.04-03.10", "03.11-03.17", "03.18-03.24"]
    );

    // Month filter picks up the March leads only
    let march = filter_by_period(&leads, "2024", "3", None, TZ);
    assert!(march.warning.is_none());
    assert_eq!(march.leads.len(), 4);

    let reps = aggregate_by_sales_rep(&march.leads);
    // Rep A: 10 + 4 = 14 over one distinct customer; rep B: 25 over one;
    // rep C's patches-only lead is skipped entirely
    assert_eq!(reps.len(), 2);
    assert_eq!(reps[0].name, "B");
    assert_eq!(reps[0].quantity, 25);
    assert_eq!(reps[1].name, "A");
    assert_eq!(reps[1].quantity, 14);
    assert_eq!(reps[1].customer_count, 1);

    let days = aggregate_by_day(&march.leads, TZ);
    assert_eq!(days.first().unwrap().date, "Mar-04-2024");
    assert_eq!(days.last().unwrap().date, "Mar-14-2024");

    let products = aggregate_by_product_type(&march.leads);
    assert_eq!(products[0].name, "Executive Jacket 2");
    assert_eq!(products[0].quantity, 25);
    assert!(products.iter().all(|p| p.name != PATCHES));

    // Week filter narrows to the first week and still includes its lead
    let week = filter_by_period(&leads, "2024", "3", Some("03.04-03.10"), TZ);
    let ids: Vec<&str> = week.leads.iter().map(|l| l.id.as_str()).collect();
    assert_eq!(ids, vec!["l1", "l2"]);

    // Invalid period keeps the page usable: everything, tagged
    let fallback = filter_by_period(&leads, "", "", None, TZ);
    assert_eq!(fallback.leads.len(), leads.len());
    assert!(fallback.warning.is_some());
}
