//! Server-rendered markup of the pricing section

use std::sync::Arc;

use plancard_core::models::BillingCycle;
use plancard_core::{editable_slots, PricingOverrides, ResolvedPricing, SlotKind};
use plancard_web::page::render_section;

fn pricing(pairs: &[(&str, &str)]) -> Arc<ResolvedPricing> {
    let mut overrides = PricingOverrides::default();
    for (key, value) in pairs {
        overrides.set(key, *value);
    }
    Arc::new(ResolvedPricing::resolve(&overrides).unwrap())
}

#[test]
fn test_monthly_markup() {
    let html = render_section(pricing(&[]), BillingCycle::Monthly);

    assert!(html.contains("$29"));
    assert!(html.contains("$79"));
    assert!(html.contains("Custom"));
    assert!(html.contains("/month"));
    assert!(!html.contains("/year"));
    assert!(!html.contains("Save $"));
}

#[test]
fn test_annual_markup() {
    let html = render_section(pricing(&[]), BillingCycle::Annual);

    assert!(html.contains("$261"));
    assert!(html.contains("$711"));
    assert!(html.contains("/year"));
    assert!(html.contains("Save $87/year"));
    assert!(html.contains("Save $237/year"));
    // Enterprise stays custom without savings
    assert_eq!(html.matches("plan-savings").count(), 2);
}

#[test]
fn test_single_popular_card() {
    let html = render_section(
        pricing(&[("plan1Name", "Professional"), ("plan3Badge", "Most Popular")]),
        BillingCycle::Monthly,
    );

    assert_eq!(html.matches("plan-card-popular").count(), 1);
    assert_eq!(html.matches("plan-popular-badge").count(), 1);
    assert_eq!(html.matches("plan-trial").count(), 1);
    assert!(html.contains("14-day free trial"));
}

#[test]
fn test_every_editable_key_is_tagged() {
    let html = render_section(pricing(&[]), BillingCycle::Monthly);

    for slot in editable_slots() {
        let marker = match slot.kind {
            SlotKind::Text => format!("data-editable=\"{}\"", slot.key),
            SlotKind::Href => format!("data-editable-href=\"{}\"", slot.key),
        };
        assert!(html.contains(&marker), "missing {}", marker);
    }
}

#[test]
fn test_cta_targets_are_rendered_verbatim() {
    let html = render_section(
        pricing(&[("plan2CTAHref", "/signup/pro"), ("bottomCTAHref", "#consult")]),
        BillingCycle::Monthly,
    );

    assert!(html.contains("data-href=\"/signup/pro\""));
    assert!(html.contains("data-href=\"#consult\""));
}

#[test]
fn test_active_toggle_option() {
    let html = render_section(pricing(&[]), BillingCycle::Annual);
    assert!(html.contains("data-billing=\"annual\""));
    assert_eq!(html.matches("billing-option-active").count(), 1);
}
