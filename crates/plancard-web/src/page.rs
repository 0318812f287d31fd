//! Server-side rendering of the pricing section

use std::sync::Arc;

use leptos::prelude::*;
use plancard_core::models::BillingCycle;
use plancard_core::{LogNavigator, Navigate, ResolvedPricing};

use crate::components::PricingSection;

/// Stylesheet inlined into preview pages
pub const PRICING_CSS: &str = include_str!("../static/pricing.css");

/// Click handlers for the preview document, which ships without the WASM bundle
pub const PREVIEW_JS: &str = include_str!("../static/preview.js");

/// Render the section alone as an HTML fragment
pub fn render_section(pricing: Arc<ResolvedPricing>, cycle: BillingCycle) -> String {
    let navigator: Arc<dyn Navigate> = Arc::new(LogNavigator);
    let owner = Owner::new();
    owner.with(move || {
        view! { <PricingSection pricing navigator initial_cycle=cycle /> }.to_html()
    })
}

/// Render a standalone preview document around the section
///
/// Toggling reloads the page with `?billing=<cycle>` instead of re-rendering
/// in place.
pub fn render_page(pricing: Arc<ResolvedPricing>, cycle: BillingCycle) -> String {
    let section = render_section(pricing, cycle);
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Pricing preview</title>
    <style>{css}</style>
</head>
<body>
{section}
<script>{js}</script>
</body>
</html>"#,
        css = PRICING_CSS,
        section = section,
        js = PREVIEW_JS
    )
}
