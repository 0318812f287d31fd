//! WASM entry point for the Leptos CSR build

use std::sync::Arc;

use leptos::mount::mount_to_body;
use leptos::prelude::*;
use plancard_core::{Navigate, PricingOverrides, ResolvedPricing};
use plancard_web::{BrowserNavigator, PricingSection};

fn main() {
    console_error_panic_hook::set_once();

    let pricing = match ResolvedPricing::resolve(&PricingOverrides::default()) {
        Ok(pricing) => Arc::new(pricing),
        Err(err) => {
            tracing::error!(error = %err, "Pricing content is invalid");
            return;
        }
    };
    let navigator: Arc<dyn Navigate> = Arc::new(BrowserNavigator);

    mount_to_body(move || view! { <PricingSection pricing navigator /> });
}
