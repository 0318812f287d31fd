//! Text content of the pricing section and caller overrides
//!
//! Every text slot the section renders lives in [`PricingContent`] under the
//! camelCase key the editing tooling uses. [`PricingOverrides`] carries the
//! same keys, each optional; merging is a shallow field-by-field overlay.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

macro_rules! content_slots {
    ($( $(#[$meta:meta])* $field:ident => $key:literal = $default:expr ),+ $(,)?) => {
        /// Fully populated section content (defaults merged with overrides)
        #[derive(Debug, Clone, PartialEq, Eq, Serialize)]
        pub struct PricingContent {
            $(
                $(#[$meta])*
                #[serde(rename = $key)]
                pub $field: String,
            )+
        }

        impl Default for PricingContent {
            fn default() -> Self {
                Self {
                    $( $field: $default.to_string(), )+
                }
            }
        }

        /// Partial content supplied by the host page or an override file
        #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
        pub struct PricingOverrides {
            $(
                #[serde(rename = $key, default, skip_serializing_if = "Option::is_none")]
                pub $field: Option<String>,
            )+

            /// Keys that match no slot; kept so loaders can report them
            #[serde(flatten)]
            pub unknown: BTreeMap<String, serde_json::Value>,
        }

        /// Every recognised content key, in render order
        pub const CONTENT_KEYS: &[&str] = &[$($key),+];

        impl PricingContent {
            /// Shallow merge: a present override wins, even when empty
            pub fn merge(&self, overrides: &PricingOverrides) -> Self {
                Self {
                    $(
                        $field: overrides
                            .$field
                            .clone()
                            .unwrap_or_else(|| self.$field.clone()),
                    )+
                }
            }

            /// Look up a slot by its content key
            pub fn get(&self, key: &str) -> Option<&str> {
                match key {
                    $( $key => Some(self.$field.as_str()), )+
                    _ => None,
                }
            }
        }

        impl PricingOverrides {
            /// Set a slot by key. Returns false for unknown keys.
            pub fn set(&mut self, key: &str, value: impl Into<String>) -> bool {
                match key {
                    $(
                        $key => {
                            self.$field = Some(value.into());
                            true
                        }
                    )+
                    _ => false,
                }
            }

            /// Recognised keys that carry a value, in render order
            pub fn provided(&self) -> Vec<(&'static str, &str)> {
                let mut provided = Vec::new();
                $(
                    if let Some(value) = self.$field.as_deref() {
                        provided.push(($key, value));
                    }
                )+
                provided
            }
        }
    };
}

content_slots! {
    badge => "badge" = "Pricing Plans",
    main_title => "mainTitle" = "Sustainable Growth,",
    main_title_highlight => "mainTitleHighlight" = "Transparent Pricing",
    main_description => "mainDescription" =
        "Choose the perfect plan to scale your business sustainably. All plans include our core environmental impact tracking and carbon offset features.",
    billing_monthly => "billingMonthly" = "Monthly",
    billing_annual => "billingAnnual" = "Annual",
    billing_annual_badge => "billingAnnualBadge" = "Save 25%",

    plan1_name => "plan1Name" = "Starter",
    plan1_description => "plan1Description" =
        "Perfect for small businesses starting their sustainability journey",
    /// "$<digits>" or "Custom"
    plan1_price => "plan1Price" = "$29",
    plan1_cta => "plan1CTA" = "Start Free Trial",
    plan1_cta_href => "plan1CTAHref" = "/",

    plan2_name => "plan2Name" = "Professional",
    plan2_description => "plan2Description" =
        "Ideal for growing companies with advanced sustainability goals",
    /// "$<digits>" or "Custom"
    plan2_price => "plan2Price" = "$79",
    plan2_period => "plan2Period" = "/month",
    plan2_badge => "plan2Badge" = "Most Popular",
    plan2_cta => "plan2CTA" = "Start Free Trial",
    plan2_cta_href => "plan2CTAHref" = "/",
    plan2_trial => "plan2Trial" = "14-day free trial \u{2022} No credit card required",

    plan3_name => "plan3Name" = "Enterprise",
    plan3_description => "plan3Description" =
        "For large organizations with comprehensive ESG requirements",
    /// "$<digits>" or "Custom"
    plan3_price => "plan3Price" = "Custom",
    plan3_badge => "plan3Badge" = "Best Value",
    plan3_cta => "plan3CTA" = "Contact Sales",
    plan3_cta_href => "plan3CTAHref" = "/",

    bottom_title => "bottomTitle" = "Need a custom solution?",
    bottom_description => "bottomDescription" =
        "We work with enterprises to create tailored sustainability solutions that meet your specific industry requirements and compliance needs.",
    bottom_cta => "bottomCTA" = "Schedule Consultation",
    bottom_cta_href => "bottomCTAHref" = "/",
}

impl PricingContent {
    /// Defaults overlaid with `overrides`
    pub fn with_overrides(overrides: &PricingOverrides) -> Self {
        Self::default().merge(overrides)
    }
}

impl PricingOverrides {
    /// Unknown keys, sorted
    pub fn unknown_keys(&self) -> impl Iterator<Item = &str> {
        self.unknown.keys().map(String::as_str)
    }
}
