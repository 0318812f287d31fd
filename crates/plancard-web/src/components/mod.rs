//! Leptos UI components

mod billing_toggle;
mod bottom_cta;
mod icons;
mod plan_card;
mod pricing_section;
mod section_header;

pub use billing_toggle::BillingToggle;
pub use bottom_cta::BottomCta;
pub use icons::{CheckIcon, LeafIcon, PlanIconSvg, StarIcon, ZapIcon};
pub use plan_card::PlanCard;
pub use pricing_section::{select_cycle, PricingSection};
pub use section_header::SectionHeader;
