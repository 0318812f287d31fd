//! Data models for plancard

pub mod billing;
pub mod content;
pub mod plan;
pub mod price;

pub use billing::{BillingCycle, BillingState};
pub use content::{PricingContent, PricingOverrides, CONTENT_KEYS};
pub use plan::{Plan, PlanCatalog, PlanIcon, PlanSlots, PLAN_SLOTS, POPULAR_POSITION};
pub use price::{Price, CUSTOM_PRICE};
