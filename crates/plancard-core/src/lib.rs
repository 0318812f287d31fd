//! plancard-core - Core library for plancard
//!
//! Content merge, plan catalog, billing state, price projection and the
//! presentation tree for the pricing section.

pub mod editable;
pub mod error;
pub mod loader;
pub mod models;
pub mod navigation;
pub mod projector;
pub mod render;
pub mod resolve;

pub use editable::{editable_slots, EditableSlot, SlotKind};
pub use error::{ConfigFinding, ConfigReport, CoreError, ErrorSeverity};
pub use loader::{OverrideFormat, OverridesLoader};
pub use models::{BillingCycle, BillingState, PlanCatalog, PricingContent, PricingOverrides};
pub use navigation::{LogNavigator, Navigate, RecordingNavigator};
pub use projector::PriceDisplay;
pub use render::PricingView;
pub use resolve::ResolvedPricing;
