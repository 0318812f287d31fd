//! Startup resolution: merge overrides and build the catalog once

use crate::error::CoreError;
use crate::models::{BillingCycle, PlanCatalog, PricingContent, PricingOverrides};
use crate::render::{self, PricingView};
use serde::Serialize;

/// Merged content plus the plan catalog derived from it
///
/// This is the single validation point: once a `ResolvedPricing` exists,
/// rendering cannot fail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedPricing {
    pub content: PricingContent,
    pub catalog: PlanCatalog,
}

impl ResolvedPricing {
    /// Merge `overrides` onto the defaults and validate the prices
    pub fn resolve(overrides: &PricingOverrides) -> Result<Self, CoreError> {
        Self::from_content(PricingContent::with_overrides(overrides))
    }

    /// Validate already-merged content
    pub fn from_content(content: PricingContent) -> Result<Self, CoreError> {
        let catalog = PlanCatalog::build(&content)?;
        tracing::debug!(
            popular = %catalog.popular().name,
            "Resolved pricing content"
        );
        Ok(Self { content, catalog })
    }

    /// Presentation tree for `cycle`
    pub fn render(&self, cycle: BillingCycle) -> PricingView {
        render::render(&self.content, &self.catalog, cycle)
    }
}
