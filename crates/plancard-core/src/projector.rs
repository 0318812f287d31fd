//! Price projection for the selected billing cycle
//!
//! Annual billing applies a fixed discount to twelve monthly payments:
//!
//! - **Annual price**: `floor(monthly × 12 × (100 - 25) / 100)`
//! - **Savings line**: `monthly × 3`, computed on its own
//!
//! The savings line is not derived from the annual price. The two agree only
//! because the discount is exactly 25% (three months of twelve). Changing
//! [`ANNUAL_DISCOUNT_PERCENT`] without changing [`SAVINGS_MONTHS`] makes the
//! displayed savings disagree with the displayed price.
//!
//! # Examples
//!
//! ```
//! use plancard_core::models::{BillingCycle, Price};
//! use plancard_core::projector::project_price;
//!
//! let display = project_price(Price::Amount(79), "$79", "/month", BillingCycle::Annual);
//! assert_eq!(display.price, "$711");
//! assert_eq!(display.period.as_deref(), Some("/year"));
//! assert_eq!(display.savings.as_deref(), Some("Save $237/year"));
//! ```

use crate::models::{BillingCycle, Plan, Price};
use serde::Serialize;

/// Discount applied to twelve monthly payments under annual billing
pub const ANNUAL_DISCOUNT_PERCENT: u128 = 25;

/// Months of payments the savings line claims are saved per year
pub const SAVINGS_MONTHS: u128 = 3;

/// Period suffix shown under annual billing
pub const ANNUAL_PERIOD: &str = "/year";

/// What a plan card shows in its price block
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PriceDisplay {
    pub price: String,
    /// Suffix after the price; absent for custom pricing or tiers without one
    pub period: Option<String>,
    /// "Save $N/year", annual billing with a numeric price only
    pub savings: Option<String>,
}

/// Yearly price for a monthly amount, truncated to whole dollars
pub fn annual_price(monthly: u64) -> u128 {
    u128::from(monthly) * 12 * (100 - ANNUAL_DISCOUNT_PERCENT) / 100
}

/// Advertised yearly savings for a monthly amount
pub fn annual_savings(monthly: u64) -> u128 {
    u128::from(monthly) * SAVINGS_MONTHS
}

/// Project one price for `cycle`
///
/// `label` is the price as configured and is returned verbatim under monthly
/// billing. `period` is the tier's own suffix (may be empty).
pub fn project_price(price: Price, label: &str, period: &str, cycle: BillingCycle) -> PriceDisplay {
    match (cycle, price) {
        (_, Price::Custom) => PriceDisplay {
            price: label.to_string(),
            period: None,
            savings: None,
        },
        (BillingCycle::Monthly, Price::Amount(_)) => PriceDisplay {
            price: label.to_string(),
            period: (!period.is_empty()).then(|| period.to_string()),
            savings: None,
        },
        (BillingCycle::Annual, Price::Amount(monthly)) => PriceDisplay {
            price: format!("${}", annual_price(monthly)),
            period: (!period.is_empty()).then(|| ANNUAL_PERIOD.to_string()),
            savings: Some(format!("Save ${}/year", annual_savings(monthly))),
        },
    }
}

/// Project a plan's price block for `cycle`
pub fn project(plan: &Plan, cycle: BillingCycle) -> PriceDisplay {
    let projected = project_price(plan.price, &plan.price_label, &plan.period, cycle);
    tracing::trace!(plan = plan.position, %cycle, price = %projected.price, "projected price");
    projected
}
