//! The three fixed plan tiers

use super::content::PricingContent;
use super::price::Price;
use crate::error::CoreError;
use serde::Serialize;

/// Per-month suffix of the first tier (not configurable)
pub const STARTER_PERIOD: &str = "/month";

/// Decorative icon shown above each plan name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum PlanIcon {
    Leaf,
    TrendingUp,
    Shield,
}

/// Content keys one plan card is bound to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PlanSlots {
    pub name: &'static str,
    pub description: &'static str,
    pub price: &'static str,
    /// Only the popular tier has an editable period
    pub period: Option<&'static str>,
    pub badge: Option<&'static str>,
    pub cta: &'static str,
    pub cta_href: &'static str,
    pub trial: Option<&'static str>,
}

/// Slot bindings, indexed by position - 1
pub const PLAN_SLOTS: [PlanSlots; 3] = [
    PlanSlots {
        name: "plan1Name",
        description: "plan1Description",
        price: "plan1Price",
        period: None,
        badge: None,
        cta: "plan1CTA",
        cta_href: "plan1CTAHref",
        trial: None,
    },
    PlanSlots {
        name: "plan2Name",
        description: "plan2Description",
        price: "plan2Price",
        period: Some("plan2Period"),
        badge: Some("plan2Badge"),
        cta: "plan2CTA",
        cta_href: "plan2CTAHref",
        trial: Some("plan2Trial"),
    },
    PlanSlots {
        name: "plan3Name",
        description: "plan3Description",
        price: "plan3Price",
        period: None,
        badge: Some("plan3Badge"),
        cta: "plan3CTA",
        cta_href: "plan3CTAHref",
        trial: None,
    },
];

/// Position of the popular tier (1-based)
pub const POPULAR_POSITION: u8 = 2;

const STARTER_FEATURES: &[&str] = &[
    "Carbon footprint tracking",
    "Basic sustainability reports",
    "Up to 50 employees",
    "Email support",
    "Mobile app access",
    "Data export (CSV)",
    "Monthly impact summaries",
];

const PROFESSIONAL_FEATURES: &[&str] = &[
    "Everything in Starter",
    "Advanced analytics dashboard",
    "Up to 500 employees",
    "Priority support",
    "Custom integrations",
    "API access",
    "Automated ESG reporting",
    "Carbon offset marketplace",
    "Team collaboration tools",
];

const ENTERPRISE_FEATURES: &[&str] = &[
    "Everything in Professional",
    "Unlimited employees",
    "24/7 dedicated support",
    "Custom compliance reporting",
    "White-label solutions",
    "Advanced security & SSO",
    "Dedicated account manager",
    "Custom training & onboarding",
    "Multi-location tracking",
];

/// One plan tier, derived from merged content
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Plan {
    /// 1-based position in the catalog
    pub position: u8,
    pub name: String,
    pub description: String,
    pub price: Price,
    /// Price exactly as configured; shown verbatim under monthly billing
    pub price_label: String,
    /// Per-month suffix, empty when the tier has none
    pub period: String,
    pub badge: Option<String>,
    pub features: &'static [&'static str],
    pub cta_label: String,
    pub cta_href: String,
    pub trial: Option<String>,
    pub popular: bool,
    pub icon: PlanIcon,
    #[serde(skip)]
    pub slots: &'static PlanSlots,
}

/// The three plans, in display order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlanCatalog {
    plans: [Plan; 3],
}

impl PlanCatalog {
    /// Derive the catalog from merged content
    ///
    /// Fails when a price slot is neither `"$<digits>"` nor `"Custom"`.
    pub fn build(content: &PricingContent) -> Result<Self, CoreError> {
        let starter = Plan {
            position: 1,
            name: content.plan1_name.clone(),
            description: content.plan1_description.clone(),
            price: parse_price(PLAN_SLOTS[0].price, &content.plan1_price)?,
            price_label: content.plan1_price.clone(),
            period: STARTER_PERIOD.to_string(),
            badge: None,
            features: STARTER_FEATURES,
            cta_label: content.plan1_cta.clone(),
            cta_href: content.plan1_cta_href.clone(),
            trial: None,
            popular: false,
            icon: PlanIcon::Leaf,
            slots: &PLAN_SLOTS[0],
        };

        let professional = Plan {
            position: 2,
            name: content.plan2_name.clone(),
            description: content.plan2_description.clone(),
            price: parse_price(PLAN_SLOTS[1].price, &content.plan2_price)?,
            price_label: content.plan2_price.clone(),
            period: content.plan2_period.clone(),
            badge: Some(content.plan2_badge.clone()),
            features: PROFESSIONAL_FEATURES,
            cta_label: content.plan2_cta.clone(),
            cta_href: content.plan2_cta_href.clone(),
            trial: Some(content.plan2_trial.clone()),
            popular: true,
            icon: PlanIcon::TrendingUp,
            slots: &PLAN_SLOTS[1],
        };

        let enterprise = Plan {
            position: 3,
            name: content.plan3_name.clone(),
            description: content.plan3_description.clone(),
            price: parse_price(PLAN_SLOTS[2].price, &content.plan3_price)?,
            price_label: content.plan3_price.clone(),
            period: String::new(),
            badge: Some(content.plan3_badge.clone()),
            features: ENTERPRISE_FEATURES,
            cta_label: content.plan3_cta.clone(),
            cta_href: content.plan3_cta_href.clone(),
            trial: None,
            popular: false,
            icon: PlanIcon::Shield,
            slots: &PLAN_SLOTS[2],
        };

        Ok(Self {
            plans: [starter, professional, enterprise],
        })
    }

    pub fn plans(&self) -> &[Plan; 3] {
        &self.plans
    }

    pub fn iter(&self) -> impl Iterator<Item = &Plan> {
        self.plans.iter()
    }

    /// Plan at a 1-based position
    pub fn get(&self, position: u8) -> Option<&Plan> {
        self.plans.iter().find(|p| p.position == position)
    }

    /// The single popular plan
    pub fn popular(&self) -> &Plan {
        &self.plans[usize::from(POPULAR_POSITION - 1)]
    }
}

fn parse_price(key: &'static str, raw: &str) -> Result<Price, CoreError> {
    Price::parse(raw).ok_or_else(|| CoreError::InvalidPrice {
        key,
        value: raw.to_string(),
    })
}
