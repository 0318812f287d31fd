//! Presentation tree for the pricing section
//!
//! [`render`] is a pure function of merged content, catalog and billing
//! cycle. UI layers only walk the tree it returns; every piece of
//! conditional display logic (popular styling, badges, trial line, annual
//! price and savings) is decided here.

use crate::models::{BillingCycle, Plan, PlanCatalog, PlanIcon, PricingContent};
use crate::navigation::Navigate;
use crate::projector::{self, PriceDisplay};
use serde::Serialize;

/// Text bound to a content key
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextSlot {
    pub key: &'static str,
    pub text: String,
}

impl TextSlot {
    fn new(key: &'static str, text: impl Into<String>) -> Self {
        Self {
            key,
            text: text.into(),
        }
    }
}

/// Call-to-action control: label plus navigation target
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActionSlot {
    pub label: TextSlot,
    pub href_key: &'static str,
    /// Handed to the navigator unchanged
    pub href: String,
}

impl ActionSlot {
    /// Activate the control
    pub fn follow(&self, navigator: &dyn Navigate) {
        navigator.navigate(&self.href);
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeaderView {
    pub badge: TextSlot,
    pub title: TextSlot,
    pub highlight: TextSlot,
    pub description: TextSlot,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToggleView {
    pub monthly: TextSlot,
    pub annual: TextSlot,
    pub annual_badge: TextSlot,
    pub active: BillingCycle,
}

/// Period suffix; only some tiers bind it to a content key
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PeriodSlot {
    pub key: Option<&'static str>,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlanCardView {
    pub position: u8,
    pub popular: bool,
    /// Floating badge above the popular card
    pub popular_badge: Option<TextSlot>,
    /// Inline badge of a non-popular card
    pub badge: Option<TextSlot>,
    pub icon: PlanIcon,
    pub name: TextSlot,
    pub description: TextSlot,
    pub price: TextSlot,
    pub period: Option<PeriodSlot>,
    pub savings: Option<String>,
    pub features: Vec<String>,
    pub cta: ActionSlot,
    /// Trial disclaimer below the popular card's CTA
    pub trial: Option<TextSlot>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BottomCtaView {
    pub title: TextSlot,
    pub description: TextSlot,
    pub cta: ActionSlot,
}

/// Whole section
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PricingView {
    pub header: HeaderView,
    pub toggle: ToggleView,
    pub cards: Vec<PlanCardView>,
    pub bottom: BottomCtaView,
}

impl PricingView {
    pub fn card(&self, position: u8) -> Option<&PlanCardView> {
        self.cards.iter().find(|c| c.position == position)
    }
}

/// Build the presentation tree for `cycle`
pub fn render(content: &PricingContent, catalog: &PlanCatalog, cycle: BillingCycle) -> PricingView {
    PricingView {
        header: HeaderView {
            badge: TextSlot::new("badge", &content.badge),
            title: TextSlot::new("mainTitle", &content.main_title),
            highlight: TextSlot::new("mainTitleHighlight", &content.main_title_highlight),
            description: TextSlot::new("mainDescription", &content.main_description),
        },
        toggle: ToggleView {
            monthly: TextSlot::new("billingMonthly", &content.billing_monthly),
            annual: TextSlot::new("billingAnnual", &content.billing_annual),
            annual_badge: TextSlot::new("billingAnnualBadge", &content.billing_annual_badge),
            active: cycle,
        },
        cards: catalog.iter().map(|plan| render_card(plan, cycle)).collect(),
        bottom: BottomCtaView {
            title: TextSlot::new("bottomTitle", &content.bottom_title),
            description: TextSlot::new("bottomDescription", &content.bottom_description),
            cta: ActionSlot {
                label: TextSlot::new("bottomCTA", &content.bottom_cta),
                href_key: "bottomCTAHref",
                href: content.bottom_cta_href.clone(),
            },
        },
    }
}

/// Build one plan card for `cycle`
pub fn render_card(plan: &Plan, cycle: BillingCycle) -> PlanCardView {
    let slots = plan.slots;
    let PriceDisplay {
        price,
        period,
        savings,
    } = projector::project(plan, cycle);

    let badge = match (slots.badge, plan.badge.as_deref()) {
        (Some(key), Some(text)) => Some(TextSlot::new(key, text)),
        _ => None,
    };
    let (popular_badge, badge) = if plan.popular {
        (badge, None)
    } else {
        // A non-popular tier shows its badge only when it has text
        (None, badge.filter(|b| !b.text.is_empty()))
    };

    let trial = match (plan.popular, slots.trial, plan.trial.as_deref()) {
        (true, Some(key), Some(text)) => Some(TextSlot::new(key, text)),
        _ => None,
    };

    PlanCardView {
        position: plan.position,
        popular: plan.popular,
        popular_badge,
        badge,
        icon: plan.icon,
        name: TextSlot::new(slots.name, &plan.name),
        description: TextSlot::new(slots.description, &plan.description),
        price: TextSlot::new(slots.price, price),
        period: period.map(|text| PeriodSlot {
            key: slots.period,
            text,
        }),
        savings,
        features: plan.features.iter().map(|f| f.to_string()).collect(),
        cta: ActionSlot {
            label: TextSlot::new(slots.cta, &plan.cta_label),
            href_key: slots.cta_href,
            href: plan.cta_href.clone(),
        },
        trial,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PricingOverrides;
    use crate::navigation::RecordingNavigator;

    fn defaults() -> (PricingContent, PlanCatalog) {
        let content = PricingContent::default();
        let catalog = PlanCatalog::build(&content).unwrap();
        (content, catalog)
    }

    #[test]
    fn test_default_monthly_view() {
        let (content, catalog) = defaults();
        let view = render(&content, &catalog, BillingCycle::Monthly);

        assert_eq!(view.toggle.active, BillingCycle::Monthly);
        assert_eq!(view.cards.len(), 3);

        let starter = view.card(1).unwrap();
        assert_eq!(starter.price.text, "$29");
        assert_eq!(starter.period.as_ref().unwrap().text, "/month");
        assert_eq!(starter.period.as_ref().unwrap().key, None);
        assert_eq!(starter.badge, None);
        assert_eq!(starter.savings, None);

        let enterprise = view.card(3).unwrap();
        assert_eq!(enterprise.price.text, "Custom");
        assert_eq!(enterprise.period, None);
        assert_eq!(enterprise.badge.as_ref().unwrap().text, "Best Value");
        assert_eq!(enterprise.badge.as_ref().unwrap().key, "plan3Badge");
    }

    #[test]
    fn test_popular_card_treatment() {
        let (content, catalog) = defaults();
        let view = render(&content, &catalog, BillingCycle::Annual);

        let professional = view.card(2).unwrap();
        assert!(professional.popular);
        assert_eq!(professional.popular_badge.as_ref().unwrap().text, "Most Popular");
        assert_eq!(professional.badge, None);
        assert_eq!(professional.trial.as_ref().unwrap().key, "plan2Trial");
        assert_eq!(professional.period.as_ref().unwrap().key, Some("plan2Period"));

        for position in [1, 3] {
            let card = view.card(position).unwrap();
            assert!(!card.popular);
            assert_eq!(card.popular_badge, None);
            assert_eq!(card.trial, None);
        }
    }

    #[test]
    fn test_popular_badge_rendered_even_when_empty() {
        let mut overrides = PricingOverrides::default();
        overrides.set("plan2Badge", "");
        overrides.set("plan3Badge", "");
        let content = PricingContent::with_overrides(&overrides);
        let catalog = PlanCatalog::build(&content).unwrap();

        let view = render(&content, &catalog, BillingCycle::Monthly);
        assert_eq!(view.card(2).unwrap().popular_badge.as_ref().unwrap().text, "");
        assert_eq!(view.card(3).unwrap().badge, None);
    }

    #[test]
    fn test_cta_targets_pass_through() {
        let mut overrides = PricingOverrides::default();
        overrides.set("plan3CTAHref", "mailto:sales@example.com");
        overrides.set("bottomCTAHref", "#contact");
        let content = PricingContent::with_overrides(&overrides);
        let catalog = PlanCatalog::build(&content).unwrap();

        let view = render(&content, &catalog, BillingCycle::Monthly);
        let cta = &view.card(3).unwrap().cta;
        assert_eq!(cta.href, "mailto:sales@example.com");
        assert_eq!(cta.href_key, "plan3CTAHref");
        assert_eq!(view.bottom.cta.href, "#contact");
    }

    #[test]
    fn test_following_every_cta_navigates_verbatim() {
        let mut overrides = PricingOverrides::default();
        overrides.set("plan1CTAHref", "/signup?plan=starter");
        overrides.set("plan2CTAHref", "  spaced  ");
        overrides.set("bottomCTAHref", "#contact");
        let content = PricingContent::with_overrides(&overrides);
        let catalog = PlanCatalog::build(&content).unwrap();
        let navigator = RecordingNavigator::new();

        let view = render(&content, &catalog, BillingCycle::Annual);
        for card in &view.cards {
            card.cta.follow(&navigator);
        }
        view.bottom.cta.follow(&navigator);

        assert_eq!(
            navigator.visited(),
            vec![
                "/signup?plan=starter".to_string(),
                "  spaced  ".to_string(),
                content.plan3_cta_href.clone(),
                "#contact".to_string(),
            ]
        );
        assert_eq!(navigator.last().as_deref(), Some("#contact"));
    }

    #[test]
    fn test_features_in_order() {
        let (content, catalog) = defaults();
        let view = render(&content, &catalog, BillingCycle::Monthly);
        assert_eq!(view.card(2).unwrap().features[0], "Everything in Starter");
        assert_eq!(view.card(3).unwrap().features[8], "Multi-location tracking");
    }
}
