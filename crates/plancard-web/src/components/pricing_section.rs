//! Pricing section: header, billing toggle, plan cards, closing CTA

use std::sync::Arc;

use leptos::prelude::*;
use plancard_core::models::{BillingCycle, BillingState};
use plancard_core::{Navigate, ResolvedPricing};

use super::{BillingToggle, BottomCta, PlanCard, SectionHeader};

/// Apply a toggle click to the section state
///
/// Re-selecting the active cycle leaves the signal untouched so nothing
/// re-renders. Returns whether the cycle changed.
pub fn select_cycle(billing: RwSignal<BillingState>, target: BillingCycle) -> bool {
    let mut state = billing.get_untracked();
    if state.select(target) {
        billing.set(state);
        true
    } else {
        false
    }
}

/// Full pricing section
///
/// Owns the billing toggle state. Every toggle that changes the cycle
/// re-renders the three cards from the projected view model.
#[component]
pub fn PricingSection(
    /// Merged content and validated catalog
    pricing: Arc<ResolvedPricing>,
    /// Receives every CTA target unchanged
    navigator: Arc<dyn Navigate>,
    /// Cycle selected on mount (monthly unless told otherwise)
    #[prop(optional)]
    initial_cycle: BillingCycle,
) -> impl IntoView {
    let billing = RwSignal::new(BillingState::new(initial_cycle));
    let cycle = Signal::derive(move || billing.get().cycle());

    let section = Memo::new(move |_| pricing.render(cycle.get()));
    let initial = section.get_untracked();

    let on_select = Callback::new(move |target: BillingCycle| {
        select_cycle(billing, target);
    });

    let card_navigator = Arc::clone(&navigator);

    view! {
        <section class="pricing-section" data-billing=move || cycle.get().as_str()>
            <div class="pricing-container">
                <div class="pricing-header">
                    <SectionHeader header=initial.header />
                    <BillingToggle toggle=initial.toggle active=cycle on_select />
                </div>

                <div class="pricing-grid">
                    {move || {
                        section
                            .get()
                            .cards
                            .into_iter()
                            .map(|card| {
                                let navigator = Arc::clone(&card_navigator);
                                view! { <PlanCard card navigator /> }
                            })
                            .collect_view()
                    }}
                </div>

                <BottomCta bottom=initial.bottom navigator />
            </div>
        </section>
    }
}
