//! Monthly / annual billing toggle

use leptos::prelude::*;
use plancard_core::models::BillingCycle;
use plancard_core::render::ToggleView;

/// Two-button segmented control
///
/// Clicking the active option still calls `on_select`; the owner decides
/// whether anything changed.
#[component]
pub fn BillingToggle(
    /// Button labels
    toggle: ToggleView,
    /// Currently selected cycle
    #[prop(into)]
    active: Signal<BillingCycle>,
    /// Called with the clicked cycle
    #[prop(into)]
    on_select: Callback<BillingCycle>,
) -> impl IntoView {
    let option_class = move |cycle: BillingCycle| {
        if active.get() == cycle {
            "billing-option billing-option-active"
        } else {
            "billing-option"
        }
    };
    let pressed = move |cycle: BillingCycle| (active.get() == cycle).to_string();

    view! {
        <div class="billing-toggle" role="group" aria-label="Billing cycle">
            <button
                type="button"
                data-cycle=BillingCycle::Monthly.as_str()
                class=move || option_class(BillingCycle::Monthly)
                aria-pressed=move || pressed(BillingCycle::Monthly)
                on:click=move |_| on_select.run(BillingCycle::Monthly)
            >
                <span data-editable=toggle.monthly.key>{toggle.monthly.text}</span>
            </button>
            <button
                type="button"
                data-cycle=BillingCycle::Annual.as_str()
                class=move || option_class(BillingCycle::Annual)
                aria-pressed=move || pressed(BillingCycle::Annual)
                on:click=move |_| on_select.run(BillingCycle::Annual)
            >
                <span data-editable=toggle.annual.key>{toggle.annual.text}</span>
                <span class="badge badge-secondary billing-discount">
                    <span data-editable=toggle.annual_badge.key>{toggle.annual_badge.text}</span>
                </span>
            </button>
        </div>
    }
}
