//! Closing call-to-action block

use std::sync::Arc;

use leptos::prelude::*;
use plancard_core::render::BottomCtaView;
use plancard_core::Navigate;

use super::icons::LeafIcon;

#[component]
pub fn BottomCta(bottom: BottomCtaView, navigator: Arc<dyn Navigate>) -> impl IntoView {
    let BottomCtaView {
        title,
        description,
        cta,
    } = bottom;
    let action = cta.clone();

    view! {
        <div class="pricing-bottom">
            <div class="pricing-bottom-panel">
                <h3 class="pricing-bottom-title">
                    <span data-editable=title.key>{title.text}</span>
                </h3>
                <p class="pricing-bottom-description">
                    <span data-editable=description.key>{description.text}</span>
                </p>
                <button
                    type="button"
                    class="btn btn-outline btn-lg"
                    data-editable-href=cta.href_key
                    data-href=cta.href
                    on:click=move |_| action.follow(&*navigator)
                >
                    <LeafIcon />
                    <span data-editable=cta.label.key>{cta.label.text}</span>
                </button>
            </div>
        </div>
    }
}
