//! Section header: badge, two-part title, description

use leptos::prelude::*;
use plancard_core::render::HeaderView;

use super::icons::LeafIcon;

#[component]
pub fn SectionHeader(header: HeaderView) -> impl IntoView {
    view! {
        <span class="badge badge-outline pricing-badge">
            <LeafIcon size=12 />
            <span data-editable=header.badge.key>{header.badge.text}</span>
        </span>
        <h2 class="pricing-title">
            <span data-editable=header.title.key>{header.title.text}</span>
            <span class="pricing-title-highlight">
                <span data-editable=header.highlight.key>{header.highlight.text}</span>
            </span>
        </h2>
        <p class="pricing-description">
            <span data-editable=header.description.key>{header.description.text}</span>
        </p>
    }
}
