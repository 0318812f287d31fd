//! Plan card component

use std::sync::Arc;

use leptos::prelude::*;
use plancard_core::render::PlanCardView;
use plancard_core::Navigate;

use super::icons::{CheckIcon, PlanIconSvg, StarIcon, ZapIcon};

/// One pricing tier: badge, icon, price block, features, CTA
#[component]
pub fn PlanCard(
    /// Card content for the current billing cycle
    card: PlanCardView,
    /// Receives the CTA target when the button is clicked
    navigator: Arc<dyn Navigate>,
) -> impl IntoView {
    let PlanCardView {
        position,
        popular,
        popular_badge,
        badge,
        icon,
        name,
        description,
        price,
        period,
        savings,
        features,
        cta,
        trial,
    } = card;

    let (card_class, header_class, icon_class, cta_class) = if popular {
        (
            "card plan-card plan-card-popular",
            "plan-card-header plan-card-header-popular",
            "plan-icon plan-icon-popular",
            "btn btn-primary plan-cta",
        )
    } else {
        (
            "card plan-card",
            "plan-card-header",
            "plan-icon",
            "btn btn-outline plan-cta",
        )
    };

    let action = cta.clone();
    let on_cta = move |_| action.follow(&*navigator);

    view! {
        <div class=card_class data-plan=position.to_string()>
            {popular_badge.map(|b| view! {
                <div class="plan-popular-badge">
                    <span class="badge badge-primary">
                        <StarIcon />
                        <span data-editable=b.key>{b.text}</span>
                    </span>
                </div>
            })}
            {popular.then(|| view! { <div class="plan-card-glow"></div> })}

            <div class=header_class>
                {badge.map(|b| view! {
                    <span class="badge badge-outline plan-badge">
                        <span data-editable=b.key>{b.text}</span>
                    </span>
                })}

                <div class=icon_class>
                    <PlanIconSvg icon />
                </div>

                <h3 class="plan-name">
                    <span data-editable=name.key>{name.text}</span>
                </h3>
                <p class="plan-description">
                    <span data-editable=description.key>{description.text}</span>
                </p>

                <div class="plan-price">
                    <span class="plan-price-amount">
                        <span data-editable=price.key>{price.text}</span>
                    </span>
                    {period.map(|p| view! {
                        <span class="plan-price-period">
                            <span data-editable=p.key>{p.text}</span>
                        </span>
                    })}
                </div>

                {savings.map(|s| view! { <p class="plan-savings">{s}</p> })}
            </div>

            <div class="plan-card-body">
                <ul class="plan-features">
                    {features
                        .into_iter()
                        .map(|feature| view! {
                            <li class="plan-feature">
                                <span class="plan-feature-check"><CheckIcon /></span>
                                <span>{feature}</span>
                            </li>
                        })
                        .collect_view()}
                </ul>

                <button
                    type="button"
                    class=cta_class
                    data-editable-href=cta.href_key
                    data-href=cta.href
                    on:click=on_cta
                >
                    {popular.then(|| view! { <ZapIcon /> })}
                    <span data-editable=cta.label.key>{cta.label.text}</span>
                </button>

                {trial.map(|t| view! {
                    <p class="plan-trial">
                        <span data-editable=t.key>{t.text}</span>
                    </p>
                })}
            </div>
        </div>
    }
}
