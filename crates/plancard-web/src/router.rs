//! Preview router using Axum

use axum::{
    extract::{Query, State},
    response::Html,
    routing::get,
    Json, Router,
};
use plancard_core::models::BillingCycle;
use plancard_core::{editable_slots, ResolvedPricing};
use serde::Deserialize;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

use crate::page;

/// Optional `?billing=monthly|annual` query
#[derive(Debug, Default, Deserialize)]
pub struct BillingQuery {
    pub billing: Option<BillingCycle>,
}

impl BillingQuery {
    fn cycle(&self) -> BillingCycle {
        self.billing.unwrap_or_default()
    }
}

/// Create the preview router
pub fn create_router(pricing: Arc<ResolvedPricing>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(index_handler))
        .route("/section", get(section_handler))
        .route("/api/content", get(content_handler))
        .route("/api/plans", get(plans_handler))
        .route("/api/editables", get(editables_handler))
        .route("/api/health", get(health_handler))
        .layer(cors)
        .with_state(pricing)
}

async fn index_handler(
    State(pricing): State<Arc<ResolvedPricing>>,
    Query(query): Query<BillingQuery>,
) -> Html<String> {
    Html(page::render_page(pricing, query.cycle()))
}

/// Bare section fragment, for embedding into a host page
async fn section_handler(
    State(pricing): State<Arc<ResolvedPricing>>,
    Query(query): Query<BillingQuery>,
) -> Html<String> {
    Html(page::render_section(pricing, query.cycle()))
}

async fn content_handler(State(pricing): State<Arc<ResolvedPricing>>) -> Json<serde_json::Value> {
    Json(serde_json::to_value(&pricing.content).unwrap_or(serde_json::Value::Null))
}

async fn plans_handler(
    State(pricing): State<Arc<ResolvedPricing>>,
    Query(query): Query<BillingQuery>,
) -> Json<serde_json::Value> {
    let cycle = query.cycle();
    let view = pricing.render(cycle);

    Json(serde_json::json!({
        "billing": cycle,
        "cards": view.cards,
    }))
}

async fn editables_handler() -> Json<serde_json::Value> {
    Json(serde_json::to_value(editable_slots()).unwrap_or(serde_json::Value::Null))
}

async fn health_handler(State(pricing): State<Arc<ResolvedPricing>>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "plans": pricing.catalog.plans().len(),
        "popular": pricing.catalog.popular().position,
    }))
}
