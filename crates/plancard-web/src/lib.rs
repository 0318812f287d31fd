//! plancard-web - Pricing section using Leptos, preview server using Axum

#![recursion_limit = "1024"]

pub mod components;
pub mod navigation;
#[cfg(feature = "ssr")]
pub mod page;
#[cfg(feature = "ssr")]
pub mod router;

pub use components::PricingSection;
pub use navigation::BrowserNavigator;
#[cfg(feature = "ssr")]
pub use router::create_router;

#[cfg(feature = "ssr")]
pub use server::run;

#[cfg(feature = "ssr")]
mod server {
    use anyhow::Result;
    use plancard_core::ResolvedPricing;
    use std::net::SocketAddr;
    use std::sync::Arc;
    use tokio::net::TcpListener;
    use tracing::info;

    use crate::create_router;

    /// Run the preview server
    pub async fn run(pricing: Arc<ResolvedPricing>, port: u16) -> Result<()> {
        let router = create_router(pricing);

        let addr = SocketAddr::from(([127, 0, 0, 1], port));
        let listener = TcpListener::bind(addr).await?;

        info!("Preview server listening on http://{}", addr);
        println!("Preview server listening on http://{}", addr);

        axum::serve(listener, router).await?;

        Ok(())
    }
}
