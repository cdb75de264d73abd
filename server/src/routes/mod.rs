//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! One Axum router serves the Leptos SSR pages, their server functions, the
//! compiled WASM/CSS bundle under `/pkg`, and a liveness probe. Every render
//! and server-function call receives the configured API location and a shared
//! outbound HTTP client through Leptos context.

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use blog_client::net::api::ApiConfig;
use blog_client::net::http::ReqwestTransport;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;

/// Build the application router.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `[[workspace.metadata.leptos]]` section) or the outbound HTTP
/// client cannot be built.
pub fn app(config: &ServerConfig) -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(blog_client::app::App);

    let transport = ReqwestTransport::new(config.timeouts.request(), config.timeouts.connect())
        .map_err(|e| format!("outbound client: {e}"))?;
    let context = api_context(config.api.clone(), transport);

    let leptos_router = Router::new()
        .leptos_routes_with_context(&leptos_options, routes, context, {
            let opts = leptos_options.clone();
            move || blog_client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    Ok(Router::new()
        .route("/healthz", get(healthz))
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .layer(TraceLayer::new_for_http()))
}

/// Context installer run before each render and server-function call.
fn api_context(api: ApiConfig, transport: ReqwestTransport) -> impl Fn() + Clone + Send + Sync + 'static {
    move || {
        provide_context(api.clone());
        provide_context(transport.clone());
    }
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
