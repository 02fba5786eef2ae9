//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module binds the contact API and stitches it with Leptos SSR
//! rendering under a single Axum router. With a Leptos site configuration
//! the SSR portfolio owns `/` and the service info moves to `/api`;
//! without one the API runs alone and answers `/` itself.

pub mod contact;
pub mod health;

use std::path::PathBuf;

use axum::Router;
use axum::http::{HeaderValue, Method};
use axum::routing::{get, post};
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::AllowedOrigins;
use crate::state::AppState;

/// CORS policy for the configured origins.
fn cors_layer(origins: &AllowedOrigins) -> CorsLayer {
    let allow_origin = match origins {
        AllowedOrigins::Any => AllowOrigin::any(),
        AllowedOrigins::List(list) => AllowOrigin::list(list.iter().filter_map(|origin| {
            HeaderValue::from_str(origin)
                .inspect_err(|_| tracing::warn!(%origin, "ignoring unparseable CORS origin"))
                .ok()
        })),
    };
    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any)
}

/// Contact API routes. `info_path` is where the service info is mounted.
fn api_routes(state: AppState, info_path: &str) -> Router {
    let cors = cors_layer(&state.settings.allowed_origins);

    Router::new()
        .route(info_path, get(health::api_info))
        .route("/health", get(health::health))
        .route("/api/contact", post(contact::submit_contact))
        .route("/webhook/health", get(health::webhook_health))
        .route("/webhook/config", get(health::webhook_config))
        .layer(cors)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// API-only router with service info at `/`.
pub fn app(state: AppState) -> Router {
    api_routes(state, "/")
}

/// API routes + Leptos SSR portfolio at `/` + static assets at `/pkg`.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `[[workspace.metadata.leptos]]` section).
pub fn leptos_app(state: AppState) -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    // WASM, JS and CSS bundles live under the site root's /pkg directory.
    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    Ok(api_routes(state, "/api")
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg"))))
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
