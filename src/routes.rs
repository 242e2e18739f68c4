//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! The host has no data API. It server-renders the Leptos app at `/`, serves
//! the compiled WASM/JS/CSS bundle from `/pkg`, and answers `/healthz` for
//! load balancers. Every request passes through tracing and gzip layers.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use std::path::{Path, PathBuf};

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;
use crate::error::ServerError;

/// Full application router: health check, Leptos SSR, and static assets.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `Cargo.toml` `[package.metadata.leptos]` section).
pub fn app(config: &ServerConfig) -> Result<Router, ServerError> {
    let conf = get_configuration(None).map_err(|e| ServerError::LeptosConfig(e.to_string()))?;
    let mut leptos_options = conf.leptos_options;
    if let Some(root) = &config.site_root {
        leptos_options.site_root = root.clone().into();
    }
    leptos_options.site_addr = config.socket_addr();

    let routes = generate_route_list(client::app::App);
    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    let pkg = pkg_dir(Path::new(leptos_options.site_root.as_ref()), leptos_options.site_pkg_dir.as_ref());
    tracing::debug!(pkg = %pkg.display(), "serving static bundle");

    Ok(health_routes()
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(pkg))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http()))
}

/// Routes that never touch Leptos.
fn health_routes() -> Router {
    Router::new().route("/healthz", get(healthz))
}

/// Directory holding the compiled client bundle.
fn pkg_dir(site_root: &Path, site_pkg_dir: &str) -> PathBuf {
    site_root.join(site_pkg_dir)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
