use std::sync::Arc;

use axum::{http::HeaderValue, middleware, routing::get, routing::put, Router};
use tokio::sync::RwLock;
use tower_http::trace::TraceLayer;
use tracing::info;

mod config;
mod cors;
mod error;
mod handlers;
mod models;
mod seed;
mod store;

use crate::config::Config;
use crate::store::ProductStore;

/// Shared application state. Cloning only bumps the `Arc`.
///
/// Reads take the shared lock; every mutation holds the write lock for its
/// whole lookup-and-modify step, so requests never observe a half-applied change.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<RwLock<ProductStore>>,
}

impl AppState {
    pub fn new(store: ProductStore) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present (ignored in production where env vars are injected)
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,product_service=debug")),
        )
        .with_target(false)
        .compact()
        .init();

    let config = Config::from_env()?;

    let state = AppState::new(seed::seeded_store());
    let app = build_router(state, config.allowed_origin.clone());

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(allowed_origin = ?config.allowed_origin, "Backend running at :{}", config.port);

    axum::serve(listener, app).await?;

    Ok(())
}

fn build_router(state: AppState, allowed_origin: HeaderValue) -> Router {
    Router::new()
        // ── Products CRUD ───────────────────────────────────────────────────
        .route(
            "/products",
            get(handlers::products::list_products).post(handlers::products::create_product),
        )
        .route(
            "/products/:id",
            put(handlers::products::update_product).delete(handlers::products::delete_product),
        )

        // ── Middleware ──────────────────────────────────────────────────────
        .layer(middleware::from_fn_with_state(allowed_origin, cors::cors_gate))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
