use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use tracing::info;

use crate::{
    error::{AppError, AppResult},
    models::{Product, ProductPayload},
    AppState,
};

/// Path ids follow signed integer syntax: `+3` and `-1` parse, `1.0` does not.
fn parse_id(raw: &str) -> AppResult<i64> {
    raw.parse()
        .map_err(|_| AppError::InvalidIdentifier(raw.to_string()))
}

// ── List ──────────────────────────────────────────────────────────────────────

pub async fn list_products(State(state): State<AppState>) -> Json<Vec<Product>> {
    let products = state.store.read().await.list();
    info!(count = products.len(), "Listed products");
    Json(products)
}

// ── Create ────────────────────────────────────────────────────────────────────

pub async fn create_product(
    State(state): State<AppState>,
    body: Bytes,
) -> AppResult<(StatusCode, Json<Product>)> {
    let payload = ProductPayload::from_json(&body)?;

    let product = state.store.write().await.create(payload);

    info!(id = product.id, name = %product.name, "Created product");

    Ok((StatusCode::OK, Json(product)))
}

// ── Update ────────────────────────────────────────────────────────────────────

pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Bytes,
) -> AppResult<(StatusCode, Json<Product>)> {
    let id = parse_id(&id)?;
    let payload = ProductPayload::from_json(&body)?;

    let product = state.store.write().await.update(id, payload)?;

    info!(id, "Updated product");

    Ok((StatusCode::OK, Json(product)))
}

// ── Delete ────────────────────────────────────────────────────────────────────

pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    let id = parse_id(&id)?;

    let removed = state.store.write().await.delete(id)?;

    info!(id, name = %removed.name, "Deleted product");

    Ok(StatusCode::NO_CONTENT)
}
