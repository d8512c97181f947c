//! JSON catalog API.
//!
//! Thin handlers translating HTTP calls into catalog operations. Errors are
//! rendered by [`AppError`] as `{"error": "..."}` bodies.

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Serialize;
use tracing::instrument;

use online_store_core::{Product, ProductDraft, ProductId};

use crate::error::{AppError, Result};
use crate::state::AppState;

/// Response body for a created product.
#[derive(Debug, Serialize)]
pub struct CreatedProduct {
    pub id: ProductId,
}

/// List every product.
#[instrument(skip(state))]
pub async fn list_products(State(state): State<AppState>) -> Result<Json<Vec<Product>>> {
    Ok(Json(state.catalog().list_products().await?))
}

/// Fetch one product by id.
///
/// Ids that do not parse as integers can never match a row and are reported
/// as not found, like any other unknown id.
#[instrument(skip(state))]
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Product>> {
    let id = id
        .parse::<ProductId>()
        .map_err(|_| AppError::NotFound("Product not found".to_string()))?;

    Ok(Json(state.catalog().get_product(id).await?))
}

/// Create a product from a JSON body.
#[instrument(skip(state, payload))]
pub async fn create_product(
    State(state): State<AppState>,
    payload: std::result::Result<Json<ProductDraft>, JsonRejection>,
) -> Result<impl IntoResponse> {
    let Json(draft) = payload?;
    let id = state.catalog().create_product(draft).await?;

    Ok((StatusCode::CREATED, Json(CreatedProduct { id })))
}
