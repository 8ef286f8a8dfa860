//! API Handlers
//!
//! HTTP request handlers for each registry endpoint.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use tracing::info;

use crate::error::{ApiError, Result};
use crate::models::{Animal, HealthResponse};
use crate::store::AnimalStore;

/// Application state shared across all handlers.
///
/// The store carries its own lock, so handlers only need shared ownership.
#[derive(Clone, Default)]
pub struct AppState {
    /// Shared animal registry
    pub store: Arc<AnimalStore>,
}

impl AppState {
    /// Creates a new AppState around the given store.
    pub fn new(store: AnimalStore) -> Self {
        Self {
            store: Arc::new(store),
        }
    }
}

/// Parses an `{id}` path segment as a non-negative integer.
pub fn parse_id(raw: &str) -> Result<i64> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ApiError::InvalidIdentifier(raw.to_string()));
    }
    raw.parse()
        .map_err(|_| ApiError::InvalidIdentifier(raw.to_string()))
}

/// Decodes an Animal from a raw request body.
///
/// Only the first JSON value is read; anything after it is ignored. The
/// Content-Type header is not consulted.
pub fn parse_animal(body: &[u8]) -> Result<Animal> {
    match serde_json::Deserializer::from_slice(body)
        .into_iter::<Animal>()
        .next()
    {
        Some(Ok(animal)) => Ok(animal),
        Some(Err(e)) => Err(ApiError::MalformedPayload(e.to_string())),
        None => Err(ApiError::MalformedPayload("EOF".to_string())),
    }
}

/// Handler for POST /v1/animal
///
/// Registers a new animal; the id must not be in use yet.
pub async fn create_animal(State(state): State<AppState>, body: Bytes) -> Result<StatusCode> {
    let animal = parse_animal(&body)?;
    let id = animal.id;

    state.store.create(animal).await?;
    info!(id, "animal registered");

    Ok(StatusCode::CREATED)
}

/// Handler for PUT /v1/animal/:id
///
/// Stores the payload under the path id, creating or overwriting.
pub async fn update_animal(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    body: Bytes,
) -> Result<StatusCode> {
    let id = parse_id(&raw_id)?;
    let animal = parse_animal(&body)?;

    state.store.replace(id, animal).await;
    info!(id, "animal updated");

    Ok(StatusCode::OK)
}

/// Handler for DELETE /v1/animal/:id
pub async fn delete_animal(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<StatusCode> {
    let id = parse_id(&raw_id)?;

    state.store.delete(id).await?;
    info!(id, "animal deleted");

    Ok(StatusCode::OK)
}

/// Handler for GET /v1/animal
///
/// Responds 404 when nothing is registered.
pub async fn list_animals(State(state): State<AppState>) -> Result<Json<Vec<Animal>>> {
    let animals = state.store.list_all().await?;
    Ok(Json(animals))
}

/// Handler for GET /v1/animal/:id
pub async fn get_animal(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<Animal>> {
    let id = parse_id(&raw_id)?;
    let animal = state.store.get(id).await?;
    Ok(Json(animal))
}

/// Handler for GET /health
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse::healthy(state.store.len().await))
}
