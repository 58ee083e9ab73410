//! HTTP handlers for destination endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::{catalog_error_response, ErrorResponse};
use crate::adapters::http::middleware::RequireAuth;
use crate::application::DestinationCatalogHandler;
use crate::domain::foundation::DestinationId;

use super::dto::{DestinationListResponse, DestinationRequest, DestinationResponse, ListDestinationsQuery};

#[derive(Clone)]
pub struct DestinationHandlers {
    catalog: Arc<DestinationCatalogHandler>,
}

impl DestinationHandlers {
    pub fn new(catalog: Arc<DestinationCatalogHandler>) -> Self {
        Self { catalog }
    }
}

fn parse_id(raw: &str) -> Result<DestinationId, Response> {
    raw.parse::<DestinationId>().map_err(|_| {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::bad_request("Invalid destination ID")),
        )
            .into_response()
    })
}

/// GET /api/destinations
pub async fn list_destinations(
    State(handlers): State<DestinationHandlers>,
    Query(query): Query<ListDestinationsQuery>,
) -> Response {
    let (filter, page) = query.into_parts();
    match handlers.catalog.list(filter, page).await {
        Ok(listing) => (StatusCode::OK, Json(DestinationListResponse::from(listing))).into_response(),
        Err(e) => catalog_error_response(e),
    }
}

/// GET /api/destinations/:id
pub async fn get_destination(
    State(handlers): State<DestinationHandlers>,
    Path(id): Path<String>,
) -> Response {
    let id = match parse_id(&id) {
        Ok(id) => id,
        Err(response) => return response,
    };
    match handlers.catalog.get(id).await {
        Ok(destination) => (StatusCode::OK, Json(DestinationResponse::from(destination))).into_response(),
        Err(e) => catalog_error_response(e),
    }
}

/// POST /api/destinations
pub async fn create_destination(
    State(handlers): State<DestinationHandlers>,
    RequireAuth(user): RequireAuth,
    Json(req): Json<DestinationRequest>,
) -> Response {
    tracing::debug!(user_id = %user.id, "Creating destination");
    match handlers.catalog.create(req.into()).await {
        Ok(destination) => {
            (StatusCode::CREATED, Json(DestinationResponse::from(destination))).into_response()
        }
        Err(e) => catalog_error_response(e),
    }
}

/// PUT /api/destinations/:id
pub async fn update_destination(
    State(handlers): State<DestinationHandlers>,
    RequireAuth(_user): RequireAuth,
    Path(id): Path<String>,
    Json(req): Json<DestinationRequest>,
) -> Response {
    let id = match parse_id(&id) {
        Ok(id) => id,
        Err(response) => return response,
    };
    match handlers.catalog.update(id, req.into()).await {
        Ok(destination) => (StatusCode::OK, Json(DestinationResponse::from(destination))).into_response(),
        Err(e) => catalog_error_response(e),
    }
}

/// DELETE /api/destinations/:id
pub async fn delete_destination(
    State(handlers): State<DestinationHandlers>,
    RequireAuth(_user): RequireAuth,
    Path(id): Path<String>,
) -> Response {
    let id = match parse_id(&id) {
        Ok(id) => id,
        Err(response) => return response,
    };
    match handlers.catalog.delete(id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => catalog_error_response(e),
    }
}
