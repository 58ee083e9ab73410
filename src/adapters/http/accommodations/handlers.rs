//! HTTP handlers for accommodation endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::{catalog_error_response, ErrorResponse};
use crate::adapters::http::middleware::RequireAuth;
use crate::application::AccommodationCatalogHandler;
use crate::domain::catalog::AccommodationDraft;
use crate::domain::foundation::AccommodationId;

use super::dto::{AccommodationListResponse, ListAccommodationsQuery};

#[derive(Clone)]
pub struct AccommodationHandlers {
    catalog: Arc<AccommodationCatalogHandler>,
}

impl AccommodationHandlers {
    pub fn new(catalog: Arc<AccommodationCatalogHandler>) -> Self {
        Self { catalog }
    }
}

fn invalid_id() -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse::bad_request("Invalid accommodation ID")),
    )
        .into_response()
}

/// GET /api/accommodations
pub async fn list_accommodations(
    State(handlers): State<AccommodationHandlers>,
    Query(query): Query<ListAccommodationsQuery>,
) -> Response {
    let (filter, page) = query.into_parts();
    match handlers.catalog.list(filter, page).await {
        Ok(listing) => {
            (StatusCode::OK, Json(AccommodationListResponse::from(listing))).into_response()
        }
        Err(e) => catalog_error_response(e),
    }
}

/// GET /api/accommodations/:id
pub async fn get_accommodation(
    State(handlers): State<AccommodationHandlers>,
    Path(id): Path<String>,
) -> Response {
    let Ok(id) = id.parse::<AccommodationId>() else {
        return invalid_id();
    };
    match handlers.catalog.get(id).await {
        Ok(accommodation) => (StatusCode::OK, Json(accommodation)).into_response(),
        Err(e) => catalog_error_response(e),
    }
}

/// POST /api/accommodations
pub async fn create_accommodation(
    State(handlers): State<AccommodationHandlers>,
    RequireAuth(user): RequireAuth,
    Json(draft): Json<AccommodationDraft>,
) -> Response {
    tracing::debug!(user_id = %user.id, "Creating accommodation");
    match handlers.catalog.create(draft).await {
        Ok(accommodation) => (StatusCode::CREATED, Json(accommodation)).into_response(),
        Err(e) => catalog_error_response(e),
    }
}

/// PUT /api/accommodations/:id
pub async fn update_accommodation(
    State(handlers): State<AccommodationHandlers>,
    RequireAuth(_user): RequireAuth,
    Path(id): Path<String>,
    Json(draft): Json<AccommodationDraft>,
) -> Response {
    let Ok(id) = id.parse::<AccommodationId>() else {
        return invalid_id();
    };
    match handlers.catalog.update(id, draft).await {
        Ok(accommodation) => (StatusCode::OK, Json(accommodation)).into_response(),
        Err(e) => catalog_error_response(e),
    }
}

/// DELETE /api/accommodations/:id
pub async fn delete_accommodation(
    State(handlers): State<AccommodationHandlers>,
    RequireAuth(_user): RequireAuth,
    Path(id): Path<String>,
) -> Response {
    let Ok(id) = id.parse::<AccommodationId>() else {
        return invalid_id();
    };
    match handlers.catalog.delete(id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => catalog_error_response(e),
    }
}
