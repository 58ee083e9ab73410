//! HTTP handlers for travel info endpoints.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::{travel_info_error_response, ErrorResponse};
use crate::application::CompareDestinationsHandler;
use crate::domain::foundation::ValidationError;
use crate::domain::travel::{reference, ComparisonRequest};

use super::dto::{CompareRequest, DestinationParam};

#[derive(Clone)]
pub struct TravelHandlers {
    compare: Arc<CompareDestinationsHandler>,
}

impl TravelHandlers {
    pub fn new(compare: Arc<CompareDestinationsHandler>) -> Self {
        Self { compare }
    }
}

fn missing_destination() -> Response {
    let error = ValidationError::empty_field("destination");
    (StatusCode::BAD_REQUEST, Json(ErrorResponse::validation(&error))).into_response()
}

/// POST /api/travel/compare
pub async fn compare_destinations(
    State(handlers): State<TravelHandlers>,
    Json(req): Json<CompareRequest>,
) -> Response {
    let request = match ComparisonRequest::try_new(
        req.destination1.as_deref(),
        req.destination2.as_deref(),
    ) {
        Ok(request) => request,
        Err(e) => {
            return (StatusCode::BAD_REQUEST, Json(ErrorResponse::validation(&e))).into_response()
        }
    };

    match handlers.compare.handle(request).await {
        Ok(outcome) => (StatusCode::OK, Json(outcome)).into_response(),
        Err(e) => travel_info_error_response(e),
    }
}

/// GET /api/travel/emergency
pub async fn emergency_info(Query(param): Query<DestinationParam>) -> Response {
    let Some(destination) = param.value() else {
        return missing_destination();
    };
    match reference::emergency_contacts_for(destination) {
        Some(contacts) => (StatusCode::OK, Json(contacts)).into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::not_found("Emergency contacts", destination)),
        )
            .into_response(),
    }
}

/// GET /api/travel/tips
pub async fn practical_tips(Query(param): Query<DestinationParam>) -> Response {
    match param.value() {
        Some(destination) => {
            (StatusCode::OK, Json(reference::practical_tips_for(destination))).into_response()
        }
        None => missing_destination(),
    }
}

/// GET /api/travel/restrictions
pub async fn travel_restrictions(Query(param): Query<DestinationParam>) -> Response {
    match param.value() {
        Some(destination) => {
            (StatusCode::OK, Json(reference::travel_restrictions_for(destination))).into_response()
        }
        None => missing_destination(),
    }
}
