//! Top-level router composition.
//!
//! ```text
//! /health                    liveness, outside auth
//! /api/destinations[/:id]    catalog CRUD, writes need a user
//! /api/accommodations[/:id]  catalog CRUD, writes need a user
//! /api/travel/*              comparison and reference data
//! /api/actions               conversation action webhook
//! /chat/message              free-text chat through the NLU engine
//! /chat/history/:session_id  recorded exchanges, needs a user
//! ```

use std::sync::Arc;

use axum::{
    http::{HeaderValue, Method},
    middleware, Router,
};
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::application::{
    AccommodationCatalogHandler, CompareDestinationsHandler, DestinationCatalogHandler,
    GetChatHistoryHandler, HandleActionHandler, SendChatMessageHandler,
};
use crate::config::ServerConfig;

use super::accommodations::{accommodation_routes, AccommodationHandlers};
use super::actions::{action_routes, ActionHandlers};
use super::chat::{chat_routes, ChatHandlers};
use super::destinations::{destination_routes, DestinationHandlers};
use super::health::health_routes;
use super::middleware::{auth_middleware, AuthState};
use super::travel::{travel_routes, TravelHandlers};

/// Application handlers served over HTTP.
#[derive(Clone)]
pub struct AppServices {
    pub destinations: Arc<DestinationCatalogHandler>,
    pub accommodations: Arc<AccommodationCatalogHandler>,
    pub compare: Arc<CompareDestinationsHandler>,
    pub actions: Arc<HandleActionHandler>,
    pub chat: Arc<SendChatMessageHandler>,
    pub chat_history: Arc<GetChatHistoryHandler>,
}

/// Builds every route behind the auth middleware, plus the health probe.
pub fn api_router(services: AppServices, validator: AuthState) -> Router {
    let api = Router::new()
        .nest(
            "/api/destinations",
            destination_routes(DestinationHandlers::new(services.destinations)),
        )
        .nest(
            "/api/accommodations",
            accommodation_routes(AccommodationHandlers::new(services.accommodations)),
        )
        .nest("/api/travel", travel_routes(TravelHandlers::new(services.compare)))
        .nest("/api/actions", action_routes(ActionHandlers::new(services.actions)))
        .nest(
            "/chat",
            chat_routes(ChatHandlers::new(services.chat, services.chat_history)),
        )
        .layer(middleware::from_fn_with_state(validator, auth_middleware));

    api.merge(health_routes())
}

/// Wraps a router with tracing, CORS and the request timeout.
pub fn with_http_layers(router: Router, config: &ServerConfig) -> Router {
    router
        .layer(cors_layer(&config.cors_origins_list()))
        .layer(TimeoutLayer::new(config.request_timeout()))
        .layer(TraceLayer::new_for_http())
}

/// No configured origins means any origin; unparsable entries are skipped.
fn cors_layer(origins: &[String]) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers(Any);

    if origins.is_empty() {
        return layer.allow_origin(Any);
    }

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();
    layer.allow_origin(AllowOrigin::list(allowed))
}

#[cfg(test)]
mod tests {
    use super::*;

    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    #[tokio::test]
    async fn cors_allows_configured_origin() {
        let router = Router::new()
            .merge(health_routes())
            .layer(cors_layer(&["https://app.example.com".to_string()]));

        let response = router
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .header("origin", "https://app.example.com")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get("access-control-allow-origin").unwrap(),
            "https://app.example.com"
        );
    }

    #[tokio::test]
    async fn cors_without_configured_origins_allows_any() {
        let router = Router::new().merge(health_routes()).layer(cors_layer(&[]));

        let response = router
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .header("origin", "https://elsewhere.example.com")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.headers().get("access-control-allow-origin").unwrap(), "*");
    }
}
