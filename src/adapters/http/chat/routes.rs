//! HTTP routes for the chat endpoint.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{get_history, send_message, ChatHandlers};

/// Creates the chat router, mounted at `/chat`.
pub fn chat_routes(handlers: ChatHandlers) -> Router {
    Router::new()
        .route("/message", post(send_message))
        .route("/history/:session_id", get(get_history))
        .with_state(handlers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    use crate::adapters::memory::InMemoryChatHistoryRepository;
    use crate::application::{GetChatHistoryHandler, SendChatMessageHandler, NLU_UNAVAILABLE_REPLY};
    use crate::domain::conversation::UserMessage;
    use crate::domain::foundation::{AuthenticatedUser, ConversationId, UserId};
    use crate::ports::{NluClient, NluError};

    struct EchoNlu;

    #[async_trait]
    impl NluClient for EchoNlu {
        async fn send(
            &self,
            _: &ConversationId,
            message: &UserMessage,
        ) -> Result<Option<String>, NluError> {
            Ok(Some(format!("You said: {}", message.as_str())))
        }
    }

    struct DownNlu;

    #[async_trait]
    impl NluClient for DownNlu {
        async fn send(&self, _: &ConversationId, _: &UserMessage) -> Result<Option<String>, NluError> {
            Err(NluError::Timeout)
        }
    }

    fn router(nlu: Arc<dyn NluClient>) -> (Router, Arc<InMemoryChatHistoryRepository>) {
        let history = Arc::new(InMemoryChatHistoryRepository::new());
        let send = SendChatMessageHandler::new(nlu, history.clone());
        let read = GetChatHistoryHandler::new(history.clone());
        (
            chat_routes(ChatHandlers::new(Arc::new(send), Arc::new(read))),
            history,
        )
    }

    fn post_json(body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/message")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn history_request(uri: &str, signed_in: bool) -> Request<Body> {
        let mut builder = Request::builder().uri(uri);
        if signed_in {
            let user = AuthenticatedUser::new(UserId::new("editor-1").unwrap(), None);
            builder = builder.extension(user);
        }
        builder.body(Body::empty()).unwrap()
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn message_is_answered_and_recorded() {
        let (router, history) = router(Arc::new(EchoNlu));
        let response = router
            .oneshot(post_json(r#"{"message":"Hello","session_id":"s-1"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["response"], "You said: Hello");
        assert_eq!(json["session_id"], "s-1");
        assert_eq!(history.len().await, 1);
    }

    #[tokio::test]
    async fn missing_session_gets_a_generated_one() {
        let (router, _) = router(Arc::new(EchoNlu));
        let response = router.oneshot(post_json(r#"{"message":"Hi"}"#)).await.unwrap();

        let json = body_json(response).await;
        assert!(!json["session_id"].as_str().unwrap().is_empty());
    }

    #[tokio::test]
    async fn forbidden_content_is_bad_request() {
        let (router, history) = router(Arc::new(EchoNlu));
        let response = router
            .oneshot(post_json(r#"{"message":"DROP TABLE users"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(history.len().await, 0);
    }

    #[tokio::test]
    async fn engine_outage_returns_apology() {
        let (router, _) = router(Arc::new(DownNlu));
        let response = router.oneshot(post_json(r#"{"message":"Hi"}"#)).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["response"], NLU_UNAVAILABLE_REPLY);
    }

    #[tokio::test]
    async fn history_lists_session_exchanges() {
        let (router, _) = router(Arc::new(EchoNlu));
        for message in ["Hello", "Where to?"] {
            let body = format!(r#"{{"message":"{}","session_id":"s-9"}}"#, message);
            router.clone().oneshot(post_json(&body)).await.unwrap();
        }

        let response = router
            .oneshot(history_request("/history/s-9?limit=1", true))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["session_id"], "s-9");
        assert_eq!(json["items"].as_array().unwrap().len(), 1);
        assert_eq!(json["items"][0]["question"], "Where to?");
        assert_eq!(json["items"][0]["answer"], "You said: Where to?");
    }

    #[tokio::test]
    async fn history_requires_a_user() {
        let (router, _) = router(Arc::new(EchoNlu));
        let response = router.oneshot(history_request("/history/s-9", false)).await.unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}
