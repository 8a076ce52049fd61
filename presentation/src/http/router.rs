//! Router construction and server lifecycle

use super::handlers;
use axum::Router;
use axum::http::{Method, header};
use axum::routing::{get, post};
use brain_application::ProcessQueryUseCase;
use std::future::Future;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

/// Shared handler state.
#[derive(Clone)]
pub struct AppState {
    pub use_case: ProcessQueryUseCase,
}

fn cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::ORIGIN, header::CONTENT_TYPE, header::AUTHORIZATION])
        .expose_headers([header::CONTENT_LENGTH])
}

pub fn build_router(use_case: ProcessQueryUseCase) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/v1/brain/query", post(handlers::query))
        .route("/v1/brain/generate-code", post(handlers::generate_code))
        .route("/v1/brain/analyze-code", post(handlers::analyze_code))
        .layer(TraceLayer::new_for_http())
        .layer(cors())
        .with_state(AppState { use_case })
}

/// Serve `router` on `listener` until `shutdown` resolves, then drain
/// in-flight requests.
pub async fn serve<F>(listener: TcpListener, router: Router, shutdown: F) -> std::io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    if let Ok(addr) = listener.local_addr() {
        info!("brain-api listening on http://{}", addr);
    }
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown)
        .await
}

/// Resolves on Ctrl-C, or SIGTERM on unix.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::warn!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received, draining connections");
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode};
    use axum::response::Response;
    use brain_application::{GatewayError, LlmGateway, LlmSession};
    use brain_domain::{GenerationConfig, LlmResponse, Message, Model};
    use serde_json::{Value, json};
    use std::sync::Arc;
    use tower::ServiceExt;

    const BODY_LIMIT: usize = 1_048_576;

    struct MockSession {
        model: Model,
        config: GenerationConfig,
        fail: bool,
    }

    #[async_trait]
    impl LlmSession for MockSession {
        fn model(&self) -> &Model {
            &self.model
        }

        fn config(&self) -> &GenerationConfig {
            &self.config
        }

        async fn send(&self, content: &str) -> Result<LlmResponse, GatewayError> {
            if self.fail {
                return Err(GatewayError::ConnectionError("upstream unreachable".to_string()));
            }
            Ok(LlmResponse::from_text(format!("echo: {}", content)))
        }
    }

    struct MockGateway {
        fail: bool,
    }

    #[async_trait]
    impl LlmGateway for MockGateway {
        async fn create_session(
            &self,
            model: &Model,
            config: &GenerationConfig,
            _history: Vec<Message>,
        ) -> Result<Box<dyn LlmSession>, GatewayError> {
            Ok(Box::new(MockSession {
                model: model.clone(),
                config: *config,
                fail: self.fail,
            }))
        }
    }

    fn app(fail: bool) -> Router {
        build_router(ProcessQueryUseCase::new(Arc::new(MockGateway { fail })))
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn json_body(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), BODY_LIMIT).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let request = Request::builder()
            .uri("/health")
            .body(Body::empty())
            .unwrap();
        let response = app(false).oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            json_body(response).await,
            json!({ "status": "healthy", "service": "brain-api" })
        );
    }

    #[tokio::test]
    async fn test_query_returns_output_and_metadata() {
        let request = post_json("/v1/brain/query", json!({ "input": "hi", "mode": "chat" }));
        let response = app(false).oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["output"], "echo: hi");
        assert_eq!(body["metadata"]["model"], "gemini-2.0-flash-exp");
        assert_eq!(body["metadata"]["mode"], "chat");
        assert_eq!(body["metadata"]["temperature"], 0.0);
        assert!(body.get("excellenceReport").is_none());
    }

    #[tokio::test]
    async fn test_query_reports_requested_temperature() {
        let request = post_json(
            "/v1/brain/query",
            json!({ "input": "hi", "temperature": 1.5, "context": { "file": "main.rs" } }),
        );
        let response = app(false).oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["metadata"]["temperature"], 1.5);
        assert_eq!(body["metadata"]["mode"], "general");
    }

    #[tokio::test]
    async fn test_unknown_mode_is_general() {
        let request = post_json("/v1/brain/query", json!({ "input": "hi", "mode": "poetry" }));
        let response = app(false).oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await["metadata"]["mode"], "general");
    }

    #[tokio::test]
    async fn test_generate_code_forces_code_mode() {
        let request = post_json(
            "/v1/brain/generate-code",
            json!({ "input": "write fizzbuzz", "mode": "chat" }),
        );
        let response = app(false).oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await["metadata"]["mode"], "code");
    }

    #[tokio::test]
    async fn test_analyze_code_forces_analysis_mode() {
        let request = post_json("/v1/brain/analyze-code", json!({ "input": "fn main() {}" }));
        let response = app(false).oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await["metadata"]["mode"], "analysis");
    }

    #[tokio::test]
    async fn test_empty_input_is_bad_request() {
        let request = post_json("/v1/brain/query", json!({ "input": "" }));
        let response = app(false).oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            json_body(response).await["error"],
            "input must not be empty"
        );
    }

    #[tokio::test]
    async fn test_whitespace_input_is_accepted() {
        let request = post_json("/v1/brain/query", json!({ "input": "  " }));
        let response = app(false).oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await["output"], "echo:   ");
    }

    #[tokio::test]
    async fn test_missing_input_is_bad_request() {
        let request = post_json("/v1/brain/query", json!({ "mode": "code" }));
        let response = app(false).oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = json_body(response).await;
        assert!(body["error"].as_str().unwrap().contains("input"));
    }

    #[tokio::test]
    async fn test_out_of_range_temperature_is_bad_request() {
        let request = post_json("/v1/brain/query", json!({ "input": "hi", "temperature": 3.0 }));
        let response = app(false).oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(json_body(response).await["error"].is_string());
    }

    #[tokio::test]
    async fn test_malformed_json_is_bad_request() {
        let request = Request::builder()
            .method("POST")
            .uri("/v1/brain/query")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{ not json"))
            .unwrap();
        let response = app(false).oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(json_body(response).await["error"].is_string());
    }

    #[tokio::test]
    async fn test_missing_content_type_is_bad_request() {
        let request = Request::builder()
            .method("POST")
            .uri("/v1/brain/query")
            .body(Body::from(json!({ "input": "hi" }).to_string()))
            .unwrap();
        let response = app(false).oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(json_body(response).await["error"].is_string());
    }

    #[tokio::test]
    async fn test_gateway_failure_is_internal_error() {
        let request = post_json("/v1/brain/query", json!({ "input": "hi" }));
        let response = app(true).oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            json_body(response).await["error"],
            "Connection error: upstream unreachable"
        );
    }

    #[tokio::test]
    async fn test_cors_preflight_allows_any_origin() {
        let request = Request::builder()
            .method("OPTIONS")
            .uri("/v1/brain/query")
            .header(header::ORIGIN, "http://example.com")
            .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
            .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
            .body(Body::empty())
            .unwrap();
        let response = app(false).oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
            "*"
        );
    }

    #[tokio::test]
    async fn test_get_on_query_is_not_allowed() {
        let request = Request::builder()
            .uri("/v1/brain/query")
            .body(Body::empty())
            .unwrap();
        let response = app(false).oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }
}
