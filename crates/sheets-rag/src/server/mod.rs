//! HTTP server for the knowledge service

pub mod routes;
pub mod state;

use axum::{routing::get, Router};
use std::net::SocketAddr;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::config::AppConfig;
use crate::error::{Error, Result};
use state::AppState;

/// Knowledge HTTP server
pub struct SheetsRagServer {
    config: AppConfig,
    state: AppState,
}

impl SheetsRagServer {
    /// Create a server backed by the public Google Sheets client
    pub fn new(config: AppConfig) -> Result<Self> {
        let state = AppState::new(config.clone())?;
        Ok(Self { config, state })
    }

    /// Create a server around existing state
    pub fn with_state(state: AppState) -> Self {
        Self {
            config: state.config().clone(),
            state,
        }
    }

    /// Build the router with all routes
    pub fn build_router(&self) -> Router {
        let router = Router::new()
            .route("/health", get(health_check))
            .nest("/api", routes::api_routes())
            .with_state(self.state.clone())
            .layer(TraceLayer::new_for_http());

        if self.config.server.enable_cors {
            let cors = CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any);
            router.layer(cors)
        } else {
            router
        }
    }

    /// Start the server
    pub async fn start(self) -> Result<()> {
        let addr: SocketAddr = self
            .address()
            .parse()
            .map_err(|e| Error::Config(format!("Invalid address: {}", e)))?;

        let router = self.build_router();

        tracing::info!("Starting sheets-rag server on http://{}", addr);

        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .map_err(|e| Error::Config(format!("Failed to bind: {}", e)))?;

        axum::serve(listener, router)
            .await
            .map_err(|e| Error::internal(format!("Server error: {}", e)))?;

        Ok(())
    }

    /// Get the server address
    pub fn address(&self) -> String {
        format!("{}:{}", self.config.server.host, self.config.server.port)
    }
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::MockSheetsClient;
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use serde_json::{json, Value};
    use std::sync::Arc;
    use tower::ServiceExt;

    fn router_with(client: MockSheetsClient) -> Router {
        let state = AppState::with_client(AppConfig::default(), Arc::new(client));
        SheetsRagServer::with_state(state).build_router()
    }

    fn router() -> Router {
        let mut client = MockSheetsClient::new();
        client.expect_name().return_const("mock");
        router_with(client)
    }

    async fn send(
        router: &Router,
        method: &str,
        uri: &str,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(match body {
                Some(v) => Body::from(v.to_string()),
                None => Body::empty(),
            })
            .unwrap();

        let response = router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, value)
    }

    #[tokio::test]
    async fn test_health() {
        let response = router()
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_query_without_sources() {
        let router = router();
        let question = json!({"question": "hi"});
        let (status, body) = send(&router, "POST", "/api/query", Some(question)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["kind"], "no_sources");
    }

    #[tokio::test]
    async fn test_manual_source_then_query() {
        let router = router();

        let (status, created) = send(
            &router,
            "POST",
            "/api/sources",
            Some(json!({"content": "Tokio runtime notes"})),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(created["title"], "Custom source 1");

        let (_, listed) = send(&router, "GET", "/api/sources", None).await;
        assert_eq!(listed.as_array().map(Vec::len), Some(1));

        let question = json!({"question": "tokio?"});
        let (_, reply) = send(&router, "POST", "/api/query", Some(question)).await;
        assert_eq!(reply["kind"], "answer");
        assert_eq!(reply["citations"], json!(["Custom source 1"]));

        let question = json!({"question": "axum"});
        let (_, reply) = send(&router, "POST", "/api/query", Some(question)).await;
        assert_eq!(reply["kind"], "not_found");
    }

    #[tokio::test]
    async fn test_blank_manual_source_rejected() {
        let router = router();
        let blank = json!({"content": "  "});
        let (status, body) = send(&router, "POST", "/api/sources", Some(blank)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["type"], "invalid_input");
    }

    #[tokio::test]
    async fn test_samples_and_insights() {
        let router = router();

        let (_, empty) = send(&router, "GET", "/api/insights", None).await;
        assert_eq!(empty["summary"], "No content yet.");

        let (status, loaded) = send(&router, "POST", "/api/sources/samples", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(loaded.as_array().map(Vec::len), Some(2));

        let (_, insights) = send(&router, "GET", "/api/insights", None).await;
        assert_eq!(insights["summary"].as_str().map(|s| s.lines().count()), Some(2));
        assert!(!insights["topics"].as_array().unwrap().is_empty());
        assert!(!insights["questions"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_connect_flow() {
        let mut client = MockSheetsClient::new();
        client.expect_name().return_const("mock");
        client.expect_fetch_csv().returning(|url| {
            if url.ends_with("gid=1") {
                Err(crate::error::Error::Fetch {
                    url: url.to_string(),
                    status: 500,
                })
            } else {
                Ok("product,price\nA,10\nB,20\n".to_string())
            }
        });
        let router = router_with(client);

        let (status, body) = send(&router, "GET", "/api/sheets", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"]["connected"], false);

        let links = "https://docs.google.com/spreadsheets/d/abc/edit#gid=0 \
                     https://docs.google.com/spreadsheets/d/abc/edit#gid=1";
        let request = json!({"links": links});
        let (status, body) = send(&router, "POST", "/api/sheets/connect", Some(request)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"]["message"], "Connected (2 rows / 1 worksheets)");
        assert_eq!(body["preview"]["headers"], json!(["product", "price"]));
        assert_eq!(body["auto_refresh"], true);

        let (_, sources) = send(&router, "GET", "/api/sources", None).await;
        assert_eq!(sources[0]["id"], "google-sheets");
    }

    #[tokio::test]
    async fn test_connect_rejects_bad_links() {
        let router = router();
        let (status, body) = send(
            &router,
            "POST",
            "/api/sheets/connect",
            Some(json!({"links": "https://example.com/not-a-sheet"})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["message"], "Invalid link format");
    }
}
