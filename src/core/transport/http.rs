//! HTTP transport implementation.
//!
//! JSON API for tools, favorites and analytics, plus the server-rendered
//! pages. Panics inside handlers are turned into a generic 500 response.

use std::any::Any;

use axum::{
    Json, Router,
    extract::{Path, Query, State, rejection::QueryRejection},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
};
use bytes::Bytes;
use http::Method;
use serde::Deserialize;
use tower::ServiceBuilder;
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{Any as AnyOrigin, CorsLayer},
    trace::TraceLayer,
};
use tracing::{error, info, instrument};

use super::{HttpConfig, TransportError, TransportResult, message_response};
use crate::core::DirectoryServer;
use crate::domains::favorites::{FavoriteError, parse_add_request, parse_tool_id};
use crate::domains::presentation::{ListingQuery, Page};

/// HTTP transport handler.
pub struct HttpTransport {
    config: HttpConfig,
}

/// Query parameters of `GET /tools`.
#[derive(Debug, Default, Deserialize)]
struct ToolsQuery {
    category: Option<String>,
}

impl HttpTransport {
    /// Create a new HTTP transport with the given config.
    pub fn new(config: HttpConfig) -> Self {
        Self { config }
    }

    /// Run the HTTP transport until Ctrl-C.
    pub async fn run(self, server: DirectoryServer) -> TransportResult<()> {
        let addr = self.config.address();
        info!("Starting transport: {}", self.config.description());

        let app = build_router(server, &self.config);

        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .map_err(|e| TransportError::bind(&addr, e))?;

        let cors_status = if self.config.enable_cors {
            "enabled"
        } else {
            "disabled"
        };
        info!("Ready - listening on http://{} (CORS {})", addr, cors_status);
        info!("  → API:    GET /tools, GET|POST /favorites, DELETE /favorites/{{toolId}}");
        info!("  → Pages:  GET {}", Page::Tools.path());
        info!("  → Health: GET /health");

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| TransportError::http(e.to_string()))?;

        Ok(())
    }
}

/// Build the application router.
pub fn build_router(server: DirectoryServer, config: &HttpConfig) -> Router {
    let mut app = Router::new()
        .route("/tools", get(list_tools))
        .route("/favorites", get(list_favorites).post(add_favorite))
        .route("/favorites/{tool_id}", axum::routing::delete(remove_favorite))
        .route("/analytics", get(analytics))
        .route("/health", get(health_check))
        .route(Page::Tools.path(), get(listing_page))
        .route(Page::Favorites.path(), get(favorites_page))
        .route(Page::Analytics.path(), get(analytics_page))
        .with_state(server);

    if config.enable_cors {
        let cors = CorsLayer::new()
            .allow_origin(AnyOrigin)
            .allow_methods([Method::GET, Method::POST, Method::DELETE])
            .allow_headers(AnyOrigin);
        app = app.layer(cors);
    }

    app.layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(CatchPanicLayer::custom(handle_panic)),
    )
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}

/// Convert a handler panic into a generic failure response.
fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        *s
    } else {
        "unknown panic"
    };
    error!("Request handler panicked: {}", detail);

    message_response(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
}

/// Health check endpoint.
async fn health_check(State(server): State<DirectoryServer>) -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "name": server.name(),
        "version": server.version(),
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

/// `GET /tools?category=X`. A malformed query is ignored.
#[instrument(skip_all)]
async fn list_tools(
    State(server): State<DirectoryServer>,
    query: Result<Query<ToolsQuery>, QueryRejection>,
) -> impl IntoResponse {
    let query = query.map(|Query(q)| q).unwrap_or_default();
    Json(server.list_tools(query.category.as_deref()))
}

/// `GET /favorites`.
#[instrument(skip_all)]
async fn list_favorites(State(server): State<DirectoryServer>) -> impl IntoResponse {
    Json(server.list_favorites().await)
}

/// `POST /favorites` with `{"toolId": n}`.
#[instrument(skip_all)]
async fn add_favorite(
    State(server): State<DirectoryServer>,
    body: Bytes,
) -> Result<Response, FavoriteError> {
    let tool_id = parse_add_request(&body)?;
    let tool_id = server.add_favorite(tool_id).await?;

    Ok((
        StatusCode::CREATED,
        Json(serde_json::json!({
            "message": "Tool added to favorites",
            "toolId": tool_id
        })),
    )
        .into_response())
}

/// `DELETE /favorites/{toolId}`.
#[instrument(skip(server))]
async fn remove_favorite(
    State(server): State<DirectoryServer>,
    Path(tool_id): Path<String>,
) -> Result<Response, FavoriteError> {
    let tool_id = parse_tool_id(&tool_id)?;
    server.remove_favorite(tool_id).await?;

    Ok(message_response(StatusCode::OK, "Favorite removed successfully"))
}

/// `GET /analytics`.
#[instrument(skip_all)]
async fn analytics(State(server): State<DirectoryServer>) -> impl IntoResponse {
    Json(server.analytics())
}

async fn listing_page(
    State(server): State<DirectoryServer>,
    query: Result<Query<ListingQuery>, QueryRejection>,
) -> Html<String> {
    let query = query.map(|Query(q)| q).unwrap_or_default();
    Html(server.render_listing(&query).await)
}

async fn favorites_page(State(server): State<DirectoryServer>) -> Html<String> {
    Html(server.render_favorites().await)
}

async fn analytics_page(State(server): State<DirectoryServer>) -> Html<String> {
    Html(server.render_analytics())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Config;
    use axum::body::Body;
    use http::Request;
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    fn app() -> Router {
        let server = DirectoryServer::new(Config::default()).unwrap();
        build_router(server, &HttpConfig::default())
    }

    async fn send(
        app: &Router,
        method: Method,
        uri: &str,
        body: Option<&str>,
    ) -> (StatusCode, Bytes) {
        let mut request = Request::builder().method(method).uri(uri);
        if body.is_some() {
            request = request.header("content-type", "application/json");
        }
        let request = request
            .body(body.map_or_else(Body::empty, |b| Body::from(b.to_string())))
            .unwrap();

        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, bytes)
    }

    async fn send_json(
        app: &Router,
        method: Method,
        uri: &str,
        body: Option<&str>,
    ) -> (StatusCode, serde_json::Value) {
        let (status, bytes) = send(app, method, uri, body).await;
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_list_all_tools() {
        let app = app();
        let (status, body) = send_json(&app, Method::GET, "/tools", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().unwrap().len(), 12);

        let (_, body) = send_json(&app, Method::GET, "/tools?category=all", None).await;
        assert_eq!(body.as_array().unwrap().len(), 12);
    }

    #[tokio::test]
    async fn test_list_tools_by_category() {
        let app = app();
        let (status, body) =
            send_json(&app, Method::GET, "/tools?category=image%20generation", None).await;
        assert_eq!(status, StatusCode::OK);
        let ids: Vec<i64> = body
            .as_array()
            .unwrap()
            .iter()
            .map(|t| t["id"].as_i64().unwrap())
            .collect();
        assert_eq!(ids, vec![3, 4, 12]);

        let (_, body) = send_json(&app, Method::GET, "/tools?category=Nope", None).await;
        assert!(body.as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_add_list_remove_favorite() {
        let app = app();

        let (status, body) =
            send_json(&app, Method::POST, "/favorites", Some(r#"{"toolId": 4}"#)).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["message"], "Tool added to favorites");
        assert_eq!(body["toolId"], 4);

        let (status, body) = send_json(&app, Method::GET, "/favorites", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body[0]["toolId"], 4);
        assert_eq!(body[0]["tool"]["name"], "Stable Diffusion");

        let (status, body) = send_json(&app, Method::DELETE, "/favorites/4", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Favorite removed successfully");

        let (status, body) = send_json(&app, Method::DELETE, "/favorites/4", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["message"], "Favorite not found");

        let (_, body) = send_json(&app, Method::GET, "/favorites", None).await;
        assert!(body.as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_add_duplicate_favorite_conflicts() {
        let app = app();
        send(&app, Method::POST, "/favorites", Some(r#"{"toolId": 1}"#)).await;

        let (status, body) =
            send_json(&app, Method::POST, "/favorites", Some(r#"{"toolId": 1}"#)).await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body["message"], "Tool is already in favorites");

        let (_, body) = send_json(&app, Method::GET, "/favorites", None).await;
        assert_eq!(body.as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_add_unknown_tool_is_not_found() {
        let app = app();
        let (status, body) =
            send_json(&app, Method::POST, "/favorites", Some(r#"{"toolId": 999}"#)).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["message"], "Tool not found");

        let (_, body) = send_json(&app, Method::GET, "/favorites", None).await;
        assert!(body.as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_add_negative_tool_id_is_not_found() {
        let app = app();
        let (status, body) =
            send_json(&app, Method::POST, "/favorites", Some(r#"{"toolId": -3}"#)).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["message"], "Tool not found");

        let (_, body) = send_json(&app, Method::GET, "/favorites", None).await;
        assert!(body.as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_add_whole_float_tool_id() {
        let app = app();
        let (status, body) =
            send_json(&app, Method::POST, "/favorites", Some(r#"{"toolId": 5.0}"#)).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["toolId"], 5);
    }

    #[tokio::test]
    async fn test_remove_id_with_trailing_garbage() {
        let (status, body) = send_json(&app(), Method::DELETE, "/favorites/12abc", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Invalid tool ID");
    }

    #[tokio::test]
    async fn test_add_malformed_requests() {
        let app = app();

        let (status, body) = send_json(&app, Method::POST, "/favorites", Some("{}")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Tool ID is required");

        let (status, body) = send_json(&app, Method::POST, "/favorites", Some("{oops")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Invalid request body");

        let (status, _) =
            send_json(&app, Method::POST, "/favorites", Some(r#"{"toolId": "x"}"#)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_remove_non_numeric_id() {
        let (status, body) = send_json(&app(), Method::DELETE, "/favorites/abc", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Invalid tool ID");
    }

    #[tokio::test]
    async fn test_analytics_endpoint() {
        let (status, body) = send_json(&app(), Method::GET, "/analytics", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["summary"]["totalTools"], 12);
        assert_eq!(body["summary"]["freeTools"], 3);
        assert_eq!(body["summary"]["freemiumTools"], 5);
        assert_eq!(body["pricing"][0]["fill"], "#0088FE");
    }

    #[tokio::test]
    async fn test_pages_render() {
        let app = app();
        for uri in ["/", "/?q=voice&category=Audio", "/ui/favorites", "/ui/analytics"] {
            let (status, body) = send(&app, Method::GET, uri, None).await;
            assert_eq!(status, StatusCode::OK, "{}", uri);
            assert!(String::from_utf8_lossy(&body).starts_with("<!DOCTYPE html>"));
        }
    }

    #[tokio::test]
    async fn test_favorites_page_lists_added_tool() {
        let app = app();
        send(&app, Method::POST, "/favorites", Some(r#"{"toolId": 7}"#)).await;

        let (_, body) = send(&app, Method::GET, "/ui/favorites", None).await;
        assert!(String::from_utf8_lossy(&body).contains("ElevenLabs"));
    }

    #[tokio::test]
    async fn test_health_check() {
        let (status, body) = send_json(&app(), Method::GET, "/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");
    }

    async fn boom() -> &'static str {
        panic!("boom")
    }

    #[tokio::test]
    async fn test_panic_becomes_internal_error() {
        let app = Router::new()
            .route("/boom", get(boom))
            .layer(CatchPanicLayer::custom(handle_panic));

        let (status, body) = send_json(&app, Method::GET, "/boom", None).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["message"], "Internal server error");
    }
}
