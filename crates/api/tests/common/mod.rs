#![allow(dead_code)] // each test binary uses a different subset of helpers

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request, Response, StatusCode};
use axum::Router;
use sqlx::PgPool;
use tower::ServiceExt;

use acme_api::auth::provider::{CredentialsProvider, IdentityProvider};
use acme_api::cache::ListingCache;
use acme_api::config::ServerConfig;
use acme_api::router::build_app_router;
use acme_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:3000".to_string()],
        request_timeout_secs: 30,
    }
}

/// Build the full application router with all middleware layers, using
/// the given database pool and the real credentials provider.
///
/// This mirrors the router construction in `main.rs` so integration
/// tests exercise the same middleware stack that production uses.
pub fn build_test_app(pool: PgPool) -> Router {
    let identity = Arc::new(CredentialsProvider::new(pool.clone()));
    build_test_app_with_identity(pool, identity)
}

/// Same as [`build_test_app`] but with an injected identity provider,
/// for tests that need to force specific sign-in failures.
pub fn build_test_app_with_identity(pool: PgPool, identity: Arc<dyn IdentityProvider>) -> Router {
    let config = test_config();

    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        listing_cache: Arc::new(ListingCache::new()),
        identity,
    };

    build_app_router(state, &config)
}

/// Issue a GET request against the app.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// POST a form-encoded body (the shape the invoice and sign-in forms submit).
pub async fn post_form(app: Router, uri: &str, body: &str) -> Response<Body> {
    send_form(app, Method::POST, uri, body).await
}

/// PUT a form-encoded body.
pub async fn put_form(app: Router, uri: &str, body: &str) -> Response<Body> {
    send_form(app, Method::PUT, uri, body).await
}

/// Issue a DELETE request against the app.
pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

async fn send_form(app: Router, method: Method, uri: &str, body: &str) -> Response<Body> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Read a response body as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = http_body_util::BodyExt::collect(response.into_body())
        .await
        .unwrap()
        .to_bytes();
    serde_json::from_slice(&bytes).expect("response body must be valid JSON")
}

/// Assert a response is the post-write redirect to the invoices listing.
pub fn assert_redirects_to(response: &Response<Body>, location: &str) {
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    let header = response
        .headers()
        .get(header::LOCATION)
        .expect("redirect must carry a Location header")
        .to_str()
        .unwrap();
    assert_eq!(header, location);
}
