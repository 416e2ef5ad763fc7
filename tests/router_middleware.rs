mod common;

use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode, header};
use snaplink::api::middleware::cors;
use snaplink::domain::entities::NewUrlRecord;
use snaplink::domain::repositories::UrlRepository;
use snaplink::infrastructure::persistence::InMemoryUrlRepository;
use snaplink::routes::app_router;
use std::sync::Arc;
use tower::ServiceExt;
use tower_http::normalize_path::NormalizePath;

const ALLOWED_ORIGIN: &str = "http://localhost:3000";

fn make_app() -> (NormalizePath<Router>, Arc<InMemoryUrlRepository>) {
    let (state, repo) = common::memory_state();
    let origins = vec![ALLOWED_ORIGIN.to_string(), "http://localhost:5173".to_string()];
    let app = app_router(state, cors::layer(&origins).unwrap());
    (app, repo)
}

fn preflight(origin: &str) -> Request<Body> {
    Request::builder()
        .method(Method::OPTIONS)
        .uri("/shorten")
        .header(header::ORIGIN, origin)
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
        .body(Body::empty())
        .unwrap()
}

// ─── CORS ────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_preflight_from_allowed_origin() {
    let (app, _repo) = make_app();

    let response = app.oneshot(preflight(ALLOWED_ORIGIN)).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let headers = response.headers();
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], ALLOWED_ORIGIN);
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_CREDENTIALS], "true");
    assert_eq!(headers[header::ACCESS_CONTROL_MAX_AGE], "43200");

    let methods = headers[header::ACCESS_CONTROL_ALLOW_METHODS]
        .to_str()
        .unwrap()
        .to_ascii_uppercase();
    for method in ["GET", "POST", "PUT", "DELETE", "OPTIONS"] {
        assert!(methods.contains(method), "missing {method} in {methods}");
    }

    let allowed_headers = headers[header::ACCESS_CONTROL_ALLOW_HEADERS]
        .to_str()
        .unwrap()
        .to_ascii_lowercase();
    for name in ["origin", "content-type", "authorization"] {
        assert!(allowed_headers.contains(name), "missing {name}");
    }
}

#[tokio::test]
async fn test_preflight_from_disallowed_origin() {
    let (app, _repo) = make_app();

    let response = app
        .oneshot(preflight("https://evil.example"))
        .await
        .unwrap();

    assert!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .is_none()
    );
}

#[tokio::test]
async fn test_simple_request_exposes_content_length() {
    let (app, _repo) = make_app();

    let request = Request::builder()
        .uri("/urls")
        .header(header::ORIGIN, ALLOWED_ORIGIN)
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let headers = response.headers();
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], ALLOWED_ORIGIN);
    assert_eq!(
        headers[header::ACCESS_CONTROL_EXPOSE_HEADERS]
            .to_str()
            .unwrap()
            .to_ascii_lowercase(),
        "content-length"
    );
}

// ─── PATH NORMALIZATION ──────────────────────────────────────────────────────

#[tokio::test]
async fn test_trailing_slash_is_trimmed() {
    let (app, repo) = make_app();
    repo.insert(NewUrlRecord::new("slash", "https://example.com"))
        .await
        .unwrap();

    let stats = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/slash/stats/")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(stats.status(), StatusCode::OK);

    let redirect = app
        .oneshot(Request::builder().uri("/slash/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(redirect.status(), StatusCode::MOVED_PERMANENTLY);
    assert_eq!(redirect.headers()[header::LOCATION], "https://example.com");

    let record = repo.find_by_code("slash").await.unwrap().unwrap();
    assert_eq!(record.clicks, 1);
}
