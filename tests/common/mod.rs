//! Common test utilities.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::response::Response;
use http_body_util::BodyExt;
use tower::ServiceExt;

use course_catalog::course::CourseStore;
use course_catalog::server::{self, AppState, Limits};

/// Limits used by every test app.
pub const TEST_LIMITS: Limits = Limits {
    request_timeout_seconds: 300,
    max_body_bytes: 64 * 1024,
};

/// Create a test app over the given store.
pub fn test_app_with(courses: CourseStore) -> Router {
    server::build_app(AppState { courses }, TEST_LIMITS)
}

/// Create a test app over a freshly seeded store.
pub fn test_app() -> Router {
    test_app_with(CourseStore::seeded())
}

/// Send one request through a clone of `app`.
pub async fn send(app: &Router, request: Request<Body>) -> Response {
    app.clone().oneshot(request).await.unwrap()
}

/// Build a JSON request with the given method and body.
pub fn json_request(method: &str, uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Collect a response body as UTF-8 text.
pub async fn body_text(response: Response) -> String {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(body.to_vec()).unwrap()
}

/// Collect a response body as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

/// Assert a successful JSON response and return its body.
pub async fn ok_json(response: Response) -> serde_json::Value {
    assert_eq!(response.status(), StatusCode::OK);
    body_json(response).await
}
