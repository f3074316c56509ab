use std::time::Duration;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::http::StatusCode;
use axum::routing::{delete, get};
use tower_http::timeout::TimeoutLayer;

use crate::course::CourseStore;
use crate::handlers;

// ============================================================================
// Application State
// ============================================================================

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub courses: CourseStore,
}

// ============================================================================
// Server Setup
// ============================================================================

/// Limits applied to every route.
#[derive(Debug, Clone, Copy)]
pub struct Limits {
    pub request_timeout_seconds: u64,
    pub max_body_bytes: usize,
}

pub fn build_app(state: AppState, limits: Limits) -> Router {
    let course_routes = Router::new()
        .route("/cursos", get(handlers::list_courses))
        .route("/cursos/{name}", get(handlers::search_courses))
        .route(
            "/curso",
            get(handlers::sample_course)
                .post(handlers::create_course)
                .put(handlers::update_course),
        )
        .route("/curso/{name}", delete(handlers::delete_course))
        .layer(DefaultBodyLimit::max(limits.max_body_bytes))
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(limits.request_timeout_seconds),
        ));

    Router::new()
        .route("/livez", get(handlers::livez))
        .route("/readyz", get(handlers::readyz))
        .merge(course_routes)
        .with_state(state)
}
