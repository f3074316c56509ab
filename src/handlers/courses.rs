//! Course catalog HTTP handlers.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use tracing::{debug, info};

use super::problem_details;
use super::xml::Xml;
use crate::course::Course;
use crate::server::AppState;

/// Root element for a single course rendered as XML.
const COURSE_ROOT: &str = "Curso";
/// Root element for a course sequence rendered as XML.
const LIST_ROOT: &str = "List";

/// XML view of a course sequence: one `<item>` per course.
#[derive(Serialize)]
pub struct CourseList {
    item: Vec<Course>,
}

/// GET /cursos
pub async fn list_courses(State(state): State<AppState>) -> Xml<CourseList> {
    let item = state.courses.list().await;
    Xml::new(LIST_ROOT, CourseList { item })
}

/// GET /curso
pub async fn sample_course() -> Xml<Course> {
    Xml::new(COURSE_ROOT, Course::sample())
}

/// GET /cursos/{name}
pub async fn search_courses(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Json<Vec<Course>> {
    let found = state.courses.search(&name).await;
    debug!(fragment = %name, matches = found.len(), "Searched courses");
    Json(found)
}

/// DELETE /curso/{name}
pub async fn delete_course(State(state): State<AppState>, Path(name): Path<String>) -> StatusCode {
    let removed = state.courses.delete(&name).await;
    info!(name = %name, removed, "Delete course request");
    StatusCode::OK
}

/// POST /curso
pub async fn create_course(
    State(state): State<AppState>,
    payload: Result<Json<Course>, JsonRejection>,
) -> Response {
    let course = match payload {
        Ok(Json(course)) => course,
        Err(rejection) => return reject(rejection),
    };

    info!(name = %course.name, "Create course request");
    Json(state.courses.add(course).await).into_response()
}

/// PUT /curso
pub async fn update_course(
    State(state): State<AppState>,
    payload: Result<Json<Course>, JsonRejection>,
) -> Response {
    let course = match payload {
        Ok(Json(course)) => course,
        Err(rejection) => return reject(rejection),
    };

    info!(name = %course.name, "Update course request");
    Json(state.courses.update(course).await).into_response()
}

fn reject(rejection: JsonRejection) -> Response {
    debug!(error = %rejection, "Rejected course payload");
    problem_details::problem(rejection.status(), rejection.body_text()).into_response()
}
