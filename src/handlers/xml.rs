//! XML response bodies.

use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use tracing::error;

use super::problem_details;

const CONTENT_TYPE: &str = "application/xml";

/// Serializes `body` as an XML document whose root element is `root`.
#[derive(Debug)]
pub struct Xml<T> {
    root: &'static str,
    body: T,
}

impl<T: Serialize> Xml<T> {
    pub fn new(root: &'static str, body: T) -> Self {
        Self { root, body }
    }
}

impl<T: Serialize> IntoResponse for Xml<T> {
    fn into_response(self) -> Response {
        match quick_xml::se::to_string_with_root(self.root, &self.body) {
            Ok(xml) => (StatusCode::OK, [(header::CONTENT_TYPE, CONTENT_TYPE)], xml).into_response(),
            Err(e) => {
                error!(root = self.root, error = %e, "Failed to serialize XML body");
                problem_details::internal_error("failed to serialize response").into_response()
            }
        }
    }
}
