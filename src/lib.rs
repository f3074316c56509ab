//! course-catalog - A minimal in-memory course catalog served over HTTP.

pub mod config;
pub mod course;
pub mod handlers;
pub mod server;
