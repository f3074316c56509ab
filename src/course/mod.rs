//! Course records and the in-memory catalog that holds them.
//!
//! The catalog is created once at startup from a fixed seed list and handed
//! to the HTTP layer as shared state. Nothing is persisted.

mod model;
mod store;

pub use model::Course;
pub use store::{CourseStore, seed_courses};
