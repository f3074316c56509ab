//! HTTP request handlers.

mod courses;
mod health;
pub(crate) mod problem_details;
mod xml;

pub use courses::{
    create_course, delete_course, list_courses, sample_course, search_courses, update_course,
};
pub use health::{livez, readyz};
