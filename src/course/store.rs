use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::debug;

use super::model::Course;

// ============================================================================
// Public Types
// ============================================================================

/// Ordered in-memory collection of courses, shared across request handlers.
///
/// Cloning yields another handle to the same collection. Every operation runs
/// as a single critical section; operations that return the collection take a
/// copy before releasing the lock.
#[derive(Debug, Clone, Default)]
pub struct CourseStore {
    courses: Arc<RwLock<Vec<Course>>>,
}

// ============================================================================
// CourseStore Implementation
// ============================================================================

impl CourseStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding the given courses, in order.
    pub fn from_courses(courses: Vec<Course>) -> Self {
        Self {
            courses: Arc::new(RwLock::new(courses)),
        }
    }

    /// Create a store pre-populated with the startup catalog.
    pub fn seeded() -> Self {
        Self::from_courses(seed_courses())
    }

    /// Snapshot of every course, in insertion order.
    pub async fn list(&self) -> Vec<Course> {
        self.courses.read().await.clone()
    }

    /// Courses whose name contains `fragment` (case-sensitive), in store order.
    ///
    /// An empty fragment matches every course.
    pub async fn search(&self, fragment: &str) -> Vec<Course> {
        self.courses
            .read()
            .await
            .iter()
            .filter(|c| c.name.contains(fragment))
            .cloned()
            .collect()
    }

    /// Append a course and return the updated collection.
    ///
    /// Names are not deduplicated.
    pub async fn add(&self, course: Course) -> Vec<Course> {
        let mut courses = self.courses.write().await;
        debug!(name = %course.name, position = courses.len(), "Adding course");
        courses.push(course);
        courses.clone()
    }

    /// Remove every course named exactly `name`.
    ///
    /// Returns how many courses were removed; zero is not an error.
    pub async fn delete(&self, name: &str) -> usize {
        let mut courses = self.courses.write().await;
        let before = courses.len();
        courses.retain(|c| c.name != name);
        let removed = before - courses.len();
        debug!(name = %name, removed, "Deleted courses");
        removed
    }

    /// Replace, in place, every course named exactly `course.name`.
    ///
    /// The collection is left untouched when no name matches. Returns the
    /// updated collection in either case.
    pub async fn update(&self, course: Course) -> Vec<Course> {
        let mut courses = self.courses.write().await;
        let mut replaced = 0usize;
        for existing in courses.iter_mut().filter(|c| c.name == course.name) {
            *existing = course.clone();
            replaced += 1;
        }
        debug!(name = %course.name, replaced, "Updated courses");
        courses.clone()
    }

    /// Number of stored courses.
    pub async fn len(&self) -> usize {
        self.courses.read().await.len()
    }

    /// Check if the store is empty.
    pub async fn is_empty(&self) -> bool {
        self.courses.read().await.is_empty()
    }
}

/// The catalog loaded at startup.
pub fn seed_courses() -> Vec<Course> {
    vec![
        Course::new("Spring", 25, "afternoon"),
        Course::new("Spring boot", 20, "afternoon"),
        Course::new("Python", 30, "afternoon"),
        Course::new("Java EE", 50, "weekend"),
        Course::new("Java basic", 30, "morning"),
    ]
}

// ============================================================================
// Tests
// ============================================================================
