use serde::{Deserialize, Serialize};

/// A single course offering.
///
/// Field names on the wire are `nombre`, `duracion` and `horario`, for both
/// JSON and XML bodies. All three are required when deserializing; unknown
/// fields are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "duracion")]
    pub duration: i32,
    #[serde(rename = "horario")]
    pub schedule: String,
}

impl Course {
    pub fn new(name: impl Into<String>, duration: i32, schedule: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            duration,
            schedule: schedule.into(),
        }
    }

    /// The fixed example course served by `GET /curso`.
    pub fn sample() -> Self {
        Self::new("Java", 100, "Morning")
    }
}
