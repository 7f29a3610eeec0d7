use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::workouts::repo::Workout;

/// Request body for creating a workout. `date_added` is optional and
/// defaults to the creation time.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateWorkoutRequest {
    pub name: String,
    pub duration: String,
    pub status: String,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub date_added: Option<OffsetDateTime>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateWorkoutRequest {
    pub name: Option<String>,
    pub duration: Option<String>,
    pub status: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SearchWorkoutRequest {
    pub name: String,
}

/// Envelope for mutations that return the affected workout.
#[derive(Debug, Serialize)]
pub struct WorkoutMessageResponse {
    pub message: String,
    pub workout: Workout,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_request_date_added_is_optional() {
        let body = r#"{"name": "Morning run", "duration": "30 mins", "status": "pending"}"#;
        let req: CreateWorkoutRequest = serde_json::from_str(body).expect("deserialize");
        assert!(req.date_added.is_none());

        let body = r#"{
            "name": "Morning run",
            "duration": "30 mins",
            "status": "pending",
            "dateAdded": "2024-06-01T07:00:00Z"
        }"#;
        let req: CreateWorkoutRequest = serde_json::from_str(body).expect("deserialize");
        assert!(req.date_added.is_some());
    }

    #[test]
    fn update_request_fields_are_all_optional() {
        let req: UpdateWorkoutRequest =
            serde_json::from_str(r#"{"status": "completed"}"#).expect("deserialize");
        assert!(req.name.is_none());
        assert!(req.duration.is_none());
        assert_eq!(req.status.as_deref(), Some("completed"));
    }
}
