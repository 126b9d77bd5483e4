// src/models/log.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// Represents the 'logs' table: quiz-taking activity events.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Log {
    pub id: i64,
    pub user_id: i64,
    pub question_id: i64,

    /// Action category: 'started', 'pause', 'resume' or 'completed'.
    pub action: String,

    pub time: chrono::DateTime<chrono::Utc>,
}

/// DTO for creating a new log entry.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateLogRequest {
    pub user_id: i64,
    pub question_id: i64,
    #[validate(custom(function = validate_action))]
    pub action: String,
    pub time: chrono::DateTime<chrono::Utc>,
}

pub fn validate_action(action: &str) -> Result<(), validator::ValidationError> {
    match action {
        "started" | "pause" | "resume" | "completed" => Ok(()),
        _ => Err(validator::ValidationError::new("invalid_action")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn action_categories() {
        for action in ["started", "pause", "resume", "completed"] {
            assert!(validate_action(action).is_ok());
        }
        assert!(validate_action("finished").is_err());
        assert!(validate_action("").is_err());
    }
}
