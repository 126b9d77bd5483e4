// src/models/quiz.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// Represents the 'quizzes' table in the database.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Quiz {
    pub id: i64,
    pub title: String,

    /// Duration in minutes.
    pub duration: i32,

    pub grade: i32,
    pub topic_id: i64,
    pub school_id: Option<i64>,
}

/// DTO for creating a new quiz.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateQuizRequest {
    #[validate(length(min = 1, max = 200))]
    pub title: String,
    #[validate(range(min = 1))]
    pub duration: i32,
    #[validate(range(min = 1, max = 12))]
    pub grade: i32,
    pub topic_id: i64,
    pub school_id: Option<i64>,
}

/// DTO for updating a quiz. Fields are optional.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateQuizRequest {
    #[validate(length(min = 1, max = 200))]
    pub title: Option<String>,
    #[validate(range(min = 1))]
    pub duration: Option<i32>,
    #[validate(range(min = 1, max = 12))]
    pub grade: Option<i32>,
    pub topic_id: Option<i64>,
    pub school_id: Option<i64>,
}
