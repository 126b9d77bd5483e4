// src/models/question.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// Represents the 'questions' table in the database.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Question {
    pub id: i64,
    pub quiz_id: i64,

    /// The text content of the question.
    pub question: String,

    /// Total marks the question is worth.
    pub marks: i32,

    /// Difficulty: 'low', 'medium' or 'high'.
    pub level: String,

    #[serde(rename = "correctAnswer")]
    pub correct_answer: String,

    /// Answer type: 'text' (free text), 'mc' (multiple choice) or
    /// 'tf' (true/false).
    #[serde(rename = "type")]
    pub answer_type: String,
}

/// DTO for creating a new question.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateQuestionRequest {
    pub quiz_id: i64,
    #[validate(length(min = 1, max = 2000))]
    pub question: String,
    #[validate(range(min = 0))]
    pub marks: i32,
    #[validate(custom(function = validate_level))]
    pub level: String,
    #[serde(rename = "correctAnswer")]
    #[validate(length(min = 1, max = 2000))]
    pub correct_answer: String,
    #[serde(rename = "type")]
    #[validate(custom(function = validate_answer_type))]
    pub answer_type: String,
}

/// DTO for updating a question. Fields are optional.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateQuestionRequest {
    pub quiz_id: Option<i64>,
    #[validate(length(min = 1, max = 2000))]
    pub question: Option<String>,
    #[validate(range(min = 0))]
    pub marks: Option<i32>,
    #[validate(custom(function = validate_level))]
    pub level: Option<String>,
    #[serde(rename = "correctAnswer")]
    #[validate(length(min = 1, max = 2000))]
    pub correct_answer: Option<String>,
    #[serde(rename = "type")]
    #[validate(custom(function = validate_answer_type))]
    pub answer_type: Option<String>,
}

pub fn validate_level(level: &str) -> Result<(), validator::ValidationError> {
    match level {
        "low" | "medium" | "high" => Ok(()),
        _ => Err(validator::ValidationError::new("invalid_level")),
    }
}

pub fn validate_answer_type(answer_type: &str) -> Result<(), validator::ValidationError> {
    match answer_type {
        "text" | "mc" | "tf" => Ok(()),
        _ => Err(validator::ValidationError::new("invalid_answer_type")),
    }
}
