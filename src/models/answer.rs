// src/models/answer.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::models::log::validate_action;

/// Represents the 'answers' table in the database.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Answer {
    pub id: i64,
    pub question_id: i64,
    pub user_id: i64,
    pub quiz_id: i64,
    pub answer: Option<String>,
    #[serde(rename = "marksAchieved")]
    pub marks_achieved: Option<i32>,
}

/// Answer row joined with its question's text.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct AnswerWithQuestion {
    pub id: i64,
    pub question_id: i64,
    pub user_id: i64,
    pub quiz_id: i64,
    pub answer: Option<String>,
    #[serde(rename = "marksAchieved")]
    pub marks_achieved: Option<i32>,
    pub question: String,
}

/// Fully denormalized answer row for the per-user/per-quiz read and the
/// analytics join: answer fields plus question text, correct answer and
/// total marks.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct AnswerDetail {
    pub question_id: i64,
    pub user_id: i64,
    pub quiz_id: i64,
    pub answer: Option<String>,
    #[serde(rename = "marksAchieved")]
    pub marks_achieved: Option<i32>,
    pub question: String,
    #[serde(rename = "correctAnswer")]
    pub correct_answer: String,
    pub total_marks: i32,
}

/// Activity fields for the optional companion log written with an answer.
#[derive(Debug, Deserialize, Validate)]
pub struct CompanionLog {
    #[validate(custom(function = validate_action))]
    pub action: String,
    pub time: chrono::DateTime<chrono::Utc>,
}

/// DTO for submitting an answer. The optional `log` is written in the same
/// transaction as the answer, reusing its user and question references.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateAnswerRequest {
    pub question_id: i64,
    pub user_id: i64,
    pub quiz_id: i64,
    #[validate(length(max = 5000))]
    pub answer: Option<String>,
    #[validate(nested)]
    pub log: Option<CompanionLog>,
}
