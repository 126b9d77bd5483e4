// src/models/qoption.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// Represents the 'qoptions' table: one selectable option of a
/// multiple-choice question.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct QOption {
    pub id: i64,
    pub question_id: i64,
    #[serde(rename = "option")]
    pub option_text: String,
}

/// DTO for creating a new question option.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateQOptionRequest {
    pub question_id: i64,
    #[serde(rename = "option")]
    #[validate(length(min = 1, max = 500))]
    pub option_text: String,
}

/// DTO for updating a question option. Fields are optional.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateQOptionRequest {
    pub question_id: Option<i64>,
    #[serde(rename = "option")]
    #[validate(length(min = 1, max = 500))]
    pub option_text: Option<String>,
}
