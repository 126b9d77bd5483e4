// src/models/analysis.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// Represents the 'analyses' table: free-text analysis of a user's
/// performance on a question.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Analysis {
    pub id: i64,
    pub user_id: i64,
    pub question_id: i64,
    pub analysis: String,
}

/// DTO for creating a new analysis.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateAnalysisRequest {
    pub user_id: i64,
    pub question_id: i64,
    #[validate(length(min = 1, max = 10000))]
    pub analysis: String,
}
