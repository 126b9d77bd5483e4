// src/models/school.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// Represents the 'schools' table in the database.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct School {
    pub id: i64,
    pub name: String,
    pub province: String,

    /// Area category: 'urban', 'rural', 'township' or 'suburban'.
    pub area: String,

    /// Ownership: 'public' or 'private'.
    #[serde(rename = "type")]
    pub school_type: String,
}

/// DTO for creating a new school.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateSchoolRequest {
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    #[validate(length(min = 1, max = 100))]
    pub province: String,
    #[validate(custom(function = validate_area))]
    pub area: String,
    #[serde(rename = "type")]
    #[validate(custom(function = validate_school_type))]
    pub school_type: String,
}

/// DTO for updating a school. Fields are optional.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateSchoolRequest {
    #[validate(length(min = 1, max = 200))]
    pub name: Option<String>,
    #[validate(length(min = 1, max = 100))]
    pub province: Option<String>,
    #[validate(custom(function = validate_area))]
    pub area: Option<String>,
    #[serde(rename = "type")]
    #[validate(custom(function = validate_school_type))]
    pub school_type: Option<String>,
}

pub fn validate_area(area: &str) -> Result<(), validator::ValidationError> {
    match area {
        "urban" | "rural" | "township" | "suburban" => Ok(()),
        _ => Err(validator::ValidationError::new("invalid_area")),
    }
}

pub fn validate_school_type(school_type: &str) -> Result<(), validator::ValidationError> {
    match school_type {
        "public" | "private" => Ok(()),
        _ => Err(validator::ValidationError::new("invalid_school_type")),
    }
}
