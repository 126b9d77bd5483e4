// src/models/user.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// Represents the 'users' table in the database.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct User {
    pub id: i64,

    /// Unique email; also the join key against the identity provider's
    /// email claim.
    pub email: String,

    /// Opaque credential. Skipped during serialization to prevent leaking
    /// sensitive data.
    #[serde(skip)]
    pub password: String,

    pub name: String,
    pub surname: String,

    /// User role: 'student', 'teacher' or 'admin'.
    pub role: String,

    pub school_id: Option<i64>,
    pub grade: Option<i32>,
}

/// DTO for creating a new user.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[validate(email(message = "A valid email address is required."))]
    pub email: String,
    #[validate(length(min = 1, max = 128))]
    pub password: String,
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[validate(length(min = 1, max = 100))]
    pub surname: String,
    #[validate(custom(function = validate_role))]
    pub role: Option<String>,
    pub school_id: Option<i64>,
    pub grade: Option<i32>,
}

/// DTO for updating a user. Fields are optional; omitted fields are left
/// untouched.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateUserRequest {
    #[validate(email)]
    pub email: Option<String>,
    #[validate(length(min = 1, max = 128))]
    pub password: Option<String>,
    #[validate(length(min = 1, max = 100))]
    pub name: Option<String>,
    #[validate(length(min = 1, max = 100))]
    pub surname: Option<String>,
    #[validate(custom(function = validate_role))]
    pub role: Option<String>,
    pub school_id: Option<i64>,
    pub grade: Option<i32>,
}

pub fn validate_role(role: &str) -> Result<(), validator::ValidationError> {
    match role {
        "student" | "teacher" | "admin" => Ok(()),
        _ => Err(validator::ValidationError::new("invalid_role")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_request_rejects_bad_email_and_role() {
        let req = CreateUserRequest {
            email: "not-an-email".to_string(),
            password: "x".to_string(),
            name: "A".to_string(),
            surname: "B".to_string(),
            role: None,
            school_id: None,
            grade: None,
        };
        assert!(req.validate().is_err());

        let req = CreateUserRequest {
            email: "a@b.com".to_string(),
            password: "x".to_string(),
            name: "A".to_string(),
            surname: "B".to_string(),
            role: Some("principal".to_string()),
            school_id: None,
            grade: None,
        };
        assert!(req.validate().is_err());

        let req = CreateUserRequest {
            email: "a@b.com".to_string(),
            password: "x".to_string(),
            name: "A".to_string(),
            surname: "B".to_string(),
            role: Some("teacher".to_string()),
            school_id: None,
            grade: None,
        };
        assert!(req.validate().is_ok());
    }
}
