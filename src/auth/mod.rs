// src/auth/mod.rs

pub mod provider;

use axum::{
    body::Body,
    extract::State,
    http::{Request, header},
    middleware::Next,
    response::Response,
};
use serde::Serialize;
use sqlx::PgPool;

use crate::{error::AppError, models::user::User, repos, state::AppState};

/// Subject/email pair extracted from a provider-validated bearer token,
/// prior to any local-database lookup.
#[derive(Debug, Clone, Serialize)]
pub struct VerifiedIdentity {
    pub subject: String,
    pub email: String,
}

/// Pulls the token out of an `Authorization: Bearer <token>` header.
/// Any other shape (missing header, wrong scheme, empty token) is rejected.
pub fn extract_bearer(header: Option<&str>) -> Option<&str> {
    let token = header?.strip_prefix("Bearer ")?;
    if token.is_empty() { None } else { Some(token) }
}

/// Axum Middleware: Authentication.
///
/// Validates the 'Authorization: Bearer <token>' header against the identity
/// provider and injects `VerifiedIdentity` into the request extensions.
/// Returns 401 Unauthorized on any failed step.
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let auth_header = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok());

    let token = extract_bearer(auth_header).ok_or_else(|| {
        AppError::AuthError("Expected 'Authorization: Bearer <token>' header".to_string())
    })?;

    let identity = state.verifier.verify(token).await?;

    req.extensions_mut().insert(identity);
    Ok(next.run(req).await)
}

/// Second-stage gate: resolves a verified identity to the local user row by
/// its email claim. A valid token whose email has no local record is 403.
pub async fn authorize_as_known_user(
    pool: &PgPool,
    identity: &VerifiedIdentity,
) -> Result<User, AppError> {
    repos::users::get_by_email(pool, &identity.email)
        .await?
        .ok_or_else(|| AppError::Forbidden("No matching user record".to_string()))
}

/// Role gate for admin-only handlers.
pub fn require_admin(user: &User) -> Result<(), AppError> {
    if user.role != "admin" {
        return Err(AppError::Forbidden("Admin role required".to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bearer_extraction() {
        assert_eq!(extract_bearer(Some("Bearer abc123")), Some("abc123"));
        // Wrong scheme
        assert_eq!(extract_bearer(Some("Token abc")), None);
        // Empty token
        assert_eq!(extract_bearer(Some("Bearer ")), None);
        // Missing header
        assert_eq!(extract_bearer(None), None);
        // Scheme is case sensitive, matching the provider contract
        assert_eq!(extract_bearer(Some("bearer abc")), None);
    }

    #[test]
    fn admin_gate() {
        let mut user = User {
            id: 1,
            email: "a@b.com".to_string(),
            password: "x".to_string(),
            name: "A".to_string(),
            surname: "B".to_string(),
            role: "student".to_string(),
            school_id: None,
            grade: None,
        };
        assert!(require_admin(&user).is_err());
        user.role = "admin".to_string();
        assert!(require_admin(&user).is_ok());
    }
}
