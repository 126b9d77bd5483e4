// src/handlers/users.rs

use axum::{
    Extension, Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;
use sqlx::PgPool;
use validator::Validate;

use crate::{
    auth::{VerifiedIdentity, authorize_as_known_user, require_admin},
    error::AppError,
    models::user::{CreateUserRequest, UpdateUserRequest},
    repos,
    state::AppState,
};

/// Creates a new user.
///
/// Enforces email uniqueness before the insert; an existing email is a
/// 400 conflict with no write performed.
pub async fn create_user(
    State(pool): State<PgPool>,
    Json(payload): Json<CreateUserRequest>,
) -> Result<impl IntoResponse, AppError> {
    if let Err(validation_errors) = payload.validate() {
        return Err(AppError::BadRequest(validation_errors.to_string()));
    }

    if repos::users::get_by_email(&pool, &payload.email).await?.is_some() {
        return Err(AppError::BadRequest(
            "User with this email already exists.".to_string(),
        ));
    }

    let user = repos::users::create(&pool, payload)
        .await?
        .ok_or_else(|| AppError::InternalServerError("User could not be created".to_string()))?;

    Ok((StatusCode::CREATED, Json(user)))
}

/// Query parameters for listing users; the user listing window defaults to
/// a wider limit than the other resources.
#[derive(Debug, Deserialize)]
pub struct UserListParams {
    #[serde(default)]
    pub skip: i64,
    #[serde(default = "default_user_limit")]
    pub limit: i64,
}

fn default_user_limit() -> i64 {
    100
}

/// Lists all users. Admin only.
pub async fn list_users(
    State(state): State<AppState>,
    Extension(identity): Extension<VerifiedIdentity>,
    Query(params): Query<UserListParams>,
) -> Result<impl IntoResponse, AppError> {
    let current = authorize_as_known_user(&state.pool, &identity).await?;
    require_admin(&current)?;

    let users = repos::users::list(&state.pool, params.skip, params.limit).await?;

    Ok(Json(users))
}

/// Returns the caller's own user record, resolved from the verified
/// token's email claim.
pub async fn get_self(
    State(state): State<AppState>,
    Extension(identity): Extension<VerifiedIdentity>,
) -> Result<impl IntoResponse, AppError> {
    let user = authorize_as_known_user(&state.pool, &identity).await?;

    Ok(Json(user))
}

/// Retrieves a user by ID. Requires a verified token.
pub async fn get_user(
    State(pool): State<PgPool>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let user = repos::users::get_by_id(&pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

    Ok(Json(user))
}

/// Updates a user by ID. Requires a known local user; omitted fields are
/// left untouched.
pub async fn update_user(
    State(state): State<AppState>,
    Extension(identity): Extension<VerifiedIdentity>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateUserRequest>,
) -> Result<impl IntoResponse, AppError> {
    authorize_as_known_user(&state.pool, &identity).await?;

    if let Err(validation_errors) = payload.validate() {
        return Err(AppError::BadRequest(validation_errors.to_string()));
    }

    let user = repos::users::update(&state.pool, id, payload)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

    Ok(Json(user))
}

/// Deletes a user by ID. Admin only.
pub async fn delete_user(
    State(state): State<AppState>,
    Extension(identity): Extension<VerifiedIdentity>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let current = authorize_as_known_user(&state.pool, &identity).await?;
    require_admin(&current)?;

    let deleted = repos::users::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::NotFound("User not found".to_string()));
    }

    Ok(StatusCode::NO_CONTENT)
}
