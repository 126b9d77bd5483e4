// src/handlers/qoptions.rs

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use sqlx::PgPool;
use validator::Validate;

use crate::{
    error::AppError,
    models::Pagination,
    models::qoption::{CreateQOptionRequest, UpdateQOptionRequest},
    repos,
};

/// Creates a new question option.
pub async fn create_qoption(
    State(pool): State<PgPool>,
    Json(payload): Json<CreateQOptionRequest>,
) -> Result<impl IntoResponse, AppError> {
    if let Err(validation_errors) = payload.validate() {
        return Err(AppError::BadRequest(validation_errors.to_string()));
    }

    let qoption = repos::qoptions::create(&pool, payload)
        .await?
        .ok_or_else(|| AppError::InternalServerError("Option could not be created".to_string()))?;

    Ok((StatusCode::CREATED, Json(qoption)))
}

/// Lists the options belonging to one question, paginated.
pub async fn list_qoptions_by_question(
    State(pool): State<PgPool>,
    Path(question_id): Path<i64>,
    Query(params): Query<Pagination>,
) -> Result<impl IntoResponse, AppError> {
    let qoptions =
        repos::qoptions::list_by_question(&pool, question_id, params.skip, params.limit).await?;

    Ok(Json(qoptions))
}

/// Retrieves a question option by ID.
pub async fn get_qoption(
    State(pool): State<PgPool>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let qoption = repos::qoptions::get_by_id(&pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound("Option not found".to_string()))?;

    Ok(Json(qoption))
}

/// Updates a question option by ID. Omitted fields are left untouched.
pub async fn update_qoption(
    State(pool): State<PgPool>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateQOptionRequest>,
) -> Result<impl IntoResponse, AppError> {
    if let Err(validation_errors) = payload.validate() {
        return Err(AppError::BadRequest(validation_errors.to_string()));
    }

    let qoption = repos::qoptions::update(&pool, id, payload)
        .await?
        .ok_or_else(|| AppError::NotFound("Option not found".to_string()))?;

    Ok(Json(qoption))
}
