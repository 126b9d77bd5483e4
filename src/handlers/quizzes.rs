// src/handlers/quizzes.rs

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
    models::quiz::{CreateQuizRequest, UpdateQuizRequest},
    repos,
};

/// Creates a new quiz.
pub async fn create_quiz(
    State(pool): State<PgPool>,
    Json(payload): Json<CreateQuizRequest>,
) -> Result<impl IntoResponse, AppError> {
    if let Err(validation_errors) = payload.validate() {
        return Err(AppError::BadRequest(validation_errors.to_string()));
    }

    let quiz = repos::quizzes::create(&pool, payload)
        .await?
        .ok_or_else(|| AppError::InternalServerError("Quiz could not be created".to_string()))?;

    Ok((StatusCode::CREATED, Json(quiz)))
}

/// Lists all quizzes, paginated.
pub async fn list_quizzes(
    State(pool): State<PgPool>,
    Query(params): Query<Pagination>,
) -> Result<impl IntoResponse, AppError> {
    let quizzes = repos::quizzes::list(&pool, params.skip, params.limit).await?;

    Ok(Json(quizzes))
}

/// Retrieves a quiz by ID.
pub async fn get_quiz(
    State(pool): State<PgPool>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let quiz = repos::quizzes::get_by_id(&pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound("Quiz not found".to_string()))?;

    Ok(Json(quiz))
}

/// Updates a quiz by ID. Omitted fields are left untouched.
pub async fn update_quiz(
    State(pool): State<PgPool>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateQuizRequest>,
) -> Result<impl IntoResponse, AppError> {
    if let Err(validation_errors) = payload.validate() {
        return Err(AppError::BadRequest(validation_errors.to_string()));
    }

    let quiz = repos::quizzes::update(&pool, id, payload)
        .await?
        .ok_or_else(|| AppError::NotFound("Quiz not found".to_string()))?;

    Ok(Json(quiz))
}
