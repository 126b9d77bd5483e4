// src/handlers/questions.rs

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
    models::question::{CreateQuestionRequest, UpdateQuestionRequest},
    repos,
};

/// Creates a new question.
pub async fn create_question(
    State(pool): State<PgPool>,
    Json(payload): Json<CreateQuestionRequest>,
) -> Result<impl IntoResponse, AppError> {
    if let Err(validation_errors) = payload.validate() {
        return Err(AppError::BadRequest(validation_errors.to_string()));
    }

    let question = repos::questions::create(&pool, payload)
        .await?
        .ok_or_else(|| {
            AppError::InternalServerError("Question could not be created".to_string())
        })?;

    Ok((StatusCode::CREATED, Json(question)))
}

/// Lists all questions, paginated.
pub async fn list_questions(
    State(pool): State<PgPool>,
    Query(params): Query<Pagination>,
) -> Result<impl IntoResponse, AppError> {
    let questions = repos::questions::list(&pool, params.skip, params.limit).await?;

    Ok(Json(questions))
}

/// Lists a quiz's questions, paginated.
pub async fn list_questions_by_quiz(
    State(pool): State<PgPool>,
    Path(quiz_id): Path<i64>,
    Query(params): Query<Pagination>,
) -> Result<impl IntoResponse, AppError> {
    let questions =
        repos::questions::list_by_quiz(&pool, quiz_id, params.skip, params.limit).await?;

    Ok(Json(questions))
}

/// Retrieves a question by ID.
pub async fn get_question(
    State(pool): State<PgPool>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let question = repos::questions::get_by_id(&pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound("Question not found".to_string()))?;

    Ok(Json(question))
}

/// Updates a question by ID. Omitted fields are left untouched.
pub async fn update_question(
    State(pool): State<PgPool>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateQuestionRequest>,
) -> Result<impl IntoResponse, AppError> {
    if let Err(validation_errors) = payload.validate() {
        return Err(AppError::BadRequest(validation_errors.to_string()));
    }

    let question = repos::questions::update(&pool, id, payload)
        .await?
        .ok_or_else(|| AppError::NotFound("Question not found".to_string()))?;

    Ok(Json(question))
}
