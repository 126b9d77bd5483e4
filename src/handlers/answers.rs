// src/handlers/answers.rs

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use sqlx::PgPool;
use validator::Validate;

use crate::{
    error::AppError, models::Pagination, models::answer::CreateAnswerRequest, repos,
};

/// Submits an answer. When the request carries companion log fields, the
/// answer and log are written in one transaction.
pub async fn create_answer(
    State(pool): State<PgPool>,
    Json(payload): Json<CreateAnswerRequest>,
) -> Result<impl IntoResponse, AppError> {
    if let Err(validation_errors) = payload.validate() {
        return Err(AppError::BadRequest(validation_errors.to_string()));
    }

    let answer = repos::answers::create(&pool, payload)
        .await?
        .ok_or_else(|| AppError::BadRequest("Could not send answer".to_string()))?;

    Ok((StatusCode::CREATED, Json(answer)))
}

/// Lists all answers, paginated.
pub async fn list_answers(
    State(pool): State<PgPool>,
    Query(params): Query<Pagination>,
) -> Result<impl IntoResponse, AppError> {
    let answers = repos::answers::list(&pool, params.skip, params.limit).await?;

    Ok(Json(answers))
}

/// Lists a user's answers, joined with the question text.
pub async fn list_answers_by_user(
    State(pool): State<PgPool>,
    Path(user_id): Path<i64>,
    Query(params): Query<Pagination>,
) -> Result<impl IntoResponse, AppError> {
    let answers =
        repos::answers::list_by_user(&pool, user_id, params.skip, params.limit).await?;

    Ok(Json(answers))
}

/// Lists a user's answers for one quiz, denormalized with question text,
/// correct answer and total marks.
pub async fn list_answers_by_user_and_quiz(
    State(pool): State<PgPool>,
    Path((user_id, quiz_id)): Path<(i64, i64)>,
    Query(params): Query<Pagination>,
) -> Result<impl IntoResponse, AppError> {
    let answers = repos::answers::list_by_user_and_quiz(
        &pool,
        user_id,
        quiz_id,
        params.skip,
        params.limit,
    )
    .await?;

    Ok(Json(answers))
}

/// Lists every answer for one quiz, joined with the question text.
pub async fn list_answers_by_quiz(
    State(pool): State<PgPool>,
    Path(quiz_id): Path<i64>,
    Query(params): Query<Pagination>,
) -> Result<impl IntoResponse, AppError> {
    let answers =
        repos::answers::list_by_quiz(&pool, quiz_id, params.skip, params.limit).await?;

    Ok(Json(answers))
}

/// Retrieves an answer by ID.
pub async fn get_answer(
    State(pool): State<PgPool>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let answer = repos::answers::get_by_id(&pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound("Answer not found".to_string()))?;

    Ok(Json(answer))
}

/// Allocates marks to an answer record, changing only marks_achieved.
pub async fn allocate_marks(
    State(pool): State<PgPool>,
    Path((id, marks)): Path<(i64, i32)>,
) -> Result<impl IntoResponse, AppError> {
    if marks < 0 {
        return Err(AppError::BadRequest("Marks cannot be negative".to_string()));
    }

    let answer = repos::answers::allocate_marks(&pool, id, marks)
        .await?
        .ok_or_else(|| AppError::NotFound("Answer not found".to_string()))?;

    Ok(Json(answer))
}
