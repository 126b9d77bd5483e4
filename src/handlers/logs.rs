// src/handlers/logs.rs

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;
use sqlx::PgPool;
use validator::Validate;

use crate::{error::AppError, models::Pagination, models::log::CreateLogRequest, repos};

/// Creates a new activity log entry.
pub async fn create_log(
    State(pool): State<PgPool>,
    Json(payload): Json<CreateLogRequest>,
) -> Result<impl IntoResponse, AppError> {
    if let Err(validation_errors) = payload.validate() {
        return Err(AppError::BadRequest(validation_errors.to_string()));
    }

    let log = repos::logs::create(&pool, payload)
        .await?
        .ok_or_else(|| AppError::BadRequest("Log failed to be created".to_string()))?;

    Ok((StatusCode::CREATED, Json(log)))
}

/// Lists all logs, paginated.
pub async fn list_logs(
    State(pool): State<PgPool>,
    Query(params): Query<Pagination>,
) -> Result<impl IntoResponse, AppError> {
    let logs = repos::logs::list(&pool, params.skip, params.limit).await?;

    Ok(Json(logs))
}

/// Retrieves a log by ID.
pub async fn get_log(
    State(pool): State<PgPool>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let log = repos::logs::get_by_id(&pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound("No log found".to_string()))?;

    Ok(Json(log))
}

/// Optional question filter for the per-user log listing.
#[derive(Debug, Deserialize)]
pub struct LogFilter {
    pub question_id: Option<i64>,
}

/// Lists a user's logs, optionally narrowed to one question.
pub async fn list_logs_by_user(
    State(pool): State<PgPool>,
    Path(user_id): Path<i64>,
    Query(filter): Query<LogFilter>,
    Query(params): Query<Pagination>,
) -> Result<impl IntoResponse, AppError> {
    let logs = repos::logs::list_by_user(
        &pool,
        user_id,
        filter.question_id,
        params.skip,
        params.limit,
    )
    .await?;

    Ok(Json(logs))
}
