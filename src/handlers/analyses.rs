// src/handlers/analyses.rs

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use sqlx::PgPool;
use validator::Validate;

use crate::{
    error::AppError, models::Pagination, models::analysis::CreateAnalysisRequest, repos,
};

/// Creates a new analysis.
pub async fn create_analysis(
    State(pool): State<PgPool>,
    Json(payload): Json<CreateAnalysisRequest>,
) -> Result<impl IntoResponse, AppError> {
    if let Err(validation_errors) = payload.validate() {
        return Err(AppError::BadRequest(validation_errors.to_string()));
    }

    let analysis = repos::analyses::create(&pool, payload)
        .await?
        .ok_or_else(|| {
            AppError::InternalServerError("Analysis could not be created".to_string())
        })?;

    Ok((StatusCode::CREATED, Json(analysis)))
}

/// Retrieves an analysis by ID.
pub async fn get_analysis(
    State(pool): State<PgPool>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let analysis = repos::analyses::get_by_id(&pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound("Analysis not found".to_string()))?;

    Ok(Json(analysis))
}

/// Lists a user's analyses, paginated.
pub async fn list_analyses_by_user(
    State(pool): State<PgPool>,
    Path(user_id): Path<i64>,
    Query(params): Query<Pagination>,
) -> Result<impl IntoResponse, AppError> {
    let analyses =
        repos::analyses::list_by_user(&pool, user_id, params.skip, params.limit).await?;

    Ok(Json(analyses))
}
