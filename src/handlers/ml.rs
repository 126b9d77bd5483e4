// src/handlers/ml.rs

use axum::{
    Json,
    extract::{Path, Query, State},
    response::IntoResponse,
};
use serde::Deserialize;
use sqlx::PgPool;

use crate::{analytics, error::AppError, models::Pagination};

/// Optional user filter for the reporting join.
#[derive(Debug, Deserialize)]
pub struct DfFilter {
    pub user_id: Option<i64>,
}

/// Returns the flat answer/log records for one quiz, optionally filtered
/// to a single user. Quizzes (or users) with no data yield an empty array.
pub async fn get_df(
    State(pool): State<PgPool>,
    Path(quiz_id): Path<i64>,
    Query(filter): Query<DfFilter>,
    Query(params): Query<Pagination>,
) -> Result<impl IntoResponse, AppError> {
    let records = analytics::aggregate(
        &pool,
        quiz_id,
        params.skip,
        params.limit,
        filter.user_id,
    )
    .await
    .map_err(|e| {
        tracing::error!("Failed to build analytics records: {:?}", e);
        AppError::InternalServerError(e.to_string())
    })?;

    Ok(Json(records))
}
