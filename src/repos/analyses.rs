// src/repos/analyses.rs

use sqlx::PgPool;

use crate::models::analysis::{Analysis, CreateAnalysisRequest};

const COLUMNS: &str = "id, user_id, question_id, analysis";

pub async fn create(
    pool: &PgPool,
    data: CreateAnalysisRequest,
) -> Result<Option<Analysis>, sqlx::Error> {
    let id: i64 = sqlx::query_scalar(
        "INSERT INTO analyses (user_id, question_id, analysis)
         VALUES ($1, $2, $3)
         RETURNING id",
    )
    .bind(data.user_id)
    .bind(data.question_id)
    .bind(&data.analysis)
    .fetch_one(pool)
    .await?;

    get_by_id(pool, id).await
}

pub async fn get_by_id(pool: &PgPool, id: i64) -> Result<Option<Analysis>, sqlx::Error> {
    sqlx::query_as::<_, Analysis>(&format!("SELECT {COLUMNS} FROM analyses WHERE id = $1"))
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn list_by_user(
    pool: &PgPool,
    user_id: i64,
    skip: i64,
    limit: i64,
) -> Result<Vec<Analysis>, sqlx::Error> {
    sqlx::query_as::<_, Analysis>(&format!(
        "SELECT {COLUMNS} FROM analyses WHERE user_id = $1 ORDER BY id OFFSET $2 LIMIT $3"
    ))
    .bind(user_id)
    .bind(skip)
    .bind(limit)
    .fetch_all(pool)
    .await
}
