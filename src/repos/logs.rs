// src/repos/logs.rs

use sqlx::PgPool;

use crate::models::log::{CreateLogRequest, Log};

const COLUMNS: &str = "id, user_id, question_id, action, time";

pub async fn create(pool: &PgPool, data: CreateLogRequest) -> Result<Option<Log>, sqlx::Error> {
    let id: i64 = sqlx::query_scalar(
        "INSERT INTO logs (user_id, question_id, action, time)
         VALUES ($1, $2, $3, $4)
         RETURNING id",
    )
    .bind(data.user_id)
    .bind(data.question_id)
    .bind(&data.action)
    .bind(data.time)
    .fetch_one(pool)
    .await?;

    get_by_id(pool, id).await
}

pub async fn get_by_id(pool: &PgPool, id: i64) -> Result<Option<Log>, sqlx::Error> {
    sqlx::query_as::<_, Log>(&format!("SELECT {COLUMNS} FROM logs WHERE id = $1"))
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn list(pool: &PgPool, skip: i64, limit: i64) -> Result<Vec<Log>, sqlx::Error> {
    sqlx::query_as::<_, Log>(&format!(
        "SELECT {COLUMNS} FROM logs ORDER BY id OFFSET $1 LIMIT $2"
    ))
    .bind(skip)
    .bind(limit)
    .fetch_all(pool)
    .await
}

/// A user's logs, optionally narrowed to one question.
pub async fn list_by_user(
    pool: &PgPool,
    user_id: i64,
    question_id: Option<i64>,
    skip: i64,
    limit: i64,
) -> Result<Vec<Log>, sqlx::Error> {
    sqlx::query_as::<_, Log>(&format!(
        "SELECT {COLUMNS} FROM logs
         WHERE user_id = $1 AND ($2::BIGINT IS NULL OR question_id = $2)
         ORDER BY id OFFSET $3 LIMIT $4"
    ))
    .bind(user_id)
    .bind(question_id)
    .bind(skip)
    .bind(limit)
    .fetch_all(pool)
    .await
}
