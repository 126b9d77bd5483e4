// src/repos/qoptions.rs

use sqlx::{PgPool, Postgres, QueryBuilder};

use crate::models::qoption::{CreateQOptionRequest, QOption, UpdateQOptionRequest};

pub async fn create(
    pool: &PgPool,
    data: CreateQOptionRequest,
) -> Result<Option<QOption>, sqlx::Error> {
    let id: i64 = sqlx::query_scalar(
        "INSERT INTO qoptions (question_id, option_text) VALUES ($1, $2) RETURNING id",
    )
    .bind(data.question_id)
    .bind(&data.option_text)
    .fetch_one(pool)
    .await?;

    get_by_id(pool, id).await
}

pub async fn get_by_id(pool: &PgPool, id: i64) -> Result<Option<QOption>, sqlx::Error> {
    sqlx::query_as::<_, QOption>(
        "SELECT id, question_id, option_text FROM qoptions WHERE id = $1",
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

/// Options of one multiple-choice question, paginated.
pub async fn list_by_question(
    pool: &PgPool,
    question_id: i64,
    skip: i64,
    limit: i64,
) -> Result<Vec<QOption>, sqlx::Error> {
    sqlx::query_as::<_, QOption>(
        "SELECT id, question_id, option_text FROM qoptions
         WHERE question_id = $1 ORDER BY id OFFSET $2 LIMIT $3",
    )
    .bind(question_id)
    .bind(skip)
    .bind(limit)
    .fetch_all(pool)
    .await
}

pub async fn update(
    pool: &PgPool,
    id: i64,
    data: UpdateQOptionRequest,
) -> Result<Option<QOption>, sqlx::Error> {
    if data.question_id.is_none() && data.option_text.is_none() {
        return get_by_id(pool, id).await;
    }

    let mut builder: QueryBuilder<Postgres> = QueryBuilder::new("UPDATE qoptions SET ");
    let mut separated = builder.separated(", ");

    if let Some(question_id) = data.question_id {
        separated.push("question_id = ");
        separated.push_bind_unseparated(question_id);
    }
    if let Some(option_text) = data.option_text {
        separated.push("option_text = ");
        separated.push_bind_unseparated(option_text);
    }

    builder.push(" WHERE id = ");
    builder.push_bind(id);

    builder.build().execute(pool).await?;

    get_by_id(pool, id).await
}
