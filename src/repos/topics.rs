// src/repos/topics.rs

use sqlx::{PgPool, Postgres, QueryBuilder};

use crate::models::topic::{CreateTopicRequest, Topic, UpdateTopicRequest};

pub async fn create(pool: &PgPool, data: CreateTopicRequest) -> Result<Option<Topic>, sqlx::Error> {
    let id: i64 = sqlx::query_scalar(
        "INSERT INTO topics (name, details) VALUES ($1, $2) RETURNING id",
    )
    .bind(&data.name)
    .bind(&data.details)
    .fetch_one(pool)
    .await?;

    get_by_id(pool, id).await
}

pub async fn get_by_id(pool: &PgPool, id: i64) -> Result<Option<Topic>, sqlx::Error> {
    sqlx::query_as::<_, Topic>("SELECT id, name, details FROM topics WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn list(pool: &PgPool, skip: i64, limit: i64) -> Result<Vec<Topic>, sqlx::Error> {
    sqlx::query_as::<_, Topic>(
        "SELECT id, name, details FROM topics ORDER BY id OFFSET $1 LIMIT $2",
    )
    .bind(skip)
    .bind(limit)
    .fetch_all(pool)
    .await
}

pub async fn update(
    pool: &PgPool,
    id: i64,
    data: UpdateTopicRequest,
) -> Result<Option<Topic>, sqlx::Error> {
    if data.name.is_none() && data.details.is_none() {
        return get_by_id(pool, id).await;
    }

    let mut builder: QueryBuilder<Postgres> = QueryBuilder::new("UPDATE topics SET ");
    let mut separated = builder.separated(", ");

    if let Some(name) = data.name {
        separated.push("name = ");
        separated.push_bind_unseparated(name);
    }
    if let Some(details) = data.details {
        separated.push("details = ");
        separated.push_bind_unseparated(details);
    }

    builder.push(" WHERE id = ");
    builder.push_bind(id);

    builder.build().execute(pool).await?;

    get_by_id(pool, id).await
}
