// src/repos/quizzes.rs

use sqlx::{PgPool, Postgres, QueryBuilder};

use crate::models::quiz::{CreateQuizRequest, Quiz, UpdateQuizRequest};

const COLUMNS: &str = "id, title, duration, grade, topic_id, school_id";

pub async fn create(pool: &PgPool, data: CreateQuizRequest) -> Result<Option<Quiz>, sqlx::Error> {
    let id: i64 = sqlx::query_scalar(
        "INSERT INTO quizzes (title, duration, grade, topic_id, school_id)
         VALUES ($1, $2, $3, $4, $5)
         RETURNING id",
    )
    .bind(&data.title)
    .bind(data.duration)
    .bind(data.grade)
    .bind(data.topic_id)
    .bind(data.school_id)
    .fetch_one(pool)
    .await?;

    get_by_id(pool, id).await
}

pub async fn get_by_id(pool: &PgPool, id: i64) -> Result<Option<Quiz>, sqlx::Error> {
    sqlx::query_as::<_, Quiz>(&format!("SELECT {COLUMNS} FROM quizzes WHERE id = $1"))
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn list(pool: &PgPool, skip: i64, limit: i64) -> Result<Vec<Quiz>, sqlx::Error> {
    sqlx::query_as::<_, Quiz>(&format!(
        "SELECT {COLUMNS} FROM quizzes ORDER BY id OFFSET $1 LIMIT $2"
    ))
    .bind(skip)
    .bind(limit)
    .fetch_all(pool)
    .await
}

pub async fn update(
    pool: &PgPool,
    id: i64,
    data: UpdateQuizRequest,
) -> Result<Option<Quiz>, sqlx::Error> {
    if data.title.is_none()
        && data.duration.is_none()
        && data.grade.is_none()
        && data.topic_id.is_none()
        && data.school_id.is_none()
    {
        return get_by_id(pool, id).await;
    }

    let mut builder: QueryBuilder<Postgres> = QueryBuilder::new("UPDATE quizzes SET ");
    let mut separated = builder.separated(", ");

    if let Some(title) = data.title {
        separated.push("title = ");
        separated.push_bind_unseparated(title);
    }
    if let Some(duration) = data.duration {
        separated.push("duration = ");
        separated.push_bind_unseparated(duration);
    }
    if let Some(grade) = data.grade {
        separated.push("grade = ");
        separated.push_bind_unseparated(grade);
    }
    if let Some(topic_id) = data.topic_id {
        separated.push("topic_id = ");
        separated.push_bind_unseparated(topic_id);
    }
    if let Some(school_id) = data.school_id {
        separated.push("school_id = ");
        separated.push_bind_unseparated(school_id);
    }

    builder.push(" WHERE id = ");
    builder.push_bind(id);

    builder.build().execute(pool).await?;

    get_by_id(pool, id).await
}
