// src/repos/questions.rs

use sqlx::{PgPool, Postgres, QueryBuilder};

use crate::models::question::{CreateQuestionRequest, Question, UpdateQuestionRequest};

const COLUMNS: &str = "id, quiz_id, question, marks, level, correct_answer, answer_type";

pub async fn create(
    pool: &PgPool,
    data: CreateQuestionRequest,
) -> Result<Option<Question>, sqlx::Error> {
    let id: i64 = sqlx::query_scalar(
        "INSERT INTO questions (quiz_id, question, marks, level, correct_answer, answer_type)
         VALUES ($1, $2, $3, $4, $5, $6)
         RETURNING id",
    )
    .bind(data.quiz_id)
    .bind(&data.question)
    .bind(data.marks)
    .bind(&data.level)
    .bind(&data.correct_answer)
    .bind(&data.answer_type)
    .fetch_one(pool)
    .await?;

    get_by_id(pool, id).await
}

pub async fn get_by_id(pool: &PgPool, id: i64) -> Result<Option<Question>, sqlx::Error> {
    sqlx::query_as::<_, Question>(&format!("SELECT {COLUMNS} FROM questions WHERE id = $1"))
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn list(pool: &PgPool, skip: i64, limit: i64) -> Result<Vec<Question>, sqlx::Error> {
    sqlx::query_as::<_, Question>(&format!(
        "SELECT {COLUMNS} FROM questions ORDER BY id OFFSET $1 LIMIT $2"
    ))
    .bind(skip)
    .bind(limit)
    .fetch_all(pool)
    .await
}

/// Questions belonging to one quiz, paginated.
pub async fn list_by_quiz(
    pool: &PgPool,
    quiz_id: i64,
    skip: i64,
    limit: i64,
) -> Result<Vec<Question>, sqlx::Error> {
    sqlx::query_as::<_, Question>(&format!(
        "SELECT {COLUMNS} FROM questions WHERE quiz_id = $1 ORDER BY id OFFSET $2 LIMIT $3"
    ))
    .bind(quiz_id)
    .bind(skip)
    .bind(limit)
    .fetch_all(pool)
    .await
}

pub async fn update(
    pool: &PgPool,
    id: i64,
    data: UpdateQuestionRequest,
) -> Result<Option<Question>, sqlx::Error> {
    if data.quiz_id.is_none()
        && data.question.is_none()
        && data.marks.is_none()
        && data.level.is_none()
        && data.correct_answer.is_none()
        && data.answer_type.is_none()
    {
        return get_by_id(pool, id).await;
    }

    let mut builder: QueryBuilder<Postgres> = QueryBuilder::new("UPDATE questions SET ");
    let mut separated = builder.separated(", ");

    if let Some(quiz_id) = data.quiz_id {
        separated.push("quiz_id = ");
        separated.push_bind_unseparated(quiz_id);
    }
    if let Some(question) = data.question {
        separated.push("question = ");
        separated.push_bind_unseparated(question);
    }
    if let Some(marks) = data.marks {
        separated.push("marks = ");
        separated.push_bind_unseparated(marks);
    }
    if let Some(level) = data.level {
        separated.push("level = ");
        separated.push_bind_unseparated(level);
    }
    if let Some(correct_answer) = data.correct_answer {
        separated.push("correct_answer = ");
        separated.push_bind_unseparated(correct_answer);
    }
    if let Some(answer_type) = data.answer_type {
        separated.push("answer_type = ");
        separated.push_bind_unseparated(answer_type);
    }

    builder.push(" WHERE id = ");
    builder.push_bind(id);

    builder.build().execute(pool).await?;

    get_by_id(pool, id).await
}
