// src/repos/answers.rs

use sqlx::PgPool;

use crate::models::answer::{Answer, AnswerDetail, AnswerWithQuestion, CreateAnswerRequest};

const COLUMNS: &str = "id, question_id, user_id, quiz_id, answer, marks_achieved";

/// Inserts an answer and, when the request carries companion log fields,
/// the matching log row in the same transaction. Either both rows commit
/// or neither does.
pub async fn create(
    pool: &PgPool,
    data: CreateAnswerRequest,
) -> Result<Option<Answer>, sqlx::Error> {
    let mut tx = pool.begin().await?;

    let id: i64 = sqlx::query_scalar(
        "INSERT INTO answers (question_id, user_id, quiz_id, answer)
         VALUES ($1, $2, $3, $4)
         RETURNING id",
    )
    .bind(data.question_id)
    .bind(data.user_id)
    .bind(data.quiz_id)
    .bind(&data.answer)
    .fetch_one(&mut *tx)
    .await?;

    if let Some(log) = &data.log {
        sqlx::query(
            "INSERT INTO logs (user_id, question_id, action, time)
             VALUES ($1, $2, $3, $4)",
        )
        .bind(data.user_id)
        .bind(data.question_id)
        .bind(&log.action)
        .bind(log.time)
        .execute(&mut *tx)
        .await?;
    }

    tx.commit().await?;

    get_by_id(pool, id).await
}

pub async fn get_by_id(pool: &PgPool, id: i64) -> Result<Option<Answer>, sqlx::Error> {
    sqlx::query_as::<_, Answer>(&format!("SELECT {COLUMNS} FROM answers WHERE id = $1"))
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn list(pool: &PgPool, skip: i64, limit: i64) -> Result<Vec<Answer>, sqlx::Error> {
    sqlx::query_as::<_, Answer>(&format!(
        "SELECT {COLUMNS} FROM answers ORDER BY id OFFSET $1 LIMIT $2"
    ))
    .bind(skip)
    .bind(limit)
    .fetch_all(pool)
    .await
}

/// A user's answers joined with the question text.
pub async fn list_by_user(
    pool: &PgPool,
    user_id: i64,
    skip: i64,
    limit: i64,
) -> Result<Vec<AnswerWithQuestion>, sqlx::Error> {
    sqlx::query_as::<_, AnswerWithQuestion>(
        "SELECT a.id, a.question_id, a.user_id, a.quiz_id, a.answer, a.marks_achieved,
                q.question
         FROM answers a
         JOIN questions q ON a.question_id = q.id
         WHERE a.user_id = $1
         ORDER BY a.id OFFSET $2 LIMIT $3",
    )
    .bind(user_id)
    .bind(skip)
    .bind(limit)
    .fetch_all(pool)
    .await
}

/// A user's answers for one quiz, denormalized with question text, correct
/// answer and total marks so callers need no second round trip.
pub async fn list_by_user_and_quiz(
    pool: &PgPool,
    user_id: i64,
    quiz_id: i64,
    skip: i64,
    limit: i64,
) -> Result<Vec<AnswerDetail>, sqlx::Error> {
    sqlx::query_as::<_, AnswerDetail>(
        "SELECT a.question_id, a.user_id, a.quiz_id, a.answer, a.marks_achieved,
                q.question, q.correct_answer, q.marks AS total_marks
         FROM answers a
         JOIN questions q ON a.question_id = q.id
         WHERE a.user_id = $1 AND a.quiz_id = $2
         ORDER BY a.id OFFSET $3 LIMIT $4",
    )
    .bind(user_id)
    .bind(quiz_id)
    .bind(skip)
    .bind(limit)
    .fetch_all(pool)
    .await
}

/// Every answer for one quiz joined with the question text.
pub async fn list_by_quiz(
    pool: &PgPool,
    quiz_id: i64,
    skip: i64,
    limit: i64,
) -> Result<Vec<AnswerWithQuestion>, sqlx::Error> {
    sqlx::query_as::<_, AnswerWithQuestion>(
        "SELECT a.id, a.question_id, a.user_id, a.quiz_id, a.answer, a.marks_achieved,
                q.question
         FROM answers a
         JOIN questions q ON a.question_id = q.id
         WHERE a.quiz_id = $1
         ORDER BY a.id OFFSET $2 LIMIT $3",
    )
    .bind(quiz_id)
    .bind(skip)
    .bind(limit)
    .fetch_all(pool)
    .await
}

/// Sets marks_achieved on one answer and re-fetches it by the same id.
pub async fn allocate_marks(
    pool: &PgPool,
    id: i64,
    marks: i32,
) -> Result<Option<Answer>, sqlx::Error> {
    sqlx::query("UPDATE answers SET marks_achieved = $1 WHERE id = $2")
        .bind(marks)
        .bind(id)
        .execute(pool)
        .await?;

    get_by_id(pool, id).await
}
