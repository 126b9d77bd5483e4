// src/repos/users.rs

use sqlx::{PgPool, Postgres, QueryBuilder};

use crate::models::user::{CreateUserRequest, UpdateUserRequest, User};

const COLUMNS: &str = "id, email, password, name, surname, role, school_id, grade";

/// Inserts a user and re-fetches the stored row by its generated id.
pub async fn create(pool: &PgPool, data: CreateUserRequest) -> Result<Option<User>, sqlx::Error> {
    let id: i64 = sqlx::query_scalar(
        "INSERT INTO users (email, password, name, surname, role, school_id, grade)
         VALUES ($1, $2, $3, $4, $5, $6, $7)
         RETURNING id",
    )
    .bind(&data.email)
    .bind(&data.password)
    .bind(&data.name)
    .bind(&data.surname)
    .bind(data.role.as_deref().unwrap_or("student"))
    .bind(data.school_id)
    .bind(data.grade)
    .fetch_one(pool)
    .await?;

    get_by_id(pool, id).await
}

pub async fn get_by_id(pool: &PgPool, id: i64) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(&format!("SELECT {COLUMNS} FROM users WHERE id = $1"))
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn get_by_email(pool: &PgPool, email: &str) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(&format!("SELECT {COLUMNS} FROM users WHERE email = $1"))
        .bind(email)
        .fetch_optional(pool)
        .await
}

pub async fn list(pool: &PgPool, skip: i64, limit: i64) -> Result<Vec<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(&format!(
        "SELECT {COLUMNS} FROM users ORDER BY id OFFSET $1 LIMIT $2"
    ))
    .bind(skip)
    .bind(limit)
    .fetch_all(pool)
    .await
}

/// Every user, no pagination window. Used by the analytics fan-out.
pub async fn list_all(pool: &PgPool) -> Result<Vec<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(&format!("SELECT {COLUMNS} FROM users ORDER BY id"))
        .fetch_all(pool)
        .await
}

/// Partial update: only fields present in the request reach the SET list.
/// An empty field-set degenerates to a plain fetch with no write.
pub async fn update(
    pool: &PgPool,
    id: i64,
    data: UpdateUserRequest,
) -> Result<Option<User>, sqlx::Error> {
    if data.email.is_none()
        && data.password.is_none()
        && data.name.is_none()
        && data.surname.is_none()
        && data.role.is_none()
        && data.school_id.is_none()
        && data.grade.is_none()
    {
        return get_by_id(pool, id).await;
    }

    let mut builder: QueryBuilder<Postgres> = QueryBuilder::new("UPDATE users SET ");
    let mut separated = builder.separated(", ");

    if let Some(email) = data.email {
        separated.push("email = ");
        separated.push_bind_unseparated(email);
    }
    if let Some(password) = data.password {
        separated.push("password = ");
        separated.push_bind_unseparated(password);
    }
    if let Some(name) = data.name {
        separated.push("name = ");
        separated.push_bind_unseparated(name);
    }
    if let Some(surname) = data.surname {
        separated.push("surname = ");
        separated.push_bind_unseparated(surname);
    }
    if let Some(role) = data.role {
        separated.push("role = ");
        separated.push_bind_unseparated(role);
    }
    if let Some(school_id) = data.school_id {
        separated.push("school_id = ");
        separated.push_bind_unseparated(school_id);
    }
    if let Some(grade) = data.grade {
        separated.push("grade = ");
        separated.push_bind_unseparated(grade);
    }

    builder.push(" WHERE id = ");
    builder.push_bind(id);

    builder.build().execute(pool).await?;

    get_by_id(pool, id).await
}

/// Returns true when a row was actually deleted.
pub async fn delete(pool: &PgPool, id: i64) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM users WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}
