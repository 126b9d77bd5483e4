// src/repos/schools.rs

use sqlx::{PgPool, Postgres, QueryBuilder};

use crate::models::school::{CreateSchoolRequest, School, UpdateSchoolRequest};

const COLUMNS: &str = "id, name, province, area, school_type";

pub async fn create(pool: &PgPool, data: CreateSchoolRequest) -> Result<Option<School>, sqlx::Error> {
    let id: i64 = sqlx::query_scalar(
        "INSERT INTO schools (name, province, area, school_type)
         VALUES ($1, $2, $3, $4)
         RETURNING id",
    )
    .bind(&data.name)
    .bind(&data.province)
    .bind(&data.area)
    .bind(&data.school_type)
    .fetch_one(pool)
    .await?;

    get_by_id(pool, id).await
}

pub async fn get_by_id(pool: &PgPool, id: i64) -> Result<Option<School>, sqlx::Error> {
    sqlx::query_as::<_, School>(&format!("SELECT {COLUMNS} FROM schools WHERE id = $1"))
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn list(pool: &PgPool, skip: i64, limit: i64) -> Result<Vec<School>, sqlx::Error> {
    sqlx::query_as::<_, School>(&format!(
        "SELECT {COLUMNS} FROM schools ORDER BY id OFFSET $1 LIMIT $2"
    ))
    .bind(skip)
    .bind(limit)
    .fetch_all(pool)
    .await
}

pub async fn update(
    pool: &PgPool,
    id: i64,
    data: UpdateSchoolRequest,
) -> Result<Option<School>, sqlx::Error> {
    if data.name.is_none()
        && data.province.is_none()
        && data.area.is_none()
        && data.school_type.is_none()
    {
        return get_by_id(pool, id).await;
    }

    let mut builder: QueryBuilder<Postgres> = QueryBuilder::new("UPDATE schools SET ");
    let mut separated = builder.separated(", ");

    if let Some(name) = data.name {
        separated.push("name = ");
        separated.push_bind_unseparated(name);
    }
    if let Some(province) = data.province {
        separated.push("province = ");
        separated.push_bind_unseparated(province);
    }
    if let Some(area) = data.area {
        separated.push("area = ");
        separated.push_bind_unseparated(area);
    }
    if let Some(school_type) = data.school_type {
        separated.push("school_type = ");
        separated.push_bind_unseparated(school_type);
    }

    builder.push(" WHERE id = ");
    builder.push_bind(id);

    builder.build().execute(pool).await?;

    get_by_id(pool, id).await
}
