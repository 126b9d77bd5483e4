// src/handlers/schools.rs

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use sqlx::PgPool;
use validator::Validate;

use crate::{
    error::AppError,
    models::Pagination,
    models::school::{CreateSchoolRequest, UpdateSchoolRequest},
    repos,
};

/// Creates a new school.
pub async fn create_school(
    State(pool): State<PgPool>,
    Json(payload): Json<CreateSchoolRequest>,
) -> Result<impl IntoResponse, AppError> {
    if let Err(validation_errors) = payload.validate() {
        return Err(AppError::BadRequest(validation_errors.to_string()));
    }

    let school = repos::schools::create(&pool, payload)
        .await?
        .ok_or_else(|| AppError::InternalServerError("School could not be created".to_string()))?;

    Ok((StatusCode::CREATED, Json(school)))
}

/// Lists all schools, paginated.
pub async fn list_schools(
    State(pool): State<PgPool>,
    Query(params): Query<Pagination>,
) -> Result<impl IntoResponse, AppError> {
    let schools = repos::schools::list(&pool, params.skip, params.limit).await?;

    Ok(Json(schools))
}

/// Retrieves a school by ID.
pub async fn get_school(
    State(pool): State<PgPool>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let school = repos::schools::get_by_id(&pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound("School not found".to_string()))?;

    Ok(Json(school))
}

/// Updates a school by ID. Omitted fields are left untouched.
pub async fn update_school(
    State(pool): State<PgPool>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateSchoolRequest>,
) -> Result<impl IntoResponse, AppError> {
    if let Err(validation_errors) = payload.validate() {
        return Err(AppError::BadRequest(validation_errors.to_string()));
    }

    let school = repos::schools::update(&pool, id, payload)
        .await?
        .ok_or_else(|| AppError::NotFound("School not found".to_string()))?;

    Ok(Json(school))
}
