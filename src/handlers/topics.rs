// src/handlers/topics.rs

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
    models::topic::{CreateTopicRequest, UpdateTopicRequest},
    repos,
};

/// Creates a new topic.
pub async fn create_topic(
    State(pool): State<PgPool>,
    Json(payload): Json<CreateTopicRequest>,
) -> Result<impl IntoResponse, AppError> {
    if let Err(validation_errors) = payload.validate() {
        return Err(AppError::BadRequest(validation_errors.to_string()));
    }

    let topic = repos::topics::create(&pool, payload)
        .await?
        .ok_or_else(|| AppError::InternalServerError("Topic could not be created".to_string()))?;

    Ok((StatusCode::CREATED, Json(topic)))
}

/// Lists all topics, paginated.
pub async fn list_topics(
    State(pool): State<PgPool>,
    Query(params): Query<Pagination>,
) -> Result<impl IntoResponse, AppError> {
    let topics = repos::topics::list(&pool, params.skip, params.limit).await?;

    Ok(Json(topics))
}

/// Retrieves a topic by ID.
pub async fn get_topic(
    State(pool): State<PgPool>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let topic = repos::topics::get_by_id(&pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound("Topic not found".to_string()))?;

    Ok(Json(topic))
}

/// Updates a topic by ID. Omitted fields are left untouched.
pub async fn update_topic(
    State(pool): State<PgPool>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateTopicRequest>,
) -> Result<impl IntoResponse, AppError> {
    if let Err(validation_errors) = payload.validate() {
        return Err(AppError::BadRequest(validation_errors.to_string()));
    }

    let topic = repos::topics::update(&pool, id, payload)
        .await?
        .ok_or_else(|| AppError::NotFound("Topic not found".to_string()))?;

    Ok(Json(topic))
}
