//! HTTP handlers for the `/app-metadata` resource.
//! Bodies are taken as raw bytes and decoded by `MetadataService::decode` so
//! that any undecodable payload is answered with 400.

use crate::{
    errors::AppError,
    services::metadata_service::{MetadataError, MetadataService},
};
use axum::{
    Json,
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// POST `/app-metadata`: create a record under a new id.
pub async fn create_metadata(
    State(service): State<MetadataService>,
    body: Bytes,
) -> Result<impl IntoResponse, AppError> {
    let payload = MetadataService::decode(&body)?;
    let created = service.create(payload).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// PUT `/app-metadata/{id}`: replace an existing record.
pub async fn update_metadata(
    State(service): State<MetadataService>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<impl IntoResponse, AppError> {
    let payload = MetadataService::decode(&body)?;
    let updated = service.update(&id, payload).await?;
    Ok(Json(updated))
}

/// GET `/app-metadata/{id}`: 404 with an empty body when absent.
pub async fn get_metadata(
    State(service): State<MetadataService>,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    let response = match service.get(&id).await? {
        Some(record) => Json(record).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    };
    Ok(response)
}

/// GET `/app-metadata`: 404 with an empty body when the store is empty.
pub async fn list_metadata(State(service): State<MetadataService>) -> Result<Response, AppError> {
    let records = service.get_all().await?;
    if records.is_empty() {
        return Ok(StatusCode::NOT_FOUND.into_response());
    }
    Ok(Json(records).into_response())
}

/// DELETE `/app-metadata/{id}`
pub async fn delete_metadata(
    State(service): State<MetadataService>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    service.delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// PUT/DELETE on the collection path: the item id is absent.
pub async fn missing_id() -> AppError {
    MetadataError::MissingId.into()
}
