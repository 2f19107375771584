//! Defines routes for the application metadata resource.
//!
//! ## Structure
//! - **Collection endpoints**
//!   - `POST   /app-metadata`: create a record
//!   - `GET    /app-metadata`: list every record
//!   - `PUT    /app-metadata` / `DELETE /app-metadata`: 400, no id given
//!
//! - **Item endpoints**
//!   - `PUT    /app-metadata/{id}`: replace a record
//!   - `GET    /app-metadata/{id}`: fetch a record
//!   - `DELETE /app-metadata/{id}`: delete a record

use crate::{
    handlers::{
        health_handlers::{healthz, readyz},
        metadata_handlers::{
            create_metadata, delete_metadata, get_metadata, list_metadata, missing_id,
            update_metadata,
        },
    },
    services::metadata_service::MetadataService,
};
use axum::{
    Router,
    routing::{get, post},
};

/// Build the router for every endpoint, carrying `MetadataService` as state.
pub fn routes() -> Router<MetadataService> {
    Router::new()
        // health endpoints (mounted at root)
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        .route(
            "/app-metadata",
            post(create_metadata)
                .get(list_metadata)
                .put(missing_id)
                .delete(missing_id),
        )
        .route(
            "/app-metadata/{id}",
            get(get_metadata)
                .put(update_metadata)
                .delete(delete_metadata),
        )
}

/// Router with state attached, ready to serve.
pub fn app(service: MetadataService) -> Router {
    routes().with_state(service)
}
