//! Health & readiness handlers.
//!
//! - GET /healthz  -> simple liveness ("ok")
//! - GET /readyz   -> readiness that probes the metadata repository

use crate::services::metadata_service::MetadataService;
use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde::Serialize;
use std::collections::HashMap;

/// `GET /healthz`
///
/// Always 200 with a small JSON body. Performs no I/O.
pub async fn healthz() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "ok".into(),
        }),
    )
}

/// `GET /readyz`
///
/// Lists the repository once. HTTP 200 when that succeeds, HTTP 503 with the
/// failure otherwise.
pub async fn readyz(State(service): State<MetadataService>) -> impl IntoResponse {
    let repository_check = match service.get_all().await {
        Ok(records) => CheckStatus {
            ok: true,
            records: Some(records.len()),
            error: None,
        },
        Err(e) => CheckStatus {
            ok: false,
            records: None,
            error: Some(e.to_string()),
        },
    };

    let overall_ok = repository_check.ok;
    let mut checks = HashMap::new();
    checks.insert("repository", repository_check);

    let body = ReadyResponse {
        status: if overall_ok {
            "ok".into()
        } else {
            "error".into()
        },
        checks,
    };

    let status = if overall_ok {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };
    (status, Json(body))
}

#[derive(Serialize)]
struct HealthResponse {
    status: String,
}

#[derive(Serialize)]
struct ReadyResponse {
    status: String,
    checks: HashMap<&'static str, CheckStatus>,
}

#[derive(Serialize)]
struct CheckStatus {
    ok: bool,
    records: Option<usize>,
    error: Option<String>,
}
