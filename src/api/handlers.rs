use super::types::{CreateHashRequest, StatsResponse};
use crate::service::hasher::HashService;
use crate::service::shutdown::ShutdownCoordinator;

use axum::Json;
use axum::extract::{Extension, Form, Path};
use axum::http::StatusCode;
use std::sync::Arc;
use std::time::Instant;

pub async fn handle_create_hash(
    Extension(service): Extension<Arc<HashService>>,
    Form(req): Form<CreateHashRequest>,
) -> (StatusCode, String) {
    let start = Instant::now();

    if req.password.is_empty() {
        tracing::info!("POST hash: 400 Bad request");
        return (StatusCode::BAD_REQUEST, "400 Bad request.".to_string());
    }

    // The identifier is allocated synchronously; the digest write lands after
    // the fixed delay on a detached task.
    let id = service.submit(req.password);

    // Latency of the synchronous portion only.
    service.record_request(start.elapsed());

    tracing::info!("POST hash: id={}", id);
    (StatusCode::OK, id.to_string())
}

pub async fn handle_fetch_hash(
    Extension(service): Extension<Arc<HashService>>,
    Path(raw_id): Path<String>,
) -> (StatusCode, String) {
    let id: i64 = match raw_id.parse() {
        Ok(id) => id,
        Err(e) => {
            tracing::info!("GET hash: 400 Bad request, id={}: {}", raw_id, e);
            return (StatusCode::BAD_REQUEST, "400 Bad request.".to_string());
        }
    };

    match service.lookup(id) {
        Some(digest) => {
            tracing::info!("GET hash: id={}", id);
            (StatusCode::OK, digest)
        }
        None => {
            // Covers both "never created" and "delayed write still pending".
            tracing::info!("GET hash: 404 Not found, id={}", id);
            (StatusCode::NOT_FOUND, "404 Not found.".to_string())
        }
    }
}

pub async fn handle_stats(
    Extension(service): Extension<Arc<HashService>>,
) -> Json<StatsResponse> {
    let (total, total_micros) = service.stats_snapshot();
    let average = if total == 0 { 0 } else { total_micros / total };

    tracing::info!("GET stats: total={} average={}", total, average);
    Json(StatsResponse { total, average })
}

pub async fn handle_shutdown(
    Extension(service): Extension<Arc<HashService>>,
    Extension(coordinator): Extension<Arc<ShutdownCoordinator>>,
) -> (StatusCode, String) {
    if coordinator.initiate(service.pending_writes().clone()) {
        tracing::info!("GET shutdown: termination scheduled");
        (StatusCode::OK, String::new())
    } else {
        // The gate normally catches repeated calls; this covers the race
        // where two first calls arrive at once.
        (
            StatusCode::SERVICE_UNAVAILABLE,
            "503 Service unavailable.".to_string(),
        )
    }
}
