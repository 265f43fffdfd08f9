use crate::service::shutdown::ShutdownCoordinator;

use axum::Extension;
use axum::extract::Request;
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use std::sync::Arc;

/// Middleware that refuses every request once the shutdown flag is set.
///
/// Runs before routing-level verb checks, so a post-shutdown request gets
/// 503 regardless of its path or method, including repeated shutdown calls.
pub async fn reject_when_shutting_down(
    Extension(coordinator): Extension<Arc<ShutdownCoordinator>>,
    request: Request,
    next: Next,
) -> Response {
    if coordinator.is_shutting_down() {
        tracing::info!(
            "{} {}: 503 Service unavailable",
            request.method(),
            request.uri().path()
        );
        return (StatusCode::SERVICE_UNAVAILABLE, "503 Service unavailable.").into_response();
    }

    next.run(request).await
}
