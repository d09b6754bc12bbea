//! Metrics route for the dashboard panel.

use axum::response::Json;
use wellness::Metrics;

use super::auth::AuthUser;
use crate::services::metrics::daily_metrics;

/// `GET /api/metrics`: today's metrics for the signed-in user.
pub async fn metrics(auth: AuthUser) -> Json<Metrics> {
    tracing::debug!(email = %auth.user.email, "metrics requested");
    Json(daily_metrics())
}
