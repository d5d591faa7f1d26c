pub mod sessions;
pub mod seats;
pub mod ui;
pub mod page;

use axum::{http::StatusCode, routing::get, Router};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .merge(sessions::routes())
        .merge(seats::routes())
        .merge(ui::routes())
}

/// Полный роутер приложения.
pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(|| async { "Seat Booking v1.0" }))
        .route("/health", get(|| async { "OK" }))
        .merge(page::routes())
        .nest("/api", routes())
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

/* ---------- helpers ---------- */

pub(crate) fn status_419() -> StatusCode {
    StatusCode::from_u16(419).unwrap_or(StatusCode::CONFLICT)
}

// сессия исчезла между извлечением и обработкой (фоновая очистка)
pub(crate) fn session_gone() -> (StatusCode, String) {
    (StatusCode::NOT_FOUND, "Session not found or expired".to_string())
}
