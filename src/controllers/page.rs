use axum::{
    extract::State,
    http::StatusCode,
    response::Html,
    routing::get,
    Router,
};
use std::sync::Arc;

use super::session_gone;
use crate::middleware::BookingSession;
use crate::render::html;
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/booking", get(booking_page))
}

// GET /booking?session=<id>
/// Серверная отрисовка страницы бронирования для текущей сессии.
pub async fn booking_page(
    State(state): State<Arc<AppState>>,
    session: BookingSession,
) -> Result<Html<String>, (StatusCode, String)> {
    state
        .sessions
        .with_session(session.id, |s| {
            let grid = s.selector.render_grid();
            let summary = s.selector.summary_view();
            html::render_page(&grid, &summary, &s.ui)
        })
        .await
        .map(Html)
        .ok_or_else(session_gone)
}
