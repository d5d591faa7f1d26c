use axum::{
    extract::State,
    http::StatusCode,
    routing::post,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

use super::session_gone;
use crate::middleware::BookingSession;
use crate::store::Session;
use crate::ui::{theme::THEME_KEY, PageUi, Preferences, Theme};
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/sessions", post(create_session).delete(close_session))
}

// POST /api/sessions
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CreateSessionRequest {
    /// Сохранённое клиентом значение темы ("light" / "dark").
    pub theme: Option<String>,
    pub transparent_header: bool,
}

#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub session_id: Uuid,
    pub theme: Theme,
    pub max_seats: usize,
    pub total_seats: usize,
}

/// Загрузка страницы: новый виджет с пустым выбором.
pub async fn create_session(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateSessionRequest>,
) -> Result<(StatusCode, Json<SessionResponse>), (StatusCode, String)> {
    let mut prefs = Preferences::default();
    if let Some(saved) = req.theme.as_deref() {
        prefs.set(THEME_KEY, saved);
    }

    let ui = PageUi::load(prefs, req.transparent_header);
    let theme = ui.theme.current();
    let session_id = state
        .sessions
        .insert(Session::new(state.setup.clone(), ui))
        .await;

    tracing::info!(%session_id, theme = theme.as_str(), "Booking session opened");

    Ok((
        StatusCode::CREATED,
        Json(SessionResponse {
            session_id,
            theme,
            max_seats: state.setup.max_seats,
            total_seats: state.setup.layout.total_seats(),
        }),
    ))
}

// DELETE /api/sessions
/// Перезагрузка страницы: выбор сбрасывается только так.
pub async fn close_session(
    State(state): State<Arc<AppState>>,
    session: BookingSession,
) -> Result<Json<serde_json::Value>, (StatusCode, String)> {
    if !state.sessions.remove(session.id).await {
        return Err(session_gone());
    }
    tracing::info!(session_id = %session.id, "Booking session closed");
    Ok(Json(serde_json::json!({ "message": "Session closed" })))
}
