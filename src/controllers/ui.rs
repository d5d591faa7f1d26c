use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, patch},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use super::session_gone;
use crate::middleware::BookingSession;
use crate::ui::{MobileMenu, Theme};
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/theme", get(get_theme))
        .route("/theme/toggle", patch(toggle_theme))
        .route("/menu/open", patch(open_menu))
        .route("/menu/close", patch(close_menu))
        .route("/header/scroll", patch(scroll_header))
}

/* ---------- THEME ---------- */

#[derive(Debug, Serialize)]
pub struct ThemeResponse {
    pub theme: Theme,
    pub root_class: Option<&'static str>,
}

impl From<Theme> for ThemeResponse {
    fn from(theme: Theme) -> Self {
        Self { theme, root_class: theme.root_class() }
    }
}

// GET /api/theme
pub async fn get_theme(
    State(state): State<Arc<AppState>>,
    session: BookingSession,
) -> Result<Json<ThemeResponse>, (StatusCode, String)> {
    state
        .sessions
        .with_session(session.id, |s| ThemeResponse::from(s.ui.theme.current()))
        .await
        .map(Json)
        .ok_or_else(session_gone)
}

// PATCH /api/theme/toggle
pub async fn toggle_theme(
    State(state): State<Arc<AppState>>,
    session: BookingSession,
) -> Result<Json<ThemeResponse>, (StatusCode, String)> {
    let theme = state
        .sessions
        .with_session(session.id, |s| s.ui.theme.toggle())
        .await
        .ok_or_else(session_gone)?;

    tracing::debug!(session_id = %session.id, theme = theme.as_str(), "Theme toggled");
    Ok(Json(theme.into()))
}

/* ---------- MOBILE MENU ---------- */

#[derive(Debug, Serialize)]
pub struct MenuResponse {
    pub open: bool,
    pub menu_class: &'static str,
    pub body_overflow: Option<&'static str>,
}

impl From<MobileMenu> for MenuResponse {
    fn from(menu: MobileMenu) -> Self {
        Self {
            open: menu.is_open(),
            menu_class: menu.menu_class(),
            body_overflow: menu.body_overflow(),
        }
    }
}

// PATCH /api/menu/open
pub async fn open_menu(
    State(state): State<Arc<AppState>>,
    session: BookingSession,
) -> Result<Json<MenuResponse>, (StatusCode, String)> {
    state
        .sessions
        .with_session(session.id, |s| {
            s.ui.menu.open();
            MenuResponse::from(s.ui.menu)
        })
        .await
        .map(Json)
        .ok_or_else(session_gone)
}

// PATCH /api/menu/close
pub async fn close_menu(
    State(state): State<Arc<AppState>>,
    session: BookingSession,
) -> Result<Json<MenuResponse>, (StatusCode, String)> {
    state
        .sessions
        .with_session(session.id, |s| {
            s.ui.menu.close();
            MenuResponse::from(s.ui.menu)
        })
        .await
        .map(Json)
        .ok_or_else(session_gone)
}

/* ---------- STICKY HEADER ---------- */

#[derive(Debug, Deserialize)]
pub struct ScrollRequest {
    pub scroll_y: u32,
}

#[derive(Debug, Serialize)]
pub struct HeaderResponse {
    pub solid: bool,
    pub classes: Vec<&'static str>,
}

// PATCH /api/header/scroll
pub async fn scroll_header(
    State(state): State<Arc<AppState>>,
    session: BookingSession,
    Json(req): Json<ScrollRequest>,
) -> Result<Json<HeaderResponse>, (StatusCode, String)> {
    state
        .sessions
        .with_session(session.id, |s| {
            s.ui.header.on_scroll(req.scroll_y);
            HeaderResponse {
                solid: s.ui.header.is_solid(),
                classes: s.ui.header.classes(),
            }
        })
        .await
        .map(Json)
        .ok_or_else(session_gone)
}
