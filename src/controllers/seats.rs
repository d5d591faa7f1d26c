use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::{get, patch},
    Json, Router,
};
use serde::Deserialize;
use std::sync::Arc;

use super::{session_gone, status_419};
use crate::middleware::BookingSession;
use crate::models::{SeatId, SelectionError};
use crate::render::{GridView, SeatState, SummaryView};
use crate::services::selector::{SelectorError, ToggleOutcome};
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/seats", get(get_seats))
        .route("/seats/select", patch(select_seat))
        .route("/summary", get(get_summary))
}

/* ---------- SEATS ---------- */

#[derive(Debug, Default, Deserialize)]
pub struct SeatsQuery {
    pub row: Option<String>,
    pub status: Option<SeatState>,
}

// GET /api/seats
pub async fn get_seats(
    State(state): State<Arc<AppState>>,
    session: BookingSession,
    Query(params): Query<SeatsQuery>,
) -> Result<Json<GridView>, (StatusCode, String)> {
    let row = match params.row.as_deref().map(str::trim) {
        None => None,
        Some(r) => match r.chars().collect::<Vec<_>>().as_slice() {
            [c] if c.is_ascii_uppercase() => Some(*c),
            _ => return Err((StatusCode::BAD_REQUEST, "row must be a single letter A-Z".to_string())),
        },
    };

    let mut grid = state
        .sessions
        .with_session(session.id, |s| s.selector.render_grid())
        .await
        .ok_or_else(session_gone)?;

    if let Some(label) = row {
        grid.rows.retain(|r| r.label == label);
    }
    if let Some(status) = params.status {
        for r in &mut grid.rows {
            r.seats.retain(|s| s.state == status);
        }
    }

    Ok(Json(grid))
}

// PATCH /api/seats/select
#[derive(Debug, Deserialize)]
pub struct SelectSeatRequest {
    pub seat_id: String,
}

/// Клик по месту: выбрать или снять выбор.
pub async fn select_seat(
    State(state): State<Arc<AppState>>,
    session: BookingSession,
    Json(req): Json<SelectSeatRequest>,
) -> Result<Json<ToggleOutcome>, (StatusCode, String)> {
    let seat_id: SeatId = req
        .seat_id
        .parse()
        .map_err(|e: crate::models::SeatIdError| (StatusCode::BAD_REQUEST, e.to_string()))?;

    let result = state
        .sessions
        .with_session(session.id, |s| s.selector.toggle(seat_id))
        .await
        .ok_or_else(session_gone)?;

    match result {
        Ok(outcome) => Ok(Json(outcome)),
        Err(e) => {
            tracing::warn!(session_id = %session.id, seat = %seat_id, "Seat toggle rejected: {}", e);
            let status = match &e {
                SelectorError::UnknownSeat(_) => StatusCode::NOT_FOUND,
                SelectorError::SeatOccupied(_) => status_419(),
                SelectorError::Selection(SelectionError::LimitReached { .. }) => status_419(),
            };
            Err((status, e.to_string()))
        }
    }
}

/* ---------- SUMMARY ---------- */

// GET /api/summary
pub async fn get_summary(
    State(state): State<Arc<AppState>>,
    session: BookingSession,
) -> Result<Json<SummaryView>, (StatusCode, String)> {
    state
        .sessions
        .with_session(session.id, |s| s.selector.summary_view())
        .await
        .map(Json)
        .ok_or_else(session_gone)
}
