use axum::{
    extract::{FromRequestParts, Query},
    http::{request::Parts, StatusCode},
};
use serde::Deserialize;
use std::sync::Arc;
use uuid::Uuid;

pub const SESSION_HEADER: &str = "x-session-id";

/// Открытая страница бронирования, к которой относится запрос.
#[derive(Debug, Clone, Copy)]
pub struct BookingSession {
    pub id: Uuid,
}

#[derive(Debug, Deserialize)]
struct SessionQuery {
    session: Option<String>,
}

// Достаём id сессии из заголовка или из query-параметра `session`
fn raw_session_id(parts: &Parts) -> Option<String> {
    if let Some(value) = parts
        .headers
        .get(SESSION_HEADER)
        .and_then(|value| value.to_str().ok())
    {
        return Some(value.trim().to_string());
    }

    Query::<SessionQuery>::try_from_uri(&parts.uri)
        .ok()
        .and_then(|Query(query)| query.session)
        .map(|value| value.trim().to_string())
}

impl FromRequestParts<Arc<crate::AppState>> for BookingSession {
    type Rejection = (StatusCode, String);

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<crate::AppState>,
    ) -> Result<Self, Self::Rejection> {
        let raw = raw_session_id(parts)
            .ok_or((StatusCode::BAD_REQUEST, "Session id is missing".to_string()))?;

        let id = Uuid::parse_str(&raw)
            .map_err(|_| (StatusCode::BAD_REQUEST, format!("Invalid session id: {}", raw)))?;

        // Сессия могла истечь и быть удалена фоновой очисткой
        if !state.sessions.contains(id).await {
            return Err((StatusCode::NOT_FOUND, "Session not found or expired".to_string()));
        }

        Ok(BookingSession { id })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;

    fn parts(req: Request<()>) -> Parts {
        req.into_parts().0
    }

    #[test]
    fn header_wins_over_query() {
        let p = parts(
            Request::builder()
                .uri("/api/seats?session=from-query")
                .header(SESSION_HEADER, " from-header ")
                .body(())
                .unwrap(),
        );
        assert_eq!(raw_session_id(&p).as_deref(), Some("from-header"));
    }

    #[test]
    fn falls_back_to_query() {
        let p = parts(Request::builder().uri("/booking?x=1&session=abc").body(()).unwrap());
        assert_eq!(raw_session_id(&p).as_deref(), Some("abc"));

        let none = parts(Request::builder().uri("/booking").body(()).unwrap());
        assert_eq!(raw_session_id(&none), None);
    }

    #[test]
    fn query_value_is_percent_decoded() {
        let id = Uuid::new_v4();
        let encoded = id.to_string().replace('-', "%2D");
        let p = parts(
            Request::builder()
                .uri(format!("/booking?session={}", encoded))
                .body(())
                .unwrap(),
        );
        let raw = raw_session_id(&p).unwrap();
        assert_eq!(Uuid::parse_str(&raw).unwrap(), id);
    }
}
