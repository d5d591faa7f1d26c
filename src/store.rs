use chrono::{DateTime, Duration, Utc};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::info;
use uuid::Uuid;

use crate::services::selector::{SeatSelector, VenueSetup};
use crate::ui::PageUi;

/// Одна открытая страница бронирования: свой виджет и своё UI-состояние.
#[derive(Debug)]
pub struct Session {
    pub selector: SeatSelector,
    pub ui: PageUi,
    pub created_at: DateTime<Utc>,
    pub last_seen: DateTime<Utc>,
}

impl Session {
    pub fn new(setup: VenueSetup, ui: PageUi) -> Self {
        let now = Utc::now();
        Self {
            selector: SeatSelector::new(setup),
            ui,
            created_at: now,
            last_seen: now,
        }
    }
}

/// Хранилище сессий в памяти. Блокировка не держится через `.await`.
#[derive(Clone, Default)]
pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<Uuid, Session>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert(&self, session: Session) -> Uuid {
        let id = Uuid::new_v4();
        self.sessions.write().await.insert(id, session);
        id
    }

    pub async fn contains(&self, id: Uuid) -> bool {
        self.sessions.read().await.contains_key(&id)
    }

    /// Выполняет `f` над сессией и обновляет время последнего обращения.
    pub async fn with_session<R>(&self, id: Uuid, f: impl FnOnce(&mut Session) -> R) -> Option<R> {
        let mut sessions = self.sessions.write().await;
        let session = sessions.get_mut(&id)?;
        session.last_seen = Utc::now();
        Some(f(session))
    }

    pub async fn remove(&self, id: Uuid) -> bool {
        self.sessions.write().await.remove(&id).is_some()
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    /// Удаляет сессии, к которым не обращались дольше `max_idle`.
    pub async fn purge_idle(&self, max_idle: Duration, now: DateTime<Utc>) -> usize {
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, s| now - s.last_seen <= max_idle);
        let purged = before - sessions.len();
        if purged > 0 {
            info!("Purged {} idle sessions, {} left", purged, sessions.len());
        }
        purged
    }
}
