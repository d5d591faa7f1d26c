use chrono::{Duration, Utc};
use std::sync::Arc;
use tracing::info;

use crate::AppState;

/// Фоновая очистка брошенных страниц бронирования.
pub struct CleanupService {
    state: Arc<AppState>,
}

impl CleanupService {
    pub fn new(state: Arc<AppState>) -> Self {
        Self { state }
    }

    fn max_idle(&self) -> Duration {
        Duration::minutes(self.state.config.session.ttl_minutes)
    }

    /// Удаляет сессии, простаивающие дольше TTL. Возвращает число удалённых.
    pub async fn cleanup_expired_sessions(&self) -> usize {
        let purged = self
            .state
            .sessions
            .purge_idle(self.max_idle(), Utc::now())
            .await;

        if purged == 0 {
            info!("🧹 No idle sessions to cleanup");
        } else {
            info!("🧹 Cleaned up {} idle sessions", purged);
        }
        purged
    }

    /// Бесконечный цикл очистки с интервалом из конфига.
    pub async fn run(self) {
        let interval = std::time::Duration::from_secs(self.state.config.session.cleanup_interval_seconds);
        loop {
            tokio::time::sleep(interval).await;
            self.cleanup_expired_sessions().await;
        }
    }
}
