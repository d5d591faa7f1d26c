pub mod config;
pub mod models;
pub mod render;
pub mod ui;
pub mod services;
pub mod store;
pub mod middleware;
pub mod controllers;

use std::sync::Arc;

use models::LayoutError;
use services::selector::VenueSetup;

// Shared state для всего приложения
#[derive(Clone)]
pub struct AppState {
    pub config: config::Config,
    pub setup: VenueSetup,
    pub sessions: store::SessionStore,
}

impl AppState {
    pub fn new(config: config::Config) -> Result<Arc<Self>, LayoutError> {
        let setup = VenueSetup::from_config(&config)?;

        tracing::info!(
            rows = setup.layout.rows(),
            seats = setup.layout.total_seats(),
            occupied = setup.occupied.len(),
            "Venue layout ready"
        );

        Ok(Arc::new(Self {
            config,
            setup,
            sessions: store::SessionStore::new(),
        }))
    }
}
