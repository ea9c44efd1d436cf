//! Application state containing the responder and shared resources

use std::sync::Arc;

use crate::domain::BookCatalog;
use crate::genie::{Responder, SessionStore};
use crate::infrastructure::StaticCatalog;
use crate::infrastructure::config::Config;
use crate::services::recommendation_service::Recommender;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    /// Chat responder, owns the recommender
    pub responder: Arc<Responder>,
    /// Per-conversation chat state
    pub sessions: Arc<SessionStore>,
}

impl AppState {
    /// Create a new AppState over the static catalog
    pub fn new(config: &Config) -> Self {
        let catalog: Arc<dyn BookCatalog> = Arc::new(StaticCatalog::new());
        let recommender = match config.recommendation_seed {
            Some(seed) => {
                tracing::info!("Using fixed recommendation seed {}", seed);
                Recommender::with_seed(catalog, seed)
            }
            None => Recommender::new(catalog),
        };

        Self {
            responder: Arc::new(Responder::new(recommender)),
            sessions: Arc::new(SessionStore::new(config.session_ttl)),
        }
    }

    pub fn recommender(&self) -> &Recommender {
        self.responder.recommender()
    }
}
