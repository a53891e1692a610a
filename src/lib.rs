pub mod analysis;
pub mod config;
pub mod error;
pub mod record;
pub mod report;
pub mod resources;
pub mod rest;
pub mod seed;
pub mod store;

use std::sync::Arc;

use config::ServerConfig;
use store::RecordStore;

/// Shared application state passed to every request handler.
#[derive(Clone)]
pub struct AppContext {
    pub config: Arc<ServerConfig>,
    /// The record store behind its trait so a persistent backend can be
    /// substituted without touching handlers.
    pub store: Arc<dyn RecordStore>,
    pub started_at: std::time::Instant,
}

impl AppContext {
    pub fn new(config: ServerConfig, store: Arc<dyn RecordStore>) -> Self {
        Self {
            config: Arc::new(config),
            store,
            started_at: std::time::Instant::now(),
        }
    }
}
