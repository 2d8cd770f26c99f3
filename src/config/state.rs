// Application state module
// Read-only state shared by every connection

use std::sync::Arc;

use super::types::Config;
use crate::logger::LogSink;

/// Application state
pub struct AppState {
    pub config: Config,
    /// Destination for access lines
    pub log: Arc<dyn LogSink>,
}

impl AppState {
    pub fn new(config: Config, log: Arc<dyn LogSink>) -> Self {
        Self { config, log }
    }
}
