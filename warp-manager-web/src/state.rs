//! Shared handler state

use std::sync::Arc;

use warp_manager_core::{AccountService, ConsoleCommandStore};

use crate::config::ServerConfig;

/// Immutable state handed to every worker.
pub struct AppState {
    pub accounts: AccountService<ConsoleCommandStore>,
    pub config: ServerConfig,
}

impl AppState {
    #[must_use]
    pub fn new(config: ServerConfig) -> Self {
        Self {
            accounts: AccountService::new(Arc::new(ConsoleCommandStore::new())),
            config,
        }
    }
}
