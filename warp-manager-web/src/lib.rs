//! Warp Account Manager web shell
//!
//! Serves the management page on a loopback listener and exposes the core's
//! validation and command rendering as a small JSON API. The same rendering is
//! available from the command line without starting a server.

pub mod browser;
pub mod cli;
pub mod config;
pub mod error;
pub mod render;
pub mod routes;
pub mod server;
pub mod state;

pub use config::{ConfigError, ConfigOverrides, ServerConfig};
pub use error::AppError;
pub use state::AppState;
