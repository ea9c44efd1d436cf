//! Infrastructure layer - Framework implementations
//!
//! This layer contains:
//! - The in-memory book catalog (catalog)
//! - HTTP server setup (server)
//! - Configuration loading (config)
//! - Application state (state)

pub mod catalog;
pub mod config;
pub mod server;
pub mod state;

pub use catalog::StaticCatalog;
pub use state::AppState;
