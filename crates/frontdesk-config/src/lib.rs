//! frontdesk-config
//!
//! Persistent front-desk configuration: API endpoint, credentials and the
//! session identity used by the CLI. Owns the Config data structure plus disk
//! persistence helpers.

pub mod error;
pub mod manager;
pub mod model;

pub use error::ConfigError;
pub use manager::ConfigManager;
pub use model::Config;
