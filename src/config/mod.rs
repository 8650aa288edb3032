//! Configuration loading for the client.
//!
//! A missing config file is not an error: the defaults point at the local
//! development server.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{ApiConfig, Config, SessionConfig, UiConfig};
