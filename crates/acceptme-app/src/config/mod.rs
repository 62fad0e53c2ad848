//! Configuration file parsing for AcceptMe
//!
//! A single `config.toml` under the user config directory configures the
//! client itself: which backend to start, how often to poll, and where
//! champion icons come from. User preferences live in the backend.

pub mod settings;
pub mod types;

pub use settings::{default_config_path, init_config, load_settings};
pub use types::*;
