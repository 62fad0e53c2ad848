//! acceptme-app - Application state and orchestration for AcceptMe
//!
//! This crate implements the TEA (The Elm Architecture) pattern for state
//! management: the [`AppState`] model, the closed [`Message`] set, the pure
//! `handler::update()` function and the [`Engine`] that turns
//! [`UpdateAction`]s into backend calls. It also owns configuration loading.

pub mod actions;
pub mod config;
pub mod engine;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod poller;
pub mod process;
pub mod signals;
pub mod state;
pub mod writer;

// Re-export primary types
pub use engine::Engine;
pub use handler::{PersistRequest, UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::{Message, PersistKind};
pub use state::{AppState, PickerIcon, PickerModal, PickerState, View};
