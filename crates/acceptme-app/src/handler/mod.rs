//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `keys`: Key event handlers per view
//! - `status`: Connection, status polling and auto-accept control
//! - `preferences`: Role tabs, pick/ban lists and quick toggles
//! - `picker`: Champion picker modal

pub(crate) mod keys;
pub(crate) mod picker;
pub(crate) mod preferences;
pub(crate) mod status;
pub(crate) mod update;


use acceptme_core::{AcceptDelay, ChampionPreferences, Toggle};

use crate::message::{Message, PersistKind};

// Re-export main entry point
pub use update::update;

#[cfg(test)]
pub(crate) use keys::handle_key;

/// Actions that the event loop should perform after update
#[derive(Debug, Clone)]
pub enum UpdateAction {
    /// First load of the main view: connection check plus saved delay
    InitializeMain,

    /// Ask the backend whether the game client is reachable
    CheckConnection,

    /// Fetch status, running flag and match flag together.
    ///
    /// `seq` is handed back with the result so late answers can be dropped.
    RefreshStatus { seq: u64 },

    StartAutoAccept,
    StopAutoAccept,

    /// Load champion catalog, preferences and toggles concurrently
    LoadPreferencesData,

    /// Queue a save on the ordered writer
    Persist(PersistRequest),
}

/// A write to the backend, applied in the order issued
#[derive(Debug, Clone, PartialEq)]
pub enum PersistRequest {
    AcceptDelay(AcceptDelay),
    /// Full preferences document
    Preferences(ChampionPreferences),
    Toggle { toggle: Toggle, enabled: bool },
}

impl PersistRequest {
    pub fn kind(&self) -> PersistKind {
        match self {
            PersistRequest::AcceptDelay(_) => PersistKind::AcceptDelay,
            PersistRequest::Preferences(_) => PersistKind::Preferences,
            PersistRequest::Toggle { toggle, .. } => PersistKind::Toggle(*toggle),
        }
    }
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }

    pub fn with_action(self, action: UpdateAction) -> Self {
        Self {
            action: Some(action),
            ..self
        }
    }
}
