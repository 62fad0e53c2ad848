//! Message types for the application (TEA pattern)

use acceptme_core::{
    AcceptDelay, ChampionPreferences, PickMode, RawChampion, Role, StatusSnapshot, Toggle,
    ToggleSettings,
};

use crate::input_key::InputKey;

/// Which setting a save was for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PersistKind {
    AcceptDelay,
    Preferences,
    Toggle(Toggle),
}

impl std::fmt::Display for PersistKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PersistKind::AcceptDelay => f.write_str("accept delay"),
            PersistKind::Preferences => f.write_str("champion preferences"),
            PersistKind::Toggle(toggle) => write!(f, "{}", toggle.setting_key()),
        }
    }
}

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick event for periodic updates
    Tick,

    /// Request to quit (may show confirmation if auto-accept is running)
    RequestQuit,

    /// Force quit without confirmation (Ctrl+C, signal handler)
    Quit,

    /// Confirm quit from confirmation dialog
    ConfirmQuit,

    /// Cancel quit from confirmation dialog
    CancelQuit,

    // ─────────────────────────────────────────────────────────
    // Navigation
    // ─────────────────────────────────────────────────────────
    ShowMain,
    ShowPreferences,

    // ─────────────────────────────────────────────────────────
    // Status View
    // ─────────────────────────────────────────────────────────
    /// Ask the backend whether the game client is reachable
    CheckConnection,
    ConnectionChecked { connected: bool },
    ConnectionCheckFailed { error: String },

    /// Repeating poll timer fired
    StatusPollTick,
    /// Refresh status now, outside the timer
    RefreshStatus,
    StatusRefreshed { seq: u64, snapshot: StatusSnapshot },
    StatusRefreshFailed { seq: u64, error: String },

    /// Start if stopped, stop if running
    ToggleAutoAccept,
    AutoAcceptToggled { started: bool },
    AutoAcceptToggleFailed { error: String },

    AcceptDelayLoaded { delay: AcceptDelay },
    AcceptDelayLoadFailed { error: String },
    SetAcceptDelay(AcceptDelay),
    IncreaseAcceptDelay,
    DecreaseAcceptDelay,

    // ─────────────────────────────────────────────────────────
    // Preferences View
    // ─────────────────────────────────────────────────────────
    ChampionsLoaded { champions: Vec<RawChampion> },
    ChampionsLoadFailed { error: String },
    PreferencesLoaded { prefs: ChampionPreferences },
    PreferencesLoadFailed { error: String },
    TogglesLoaded { toggles: ToggleSettings },
    TogglesLoadFailed { error: String },

    SelectRole(Role),
    NextRole,
    PrevRole,
    /// Move keyboard focus between the pick and ban sections
    SwitchSection,
    SelectNext,
    SelectPrevious,

    AddChampion { role: Role, mode: PickMode, id: i64 },
    RemoveChampion { role: Role, mode: PickMode, id: i64 },
    /// Remove the highlighted champion of the focused section
    RemoveSelected,

    SetToggle { toggle: Toggle, enabled: bool },
    FlipToggle(Toggle),

    // ─────────────────────────────────────────────────────────
    // Champion Picker
    // ─────────────────────────────────────────────────────────
    OpenPicker { role: Role, mode: PickMode },
    ClosePicker,
    PickerInput(char),
    PickerBackspace,
    PickerClear,
    PickerUp,
    PickerDown,
    /// Add the highlighted champion and close
    PickerConfirm,

    // ─────────────────────────────────────────────────────────
    // Persistence
    // ─────────────────────────────────────────────────────────
    PersistSucceeded { kind: PersistKind },
    PersistFailed { kind: PersistKind, error: String },
}
