//! Application state (Model in TEA pattern)

use std::path::PathBuf;

use chrono::{DateTime, Local};

use acceptme_core::{
    filter_champions, find_champion, AcceptDelay, CdnSource, Champion, ChampionIcon,
    ChampionPreferences, IconSource, PickMode, Role, StatusSnapshot, ToggleSettings,
};

use crate::config::Settings;

/// Which screen is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    /// Connection, run status and accept delay
    #[default]
    Main,
    /// Per-role champion preferences
    Preferences,
}

/// State of the status (main) view
#[derive(Debug, Clone)]
pub struct StatusViewState {
    /// Whether the backend can reach the game client
    pub connected: bool,
    /// Whether auto-accept is running
    pub running: bool,
    /// Free-form status text from the backend
    pub status: String,
    /// A ready check is currently showing
    pub match_found: bool,
    /// Delay before accepting
    pub accept_delay: AcceptDelay,
    /// A start/stop request is in flight
    pub toggle_pending: bool,
    /// When the last status snapshot was applied
    pub last_updated: Option<DateTime<Local>>,
    /// Last refresh sequence number handed out
    issued_seq: u64,
    /// Sequence number of the snapshot currently shown
    applied_seq: u64,
}

impl Default for StatusViewState {
    fn default() -> Self {
        Self {
            connected: false,
            running: false,
            status: "Initializing...".to_string(),
            match_found: false,
            accept_delay: AcceptDelay::default(),
            toggle_pending: false,
            last_updated: None,
            issued_seq: 0,
            applied_seq: 0,
        }
    }
}

impl StatusViewState {
    /// The start/stop control is usable unless disconnected and idle
    pub fn can_toggle(&self) -> bool {
        self.connected || self.running
    }

    /// Hand out the sequence number for a new status refresh
    pub fn issue_seq(&mut self) -> u64 {
        self.issued_seq += 1;
        self.issued_seq
    }

    /// Apply a snapshot unless a newer one has already been applied.
    ///
    /// Returns `false` for stale snapshots.
    pub fn apply_snapshot(&mut self, seq: u64, snapshot: StatusSnapshot) -> bool {
        if seq <= self.applied_seq {
            return false;
        }
        self.applied_seq = seq;
        self.status = snapshot.status;
        self.running = snapshot.running;
        self.match_found = snapshot.match_found;
        self.last_updated = Some(Local::now());
        true
    }

    pub fn applied_seq(&self) -> u64 {
        self.applied_seq
    }
}

/// The champion picker modal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerModal {
    pub role: Role,
    pub mode: PickMode,
    pub query: String,
    /// Highlighted row within the filtered results
    pub selected: usize,
    /// Icon of the highlighted champion, see [`AppState::refresh_picker_icon`]
    pub icon: Option<PickerIcon>,
}

impl PickerModal {
    pub fn new(role: Role, mode: PickMode) -> Self {
        Self {
            role,
            mode,
            query: String::new(),
            selected: 0,
            icon: None,
        }
    }
}

/// Resolved icon source for one champion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerIcon {
    pub champion_id: i64,
    pub source: IconSource,
}

/// Picker lifecycle: closed, or open for one (role, mode)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PickerState {
    #[default]
    Closed,
    Open(PickerModal),
}

impl PickerState {
    pub fn is_open(&self) -> bool {
        matches!(self, PickerState::Open(_))
    }

    pub fn modal(&self) -> Option<&PickerModal> {
        match self {
            PickerState::Open(modal) => Some(modal),
            PickerState::Closed => None,
        }
    }

    pub fn modal_mut(&mut self) -> Option<&mut PickerModal> {
        match self {
            PickerState::Open(modal) => Some(modal),
            PickerState::Closed => None,
        }
    }

    pub fn close(&mut self) {
        *self = PickerState::Closed;
    }
}

/// State of the preferences view
#[derive(Debug, Clone, Default)]
pub struct PreferencesViewState {
    /// Normalized, sorted champion catalog
    pub catalog: Vec<Champion>,
    /// Catalog request in flight
    pub loading: bool,
    /// Initial loads have been issued
    pub mounted: bool,
    pub prefs: ChampionPreferences,
    /// `prefs` holds the stored document. Edits are refused until then.
    pub prefs_loaded: bool,
    pub toggles: ToggleSettings,
    /// Role tab being edited
    pub active_role: Role,
    /// Section with keyboard focus
    pub focus: PickMode,
    /// Highlighted row in the pick section
    pub pick_selected: usize,
    /// Highlighted row in the ban section
    pub ban_selected: usize,
    pub picker: PickerState,
    /// Most recent failed save, cleared by the next successful one
    pub last_error: Option<String>,
}

impl PreferencesViewState {
    /// Champions listed for (role, mode), in priority order.
    ///
    /// Ids missing from the catalog are skipped.
    pub fn visible_entries(&self, role: Role, mode: PickMode) -> Vec<&Champion> {
        self.prefs
            .list(role, mode)
            .iter()
            .filter_map(|id| find_champion(&self.catalog, *id))
            .collect()
    }

    pub fn selected_index(&self, mode: PickMode) -> usize {
        match mode {
            PickMode::Pick => self.pick_selected,
            PickMode::Ban => self.ban_selected,
        }
    }

    pub fn selected_index_mut(&mut self, mode: PickMode) -> &mut usize {
        match mode {
            PickMode::Pick => &mut self.pick_selected,
            PickMode::Ban => &mut self.ban_selected,
        }
    }

    /// Champion under the cursor in the focused section
    pub fn selected_champion(&self) -> Option<&Champion> {
        let entries = self.visible_entries(self.active_role, self.focus);
        entries.get(self.selected_index(self.focus)).copied()
    }

    /// Keep both section cursors inside their lists
    pub fn clamp_selection(&mut self) {
        for mode in [PickMode::Pick, PickMode::Ban] {
            let len = self.visible_entries(self.active_role, mode).len();
            let index = self.selected_index_mut(mode);
            *index = (*index).min(len.saturating_sub(1));
        }
    }

    /// Picker results for the current query
    pub fn picker_results(&self) -> Vec<&Champion> {
        match self.picker.modal() {
            Some(modal) => filter_champions(&self.catalog, &modal.query),
            None => Vec::new(),
        }
    }

    /// Champion highlighted in the open picker
    pub fn picker_selection(&self) -> Option<&Champion> {
        let modal = self.picker.modal()?;
        self.picker_results().get(modal.selected).copied()
    }
}

/// Where champion icons come from
#[derive(Debug, Clone, Default)]
pub struct AssetState {
    pub asset_dir: Option<PathBuf>,
    pub cdn: CdnSource,
}

impl AssetState {
    pub fn icon_for(&self, champion: &Champion) -> ChampionIcon {
        ChampionIcon::new(&champion.name, &champion.alias, &self.cdn)
    }
}

/// Complete application state (the Model in TEA)
#[derive(Debug, Clone)]
pub struct AppState {
    pub view: View,
    pub status: StatusViewState,
    pub preferences: PreferencesViewState,
    pub assets: AssetState,
    /// Name of the active backend transport, for the header
    pub backend_name: String,
    /// Ask before quitting while running
    pub confirm_quit_enabled: bool,
    /// Quit confirmation is showing
    pub quit_dialog: bool,
    quitting: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::with_settings(&Settings::default())
    }

    pub fn with_settings(settings: &Settings) -> Self {
        Self {
            view: View::Main,
            status: StatusViewState::default(),
            preferences: PreferencesViewState::default(),
            assets: AssetState {
                asset_dir: settings.assets.asset_dir.clone(),
                cdn: settings.assets.cdn_source(),
            },
            backend_name: String::new(),
            confirm_quit_enabled: settings.ui.confirm_quit,
            quit_dialog: false,
            quitting: false,
        }
    }

    /// Re-resolve the picker icon when the highlight lands on a different
    /// champion. Resolving touches the filesystem, so frames only read the
    /// cached value.
    pub fn refresh_picker_icon(&mut self) {
        let highlighted = self
            .preferences
            .picker_selection()
            .map(|champion| (champion.id, self.assets.icon_for(champion)));
        let Some(modal) = self.preferences.picker.modal_mut() else {
            return;
        };

        match highlighted {
            Some((id, _)) if modal.icon.as_ref().is_some_and(|i| i.champion_id == id) => {}
            Some((id, icon)) => {
                modal.icon = Some(PickerIcon {
                    champion_id: id,
                    source: icon.resolve(self.assets.asset_dir.as_deref()),
                });
            }
            None => modal.icon = None,
        }
    }

    /// Quit now, or ask first if configured and auto-accept is running
    pub fn request_quit(&mut self) {
        if self.confirm_quit_enabled && self.status.running {
            self.quit_dialog = true;
        } else {
            self.quitting = true;
        }
    }

    pub fn confirm_quit(&mut self) {
        self.quit_dialog = false;
        self.quitting = true;
    }

    pub fn cancel_quit(&mut self) {
        self.quit_dialog = false;
    }

    pub fn quit(&mut self) {
        self.quitting = true;
    }

    pub fn should_quit(&self) -> bool {
        self.quitting
    }
}
