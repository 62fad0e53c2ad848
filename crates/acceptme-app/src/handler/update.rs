//! Main update function - handles state transitions (TEA pattern)

use tracing::{debug, warn};

use crate::message::Message;
use crate::state::{AppState, View};

use super::{keys::handle_key, picker, preferences, status, UpdateAction, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::RequestQuit => {
            state.request_quit();
            UpdateResult::none()
        }

        Message::Quit => {
            state.quit();
            UpdateResult::none()
        }

        Message::ConfirmQuit => {
            state.confirm_quit();
            UpdateResult::none()
        }

        Message::CancelQuit => {
            state.cancel_quit();
            UpdateResult::none()
        }

        Message::Key(key) => {
            if let Some(msg) = handle_key(state, key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        Message::Tick => UpdateResult::none(),

        // ─────────────────────────────────────────────────────────
        // Navigation
        // ─────────────────────────────────────────────────────────
        Message::ShowMain => {
            if state.view != View::Main {
                state.preferences.picker.close();
                state.view = View::Main;
            }
            UpdateResult::none()
        }

        Message::ShowPreferences => {
            state.view = View::Preferences;
            if state.preferences.mounted {
                return UpdateResult::none();
            }
            state.preferences.mounted = true;
            state.preferences.loading = true;
            UpdateResult::action(UpdateAction::LoadPreferencesData)
        }

        // ─────────────────────────────────────────────────────────
        // Status View
        // ─────────────────────────────────────────────────────────
        Message::CheckConnection => UpdateResult::action(UpdateAction::CheckConnection),
        Message::ConnectionChecked { connected } => {
            status::handle_connection_checked(state, connected)
        }
        Message::ConnectionCheckFailed { error } => {
            status::handle_connection_check_failed(state, &error)
        }

        Message::StatusPollTick | Message::RefreshStatus => status::handle_refresh_status(state),
        Message::StatusRefreshed { seq, snapshot } => {
            status::handle_status_refreshed(state, seq, snapshot)
        }
        Message::StatusRefreshFailed { seq, error } => {
            warn!("Status refresh #{} failed: {}", seq, error);
            UpdateResult::none()
        }

        Message::ToggleAutoAccept => status::handle_toggle_auto_accept(state),
        Message::AutoAcceptToggled { started } => {
            status::handle_auto_accept_toggled(state, started)
        }
        Message::AutoAcceptToggleFailed { error } => {
            status::handle_auto_accept_toggle_failed(state, &error)
        }

        Message::AcceptDelayLoaded { delay } => {
            state.status.accept_delay = delay;
            UpdateResult::none()
        }
        Message::AcceptDelayLoadFailed { error } => {
            warn!("Failed to load accept delay: {}", error);
            UpdateResult::none()
        }
        Message::SetAcceptDelay(delay) => status::handle_set_accept_delay(state, delay),
        Message::IncreaseAcceptDelay => {
            let delay = state.status.accept_delay.increment();
            status::handle_set_accept_delay(state, delay)
        }
        Message::DecreaseAcceptDelay => {
            let delay = state.status.accept_delay.decrement();
            status::handle_set_accept_delay(state, delay)
        }

        // ─────────────────────────────────────────────────────────
        // Preferences View
        // ─────────────────────────────────────────────────────────
        Message::ChampionsLoaded { champions } => {
            preferences::handle_champions_loaded(state, champions)
        }
        Message::ChampionsLoadFailed { error } => {
            warn!("Failed to load champions: {}", error);
            state.preferences.loading = false;
            UpdateResult::none()
        }
        Message::PreferencesLoaded { prefs } => {
            preferences::handle_preferences_loaded(state, prefs)
        }
        Message::PreferencesLoadFailed { error } => {
            preferences::handle_preferences_load_failed(state, &error)
        }
        Message::TogglesLoaded { toggles } => {
            state.preferences.toggles = toggles;
            UpdateResult::none()
        }
        Message::TogglesLoadFailed { error } => {
            warn!("Failed to load toggle settings: {}", error);
            UpdateResult::none()
        }

        Message::SelectRole(role) => preferences::handle_select_role(state, role),
        Message::NextRole => {
            let role = state.preferences.active_role.next();
            preferences::handle_select_role(state, role)
        }
        Message::PrevRole => {
            let role = state.preferences.active_role.prev();
            preferences::handle_select_role(state, role)
        }
        Message::SwitchSection => {
            state.preferences.focus = state.preferences.focus.toggle();
            UpdateResult::none()
        }
        Message::SelectNext => preferences::handle_move_selection(state, 1),
        Message::SelectPrevious => preferences::handle_move_selection(state, -1),

        Message::AddChampion { role, mode, id } => {
            preferences::handle_add_champion(state, role, mode, id)
        }
        Message::RemoveChampion { role, mode, id } => {
            preferences::handle_remove_champion(state, role, mode, id)
        }
        Message::RemoveSelected => preferences::handle_remove_selected(state),

        Message::SetToggle { toggle, enabled } => {
            preferences::handle_set_toggle(state, toggle, enabled)
        }
        Message::FlipToggle(toggle) => {
            let enabled = !state.preferences.toggles.get(toggle);
            preferences::handle_set_toggle(state, toggle, enabled)
        }

        // ─────────────────────────────────────────────────────────
        // Champion Picker
        // ─────────────────────────────────────────────────────────
        Message::OpenPicker { role, mode } => picker::handle_open(state, role, mode),
        Message::ClosePicker => {
            state.preferences.picker.close();
            UpdateResult::none()
        }
        Message::PickerInput(c) => picker::handle_input(state, c),
        Message::PickerBackspace => picker::handle_backspace(state),
        Message::PickerClear => picker::handle_clear(state),
        Message::PickerUp => picker::handle_move(state, -1),
        Message::PickerDown => picker::handle_move(state, 1),
        Message::PickerConfirm => picker::handle_confirm(state),

        // ─────────────────────────────────────────────────────────
        // Persistence
        // ─────────────────────────────────────────────────────────
        Message::PersistSucceeded { kind } => {
            debug!("Saved {}", kind);
            state.preferences.last_error = None;
            UpdateResult::none()
        }
        Message::PersistFailed { kind, error } => {
            warn!("Failed to save {}: {}", kind, error);
            state.preferences.last_error = Some(format!("Failed to save {}: {}", kind, error));
            UpdateResult::none()
        }
    }
}
