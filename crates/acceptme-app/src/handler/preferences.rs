//! Preferences view handlers: catalog, role tabs, pick/ban lists, toggles

use acceptme_core::{
    normalize_catalog, ChampionPreferences, PickMode, RawChampion, Role, Toggle,
};
use tracing::{debug, info, warn};

use crate::state::AppState;

use super::{PersistRequest, UpdateAction, UpdateResult};

pub fn handle_champions_loaded(state: &mut AppState, champions: Vec<RawChampion>) -> UpdateResult {
    let received = champions.len();
    let prefs = &mut state.preferences;
    prefs.catalog = normalize_catalog(champions);
    prefs.loading = false;
    prefs.clamp_selection();

    if let Some(modal) = prefs.picker.modal_mut() {
        modal.selected = 0;
    }

    info!(
        "Loaded {} champions ({} records received)",
        prefs.catalog.len(),
        received
    );
    state.refresh_picker_icon();
    UpdateResult::none()
}

/// Adopt the stored document and unlock editing
pub fn handle_preferences_loaded(state: &mut AppState, prefs: ChampionPreferences) -> UpdateResult {
    let view = &mut state.preferences;
    view.prefs = prefs;
    view.prefs_loaded = true;
    view.clamp_selection();
    UpdateResult::none()
}

/// Editing stays locked; the next visit to the view retries every load
pub fn handle_preferences_load_failed(state: &mut AppState, error: &str) -> UpdateResult {
    warn!("Failed to load champion preferences: {}", error);
    let view = &mut state.preferences;
    view.mounted = false;
    view.last_error = Some(format!("Failed to load champion preferences: {}", error));
    UpdateResult::none()
}

/// Switch the role tab. Nothing is fetched.
pub fn handle_select_role(state: &mut AppState, role: Role) -> UpdateResult {
    let prefs = &mut state.preferences;
    if prefs.active_role != role {
        prefs.active_role = role;
        prefs.pick_selected = 0;
        prefs.ban_selected = 0;
    }
    UpdateResult::none()
}

/// Move the cursor within the focused section, stopping at either end
pub fn handle_move_selection(state: &mut AppState, delta: isize) -> UpdateResult {
    let prefs = &mut state.preferences;
    let len = prefs.visible_entries(prefs.active_role, prefs.focus).len();
    if len == 0 {
        return UpdateResult::none();
    }

    let focus = prefs.focus;
    let index = prefs.selected_index_mut(focus);
    *index = index.saturating_add_signed(delta).min(len - 1);
    UpdateResult::none()
}

/// Append to the list and persist. The picker always closes.
pub fn handle_add_champion(state: &mut AppState, role: Role, mode: PickMode, id: i64) -> UpdateResult {
    let prefs = &mut state.preferences;
    prefs.picker.close();

    if !prefs.prefs_loaded {
        debug!("Ignoring add of champion {}: preferences not loaded", id);
        return UpdateResult::none();
    }
    if !prefs.prefs.add(role, mode, id) {
        debug!("Champion {} already in {} {} list", id, role, mode);
        return UpdateResult::none();
    }

    debug!("Added champion {} to {} {} list", id, role, mode);
    persist_preferences(state)
}

pub fn handle_remove_champion(
    state: &mut AppState,
    role: Role,
    mode: PickMode,
    id: i64,
) -> UpdateResult {
    let prefs = &mut state.preferences;
    if !prefs.prefs_loaded {
        debug!("Ignoring removal of champion {}: preferences not loaded", id);
        return UpdateResult::none();
    }
    if !prefs.prefs.remove(role, mode, id) {
        return UpdateResult::none();
    }

    debug!("Removed champion {} from {} {} list", id, role, mode);
    prefs.clamp_selection();
    persist_preferences(state)
}

pub fn handle_remove_selected(state: &mut AppState) -> UpdateResult {
    let prefs = &state.preferences;
    let Some(champion) = prefs.selected_champion() else {
        return UpdateResult::none();
    };
    let (role, mode, id) = (prefs.active_role, prefs.focus, champion.id);
    handle_remove_champion(state, role, mode, id)
}

/// Update the toggle locally and persist it
pub fn handle_set_toggle(state: &mut AppState, toggle: Toggle, enabled: bool) -> UpdateResult {
    state.preferences.toggles.set(toggle, enabled);
    UpdateResult::action(UpdateAction::Persist(PersistRequest::Toggle {
        toggle,
        enabled,
    }))
}

fn persist_preferences(state: &AppState) -> UpdateResult {
    UpdateResult::action(UpdateAction::Persist(PersistRequest::Preferences(
        state.preferences.prefs.clone(),
    )))
}
