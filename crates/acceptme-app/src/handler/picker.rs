//! Champion picker modal handlers

use acceptme_core::{PickMode, Role};
use tracing::debug;

use crate::message::Message;
use crate::state::{AppState, PickerModal, PickerState};

use super::UpdateResult;

/// Open for (role, mode) with an empty search, once preferences are loaded
pub fn handle_open(state: &mut AppState, role: Role, mode: PickMode) -> UpdateResult {
    if !state.preferences.prefs_loaded {
        debug!("Picker unavailable until preferences load");
        return UpdateResult::none();
    }
    state.preferences.picker = PickerState::Open(PickerModal::new(role, mode));
    state.refresh_picker_icon();
    UpdateResult::none()
}

pub fn handle_input(state: &mut AppState, c: char) -> UpdateResult {
    if let Some(modal) = state.preferences.picker.modal_mut() {
        modal.query.push(c);
        modal.selected = 0;
    }
    state.refresh_picker_icon();
    UpdateResult::none()
}

pub fn handle_backspace(state: &mut AppState) -> UpdateResult {
    if let Some(modal) = state.preferences.picker.modal_mut() {
        modal.query.pop();
        modal.selected = 0;
    }
    state.refresh_picker_icon();
    UpdateResult::none()
}

pub fn handle_clear(state: &mut AppState) -> UpdateResult {
    if let Some(modal) = state.preferences.picker.modal_mut() {
        modal.query.clear();
        modal.selected = 0;
    }
    state.refresh_picker_icon();
    UpdateResult::none()
}

/// Move the highlight, stopping at either end of the results
pub fn handle_move(state: &mut AppState, delta: isize) -> UpdateResult {
    let len = state.preferences.picker_results().len();
    if let Some(modal) = state.preferences.picker.modal_mut() {
        modal.selected = modal
            .selected
            .saturating_add_signed(delta)
            .min(len.saturating_sub(1));
    }
    state.refresh_picker_icon();
    UpdateResult::none()
}

/// Add the highlighted champion for the picker's (role, mode)
pub fn handle_confirm(state: &mut AppState) -> UpdateResult {
    let Some(modal) = state.preferences.picker.modal() else {
        return UpdateResult::none();
    };
    let (role, mode) = (modal.role, modal.mode);

    match state.preferences.picker_selection() {
        Some(champion) => UpdateResult::message(Message::AddChampion {
            role,
            mode,
            id: champion.id,
        }),
        None => UpdateResult::none(),
    }
}
