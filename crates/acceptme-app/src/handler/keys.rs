//! Key event handlers for the views and overlays

use acceptme_core::{AcceptDelay, PickMode, Role, Toggle};

use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppState, View};

/// Convert key events to messages based on what is on screen
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    if state.quit_dialog {
        return handle_key_confirm_dialog(key);
    }
    if state.view == View::Preferences && state.preferences.picker.is_open() {
        return handle_key_picker(key);
    }
    match state.view {
        View::Main => handle_key_main(state, key),
        View::Preferences => handle_key_preferences(state, key),
    }
}

fn handle_key_confirm_dialog(key: InputKey) -> Option<Message> {
    match key {
        // 'q' allows double-tap "qq" as quick quit shortcut
        InputKey::Char('y' | 'Y' | 'q') | InputKey::Enter => Some(Message::ConfirmQuit),
        InputKey::Char('n' | 'N') | InputKey::Esc => Some(Message::CancelQuit),
        InputKey::CharCtrl('c') => Some(Message::Quit),
        _ => None,
    }
}

fn handle_key_main(state: &AppState, key: InputKey) -> Option<Message> {
    if let Some(digit) = key.digit() {
        return Some(Message::SetAcceptDelay(AcceptDelay::clamped(i64::from(digit))));
    }

    match key {
        InputKey::Char('q') | InputKey::Esc => Some(Message::RequestQuit),
        InputKey::CharCtrl('c') => Some(Message::Quit),

        InputKey::Char(' ') | InputKey::Enter => {
            if state.status.can_toggle() {
                Some(Message::ToggleAutoAccept)
            } else {
                None
            }
        }

        InputKey::Left | InputKey::Char('-' | 'h') => Some(Message::DecreaseAcceptDelay),
        InputKey::Right | InputKey::Char('+' | '=' | 'l') => Some(Message::IncreaseAcceptDelay),
        InputKey::Home => Some(Message::SetAcceptDelay(AcceptDelay::default())),
        InputKey::End => Some(Message::SetAcceptDelay(AcceptDelay::clamped(i64::from(
            AcceptDelay::MAX,
        )))),

        InputKey::Char('c') => Some(Message::CheckConnection),
        InputKey::Char('r') => Some(Message::RefreshStatus),
        InputKey::Char('p') | InputKey::Tab => Some(Message::ShowPreferences),

        _ => None,
    }
}

fn handle_key_preferences(state: &AppState, key: InputKey) -> Option<Message> {
    let prefs = &state.preferences;

    if let Some(digit) = key.digit() {
        return (digit as usize)
            .checked_sub(1)
            .and_then(Role::from_index)
            .map(Message::SelectRole);
    }

    match key {
        InputKey::Char('q') | InputKey::Esc => Some(Message::ShowMain),
        InputKey::CharCtrl('c') => Some(Message::Quit),

        InputKey::Tab => Some(Message::NextRole),
        InputKey::BackTab => Some(Message::PrevRole),

        InputKey::Up | InputKey::Char('k') => Some(Message::SelectPrevious),
        InputKey::Down | InputKey::Char('j') => Some(Message::SelectNext),
        InputKey::Left | InputKey::Right => Some(Message::SwitchSection),

        InputKey::Char('a') | InputKey::Enter => Some(Message::OpenPicker {
            role: prefs.active_role,
            mode: prefs.focus,
        }),
        InputKey::Char('p') => Some(Message::OpenPicker {
            role: prefs.active_role,
            mode: PickMode::Pick,
        }),
        InputKey::Char('b') => Some(Message::OpenPicker {
            role: prefs.active_role,
            mode: PickMode::Ban,
        }),
        InputKey::Char('d') | InputKey::Delete | InputKey::Backspace => {
            Some(Message::RemoveSelected)
        }

        InputKey::Char('H') => Some(Message::FlipToggle(Toggle::Hover)),
        InputKey::Char('L') => Some(Message::FlipToggle(Toggle::Lock)),
        InputKey::Char('B') => Some(Message::FlipToggle(Toggle::Ban)),

        _ => None,
    }
}

/// The picker owns the keyboard while open
fn handle_key_picker(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Esc => Some(Message::ClosePicker),
        InputKey::Enter => Some(Message::PickerConfirm),
        InputKey::Up => Some(Message::PickerUp),
        InputKey::Down => Some(Message::PickerDown),
        InputKey::Backspace => Some(Message::PickerBackspace),
        InputKey::CharCtrl('u') => Some(Message::PickerClear),
        InputKey::CharCtrl('c') => Some(Message::Quit),
        InputKey::Char(c) => Some(Message::PickerInput(c)),
        _ => None,
    }
}
