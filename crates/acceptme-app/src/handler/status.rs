//! Status view handlers: connection, polling and auto-accept control

use acceptme_core::{AcceptDelay, StatusSnapshot};
use tracing::{debug, info, warn};

use crate::message::Message;
use crate::state::AppState;

use super::{PersistRequest, UpdateAction, UpdateResult};

pub fn handle_connection_checked(state: &mut AppState, connected: bool) -> UpdateResult {
    if state.status.connected != connected {
        info!(
            "League client {}",
            if connected { "connected" } else { "disconnected" }
        );
    }
    state.status.connected = connected;
    UpdateResult::none()
}

/// A failed check counts as disconnected
pub fn handle_connection_check_failed(state: &mut AppState, error: &str) -> UpdateResult {
    warn!("Connection check failed: {}", error);
    state.status.connected = false;
    UpdateResult::none()
}

/// Issue a sequenced status refresh
pub fn handle_refresh_status(state: &mut AppState) -> UpdateResult {
    let seq = state.status.issue_seq();
    UpdateResult::action(UpdateAction::RefreshStatus { seq })
}

pub fn handle_status_refreshed(
    state: &mut AppState,
    seq: u64,
    snapshot: StatusSnapshot,
) -> UpdateResult {
    if !state.status.apply_snapshot(seq, snapshot) {
        debug!(
            "Dropping stale status #{} (showing #{})",
            seq,
            state.status.applied_seq()
        );
    }
    UpdateResult::none()
}

/// Stop if running, otherwise start
pub fn handle_toggle_auto_accept(state: &mut AppState) -> UpdateResult {
    if !state.status.can_toggle() {
        debug!("Auto-accept toggle ignored: not connected");
        return UpdateResult::none();
    }
    if state.status.toggle_pending {
        debug!("Auto-accept toggle ignored: request in flight");
        return UpdateResult::none();
    }

    state.status.toggle_pending = true;
    if state.status.running {
        UpdateResult::action(UpdateAction::StopAutoAccept)
    } else {
        UpdateResult::action(UpdateAction::StartAutoAccept)
    }
}

/// Refresh right away and re-check the connection
pub fn handle_auto_accept_toggled(state: &mut AppState, started: bool) -> UpdateResult {
    info!("Auto-accept {}", if started { "started" } else { "stopped" });
    state.status.toggle_pending = false;
    UpdateResult::message(Message::RefreshStatus).with_action(UpdateAction::CheckConnection)
}

pub fn handle_auto_accept_toggle_failed(state: &mut AppState, error: &str) -> UpdateResult {
    warn!("Failed to toggle auto-accept: {}", error);
    state.status.toggle_pending = false;
    UpdateResult::none()
}

/// Set the delay locally and persist it when it changed
pub fn handle_set_accept_delay(state: &mut AppState, delay: AcceptDelay) -> UpdateResult {
    if state.status.accept_delay == delay {
        return UpdateResult::none();
    }
    state.status.accept_delay = delay;
    UpdateResult::action(UpdateAction::Persist(PersistRequest::AcceptDelay(delay)))
}
