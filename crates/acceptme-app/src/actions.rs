//! Action handlers: UpdateAction dispatch and background task spawning
//!
//! Every backend call runs in its own task and reports back with a
//! [`Message`]. Failures are logged and turned into `*Failed` messages; the
//! state they would have changed is left alone.

use acceptme_bridge::BridgeClient;
use acceptme_core::Error;
use tokio::sync::mpsc;
use tracing::{debug, error, warn};

use crate::handler::UpdateAction;
use crate::message::Message;
use crate::writer::PersistWriter;

/// Execute an action by spawning a background task
pub fn handle_action(
    action: UpdateAction,
    client: &BridgeClient,
    msg_tx: mpsc::Sender<Message>,
    writer: &PersistWriter,
) {
    match action {
        UpdateAction::InitializeMain => {
            spawn_connection_check(client.clone(), msg_tx.clone());
            spawn_load_accept_delay(client.clone(), msg_tx);
        }

        UpdateAction::CheckConnection => spawn_connection_check(client.clone(), msg_tx),

        UpdateAction::RefreshStatus { seq } => {
            let client = client.clone();
            tokio::spawn(async move {
                let msg = match client.status_snapshot().await {
                    Ok(snapshot) => Message::StatusRefreshed { seq, snapshot },
                    Err(e) => Message::StatusRefreshFailed {
                        seq,
                        error: failure("get_status", e),
                    },
                };
                send(&msg_tx, msg).await;
            });
        }

        UpdateAction::StartAutoAccept => spawn_run_toggle(client.clone(), msg_tx, true),
        UpdateAction::StopAutoAccept => spawn_run_toggle(client.clone(), msg_tx, false),

        UpdateAction::LoadPreferencesData => spawn_preferences_load(client.clone(), msg_tx),

        UpdateAction::Persist(request) => {
            let kind = request.kind();
            if let Err(e) = writer.submit(request) {
                error!("Could not queue save of {}: {}", kind, e);
                let _ = msg_tx.try_send(Message::PersistFailed {
                    kind,
                    error: e.to_string(),
                });
            }
        }
    }
}

fn spawn_connection_check(client: BridgeClient, msg_tx: mpsc::Sender<Message>) {
    tokio::spawn(async move {
        let msg = match client.check_league_connection().await {
            Ok(connected) => Message::ConnectionChecked { connected },
            Err(e) => Message::ConnectionCheckFailed {
                error: failure("check_league_connection", e),
            },
        };
        send(&msg_tx, msg).await;
    });
}

fn spawn_load_accept_delay(client: BridgeClient, msg_tx: mpsc::Sender<Message>) {
    tokio::spawn(async move {
        let msg = match client.get_accept_delay().await {
            Ok(delay) => Message::AcceptDelayLoaded { delay },
            Err(e) => Message::AcceptDelayLoadFailed {
                error: failure("get_accept_delay", e),
            },
        };
        send(&msg_tx, msg).await;
    });
}

fn spawn_run_toggle(client: BridgeClient, msg_tx: mpsc::Sender<Message>, start: bool) {
    tokio::spawn(async move {
        let (operation, result) = if start {
            ("start_auto_accept", client.start_auto_accept().await)
        } else {
            ("stop_auto_accept", client.stop_auto_accept().await)
        };
        let msg = match result {
            Ok(()) => Message::AutoAcceptToggled { started: start },
            Err(e) => Message::AutoAcceptToggleFailed {
                error: failure(operation, e),
            },
        };
        send(&msg_tx, msg).await;
    });
}

/// Catalog, preferences and toggles load independently of each other
fn spawn_preferences_load(client: BridgeClient, msg_tx: mpsc::Sender<Message>) {
    {
        let client = client.clone();
        let msg_tx = msg_tx.clone();
        tokio::spawn(async move {
            let msg = match client.get_champions().await {
                Ok(champions) => Message::ChampionsLoaded { champions },
                Err(e) => Message::ChampionsLoadFailed {
                    error: failure("get_champions", e),
                },
            };
            send(&msg_tx, msg).await;
        });
    }

    {
        let client = client.clone();
        let msg_tx = msg_tx.clone();
        tokio::spawn(async move {
            let msg = match client.get_champion_preferences().await {
                Ok(prefs) => Message::PreferencesLoaded { prefs },
                Err(e) => Message::PreferencesLoadFailed {
                    error: failure("get_champion_preferences", e),
                },
            };
            send(&msg_tx, msg).await;
        });
    }

    tokio::spawn(async move {
        let msg = match client.toggle_settings().await {
            Ok(toggles) => Message::TogglesLoaded { toggles },
            Err(e) => Message::TogglesLoadFailed {
                error: failure("get_toggle_settings", e),
            },
        };
        send(&msg_tx, msg).await;
    });
}

/// Log a failed backend call and render it for the reducer
fn failure(operation: &str, e: Error) -> String {
    if e.is_recoverable() {
        warn!("{} failed: {}", operation, e);
    } else {
        error!("{} failed: {:?}", operation, e);
    }
    e.to_string()
}

async fn send(msg_tx: &mpsc::Sender<Message>, msg: Message) {
    if let Err(e) = msg_tx.send(msg).await {
        debug!("Message channel closed: {:?}", e.0);
    }
}
