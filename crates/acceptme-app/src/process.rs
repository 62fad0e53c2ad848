//! Message processing: runs the TEA update loop and dispatches actions

use acceptme_bridge::BridgeClient;
use tokio::sync::mpsc;

use crate::actions::handle_action;
use crate::handler;
use crate::message::Message;
use crate::state::AppState;
use crate::writer::PersistWriter;

/// Process a message through the TEA update function.
///
/// Follow-up messages are processed in the same call; each action is handed
/// to [`handle_action`] before its follow-up runs.
pub fn process_message(
    state: &mut AppState,
    message: Message,
    client: &BridgeClient,
    msg_tx: &mpsc::Sender<Message>,
    writer: &PersistWriter,
) {
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = handler::update(state, m);

        if let Some(action) = result.action {
            handle_action(action, client, msg_tx.clone(), writer);
        }

        msg = result.message;
    }
}
