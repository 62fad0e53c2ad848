//! Ordered persistence of setting changes
//!
//! Every save goes through one task that applies requests in the order they
//! were issued, so a later write can never be overtaken by an earlier one.

use acceptme_bridge::BridgeClient;
use acceptme_core::prelude::*;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::handler::PersistRequest;
use crate::message::Message;

/// Handle for queueing writes
#[derive(Debug, Clone)]
pub struct PersistWriter {
    tx: mpsc::UnboundedSender<PersistRequest>,
}

impl PersistWriter {
    /// Spawn the writer task. It exits once every handle is dropped and the
    /// queue is drained.
    pub fn spawn(client: BridgeClient, msg_tx: mpsc::Sender<Message>) -> (Self, JoinHandle<()>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let handle = tokio::spawn(run_writer(client, rx, msg_tx));
        (Self { tx }, handle)
    }

    /// Queue a write
    pub fn submit(&self, request: PersistRequest) -> Result<()> {
        self.tx
            .send(request)
            .map_err(|e| Error::channel_send(format!("persist writer stopped: {:?}", e.0.kind())))
    }
}

async fn run_writer(
    client: BridgeClient,
    mut rx: mpsc::UnboundedReceiver<PersistRequest>,
    msg_tx: mpsc::Sender<Message>,
) {
    debug!("Persist writer started");

    while let Some(request) = rx.recv().await {
        let kind = request.kind();
        let result = apply(&client, request).await;

        let msg = match result {
            Ok(()) => Message::PersistSucceeded { kind },
            Err(e) => Message::PersistFailed {
                kind,
                error: e.to_string(),
            },
        };
        if msg_tx.send(msg).await.is_err() {
            debug!("Message channel closed, persist result for {} dropped", kind);
        }
    }

    debug!("Persist writer stopped");
}

async fn apply(client: &BridgeClient, request: PersistRequest) -> Result<()> {
    match request {
        PersistRequest::AcceptDelay(delay) => client.set_accept_delay(delay).await,
        PersistRequest::Preferences(prefs) => client.set_champion_preferences(prefs).await,
        PersistRequest::Toggle { toggle, enabled } => client.set_toggle(toggle, enabled).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use acceptme_bridge::{BackendHandle, MemoryBackend};
    use acceptme_core::{AcceptDelay, ChampionPreferences, Toggle};
    use std::sync::Arc;

    fn memory_client() -> (BridgeClient, Arc<MemoryBackend>) {
        let backend = Arc::new(MemoryBackend::new());
        let client = BridgeClient::new(BackendHandle::Memory(backend.clone()));
        (client, backend)
    }

    #[tokio::test]
    async fn test_writes_apply_in_issue_order() {
        let (client, backend) = memory_client();
        let (msg_tx, mut msg_rx) = mpsc::channel(16);
        let (writer, handle) = PersistWriter::spawn(client, msg_tx);

        for seconds in [3, 7, 5] {
            writer
                .submit(PersistRequest::AcceptDelay(AcceptDelay::clamped(seconds)))
                .unwrap();
        }
        drop(writer);
        handle.await.unwrap();

        assert_eq!(backend.state().delay.seconds(), 5);
        assert_eq!(backend.calls_to("set_accept_delay").len(), 3);

        let mut succeeded = 0;
        while let Ok(msg) = msg_rx.try_recv() {
            assert!(matches!(
                msg,
                Message::PersistSucceeded {
                    kind: crate::message::PersistKind::AcceptDelay
                }
            ));
            succeeded += 1;
        }
        assert_eq!(succeeded, 3);
    }

    #[tokio::test]
    async fn test_toggle_round_trip_order() {
        let (client, backend) = memory_client();
        let (msg_tx, _msg_rx) = mpsc::channel(16);
        let (writer, handle) = PersistWriter::spawn(client, msg_tx);

        writer
            .submit(PersistRequest::Toggle {
                toggle: Toggle::Ban,
                enabled: true,
            })
            .unwrap();
        writer
            .submit(PersistRequest::Toggle {
                toggle: Toggle::Ban,
                enabled: false,
            })
            .unwrap();
        drop(writer);
        handle.await.unwrap();

        assert!(!backend.state().toggles.auto_ban);
        assert_eq!(backend.calls_to("set_auto_ban").len(), 2);
    }

    #[tokio::test]
    async fn test_failure_is_reported() {
        let (client, backend) = memory_client();
        backend.fail("set_champion_preferences");
        let (msg_tx, mut msg_rx) = mpsc::channel(16);
        let (writer, handle) = PersistWriter::spawn(client, msg_tx);

        writer
            .submit(PersistRequest::Preferences(ChampionPreferences::default()))
            .unwrap();
        drop(writer);
        handle.await.unwrap();

        match msg_rx.try_recv() {
            Ok(Message::PersistFailed { kind, .. }) => {
                assert_eq!(kind, crate::message::PersistKind::Preferences)
            }
            other => panic!("expected PersistFailed, got {:?}", other),
        }
    }
}
