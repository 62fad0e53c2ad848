//! Engine - orchestration shared by every frontend
//!
//! The Engine owns the TEA state, the message channel, the shutdown signal,
//! the bridge client and the background tasks (status poller, persist
//! writer, signal handler). A frontend feeds it input messages, drains the
//! channel and renders `engine.state`.

use std::time::Duration;

use acceptme_bridge::BridgeClient;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::actions::handle_action;
use crate::config::Settings;
use crate::handler::UpdateAction;
use crate::message::Message;
use crate::poller::spawn_status_poller;
use crate::process;
use crate::signals::spawn_signal_handler;
use crate::state::AppState;
use crate::writer::PersistWriter;

/// How long shutdown waits for each background task
const TASK_SHUTDOWN_TIMEOUT: Duration = Duration::from_secs(2);

/// Orchestration engine for AcceptMe.
pub struct Engine {
    /// TEA application state (the Model)
    pub state: AppState,

    /// Sender half of the unified message channel.
    /// Clone this to give to input sources.
    pub msg_tx: mpsc::Sender<Message>,

    /// Receiver half of the unified message channel.
    /// The frontend event loop drains messages from here.
    pub msg_rx: mpsc::Receiver<Message>,

    /// Sender for the shutdown signal. Send `true` to initiate shutdown.
    pub shutdown_tx: watch::Sender<bool>,

    /// Receiver for the shutdown signal. Clone for background tasks.
    pub shutdown_rx: watch::Receiver<bool>,

    /// Loaded settings
    pub settings: Settings,

    client: BridgeClient,

    /// `None` once shutdown has begun
    writer: Option<PersistWriter>,

    tasks: Vec<(&'static str, JoinHandle<()>)>,

    started: bool,
}

impl Engine {
    /// Create a new Engine around a connected backend.
    ///
    /// Must be called from within a tokio runtime:
    /// - Creates AppState from settings
    /// - Creates message channel (capacity 256)
    /// - Creates shutdown signal channel
    /// - Spawns the persist writer and the signal handler
    pub fn new(settings: Settings, client: BridgeClient) -> Self {
        let mut state = AppState::with_settings(&settings);
        state.backend_name = client.backend_name().to_string();

        let (msg_tx, msg_rx) = mpsc::channel::<Message>(256);
        let (shutdown_tx, shutdown_rx) = watch::channel(false);

        let (writer, writer_task) = PersistWriter::spawn(client.clone(), msg_tx.clone());
        let signal_task = spawn_signal_handler(msg_tx.clone(), shutdown_rx.clone());

        Self {
            state,
            msg_tx,
            msg_rx,
            shutdown_tx,
            shutdown_rx,
            settings,
            client,
            writer: Some(writer),
            tasks: vec![("persist writer", writer_task), ("signal handler", signal_task)],
            started: false,
        }
    }

    /// Mount the main view: check the connection, load the saved delay,
    /// refresh status once and start the repeating refresh.
    pub fn start(&mut self) {
        if self.started {
            return;
        }
        self.started = true;

        info!(
            "Starting with {} backend, polling every {}ms",
            self.client.backend_name(),
            self.settings.status.poll_interval().as_millis()
        );

        if let Some(writer) = &self.writer {
            handle_action(
                UpdateAction::InitializeMain,
                &self.client,
                self.msg_tx.clone(),
                writer,
            );
        }
        self.process_message(Message::RefreshStatus);

        let poller = spawn_status_poller(
            self.settings.status.poll_interval(),
            self.msg_tx.clone(),
            self.shutdown_rx.clone(),
        );
        self.tasks.push(("status poller", poller));
    }

    /// Process a single message through the TEA update cycle.
    pub fn process_message(&mut self, msg: Message) {
        let Some(writer) = &self.writer else {
            debug!("Engine shutting down, dropping {:?}", msg);
            return;
        };
        process::process_message(&mut self.state, msg, &self.client, &self.msg_tx, writer);
    }

    /// Drain and process all pending messages from the channel.
    ///
    /// Returns the number of messages processed.
    pub fn drain_pending_messages(&mut self) -> usize {
        let mut count = 0;
        while let Ok(msg) = self.msg_rx.try_recv() {
            self.process_message(msg);
            count += 1;
        }
        count
    }

    /// Check if the application should quit.
    pub fn should_quit(&self) -> bool {
        self.state.should_quit()
    }

    /// Stop the poller, flush queued saves and stop the backend.
    pub async fn shutdown(&mut self) {
        info!("Shutting down");

        let _ = self.shutdown_tx.send(true);

        // Dropping the last writer handle lets the writer drain and exit
        self.writer = None;

        for (name, handle) in self.tasks.drain(..) {
            match tokio::time::timeout(TASK_SHUTDOWN_TIMEOUT, handle).await {
                Ok(Ok(())) => debug!("{} stopped", name),
                Ok(Err(e)) => warn!("{} panicked: {}", name, e),
                Err(_) => warn!("{} did not stop in time", name),
            }
        }

        self.client.handle().shutdown().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use acceptme_bridge::{BackendHandle, MemoryBackend};
    use acceptme_core::AcceptDelay;
    use std::sync::Arc;

    fn engine_with(backend: Arc<MemoryBackend>) -> Engine {
        let client = BridgeClient::new(BackendHandle::Memory(backend));
        Engine::new(Settings::default(), client)
    }

    /// Receive and process messages until `done` holds
    async fn pump_until(engine: &mut Engine, done: impl Fn(&AppState) -> bool) {
        let deadline = tokio::time::Instant::now() + Duration::from_secs(2);
        while !done(&engine.state) {
            let msg = tokio::time::timeout_at(deadline, engine.msg_rx.recv())
                .await
                .expect("condition not reached in time")
                .expect("channel closed");
            engine.process_message(msg);
        }
    }

    #[tokio::test]
    async fn test_new_engine_names_backend() {
        let engine = engine_with(Arc::new(MemoryBackend::new()));
        assert_eq!(engine.state.backend_name, "offline");
        assert!(!engine.should_quit());
    }

    #[tokio::test]
    async fn test_start_checks_connection_and_loads_status() {
        let backend = Arc::new(MemoryBackend::new());
        backend.update_state(|s| s.delay = AcceptDelay::clamped(2));
        let mut engine = engine_with(backend.clone());

        engine.start();
        pump_until(&mut engine, |s| {
            s.status.connected && s.status.applied_seq() > 0 && s.status.accept_delay.seconds() == 2
        })
        .await;

        assert_eq!(engine.state.status.status, "Stopped");
        assert_eq!(backend.calls_to("check_league_connection").len(), 1);
        engine.shutdown().await;
    }

    #[tokio::test]
    async fn test_toggle_runs_and_refreshes() {
        let backend = Arc::new(MemoryBackend::new());
        let mut engine = engine_with(backend.clone());
        engine.start();
        pump_until(&mut engine, |s| s.status.connected).await;

        engine.process_message(Message::ToggleAutoAccept);
        pump_until(&mut engine, |s| s.status.running).await;

        assert_eq!(engine.state.status.status, "Starting auto-accept...");
        assert!(backend.state().running);
        engine.shutdown().await;
    }

    #[tokio::test]
    async fn test_shutdown_flushes_queued_saves() {
        let backend = Arc::new(MemoryBackend::new());
        let mut engine = engine_with(backend.clone());

        engine.process_message(Message::SetAcceptDelay(AcceptDelay::clamped(9)));
        engine.shutdown().await;

        assert_eq!(backend.state().delay.seconds(), 9);
        assert!(*engine.shutdown_rx.borrow());
    }

    #[tokio::test]
    async fn test_messages_after_shutdown_are_dropped() {
        let backend = Arc::new(MemoryBackend::new());
        let mut engine = engine_with(backend.clone());
        engine.shutdown().await;

        engine.process_message(Message::SetAcceptDelay(AcceptDelay::clamped(4)));

        assert_eq!(engine.state.status.accept_delay.seconds(), 0);
        assert!(backend.calls_to("set_accept_delay").is_empty());
    }
}
