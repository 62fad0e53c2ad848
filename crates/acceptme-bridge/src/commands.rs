//! Backend operations, typed replies and request tracking
//!
//! This module provides:
//! - The closed set of operations the backend understands
//! - Reply validation at the boundary
//! - Request ID tracking for matching responses
//! - Timeout handling for stalled requests

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use serde_json::{json, Value};
use tokio::sync::{mpsc, oneshot, RwLock};

use acceptme_core::prelude::*;
use acceptme_core::{AcceptDelay, ChampionPreferences, RawChampion, Toggle};

/// Default time to wait for any backend reply
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Global request ID counter
static REQUEST_ID_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Generate a unique request ID
pub fn next_request_id() -> u64 {
    REQUEST_ID_COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// Every operation the backend exposes
#[derive(Debug, Clone, PartialEq)]
pub enum BackendCommand {
    CheckLeagueConnection,
    GetStatus,
    IsRunning,
    IsMatchFound,
    StartAutoAccept,
    StopAutoAccept,
    GetAcceptDelay,
    SetAcceptDelay { delay: AcceptDelay },
    GetChampions,
    GetChampionPreferences,
    SetChampionPreferences { prefs: ChampionPreferences },
    GetToggle(Toggle),
    SetToggle { toggle: Toggle, enabled: bool },
}

/// Shape a reply must have for a given command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplyKind {
    Bool,
    Text,
    Unit,
    Delay,
    Champions,
    Preferences,
}

impl BackendCommand {
    /// Backend method name
    pub fn method(&self) -> &'static str {
        match self {
            BackendCommand::CheckLeagueConnection => "check_league_connection",
            BackendCommand::GetStatus => "get_status",
            BackendCommand::IsRunning => "is_running",
            BackendCommand::IsMatchFound => "is_match_found",
            BackendCommand::StartAutoAccept => "start_auto_accept",
            BackendCommand::StopAutoAccept => "stop_auto_accept",
            BackendCommand::GetAcceptDelay => "get_accept_delay",
            BackendCommand::SetAcceptDelay { .. } => "set_accept_delay",
            BackendCommand::GetChampions => "get_champions",
            BackendCommand::GetChampionPreferences => "get_champion_preferences",
            BackendCommand::SetChampionPreferences { .. } => "set_champion_preferences",
            BackendCommand::GetToggle(toggle) => match toggle {
                Toggle::Hover => "get_auto_hover",
                Toggle::Lock => "get_auto_select",
                Toggle::Ban => "get_auto_ban",
            },
            BackendCommand::SetToggle { toggle, .. } => match toggle {
                Toggle::Hover => "set_auto_hover",
                Toggle::Lock => "set_auto_select",
                Toggle::Ban => "set_auto_ban",
            },
        }
    }

    /// Named parameters sent with the request
    pub fn params(&self) -> Value {
        match self {
            BackendCommand::SetAcceptDelay { delay } => json!({ "delaySeconds": delay.seconds() }),
            BackendCommand::SetChampionPreferences { prefs } => json!({ "prefs": prefs }),
            BackendCommand::SetToggle { enabled, .. } => json!({ "enabled": enabled }),
            _ => json!({}),
        }
    }

    pub fn reply_kind(&self) -> ReplyKind {
        match self {
            BackendCommand::CheckLeagueConnection
            | BackendCommand::IsRunning
            | BackendCommand::IsMatchFound
            | BackendCommand::GetToggle(_) => ReplyKind::Bool,
            BackendCommand::GetStatus => ReplyKind::Text,
            BackendCommand::StartAutoAccept
            | BackendCommand::StopAutoAccept
            | BackendCommand::SetAcceptDelay { .. }
            | BackendCommand::SetChampionPreferences { .. }
            | BackendCommand::SetToggle { .. } => ReplyKind::Unit,
            BackendCommand::GetAcceptDelay => ReplyKind::Delay,
            BackendCommand::GetChampions => ReplyKind::Champions,
            BackendCommand::GetChampionPreferences => ReplyKind::Preferences,
        }
    }

    /// Build the JSON-RPC request line
    pub fn build(&self, id: u64) -> String {
        json!({
            "id": id,
            "method": self.method(),
            "params": self.params(),
        })
        .to_string()
    }

    /// Validate a raw result against the shape this command expects
    pub fn decode(&self, result: Value) -> Result<BackendReply> {
        let mismatch = |expected: &str, got: &Value| {
            Error::protocol(format!(
                "'{}' expected {}, got {}",
                self.method(),
                expected,
                got
            ))
        };

        match self.reply_kind() {
            ReplyKind::Bool => result
                .as_bool()
                .map(BackendReply::Bool)
                .ok_or_else(|| mismatch("a boolean", &result)),
            ReplyKind::Text => result
                .as_str()
                .map(|s| BackendReply::Text(s.to_string()))
                .ok_or_else(|| mismatch("a string", &result)),
            ReplyKind::Unit => Ok(BackendReply::Unit),
            ReplyKind::Delay => {
                let seconds = result
                    .as_i64()
                    .ok_or_else(|| mismatch("an integer", &result))?;
                let delay = AcceptDelay::clamped(seconds);
                if i64::from(delay) != seconds {
                    warn!("Backend reported accept delay {}s, clamped to {}", seconds, delay);
                }
                Ok(BackendReply::Delay(delay))
            }
            ReplyKind::Champions => serde_json::from_value::<Vec<RawChampion>>(result)
                .map(BackendReply::Champions)
                .map_err(|e| Error::protocol(format!("'{}': {}", self.method(), e))),
            ReplyKind::Preferences => serde_json::from_value::<ChampionPreferences>(result)
                .map(BackendReply::Preferences)
                .map_err(|e| Error::protocol(format!("'{}': {}", self.method(), e))),
        }
    }
}

/// Validated reply to a [`BackendCommand`]
#[derive(Debug, Clone, PartialEq)]
pub enum BackendReply {
    Bool(bool),
    Text(String),
    Unit,
    Delay(AcceptDelay),
    Champions(Vec<RawChampion>),
    Preferences(ChampionPreferences),
}

impl BackendReply {
    fn kind(&self) -> ReplyKind {
        match self {
            BackendReply::Bool(_) => ReplyKind::Bool,
            BackendReply::Text(_) => ReplyKind::Text,
            BackendReply::Unit => ReplyKind::Unit,
            BackendReply::Delay(_) => ReplyKind::Delay,
            BackendReply::Champions(_) => ReplyKind::Champions,
            BackendReply::Preferences(_) => ReplyKind::Preferences,
        }
    }

    fn unexpected(&self, wanted: ReplyKind) -> Error {
        Error::protocol(format!(
            "expected {:?} reply, got {:?}",
            wanted,
            self.kind()
        ))
    }

    pub fn into_bool(self) -> Result<bool> {
        match self {
            BackendReply::Bool(value) => Ok(value),
            other => Err(other.unexpected(ReplyKind::Bool)),
        }
    }

    pub fn into_text(self) -> Result<String> {
        match self {
            BackendReply::Text(value) => Ok(value),
            other => Err(other.unexpected(ReplyKind::Text)),
        }
    }

    pub fn into_unit(self) -> Result<()> {
        match self {
            BackendReply::Unit => Ok(()),
            other => Err(other.unexpected(ReplyKind::Unit)),
        }
    }

    pub fn into_delay(self) -> Result<AcceptDelay> {
        match self {
            BackendReply::Delay(value) => Ok(value),
            other => Err(other.unexpected(ReplyKind::Delay)),
        }
    }

    pub fn into_champions(self) -> Result<Vec<RawChampion>> {
        match self {
            BackendReply::Champions(value) => Ok(value),
            other => Err(other.unexpected(ReplyKind::Champions)),
        }
    }

    pub fn into_preferences(self) -> Result<ChampionPreferences> {
        match self {
            BackendReply::Preferences(value) => Ok(value),
            other => Err(other.unexpected(ReplyKind::Preferences)),
        }
    }
}

/// A pending request awaiting response
struct PendingRequest {
    /// Channel to send the response
    response_tx: oneshot::Sender<CommandResponse>,
    /// When this request was created
    created_at: Instant,
}

/// Raw response from the backend, before validation
#[derive(Debug, Clone)]
pub struct CommandResponse {
    pub id: u64,
    pub success: bool,
    pub result: Option<Value>,
    pub error: Option<String>,
}

impl CommandResponse {
    pub fn from_backend_response(id: u64, result: Option<Value>, error: Option<Value>) -> Self {
        Self {
            id,
            success: error.is_none(),
            result,
            error: error.map(|e| match e {
                Value::String(s) => s,
                other => other.to_string(),
            }),
        }
    }

    /// Create an error response
    pub fn error(id: u64, message: impl Into<String>) -> Self {
        Self {
            id,
            success: false,
            result: None,
            error: Some(message.into()),
        }
    }
}

/// Tracks pending requests and matches responses
#[derive(Default)]
pub struct RequestTracker {
    /// Map of request ID to pending request
    pending: Arc<RwLock<HashMap<u64, PendingRequest>>>,
}

impl RequestTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new pending request
    /// Returns (request_id, receiver for response)
    pub async fn register(&self) -> (u64, oneshot::Receiver<CommandResponse>) {
        let id = next_request_id();
        let (tx, rx) = oneshot::channel();

        let pending = PendingRequest {
            response_tx: tx,
            created_at: Instant::now(),
        };

        self.pending.write().await.insert(id, pending);

        (id, rx)
    }

    /// Handle an incoming response from the backend
    /// Returns true if the response was matched to a pending request
    pub async fn handle_response(
        &self,
        id: u64,
        result: Option<Value>,
        error: Option<Value>,
    ) -> bool {
        if let Some(pending) = self.pending.write().await.remove(&id) {
            let response = CommandResponse::from_backend_response(id, result, error);
            let _ = pending.response_tx.send(response);
            true
        } else {
            false
        }
    }

    /// Fail all pending requests (e.g., when the backend exits)
    pub async fn cancel_all(&self, reason: &str) {
        let mut pending = self.pending.write().await;
        for (id, req) in pending.drain() {
            let _ = req.response_tx.send(CommandResponse::error(id, reason));
        }
    }

    /// Remove stale requests that have timed out
    pub async fn cleanup_stale(&self, timeout: Duration) -> Vec<u64> {
        let mut pending = self.pending.write().await;
        let now = Instant::now();

        let stale: Vec<u64> = pending
            .iter()
            .filter(|(_, req)| now.duration_since(req.created_at) >= timeout)
            .map(|(id, _)| *id)
            .collect();

        for id in &stale {
            if let Some(req) = pending.remove(id) {
                let _ = req
                    .response_tx
                    .send(CommandResponse::error(*id, "Request timed out"));
            }
        }

        stale
    }

    /// Get the number of pending requests
    pub async fn pending_count(&self) -> usize {
        self.pending.read().await.len()
    }
}

/// Sends commands to the backend process with request tracking
#[derive(Clone)]
pub struct CommandSender {
    /// Channel to send raw JSON to the backend's stdin
    stdin_tx: mpsc::Sender<String>,
    /// Request tracker for response matching
    tracker: Arc<RequestTracker>,
    /// How long to wait for each reply
    timeout: Duration,
}

impl std::fmt::Debug for CommandSender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommandSender")
            .field("stdin_tx", &"<channel>")
            .field("tracker", &"<tracker>")
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl CommandSender {
    pub fn new(
        stdin_tx: mpsc::Sender<String>,
        tracker: Arc<RequestTracker>,
        timeout: Duration,
    ) -> Self {
        Self {
            stdin_tx,
            tracker,
            timeout,
        }
    }

    /// Send a command and wait for its validated reply
    pub async fn send(&self, command: &BackendCommand) -> Result<BackendReply> {
        let (id, response_rx) = self.tracker.register().await;
        let line = command.build(id);

        debug!("Sending request #{}: {}", id, command.method());

        self.stdin_tx
            .send(line)
            .await
            .map_err(|_| Error::channel_send("backend stdin"))?;

        let response = match tokio::time::timeout(self.timeout, response_rx).await {
            Ok(Ok(response)) => response,
            Ok(Err(_)) => return Err(Error::backend("Request cancelled")),
            Err(_) => {
                self.tracker.cleanup_stale(self.timeout).await;
                return Err(Error::timeout(
                    command.method(),
                    self.timeout.as_millis() as u64,
                ));
            }
        };

        debug!("Request #{} completed: success={}", id, response.success);

        if !response.success {
            let message = response
                .error
                .unwrap_or_else(|| "Unknown error".to_string());
            return Err(Error::remote(command.method(), message));
        }

        command.decode(response.result.unwrap_or(Value::Null))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use acceptme_core::{PickMode, Role};

    #[test]
    fn test_request_id_uniqueness() {
        let id1 = next_request_id();
        let id2 = next_request_id();
        assert!(id2 > id1);
    }

    #[test]
    fn test_method_names() {
        assert_eq!(
            BackendCommand::CheckLeagueConnection.method(),
            "check_league_connection"
        );
        assert_eq!(BackendCommand::GetToggle(Toggle::Lock).method(), "get_auto_select");
        assert_eq!(
            BackendCommand::SetToggle {
                toggle: Toggle::Ban,
                enabled: true
            }
            .method(),
            "set_auto_ban"
        );
    }

    #[test]
    fn test_build_set_accept_delay() {
        let cmd = BackendCommand::SetAcceptDelay {
            delay: AcceptDelay::clamped(4),
        };
        let parsed: Value = serde_json::from_str(&cmd.build(7)).unwrap();
        assert_eq!(parsed["id"], 7);
        assert_eq!(parsed["method"], "set_accept_delay");
        assert_eq!(parsed["params"]["delaySeconds"], 4);
    }

    #[test]
    fn test_build_set_preferences_sends_full_structure() {
        let mut prefs = ChampionPreferences::default();
        prefs.add(Role::Mid, PickMode::Ban, 103);
        let cmd = BackendCommand::SetChampionPreferences { prefs };
        let parsed: Value = serde_json::from_str(&cmd.build(1)).unwrap();
        let sent = &parsed["params"]["prefs"];
        assert_eq!(sent["mid"]["auto_ban_champions"], json!([103]));
        for role in Role::ALL {
            assert!(sent[role.key()].is_object());
        }
    }

    #[test]
    fn test_build_getter_has_empty_params() {
        let parsed: Value =
            serde_json::from_str(&BackendCommand::GetStatus.build(3)).unwrap();
        assert_eq!(parsed["params"], json!({}));
    }

    #[test]
    fn test_decode_validates_shape() {
        assert_eq!(
            BackendCommand::IsRunning.decode(json!(true)).unwrap(),
            BackendReply::Bool(true)
        );
        assert!(matches!(
            BackendCommand::IsRunning.decode(json!("yes")),
            Err(Error::Protocol { .. })
        ));
        assert!(matches!(
            BackendCommand::GetChampions.decode(json!({"id": 1})),
            Err(Error::Protocol { .. })
        ));
        assert_eq!(
            BackendCommand::StartAutoAccept.decode(Value::Null).unwrap(),
            BackendReply::Unit
        );
    }

    #[test]
    fn test_decode_clamps_delay() {
        let reply = BackendCommand::GetAcceptDelay.decode(json!(25)).unwrap();
        assert_eq!(reply, BackendReply::Delay(AcceptDelay::clamped(10)));
    }

    #[test]
    fn test_reply_accessors_reject_wrong_kind() {
        assert!(BackendReply::Unit.into_bool().is_err());
        assert_eq!(BackendReply::Text("ok".into()).into_text().unwrap(), "ok");
    }

    #[tokio::test]
    async fn test_request_tracker_handle_response() {
        let tracker = RequestTracker::new();
        let (id, rx) = tracker.register().await;

        assert!(tracker.handle_response(id, Some(json!(true)), None).await);
        let response = rx.await.unwrap();
        assert!(response.success);
        assert_eq!(response.result, Some(json!(true)));
        assert!(!tracker.handle_response(id, None, None).await);
    }

    #[tokio::test]
    async fn test_request_tracker_cancel_all() {
        let tracker = RequestTracker::new();
        let (_id1, rx1) = tracker.register().await;
        let (_id2, rx2) = tracker.register().await;

        tracker.cancel_all("Backend exited").await;

        assert_eq!(tracker.pending_count().await, 0);
        assert_eq!(rx1.await.unwrap().error.as_deref(), Some("Backend exited"));
        assert!(!rx2.await.unwrap().success);
    }

    #[tokio::test]
    async fn test_request_tracker_cleanup_stale() {
        let tracker = RequestTracker::new();
        let (_id, _rx) = tracker.register().await;
        tokio::time::sleep(Duration::from_millis(20)).await;

        let stale = tracker.cleanup_stale(Duration::from_millis(10)).await;
        assert_eq!(stale.len(), 1);
        assert_eq!(tracker.pending_count().await, 0);
    }

    #[tokio::test]
    async fn test_sender_round_trip() {
        let (stdin_tx, mut stdin_rx) = mpsc::channel::<String>(4);
        let tracker = Arc::new(RequestTracker::new());
        let sender = CommandSender::new(stdin_tx, tracker.clone(), Duration::from_secs(1));

        let responder = tokio::spawn(async move {
            let line = stdin_rx.recv().await.unwrap();
            let request: Value = serde_json::from_str(&line).unwrap();
            let id = request["id"].as_u64().unwrap();
            tracker
                .handle_response(id, Some(json!("Waiting for match...")), None)
                .await;
        });

        let reply = sender.send(&BackendCommand::GetStatus).await.unwrap();
        assert_eq!(reply, BackendReply::Text("Waiting for match...".into()));
        responder.await.unwrap();
    }

    #[tokio::test]
    async fn test_sender_maps_remote_error() {
        let (stdin_tx, mut stdin_rx) = mpsc::channel::<String>(4);
        let tracker = Arc::new(RequestTracker::new());
        let sender = CommandSender::new(stdin_tx, tracker.clone(), Duration::from_secs(1));

        tokio::spawn(async move {
            let line = stdin_rx.recv().await.unwrap();
            let request: Value = serde_json::from_str(&line).unwrap();
            let id = request["id"].as_u64().unwrap();
            tracker
                .handle_response(id, None, Some(json!("League client not running")))
                .await;
        });

        let err = sender.send(&BackendCommand::StartAutoAccept).await.unwrap_err();
        assert!(matches!(
            err,
            Error::Remote { ref method, ref message }
                if method == "start_auto_accept" && message == "League client not running"
        ));
    }

    #[tokio::test]
    async fn test_sender_times_out() {
        let (stdin_tx, _stdin_rx) = mpsc::channel::<String>(4);
        let tracker = Arc::new(RequestTracker::new());
        let sender = CommandSender::new(stdin_tx, tracker.clone(), Duration::from_millis(20));

        let err = sender.send(&BackendCommand::IsRunning).await.unwrap_err();
        assert!(matches!(err, Error::Timeout { .. }));
        assert_eq!(tracker.pending_count().await, 0);
    }
}
