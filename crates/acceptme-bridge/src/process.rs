//! Backend process management
//!
//! The backend is a child process that reads one JSON request per line on
//! stdin and answers with one JSON object per line on stdout.

use std::path::PathBuf;
use std::process::Stdio;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::process::{Child, Command};
use tokio::sync::{mpsc, oneshot};

use acceptme_core::prelude::*;

use crate::backend::Backend;
use crate::commands::{BackendCommand, BackendReply, CommandSender, RequestTracker};
use crate::protocol::{BackendLog, BackendLogLevel, RawMessage};

/// How to launch the backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessConfig {
    pub command: String,
    pub args: Vec<String>,
    pub request_timeout: Duration,
}

impl ProcessConfig {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            args: Vec::new(),
            request_timeout: crate::commands::DEFAULT_REQUEST_TIMEOUT,
        }
    }

    pub fn with_args(mut self, args: Vec<String>) -> Self {
        self.args = args;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }
}

/// Locate the backend executable on PATH (or accept an explicit path)
pub fn resolve_executable(command: &str) -> Result<PathBuf> {
    which::which(command).map_err(|e| Error::BackendSpawn {
        reason: format!("'{}' not found: {}", command, e),
    })
}

/// A running backend process speaking the line protocol.
///
/// The `Child` handle lives in a dedicated wait task. Dropping the backend (or
/// calling [`ProcessBackend::shutdown`]) asks that task to kill the process.
pub struct ProcessBackend {
    sender: CommandSender,
    pid: Option<u32>,
    kill_tx: Mutex<Option<oneshot::Sender<()>>>,
    exited: Arc<AtomicBool>,
}

impl ProcessBackend {
    /// Spawn the backend and start its I/O tasks
    pub fn spawn(config: &ProcessConfig) -> Result<Self> {
        let executable = resolve_executable(&config.command)?;

        info!(
            "Spawning backend: {} {}",
            executable.display(),
            config.args.join(" ")
        );

        let mut child = Command::new(&executable)
            .args(&config.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| Error::BackendSpawn {
                reason: e.to_string(),
            })?;

        let pid = child.id();
        info!("Backend process started with PID: {:?}", pid);

        let missing = |stream: &str| Error::BackendSpawn {
            reason: format!("{} was not captured", stream),
        };
        let stdin = child.stdin.take().ok_or_else(|| missing("stdin"))?;
        let stdout = child.stdout.take().ok_or_else(|| missing("stdout"))?;
        let stderr = child.stderr.take().ok_or_else(|| missing("stderr"))?;

        let tracker = Arc::new(RequestTracker::new());
        let (stdin_tx, stdin_rx) = mpsc::channel::<String>(32);

        tokio::spawn(Self::stdin_writer(stdin, stdin_rx));
        tokio::spawn(Self::stdout_reader(stdout, Arc::clone(&tracker)));
        tokio::spawn(Self::stderr_reader(stderr));

        let exited = Arc::new(AtomicBool::new(false));
        let (kill_tx, kill_rx) = oneshot::channel::<()>();
        tokio::spawn(Self::wait_for_exit(
            child,
            kill_rx,
            Arc::clone(&tracker),
            Arc::clone(&exited),
        ));

        Ok(Self {
            sender: CommandSender::new(stdin_tx, tracker, config.request_timeout),
            pid,
            kill_tx: Mutex::new(Some(kill_tx)),
            exited,
        })
    }

    /// Background task: owns `child`, waits for it to exit, fails pending requests.
    async fn wait_for_exit(
        mut child: Child,
        kill_rx: oneshot::Receiver<()>,
        tracker: Arc<RequestTracker>,
        exited: Arc<AtomicBool>,
    ) {
        let code: Option<i32> = tokio::select! {
            result = child.wait() => {
                match result {
                    Ok(status) => {
                        warn!("Backend process exited with status: {:?}", status);
                        status.code()
                    }
                    Err(e) => {
                        error!("Error waiting for backend process: {}", e);
                        None
                    }
                }
            }
            _ = kill_rx => {
                info!("Stopping backend process");
                if let Err(e) = child.kill().await {
                    error!("Failed to kill backend process: {}", e);
                }
                child.wait().await.ok().and_then(|status| status.code())
            }
        };

        exited.store(true, Ordering::Release);
        let reason = Error::BackendExit { code }.to_string();
        tracker.cancel_all(&reason).await;
    }

    /// Route stdout lines: responses go to the tracker, events and noise to the log
    async fn stdout_reader(stdout: tokio::process::ChildStdout, tracker: Arc<RequestTracker>) {
        let mut reader = BufReader::new(stdout).lines();

        while let Ok(Some(line)) = reader.next_line().await {
            trace!("stdout: {}", line);

            match RawMessage::parse(&line) {
                Some(RawMessage::Response { id, result, error }) => {
                    if !tracker.handle_response(id, result, error).await {
                        debug!("Unmatched response #{} (timed out?)", id);
                    }
                }
                Some(RawMessage::Event { event, params }) if event == "log" => {
                    if let Some(log) = BackendLog::from_params(&params) {
                        forward_log(&log);
                    }
                }
                Some(message) => debug!("Ignoring backend message: {}", message.summary()),
                None if line.trim().is_empty() => {}
                None => info!(target: "acceptme_bridge::backend", "{}", line),
            }
        }

        debug!("stdout reader finished");
    }

    /// Read lines from stderr into the log
    async fn stderr_reader(stderr: tokio::process::ChildStderr) {
        let mut reader = BufReader::new(stderr).lines();

        while let Ok(Some(line)) = reader.next_line().await {
            warn!(target: "acceptme_bridge::backend", "{}", line);
        }

        debug!("stderr reader finished");
    }

    /// Write request lines to stdin
    async fn stdin_writer(mut stdin: tokio::process::ChildStdin, mut rx: mpsc::Receiver<String>) {
        while let Some(line) = rx.recv().await {
            if let Err(e) = stdin.write_all(line.as_bytes()).await {
                error!("Failed to write to backend stdin: {}", e);
                break;
            }
            if let Err(e) = stdin.write_all(b"\n").await {
                error!("Failed to write newline: {}", e);
                break;
            }
            if let Err(e) = stdin.flush().await {
                error!("Failed to flush backend stdin: {}", e);
                break;
            }
        }

        debug!("stdin writer finished");
    }

    pub fn pid(&self) -> Option<u32> {
        self.pid
    }

    pub fn has_exited(&self) -> bool {
        self.exited.load(Ordering::Acquire)
    }

    /// Kill the backend process. Pending requests fail with a backend-exit error.
    pub async fn shutdown(&self) {
        if self.has_exited() {
            return;
        }
        let kill_tx = match self.kill_tx.lock() {
            Ok(mut slot) => slot.take(),
            Err(poisoned) => poisoned.into_inner().take(),
        };
        if let Some(tx) = kill_tx {
            let _ = tx.send(());
        }
    }
}

impl Drop for ProcessBackend {
    fn drop(&mut self) {
        if let Ok(mut slot) = self.kill_tx.lock() {
            if let Some(tx) = slot.take() {
                let _ = tx.send(());
            }
        }
    }
}

impl Backend for ProcessBackend {
    async fn invoke(&self, command: BackendCommand) -> Result<BackendReply> {
        if self.has_exited() {
            return Err(Error::BackendExit { code: None });
        }
        self.sender.send(&command).await
    }

    fn name(&self) -> &'static str {
        "process"
    }
}

fn forward_log(log: &BackendLog) {
    match log.level {
        BackendLogLevel::Debug => debug!(target: "acceptme_bridge::backend", "{}", log.message),
        BackendLogLevel::Info => info!(target: "acceptme_bridge::backend", "{}", log.message),
        BackendLogLevel::Warn => warn!(target: "acceptme_bridge::backend", "{}", log.message),
        BackendLogLevel::Error => error!(target: "acceptme_bridge::backend", "{}", log.message),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_missing_executable() {
        let err = resolve_executable("acceptme-backend-that-does-not-exist").unwrap_err();
        assert!(matches!(err, Error::BackendSpawn { .. }));
    }

    #[test]
    fn test_process_config_builder() {
        let config = ProcessConfig::new("acceptme-backend")
            .with_args(vec!["--stdio".into()])
            .with_timeout(Duration::from_millis(500));
        assert_eq!(config.args, vec!["--stdio".to_string()]);
        assert_eq!(config.request_timeout, Duration::from_millis(500));
    }

    /// Shell script that answers every request with `true`
    #[cfg(unix)]
    const ECHO_TRUE_BACKEND: &str = r#"while IFS= read -r line; do
id=$(printf '%s' "$line" | sed 's/.*"id":\([0-9]*\).*/\1/')
echo "backend: got request $id" >&2
printf '{"id":%s,"result":true}\n' "$id"
done"#;

    #[cfg(unix)]
    #[tokio::test]
    async fn test_spawned_backend_answers_requests() {
        let config = ProcessConfig::new("sh")
            .with_args(vec!["-c".into(), ECHO_TRUE_BACKEND.into()])
            .with_timeout(Duration::from_secs(5));
        let backend = ProcessBackend::spawn(&config).unwrap();

        let reply = Backend::invoke(&backend, BackendCommand::CheckLeagueConnection)
            .await
            .unwrap();
        assert_eq!(reply, BackendReply::Bool(true));

        // `true` is not a string, so get_status is rejected at the boundary
        let err = Backend::invoke(&backend, BackendCommand::GetStatus)
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Protocol { .. }));

        backend.shutdown().await;
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_exited_backend_fails_pending_requests() {
        let config = ProcessConfig::new("sh")
            .with_args(vec!["-c".into(), "read -r line; exit 3".into()])
            .with_timeout(Duration::from_secs(5));
        let backend = ProcessBackend::spawn(&config).unwrap();

        let err = Backend::invoke(&backend, BackendCommand::IsRunning)
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Remote { .. } | Error::BackendExit { .. }));
    }
}
