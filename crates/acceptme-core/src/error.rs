//! Error taxonomy shared by every AcceptMe crate

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to initialize terminal: {0}")]
    TerminalInit(String),

    #[error("Signal handler error: {message}")]
    Signal { message: String },

    // Backend: setup failures are fatal, request failures are not
    #[error("Backend not configured. Set [backend] command or pass --offline.")]
    BackendNotConfigured,

    #[error("Backend error: {message}")]
    Backend { message: String },

    #[error("Failed to spawn backend process: {reason}")]
    BackendSpawn { reason: String },

    #[error("Backend process exited unexpectedly with code: {code:?}")]
    BackendExit { code: Option<i32> },

    #[error("Backend rejected '{method}': {message}")]
    Remote { method: String, message: String },

    #[error("Backend protocol error: {message}")]
    Protocol { message: String },

    #[error("Backend request '{method}' timed out after {timeout_ms}ms")]
    Timeout { method: String, timeout_ms: u64 },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Unknown role: {0}")]
    UnknownRole(String),

    #[error("Channel send error: {message}")]
    ChannelSend { message: String },
}

impl Error {
    pub fn signal(message: impl Into<String>) -> Self {
        Self::Signal {
            message: message.into(),
        }
    }

    pub fn backend(message: impl Into<String>) -> Self {
        Self::Backend {
            message: message.into(),
        }
    }

    pub fn remote(method: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Remote {
            method: method.into(),
            message: message.into(),
        }
    }

    pub fn protocol(message: impl Into<String>) -> Self {
        Self::Protocol {
            message: message.into(),
        }
    }

    pub fn timeout(method: impl Into<String>, timeout_ms: u64) -> Self {
        Self::Timeout {
            method: method.into(),
            timeout_ms,
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    pub fn channel_send(message: impl Into<String>) -> Self {
        Self::ChannelSend {
            message: message.into(),
        }
    }

    /// Check if this is a recoverable error
    ///
    /// Every failed backend call leaves the view running with its previous
    /// state, so all request-level failures are recoverable.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Error::Backend { .. }
                | Error::Remote { .. }
                | Error::Protocol { .. }
                | Error::Timeout { .. }
                | Error::ChannelSend { .. }
        )
    }
}

/// Log an error with a description of what was being attempted, then pass
/// it on unchanged.
pub trait ResultExt<T> {
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Like `context`, but only builds the message on failure
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let err = e.into();
            tracing::error!("{}: {:?}", context.into(), err);
            err
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| {
            let err = e.into();
            tracing::error!("{}: {:?}", f(), err);
            err
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_messages() {
        let err = Error::backend("Connection lost");
        assert_eq!(err.to_string(), "Backend error: Connection lost");

        let err = Error::remote("get_status", "LCU unavailable");
        assert_eq!(
            err.to_string(),
            "Backend rejected 'get_status': LCU unavailable"
        );

        let err = Error::timeout("is_running", 1500);
        assert!(err.to_string().contains("1500ms"));
    }

    #[test]
    fn test_request_failures_are_recoverable() {
        assert!(Error::backend("x").is_recoverable());
        assert!(Error::protocol("x").is_recoverable());
        assert!(Error::timeout("get_status", 10).is_recoverable());
    }

    #[test]
    fn test_startup_failures_are_not_recoverable() {
        assert!(!Error::BackendNotConfigured.is_recoverable());
        assert!(!Error::BackendSpawn {
            reason: "not found".into()
        }
        .is_recoverable());
        assert!(!Error::TerminalInit("no tty".into()).is_recoverable());
    }

    #[test]
    fn test_context_preserves_error() {
        let io: std::result::Result<(), std::io::Error> = Err(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "missing",
        ));
        let err = io.context("reading config").unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_with_context_is_lazy_on_success() {
        let ok: std::result::Result<u8, Error> = Ok(3);
        let value = ok
            .with_context(|| panic!("closure must not run on Ok"))
            .unwrap();
        assert_eq!(value, 3);
    }
}
