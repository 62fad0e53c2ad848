//! Line protocol spoken by the backend process
//!
//! Each stdout line is one JSON object: either a response to a request we
//! sent, or an unsolicited event. Anything else is treated as plain output.

use serde::Deserialize;
use serde_json::Value;

/// A parsed stdout line from the backend
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RawMessage {
    /// A response to a request we sent
    Response {
        id: u64,
        #[serde(default)]
        result: Option<Value>,
        #[serde(default)]
        error: Option<Value>,
    },
    /// An event from the backend (unsolicited)
    Event {
        event: String,
        #[serde(default)]
        params: Value,
    },
}

impl RawMessage {
    /// Parse a JSON line into a RawMessage
    pub fn parse(line: &str) -> Option<Self> {
        let trimmed = line.trim();
        if !trimmed.starts_with('{') {
            return None;
        }
        serde_json::from_str(trimmed).ok()
    }

    /// Get a human-readable summary of this message
    pub fn summary(&self) -> String {
        match self {
            RawMessage::Response { id, error, .. } => {
                if error.is_some() {
                    format!("Response #{}: error", id)
                } else {
                    format!("Response #{}: ok", id)
                }
            }
            RawMessage::Event { event, .. } => format!("Event: {}", event),
        }
    }
}

/// Severity carried by a backend `log` event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendLogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

/// A diagnostic line forwarded by the backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendLog {
    pub level: BackendLogLevel,
    pub message: String,
}

impl BackendLog {
    /// Extract a log record from a `log` event's params
    pub fn from_params(params: &Value) -> Option<Self> {
        let message = params.get("message")?.as_str()?.to_string();
        let level = match params
            .get("level")
            .and_then(Value::as_str)
            .map(str::to_ascii_lowercase)
            .as_deref()
        {
            Some("debug") | Some("trace") => BackendLogLevel::Debug,
            Some("warn") | Some("warning") => BackendLogLevel::Warn,
            Some("error") => BackendLogLevel::Error,
            _ => BackendLogLevel::Info,
        };
        Some(Self { level, message })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_response() {
        let msg = RawMessage::parse(r#"{"id":3,"result":true}"#).unwrap();
        assert_eq!(
            msg,
            RawMessage::Response {
                id: 3,
                result: Some(json!(true)),
                error: None
            }
        );
        assert_eq!(msg.summary(), "Response #3: ok");
    }

    #[test]
    fn test_parse_error_response() {
        let msg = RawMessage::parse(r#"{"id":4,"error":"not connected"}"#).unwrap();
        assert_eq!(msg.summary(), "Response #4: error");
    }

    #[test]
    fn test_parse_null_result() {
        let msg = RawMessage::parse(r#"{"id":5,"result":null}"#).unwrap();
        assert!(matches!(msg, RawMessage::Response { id: 5, result: None, error: None }));
    }

    #[test]
    fn test_parse_event() {
        let msg =
            RawMessage::parse(r#"{"event":"log","params":{"level":"warn","message":"x"}}"#)
                .unwrap();
        assert_eq!(msg.summary(), "Event: log");
    }

    #[test]
    fn test_parse_plain_output() {
        assert!(RawMessage::parse("LCU lockfile found").is_none());
        assert!(RawMessage::parse("{not json").is_none());
        assert!(RawMessage::parse("").is_none());
    }

    #[test]
    fn test_backend_log_levels() {
        let log = BackendLog::from_params(&json!({"level": "WARNING", "message": "slow"})).unwrap();
        assert_eq!(log.level, BackendLogLevel::Warn);
        let log = BackendLog::from_params(&json!({"message": "hello"})).unwrap();
        assert_eq!(log.level, BackendLogLevel::Info);
        assert!(BackendLog::from_params(&json!({"level": "info"})).is_none());
    }
}
