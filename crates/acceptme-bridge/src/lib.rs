//! # acceptme-bridge - Backend Bridge
//!
//! Everything the UI knows about the backend that talks to the League client.
//!
//! Depends on [`acceptme_core`] for domain types and error handling.
//!
//! ## Public API
//!
//! ### Contract
//! - [`BackendCommand`] - Closed set of backend operations with their wire names
//! - [`BackendReply`] - Reply validated against the command's expected shape
//!
//! ### Transports
//! - [`Backend`] - Async trait implemented by every transport
//! - [`ProcessBackend`] - Child process speaking line-delimited JSON-RPC
//! - [`MemoryBackend`] - In-memory backend for offline mode and tests
//! - [`BackendHandle`] - Cloneable handle over either transport
//!
//! ### Client
//! - [`BridgeClient`] - Typed methods for every operation

pub mod backend;
pub mod client;
pub mod commands;
pub mod memory;
pub mod process;
pub mod protocol;

pub use backend::{Backend, BackendHandle, LocalBackend};
pub use client::BridgeClient;
pub use commands::{
    BackendCommand, BackendReply, CommandResponse, CommandSender, ReplyKind, RequestTracker,
    DEFAULT_REQUEST_TIMEOUT,
};
pub use memory::{demo_champions, MemoryBackend, MemoryState, CALL_LOG_CAPACITY};
pub use process::{ProcessBackend, ProcessConfig};
pub use protocol::RawMessage;
