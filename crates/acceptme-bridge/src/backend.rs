//! The backend seam
//!
//! Everything above this crate talks to the backend through [`Backend`].
//! Two implementations exist: [`ProcessBackend`] for a real backend process
//! and [`MemoryBackend`] for offline use and tests.

use std::sync::Arc;

use acceptme_core::prelude::*;

use crate::commands::{BackendCommand, BackendReply};
use crate::memory::MemoryBackend;
use crate::process::ProcessBackend;

/// Executes backend commands
#[trait_variant::make(Backend: Send)]
pub trait LocalBackend {
    /// Run one command and return its validated reply
    async fn invoke(&self, command: BackendCommand) -> Result<BackendReply>;

    /// Short name for logs and the header
    fn name(&self) -> &'static str;
}

/// Shared handle to whichever backend is active
#[derive(Clone)]
pub enum BackendHandle {
    Process(Arc<ProcessBackend>),
    Memory(Arc<MemoryBackend>),
}

impl std::fmt::Debug for BackendHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("BackendHandle")
            .field(&Backend::name(self))
            .finish()
    }
}

impl BackendHandle {
    pub fn memory(backend: MemoryBackend) -> Self {
        BackendHandle::Memory(Arc::new(backend))
    }

    pub fn process(backend: ProcessBackend) -> Self {
        BackendHandle::Process(Arc::new(backend))
    }

    /// Stop the backend process, if any
    pub async fn shutdown(&self) {
        if let BackendHandle::Process(process) = self {
            process.shutdown().await;
        }
    }
}

impl Backend for BackendHandle {
    async fn invoke(&self, command: BackendCommand) -> Result<BackendReply> {
        match self {
            BackendHandle::Process(backend) => Backend::invoke(backend.as_ref(), command).await,
            BackendHandle::Memory(backend) => Backend::invoke(backend.as_ref(), command).await,
        }
    }

    fn name(&self) -> &'static str {
        match self {
            BackendHandle::Process(backend) => Backend::name(backend.as_ref()),
            BackendHandle::Memory(backend) => Backend::name(backend.as_ref()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_handle_dispatches_to_memory() {
        let memory = Arc::new(MemoryBackend::new());
        let handle = BackendHandle::Memory(memory.clone());

        let reply = Backend::invoke(&handle, BackendCommand::IsRunning)
            .await
            .unwrap();
        assert_eq!(reply, BackendReply::Bool(false));
        assert_eq!(Backend::name(&handle), "offline");
        assert_eq!(memory.calls(), vec![BackendCommand::IsRunning]);
    }

    #[tokio::test]
    async fn test_handle_is_send() {
        fn assert_send<T: Send>(_: T) {}
        let handle = BackendHandle::memory(MemoryBackend::new());
        assert_send(Backend::invoke(&handle, BackendCommand::GetStatus));
    }
}
