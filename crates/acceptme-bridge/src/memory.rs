//! In-memory backend
//!
//! Holds the same state a real backend would and answers every command
//! locally. Used for `--offline` mode and as the test double for the app.

use std::collections::{HashSet, VecDeque};
use std::sync::{Mutex, MutexGuard};

use acceptme_core::prelude::*;
use acceptme_core::{AcceptDelay, ChampionPreferences, RawChampion, ToggleSettings};

use crate::backend::Backend;
use crate::commands::{BackendCommand, BackendReply};

/// Mutable state behind the in-memory backend
#[derive(Debug, Clone)]
pub struct MemoryState {
    pub connected: bool,
    pub running: bool,
    pub match_found: bool,
    pub status: String,
    pub delay: AcceptDelay,
    pub preferences: ChampionPreferences,
    pub toggles: ToggleSettings,
    pub champions: Vec<RawChampion>,
}

impl Default for MemoryState {
    fn default() -> Self {
        Self {
            connected: true,
            running: false,
            match_found: false,
            status: "Stopped".to_string(),
            delay: AcceptDelay::default(),
            preferences: ChampionPreferences::default(),
            toggles: ToggleSettings::default(),
            champions: demo_champions(),
        }
    }
}

/// Small built-in catalog for offline use
pub fn demo_champions() -> Vec<RawChampion> {
    vec![
        RawChampion::new(266, "Aatrox").with_alias("Aatrox"),
        RawChampion::new(103, "Ahri").with_alias("Ahri"),
        RawChampion::new(84, "Akali").with_alias("Akali"),
        RawChampion::new(12, "Alistar").with_alias("Alistar"),
        RawChampion::new(53, "Blitzcrank").with_alias("Blitzcrank"),
        RawChampion::new(36, "Dr. Mundo").with_alias("DrMundo"),
        RawChampion::new(81, "Ezreal").with_alias("Ezreal"),
        RawChampion::new(86, "Garen").with_alias("Garen"),
        RawChampion::new(145, "Kai'Sa").with_alias("Kaisa"),
        RawChampion::new(64, "Lee Sin").with_alias("LeeSin"),
        RawChampion::new(99, "Lux").with_alias("Lux"),
        RawChampion::new(21, "Miss Fortune").with_alias("MissFortune"),
        RawChampion::new(412, "Thresh").with_alias("Thresh"),
        RawChampion::new(62, "Wukong").with_alias("MonkeyKing"),
        RawChampion::new(157, "Yasuo").with_alias("Yasuo"),
        RawChampion::new(238, "Zed").with_alias("Zed"),
        // Placeholder entry the live client also reports
        RawChampion::new(-1, "None"),
    ]
}

/// Most recent commands kept by [`MemoryBackend::calls`]
pub const CALL_LOG_CAPACITY: usize = 256;

/// Backend that keeps everything in memory and records recent calls
#[derive(Debug, Default)]
pub struct MemoryBackend {
    state: Mutex<MemoryState>,
    calls: Mutex<VecDeque<BackendCommand>>,
    failing: Mutex<HashSet<&'static str>>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of the current state
    pub fn state(&self) -> MemoryState {
        lock(&self.state).clone()
    }

    /// Mutate state directly, e.g. to simulate a ready check
    pub fn update_state(&self, f: impl FnOnce(&mut MemoryState)) {
        f(&mut lock(&self.state));
    }

    /// The last [`CALL_LOG_CAPACITY`] commands received, oldest first
    pub fn calls(&self) -> Vec<BackendCommand> {
        lock(&self.calls).iter().cloned().collect()
    }

    /// Commands received for one method name
    pub fn calls_to(&self, method: &str) -> Vec<BackendCommand> {
        lock(&self.calls)
            .iter()
            .filter(|c| c.method() == method)
            .cloned()
            .collect()
    }

    /// Make every call to `method` fail until [`MemoryBackend::recover`] is called
    pub fn fail(&self, method: &'static str) {
        lock(&self.failing).insert(method);
    }

    pub fn recover(&self, method: &'static str) {
        lock(&self.failing).remove(method);
    }

    fn record(&self, command: &BackendCommand) {
        let mut calls = lock(&self.calls);
        if calls.len() == CALL_LOG_CAPACITY {
            calls.pop_front();
        }
        calls.push_back(command.clone());
    }

    fn apply(&self, command: &BackendCommand) -> BackendReply {
        let mut state = lock(&self.state);
        match command {
            BackendCommand::CheckLeagueConnection => BackendReply::Bool(state.connected),
            BackendCommand::GetStatus => BackendReply::Text(state.status.clone()),
            BackendCommand::IsRunning => BackendReply::Bool(state.running),
            BackendCommand::IsMatchFound => BackendReply::Bool(state.match_found),
            BackendCommand::StartAutoAccept => {
                state.running = true;
                state.status = "Starting auto-accept...".to_string();
                BackendReply::Unit
            }
            BackendCommand::StopAutoAccept => {
                state.running = false;
                state.match_found = false;
                state.status = "Stopped".to_string();
                BackendReply::Unit
            }
            BackendCommand::GetAcceptDelay => BackendReply::Delay(state.delay),
            BackendCommand::SetAcceptDelay { delay } => {
                state.delay = *delay;
                BackendReply::Unit
            }
            BackendCommand::GetChampions => BackendReply::Champions(state.champions.clone()),
            BackendCommand::GetChampionPreferences => {
                BackendReply::Preferences(state.preferences.clone())
            }
            BackendCommand::SetChampionPreferences { prefs } => {
                state.preferences = prefs.clone();
                BackendReply::Unit
            }
            BackendCommand::GetToggle(toggle) => BackendReply::Bool(state.toggles.get(*toggle)),
            BackendCommand::SetToggle { toggle, enabled } => {
                state.toggles.set(*toggle, *enabled);
                BackendReply::Unit
            }
        }
    }
}

impl Backend for MemoryBackend {
    async fn invoke(&self, command: BackendCommand) -> Result<BackendReply> {
        self.record(&command);

        if lock(&self.failing).contains(command.method()) {
            return Err(Error::remote(command.method(), "simulated failure"));
        }

        let reply = self.apply(&command);
        trace!("offline backend: {} -> {:?}", command.method(), reply);
        Ok(reply)
    }

    fn name(&self) -> &'static str {
        "offline"
    }
}
