//! Typed facade over a [`BackendHandle`]

use acceptme_core::prelude::*;
use acceptme_core::{
    AcceptDelay, ChampionPreferences, RawChampion, StatusSnapshot, Toggle, ToggleSettings,
};

use crate::backend::{Backend, BackendHandle};
use crate::commands::BackendCommand;

/// One method per backend operation, each returning a typed value
#[derive(Debug, Clone)]
pub struct BridgeClient {
    backend: BackendHandle,
}

impl BridgeClient {
    pub fn new(backend: BackendHandle) -> Self {
        Self { backend }
    }

    pub fn backend_name(&self) -> &'static str {
        self.backend.name()
    }

    pub fn handle(&self) -> &BackendHandle {
        &self.backend
    }

    pub async fn check_league_connection(&self) -> Result<bool> {
        self.backend
            .invoke(BackendCommand::CheckLeagueConnection)
            .await?
            .into_bool()
    }

    pub async fn get_status(&self) -> Result<String> {
        self.backend.invoke(BackendCommand::GetStatus).await?.into_text()
    }

    pub async fn is_running(&self) -> Result<bool> {
        self.backend.invoke(BackendCommand::IsRunning).await?.into_bool()
    }

    pub async fn is_match_found(&self) -> Result<bool> {
        self.backend.invoke(BackendCommand::IsMatchFound).await?.into_bool()
    }

    /// Fetch status text, running flag and match flag together
    pub async fn status_snapshot(&self) -> Result<StatusSnapshot> {
        let (status, running, match_found) =
            tokio::try_join!(self.get_status(), self.is_running(), self.is_match_found())?;
        Ok(StatusSnapshot {
            status,
            running,
            match_found,
        })
    }

    pub async fn start_auto_accept(&self) -> Result<()> {
        self.backend
            .invoke(BackendCommand::StartAutoAccept)
            .await?
            .into_unit()
    }

    pub async fn stop_auto_accept(&self) -> Result<()> {
        self.backend
            .invoke(BackendCommand::StopAutoAccept)
            .await?
            .into_unit()
    }

    pub async fn get_accept_delay(&self) -> Result<AcceptDelay> {
        self.backend
            .invoke(BackendCommand::GetAcceptDelay)
            .await?
            .into_delay()
    }

    pub async fn set_accept_delay(&self, delay: AcceptDelay) -> Result<()> {
        self.backend
            .invoke(BackendCommand::SetAcceptDelay { delay })
            .await?
            .into_unit()
    }

    pub async fn get_champions(&self) -> Result<Vec<RawChampion>> {
        self.backend
            .invoke(BackendCommand::GetChampions)
            .await?
            .into_champions()
    }

    pub async fn get_champion_preferences(&self) -> Result<ChampionPreferences> {
        self.backend
            .invoke(BackendCommand::GetChampionPreferences)
            .await?
            .into_preferences()
    }

    pub async fn set_champion_preferences(&self, prefs: ChampionPreferences) -> Result<()> {
        self.backend
            .invoke(BackendCommand::SetChampionPreferences { prefs })
            .await?
            .into_unit()
    }

    pub async fn get_toggle(&self, toggle: Toggle) -> Result<bool> {
        self.backend
            .invoke(BackendCommand::GetToggle(toggle))
            .await?
            .into_bool()
    }

    pub async fn set_toggle(&self, toggle: Toggle, enabled: bool) -> Result<()> {
        self.backend
            .invoke(BackendCommand::SetToggle { toggle, enabled })
            .await?
            .into_unit()
    }

    /// Fetch all three automation switches
    pub async fn toggle_settings(&self) -> Result<ToggleSettings> {
        let (auto_hover, auto_select, auto_ban) = tokio::try_join!(
            self.get_toggle(Toggle::Hover),
            self.get_toggle(Toggle::Lock),
            self.get_toggle(Toggle::Ban)
        )?;
        Ok(ToggleSettings {
            auto_hover,
            auto_select,
            auto_ban,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryBackend;
    use std::sync::Arc;

    fn client() -> (BridgeClient, Arc<MemoryBackend>) {
        let memory = Arc::new(MemoryBackend::new());
        (
            BridgeClient::new(BackendHandle::Memory(memory.clone())),
            memory,
        )
    }

    #[tokio::test]
    async fn test_status_snapshot() {
        let (client, memory) = client();
        memory.update_state(|s| {
            s.running = true;
            s.match_found = true;
            s.status = "Match found! Auto-accepting...".into();
        });

        let snapshot = client.status_snapshot().await.unwrap();
        assert!(snapshot.running);
        assert!(snapshot.match_found);
        assert_eq!(snapshot.status, "Match found! Auto-accepting...");
    }

    #[tokio::test]
    async fn test_status_snapshot_fails_if_any_part_fails() {
        let (client, memory) = client();
        memory.fail("is_match_found");
        assert!(client.status_snapshot().await.is_err());
    }

    #[tokio::test]
    async fn test_toggle_settings_round_trip() {
        let (client, memory) = client();
        client.set_toggle(Toggle::Ban, true).await.unwrap();
        client.set_toggle(Toggle::Ban, false).await.unwrap();

        let toggles = client.toggle_settings().await.unwrap();
        assert!(!toggles.auto_ban);
        assert!(toggles.auto_hover);

        let writes = memory.calls_to("set_auto_ban");
        assert_eq!(
            writes,
            vec![
                BackendCommand::SetToggle {
                    toggle: Toggle::Ban,
                    enabled: true
                },
                BackendCommand::SetToggle {
                    toggle: Toggle::Ban,
                    enabled: false
                },
            ]
        );
    }

    #[tokio::test]
    async fn test_accept_delay_round_trip() {
        let (client, _memory) = client();
        client
            .set_accept_delay(AcceptDelay::clamped(7))
            .await
            .unwrap();
        assert_eq!(client.get_accept_delay().await.unwrap().seconds(), 7);
    }
}
