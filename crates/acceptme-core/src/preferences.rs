//! Per-role pick and ban preferences

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::role::Role;

/// Which list of a role a champion belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PickMode {
    #[default]
    Pick,
    Ban,
}

impl PickMode {
    pub fn toggle(self) -> Self {
        match self {
            PickMode::Pick => PickMode::Ban,
            PickMode::Ban => PickMode::Pick,
        }
    }
}

impl fmt::Display for PickMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PickMode::Pick => f.write_str("pick"),
            PickMode::Ban => f.write_str("ban"),
        }
    }
}

/// Ordered pick and ban lists for one role. Earlier entries have higher priority.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RolePreferences {
    #[serde(default)]
    pub preferred_champions: Vec<i64>,
    #[serde(default)]
    pub auto_ban_champions: Vec<i64>,
}

impl RolePreferences {
    pub fn list(&self, mode: PickMode) -> &[i64] {
        match mode {
            PickMode::Pick => &self.preferred_champions,
            PickMode::Ban => &self.auto_ban_champions,
        }
    }

    fn list_mut(&mut self, mode: PickMode) -> &mut Vec<i64> {
        match mode {
            PickMode::Pick => &mut self.preferred_champions,
            PickMode::Ban => &mut self.auto_ban_champions,
        }
    }

    /// Append `id` at lowest priority. Returns `false` if it was already listed.
    pub fn add(&mut self, mode: PickMode, id: i64) -> bool {
        let list = self.list_mut(mode);
        if list.contains(&id) {
            return false;
        }
        list.push(id);
        true
    }

    /// Remove `id`, keeping the order of the others. Returns `false` if absent.
    pub fn remove(&mut self, mode: PickMode, id: i64) -> bool {
        let list = self.list_mut(mode);
        let before = list.len();
        list.retain(|existing| *existing != id);
        list.len() != before
    }
}

/// Preferences for all five roles.
///
/// Always read and written as a whole; the backend never sees a partial update.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChampionPreferences {
    #[serde(default)]
    pub top: RolePreferences,
    #[serde(default)]
    pub jungle: RolePreferences,
    #[serde(default)]
    pub mid: RolePreferences,
    #[serde(default)]
    pub adc: RolePreferences,
    #[serde(default)]
    pub support: RolePreferences,
}

impl ChampionPreferences {
    pub fn role(&self, role: Role) -> &RolePreferences {
        match role {
            Role::Top => &self.top,
            Role::Jungle => &self.jungle,
            Role::Mid => &self.mid,
            Role::Adc => &self.adc,
            Role::Support => &self.support,
        }
    }

    pub fn role_mut(&mut self, role: Role) -> &mut RolePreferences {
        match role {
            Role::Top => &mut self.top,
            Role::Jungle => &mut self.jungle,
            Role::Mid => &mut self.mid,
            Role::Adc => &mut self.adc,
            Role::Support => &mut self.support,
        }
    }

    pub fn list(&self, role: Role, mode: PickMode) -> &[i64] {
        self.role(role).list(mode)
    }

    pub fn add(&mut self, role: Role, mode: PickMode, id: i64) -> bool {
        self.role_mut(role).add(mode, id)
    }

    pub fn remove(&mut self, role: Role, mode: PickMode, id: i64) -> bool {
        self.role_mut(role).remove(mode, id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_is_idempotent() {
        let mut prefs = ChampionPreferences::default();
        assert!(prefs.add(Role::Top, PickMode::Pick, 266));
        let snapshot = prefs.clone();
        assert!(!prefs.add(Role::Top, PickMode::Pick, 266));
        assert_eq!(prefs, snapshot);
    }

    #[test]
    fn test_add_appends_at_lowest_priority() {
        let mut prefs = ChampionPreferences::default();
        prefs.add(Role::Mid, PickMode::Ban, 1);
        prefs.add(Role::Mid, PickMode::Ban, 2);
        prefs.add(Role::Mid, PickMode::Ban, 103);
        assert_eq!(prefs.mid.auto_ban_champions, vec![1, 2, 103]);
        assert!(prefs.mid.preferred_champions.is_empty());
    }

    #[test]
    fn test_remove_preserves_order() {
        let mut prefs = ChampionPreferences::default();
        prefs.adc.preferred_champions = vec![1, 2, 3];
        assert!(prefs.remove(Role::Adc, PickMode::Pick, 2));
        assert_eq!(prefs.adc.preferred_champions, vec![1, 3]);
        assert!(!prefs.remove(Role::Adc, PickMode::Pick, 9));
        assert_eq!(prefs.adc.preferred_champions, vec![1, 3]);
    }

    #[test]
    fn test_same_champion_may_be_picked_and_banned() {
        let mut prefs = ChampionPreferences::default();
        assert!(prefs.add(Role::Support, PickMode::Pick, 412));
        assert!(prefs.add(Role::Support, PickMode::Ban, 412));
        assert!(prefs.add(Role::Top, PickMode::Pick, 412));
        assert_eq!(prefs.list(Role::Support, PickMode::Ban), &[412]);
    }

    #[test]
    fn test_serializes_all_five_roles() {
        let json = serde_json::to_value(ChampionPreferences::default()).unwrap();
        let object = json.as_object().unwrap();
        for role in Role::ALL {
            let entry = &object[role.key()];
            assert!(entry["preferred_champions"].is_array());
            assert!(entry["auto_ban_champions"].is_array());
        }
        assert_eq!(object.len(), 5);
    }

    #[test]
    fn test_deserializes_missing_roles_as_empty() {
        let prefs: ChampionPreferences =
            serde_json::from_str(r#"{"mid": {"preferred_champions": [103]}}"#).unwrap();
        assert_eq!(prefs.mid.preferred_champions, vec![103]);
        assert!(prefs.mid.auto_ban_champions.is_empty());
        assert_eq!(prefs.top, RolePreferences::default());
    }

    #[test]
    fn test_pick_mode_toggle() {
        assert_eq!(PickMode::Pick.toggle(), PickMode::Ban);
        assert_eq!(PickMode::Ban.toggle(), PickMode::Pick);
    }
}
