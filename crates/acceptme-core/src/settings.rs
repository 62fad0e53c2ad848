//! Automation settings owned by the backend

use std::fmt;

use serde::{Deserialize, Serialize};

/// Accept delay in whole seconds, always within `0..=AcceptDelay::MAX`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(from = "i64", into = "i64")]
pub struct AcceptDelay(u8);

impl AcceptDelay {
    pub const MAX: u8 = 10;

    /// Clamp any integer into the valid range
    pub fn clamped(seconds: i64) -> Self {
        Self(seconds.clamp(0, Self::MAX as i64) as u8)
    }

    pub fn seconds(self) -> u8 {
        self.0
    }

    pub fn increment(self) -> Self {
        Self::clamped(self.0 as i64 + 1)
    }

    pub fn decrement(self) -> Self {
        Self::clamped(self.0 as i64 - 1)
    }

    /// Human readable label: `Instant` for zero, `{n}s` otherwise
    pub fn label(self) -> String {
        if self.0 == 0 {
            "Instant".to_string()
        } else {
            format!("{}s", self.0)
        }
    }
}

impl From<i64> for AcceptDelay {
    fn from(seconds: i64) -> Self {
        Self::clamped(seconds)
    }
}

impl From<AcceptDelay> for i64 {
    fn from(delay: AcceptDelay) -> Self {
        delay.0 as i64
    }
}

impl fmt::Display for AcceptDelay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

/// The three champion-select automation switches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Toggle {
    /// Hover the preferred champion when the pick phase starts
    Hover,
    /// Lock in the hovered champion
    Lock,
    /// Ban from the ban list
    Ban,
}

impl Toggle {
    pub const ALL: [Toggle; 3] = [Toggle::Hover, Toggle::Lock, Toggle::Ban];

    pub fn label(self) -> &'static str {
        match self {
            Toggle::Hover => "Hover",
            Toggle::Lock => "Lock",
            Toggle::Ban => "Ban",
        }
    }

    /// Name of the setting on the backend side
    pub fn setting_key(self) -> &'static str {
        match self {
            Toggle::Hover => "auto_hover",
            Toggle::Lock => "auto_select",
            Toggle::Ban => "auto_ban",
        }
    }
}

/// Current values of the automation switches.
///
/// All switches default to on until the backend reports otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToggleSettings {
    pub auto_hover: bool,
    pub auto_select: bool,
    pub auto_ban: bool,
}

impl Default for ToggleSettings {
    fn default() -> Self {
        Self {
            auto_hover: true,
            auto_select: true,
            auto_ban: true,
        }
    }
}

impl ToggleSettings {
    pub fn get(&self, toggle: Toggle) -> bool {
        match toggle {
            Toggle::Hover => self.auto_hover,
            Toggle::Lock => self.auto_select,
            Toggle::Ban => self.auto_ban,
        }
    }

    pub fn set(&mut self, toggle: Toggle, enabled: bool) {
        match toggle {
            Toggle::Hover => self.auto_hover = enabled,
            Toggle::Lock => self.auto_select = enabled,
            Toggle::Ban => self.auto_ban = enabled,
        }
    }
}

/// One round of status polling
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusSnapshot {
    pub status: String,
    pub running: bool,
    pub match_found: bool,
}
