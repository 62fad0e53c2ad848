//! Lane roles

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// One of the five lanes a player can queue for.
///
/// Declaration order is display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Top,
    Jungle,
    Mid,
    Adc,
    Support,
}

impl Role {
    /// All roles in display order
    pub const ALL: [Role; 5] = [Role::Top, Role::Jungle, Role::Mid, Role::Adc, Role::Support];

    /// Stable key used by the backend preference structure
    pub fn key(self) -> &'static str {
        match self {
            Role::Top => "top",
            Role::Jungle => "jungle",
            Role::Mid => "mid",
            Role::Adc => "adc",
            Role::Support => "support",
        }
    }

    /// Short label shown in tabs and picker headers
    pub fn label(self) -> &'static str {
        match self {
            Role::Top => "TOP",
            Role::Jungle => "JGL",
            Role::Mid => "MID",
            Role::Adc => "ADC",
            Role::Support => "SUP",
        }
    }

    /// Bundled role icon asset path
    pub fn icon_path(self) -> &'static str {
        match self {
            Role::Top => "/icons/roles/Top_icon.png",
            Role::Jungle => "/icons/roles/Jungle_icon.png",
            Role::Mid => "/icons/roles/Middle_icon.png",
            Role::Adc => "/icons/roles/Bottom_icon.png",
            Role::Support => "/icons/roles/Support_icon.png",
        }
    }

    /// Position in [`Role::ALL`]
    pub fn index(self) -> usize {
        match self {
            Role::Top => 0,
            Role::Jungle => 1,
            Role::Mid => 2,
            Role::Adc => 3,
            Role::Support => 4,
        }
    }

    /// Role at `index`, if in range
    pub fn from_index(index: usize) -> Option<Role> {
        Role::ALL.get(index).copied()
    }

    /// Next role, wrapping around
    pub fn next(self) -> Role {
        Role::ALL[(self.index() + 1) % Role::ALL.len()]
    }

    /// Previous role, wrapping around
    pub fn prev(self) -> Role {
        Role::ALL[(self.index() + Role::ALL.len() - 1) % Role::ALL.len()]
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Role {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::ALL
            .into_iter()
            .find(|role| role.key().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::UnknownRole(s.to_string()))
    }
}
