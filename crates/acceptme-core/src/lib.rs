//! # acceptme-core - Core Domain Types
//!
//! Foundation crate for AcceptMe. Provides the champion catalog, lane roles,
//! pick/ban preferences, automation settings, icon resolution, error handling
//! and logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, chrono, thiserror, regex, tracing).
//!
//! ## Public API
//!
//! ### Catalog (`champion`)
//! - [`Champion`] - A champion with id, display name and alias
//! - [`RawChampion`] - Lenient backend record
//! - [`normalize_catalog()`] - Validate, derive aliases and sort
//! - [`filter_champions()`] - Case-insensitive name/alias search
//!
//! ### Preferences (`role`, `preferences`)
//! - [`Role`] - The five lanes
//! - [`PickMode`] - Pick list or ban list
//! - [`RolePreferences`], [`ChampionPreferences`] - Ordered per-role lists
//!
//! ### Settings (`settings`)
//! - [`AcceptDelay`], [`Toggle`], [`ToggleSettings`], [`StatusSnapshot`]
//!
//! ### Icons (`icons`)
//! - [`champion_icon_path()`] - Bundled asset path with exception table
//! - [`ChampionIcon`] - Bundled path plus CDN fallback
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use acceptme_core::prelude::*;
//! ```

pub mod champion;
pub mod error;
pub mod icons;
pub mod logging;
pub mod preferences;
pub mod role;
pub mod settings;

/// Prelude for common imports used throughout all AcceptMe crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use champion::{
    derive_alias, filter_champions, find_champion, normalize_catalog, Champion, RawChampion,
};
pub use error::{Error, Result, ResultExt};
pub use icons::{champion_icon_path, CdnSource, ChampionIcon, IconSource};
pub use preferences::{ChampionPreferences, PickMode, RolePreferences};
pub use role::Role;
pub use settings::{AcceptDelay, StatusSnapshot, Toggle, ToggleSettings};
