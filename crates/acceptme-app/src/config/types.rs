//! Configuration types

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use acceptme_core::icons::{DEFAULT_CDN_BASE, DEFAULT_CDN_VERSION};
use acceptme_core::CdnSource;

/// Smallest accepted status poll interval
pub const MIN_POLL_INTERVAL_MS: u64 = 250;

/// Client settings (config.toml)
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub backend: BackendSettings,

    #[serde(default)]
    pub status: StatusSettings,

    #[serde(default)]
    pub assets: AssetSettings,

    #[serde(default)]
    pub ui: UiSettings,
}

/// How to reach the backend
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct BackendSettings {
    /// Backend executable (name on PATH or absolute path)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,

    /// Extra arguments passed to the backend
    #[serde(default)]
    pub args: Vec<String>,

    /// Per-request timeout in milliseconds
    #[serde(default = "default_request_timeout_ms")]
    pub request_timeout_ms: u64,
}

impl Default for BackendSettings {
    fn default() -> Self {
        Self {
            command: None,
            args: Vec::new(),
            request_timeout_ms: default_request_timeout_ms(),
        }
    }
}

impl BackendSettings {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms.max(1))
    }
}

/// Status polling
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct StatusSettings {
    /// Interval between status refreshes in milliseconds
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,
}

impl Default for StatusSettings {
    fn default() -> Self {
        Self {
            poll_interval_ms: default_poll_interval_ms(),
        }
    }
}

impl StatusSettings {
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms.max(MIN_POLL_INTERVAL_MS))
    }
}

/// Champion icon sources
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct AssetSettings {
    /// Directory holding the bundled `champions/` and `icons/` folders
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asset_dir: Option<PathBuf>,

    /// Data Dragon patch version used for fallback images
    #[serde(default = "default_cdn_version")]
    pub cdn_version: String,

    /// Data Dragon base URL
    #[serde(default = "default_cdn_base")]
    pub cdn_base: String,
}

impl Default for AssetSettings {
    fn default() -> Self {
        Self {
            asset_dir: None,
            cdn_version: default_cdn_version(),
            cdn_base: default_cdn_base(),
        }
    }
}

impl AssetSettings {
    pub fn cdn_source(&self) -> CdnSource {
        CdnSource::new(self.cdn_base.clone(), self.cdn_version.clone())
    }
}

/// UI behavior
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct UiSettings {
    /// Ask before quitting while auto-accept is running
    #[serde(default)]
    pub confirm_quit: bool,
}

fn default_request_timeout_ms() -> u64 {
    10_000
}

fn default_poll_interval_ms() -> u64 {
    2_000
}

fn default_cdn_version() -> String {
    DEFAULT_CDN_VERSION.to_string()
}

fn default_cdn_base() -> String {
    DEFAULT_CDN_BASE.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.status.poll_interval(), Duration::from_millis(2000));
        assert_eq!(settings.backend.request_timeout(), Duration::from_secs(10));
        assert_eq!(settings.assets.cdn_version, "13.24.1");
        assert!(settings.backend.command.is_none());
        assert!(!settings.ui.confirm_quit);
    }

    #[test]
    fn test_poll_interval_has_floor() {
        let status = StatusSettings {
            poll_interval_ms: 10,
        };
        assert_eq!(status.poll_interval(), Duration::from_millis(MIN_POLL_INTERVAL_MS));
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let settings: Settings = toml::from_str(
            r#"
            [backend]
            command = "acceptme-backend"

            [assets]
            cdn_version = "14.20.1"
            "#,
        )
        .unwrap();

        assert_eq!(settings.backend.command.as_deref(), Some("acceptme-backend"));
        assert_eq!(settings.backend.request_timeout_ms, 10_000);
        assert_eq!(settings.assets.cdn_version, "14.20.1");
        assert_eq!(settings.assets.cdn_base, DEFAULT_CDN_BASE);
        assert_eq!(settings.status.poll_interval_ms, 2_000);
    }

    #[test]
    fn test_cdn_source_from_settings() {
        let assets = AssetSettings {
            cdn_version: "14.1.1".into(),
            ..AssetSettings::default()
        };
        assert!(assets
            .cdn_source()
            .champion_url("Ahri")
            .contains("/14.1.1/img/champion/Ahri.png"));
    }
}
