//! Loading and writing config.toml

use std::path::{Path, PathBuf};

use acceptme_core::prelude::*;

use super::types::Settings;

const APP_DIR: &str = "acceptme";
const CONFIG_FILENAME: &str = "config.toml";

const DEFAULT_CONFIG: &str = r#"# AcceptMe Configuration

[backend]
# Backend executable speaking line-delimited JSON-RPC on stdio.
# Leave unset and pass --offline to try the UI without a backend.
# command = "acceptme-backend"
args = []
request_timeout_ms = 10000

[status]
poll_interval_ms = 2000

[assets]
# Directory containing the bundled champions/ and icons/ folders
# asset_dir = "/usr/share/acceptme"
cdn_version = "13.24.1"
cdn_base = "https://ddragon.leagueoflegends.com/cdn"

[ui]
confirm_quit = false    # Ask before quitting while auto-accept is running
"#;

/// Default location: `<config_dir>/acceptme/config.toml`
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
        .join(CONFIG_FILENAME)
}

/// Load settings from `config_path`
///
/// Returns default settings if the file doesn't exist or can't be parsed.
pub fn load_settings(config_path: &Path) -> Settings {
    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(config_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

/// Write the commented default config if none exists.
///
/// Returns `true` when a file was created.
pub fn init_config(config_path: &Path) -> Result<bool> {
    if config_path.exists() {
        return Ok(false);
    }

    if let Some(dir) = config_path.parent() {
        std::fs::create_dir_all(dir).with_context(|| format!("Failed to create {:?}", dir))?;
    }

    std::fs::write(config_path, DEFAULT_CONFIG)
        .with_context(|| format!("Failed to write {:?}", config_path))?;

    info!("Created default config at {:?}", config_path);
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempdir().unwrap();
        let settings = load_settings(&dir.path().join("config.toml"));
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_invalid_file_gives_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[status\npoll_interval_ms = ").unwrap();
        assert_eq!(load_settings(&path), Settings::default());
    }

    #[test]
    fn test_default_config_parses_to_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        assert!(init_config(&path).unwrap());
        assert!(!init_config(&path).unwrap());
        assert_eq!(load_settings(&path), Settings::default());
    }

    #[test]
    fn test_custom_file_overrides_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "[backend]\ncommand = \"/opt/acceptme/backend\"\nargs = [\"--stdio\"]\n\n[status]\npoll_interval_ms = 1000\n\n[ui]\nconfirm_quit = true\n",
        )
        .unwrap();

        let settings = load_settings(&path);
        assert_eq!(settings.backend.command.as_deref(), Some("/opt/acceptme/backend"));
        assert_eq!(settings.backend.args, vec!["--stdio".to_string()]);
        assert_eq!(settings.status.poll_interval_ms, 1000);
        assert!(settings.ui.confirm_quit);
    }

    #[test]
    fn test_init_config_reports_unwritable_path() {
        let dir = tempdir().unwrap();
        let blocker = dir.path().join("file");
        std::fs::write(&blocker, "").unwrap();

        let err = init_config(&blocker.join("config.toml")).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_default_path_is_app_scoped() {
        let path = default_config_path();
        assert!(path.ends_with("acceptme/config.toml"));
    }
}
