// Bot settings, persisted to settings.json with defaults written on first run
use crate::storage::{read_json_file, write_json_file, StorageError};
use crate::utils::get_assets_dir;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::warn;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Prefix that marks a message as a command, e.g. "!pokemon".
    pub command_prefix: String,
    /// Override for the sprite directory; the default lives under the app
    /// data dir.
    pub assets_dir: Option<PathBuf>,
    /// Rare catches are announced in the first guild channel whose name
    /// contains this substring.
    pub rare_channel_keyword: String,
    /// User ids allowed to run the reload command.
    pub operator_ids: Vec<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            command_prefix: String::from("!"),
            assets_dir: None,
            rare_channel_keyword: String::from("legendary"),
            operator_ids: Vec::new(),
        }
    }
}

impl Settings {
    pub fn load_from(path: &Path) -> Result<Self, StorageError> {
        match read_json_file::<Settings>(path) {
            Ok(settings) => Ok(settings),
            Err(e) if e.is_not_found() => {
                let settings = Settings::default();
                write_json_file(path, &settings)?;
                warn!("Wrote default settings to {:?}; no operators configured", path);
                Ok(settings)
            }
            Err(e) => Err(e),
        }
    }

    pub fn assets_path(&self) -> PathBuf {
        self.assets_dir.clone().unwrap_or_else(get_assets_dir)
    }

    pub fn is_operator(&self, user_id: u64) -> bool {
        self.operator_ids.contains(&user_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_missing_writes_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.json");

        let settings = Settings::load_from(&path).unwrap();
        assert_eq!(settings.command_prefix, "!");
        assert_eq!(settings.rare_channel_keyword, "legendary");
        assert!(path.exists());

        // Second load reads the persisted copy.
        let again = Settings::load_from(&path).unwrap();
        assert_eq!(again.command_prefix, settings.command_prefix);
    }

    #[test]
    fn test_partial_settings_fill_in_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, r#"{"command_prefix": "?", "operator_ids": [42]}"#).unwrap();

        let settings = Settings::load_from(&path).unwrap();
        assert_eq!(settings.command_prefix, "?");
        assert!(settings.is_operator(42));
        assert!(!settings.is_operator(7));
        assert_eq!(settings.rare_channel_keyword, "legendary");
    }
}
