//! Configuration file handling for the CLI.
//!
//! Stores the API address and the staff session token in
//! `$XDG_CONFIG_HOME/tipdesk/config.toml` (or the platform equivalent).

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiSection,
    #[serde(default)]
    pub auth: AuthSection,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ApiSection {
    /// Used when neither `--api-url` nor `API_BASE_URL` is set.
    pub base_url: Option<String>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct AuthSection {
    pub token: Option<String>,
    /// Display name of the signed-in staff member.
    pub name: Option<String>,
    /// What they signed in with: email, phone or user name.
    pub identity: Option<String>,
}

impl Config {
    pub fn config_path() -> Result<PathBuf> {
        let project_dirs = ProjectDirs::from("io", "tipdesk", "tipdesk")
            .context("Failed to determine config directory")?;
        Ok(project_dirs.config_dir().join("config.toml"))
    }

    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Missing files load as the default configuration.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    pub fn save(&self) -> Result<PathBuf> {
        let path = Self::config_path()?;
        self.save_to(&path)?;
        Ok(path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }
        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;
        fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))
    }

    pub fn token(&self) -> Option<&str> {
        self.auth.token.as_deref()
    }

    pub fn set_auth(&mut self, name: &str, identity: &str, token: &str) {
        self.auth.name = Some(name.to_owned());
        self.auth.identity = Some(identity.to_owned());
        self.auth.token = Some(token.to_owned());
    }

    pub fn clear_auth(&mut self) {
        self.auth = AuthSection::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert!(config.token().is_none());
        assert!(config.api.base_url.is_none());
    }

    #[test]
    fn test_set_and_clear_auth() {
        let mut config = Config::default();
        config.set_auth("Ada Admin", "ada@tipdesk.io", "token-1");
        assert_eq!(config.token(), Some("token-1"));
        assert_eq!(config.auth.identity.as_deref(), Some("ada@tipdesk.io"));

        config.clear_auth();
        assert!(config.token().is_none());
        assert!(config.auth.name.is_none());
    }

    #[test]
    fn test_missing_file_loads_default() {
        let dir = tempfile::tempdir().expect("temp dir");
        let config = Config::load_from(&dir.path().join("absent.toml")).expect("load");
        assert!(config.token().is_none());
    }

    #[test]
    fn test_save_and_load_round_trip_through_disk() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.api.base_url = Some("http://localhost:9000".to_owned());
        config.set_auth("Ada Admin", "ada", "token-1");
        config.save_to(&path).expect("save");

        let loaded = Config::load_from(&path).expect("load");
        assert_eq!(loaded.api.base_url.as_deref(), Some("http://localhost:9000"));
        assert_eq!(loaded.token(), Some("token-1"));
        assert_eq!(loaded.auth.name.as_deref(), Some("Ada Admin"));
    }

    #[test]
    fn test_invalid_file_reports_path() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("config.toml");
        fs::write(&path, "auth = 3").expect("write");

        let err = Config::load_from(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }
}
