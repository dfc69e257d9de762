// src/config.rs - Optional read-only settings file

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct EditorConfig {
    /// `classic` or `dark`.
    pub theme: Option<String>,
    /// Directory the Open and Save As dialogs start in.
    pub default_dir: Option<PathBuf>,
}

impl EditorConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;

        toml::from_str(&content)
            .with_context(|| format!("Invalid config format in {}", path.display()))
    }

    /// Use `explicit` if given (it must exist), else the first config file
    /// found in the usual places, else defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::from_file(path),
            None => match find_config_file() {
                Some(path) => Self::from_file(&path),
                None => Ok(Self::default()),
            },
        }
    }
}

pub fn get_config_dir() -> PathBuf {
    let config_home = dirs::config_dir().unwrap_or_else(|| {
        let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
        PathBuf::from(home).join(".config")
    });
    config_home.join("jotpad")
}

pub fn find_config_file() -> Option<PathBuf> {
    let mut paths = vec![get_config_dir().join("config.toml")];
    if let Some(home) = dirs::home_dir() {
        paths.push(home.join(".jotpad").join("config.toml"));
    }

    paths.into_iter().find(|p| p.exists())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_full_config() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "theme = \"dark\"\ndefault_dir = \"/srv/notes\"\n").unwrap();

        let config = EditorConfig::load(Some(&path)).unwrap();
        assert_eq!(config.theme.as_deref(), Some("dark"));
        assert_eq!(config.default_dir, Some(PathBuf::from("/srv/notes")));
    }

    #[test]
    fn test_empty_config_is_default() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "").unwrap();
        assert_eq!(EditorConfig::from_file(&path).unwrap(), EditorConfig::default());
    }

    #[test]
    fn test_unknown_key_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "font = \"Arial\"\n").unwrap();
        let err = EditorConfig::from_file(&path).unwrap_err();
        assert!(err.to_string().contains("Invalid config format"));
    }

    #[test]
    fn test_missing_explicit_config_is_error() {
        let dir = TempDir::new().unwrap();
        let err = EditorConfig::load(Some(&dir.path().join("nope.toml"))).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }

    #[test]
    fn test_config_dir_name() {
        assert!(get_config_dir().ends_with("jotpad"));
    }
}
