use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const DEFAULT_NOTIFICATION_TTL_SECS: u64 = 4;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Base URL of the board API, e.g. `https://boards.example.com`.
    #[serde(default)]
    pub api_base_url: Option<String>,
    /// Workspace used when none is given on the command line.
    #[serde(default)]
    pub workspace_id: Option<String>,
    /// `kanban` or `list`.
    #[serde(default)]
    pub default_view: Option<String>,
    #[serde(default)]
    pub notification_ttl_secs: Option<u64>,
}

impl AppConfig {
    pub fn config_path() -> Option<PathBuf> {
        #[cfg(target_os = "macos")]
        {
            dirs::home_dir().map(|home| home.join(".config/taskboard/config.toml"))
        }
        #[cfg(target_os = "linux")]
        {
            dirs::config_dir().map(|config| config.join("taskboard/config.toml"))
        }
        #[cfg(target_os = "windows")]
        {
            dirs::config_dir().map(|config| config.join("taskboard\\config.toml"))
        }
        #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
        {
            None
        }
    }

    pub fn load() -> Self {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Self::default(),
        }
    }

    /// Reads a config file, falling back to defaults when it is missing or malformed.
    pub fn load_from(path: &Path) -> Self {
        if path.exists() {
            if let Ok(content) = std::fs::read_to_string(path) {
                if let Ok(config) = toml::from_str(&content) {
                    return config;
                }
            }
        }
        Self::default()
    }

    pub fn effective_default_view(&self) -> &str {
        self.default_view.as_deref().unwrap_or("kanban")
    }

    pub fn effective_notification_ttl_secs(&self) -> u64 {
        self.notification_ttl_secs
            .unwrap_or(DEFAULT_NOTIFICATION_TTL_SECS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.effective_default_view(), "kanban");
        assert_eq!(config.effective_notification_ttl_secs(), 4);
        assert!(config.api_base_url.is_none());
    }

    #[test]
    fn test_parse_partial_toml() {
        let config: AppConfig = toml::from_str(
            r#"
            api_base_url = "http://localhost:3000"
            default_view = "list"
            "#,
        )
        .unwrap();
        assert_eq!(config.api_base_url.as_deref(), Some("http://localhost:3000"));
        assert_eq!(config.effective_default_view(), "list");
        assert!(config.workspace_id.is_none());
    }

    #[test]
    fn test_load_from_missing_file_falls_back() {
        let config = AppConfig::load_from(Path::new("/nonexistent/taskboard/config.toml"));
        assert!(config.default_view.is_none());
    }
}
