use anyhow::{Context, Result, bail};
use bookdeck_engine::DEFAULT_PAGE_SIZE;
use bookdeck_types::Theme;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Resolve the workspace data directory path based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. BOOKDECK_PATH environment variable (with tilde expansion)
/// 3. Platform data directory
/// 4. ~/.bookdeck (fallback for systems without a data directory)
pub fn resolve_workspace_path(explicit_path: Option<&str>) -> Result<PathBuf> {
    if let Some(path) = explicit_path {
        return Ok(expand_tilde(path));
    }

    if let Ok(env_path) = std::env::var("BOOKDECK_PATH") {
        return Ok(expand_tilde(&env_path));
    }

    if let Some(data_dir) = dirs::data_dir() {
        return Ok(data_dir.join("bookdeck"));
    }

    if let Some(home) = std::env::var_os("HOME") {
        return Ok(PathBuf::from(home).join(".bookdeck"));
    }

    bail!("could not determine workspace path: no HOME directory or platform data directory found")
}

/// Expand tilde (~) in paths to the user's home directory
fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = std::env::var_os("HOME")
    {
        return PathBuf::from(home).join(stripped);
    }
    PathBuf::from(path)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Catalog JSON file loaded at startup
    #[serde(default)]
    pub catalog: Option<PathBuf>,

    /// Books revealed per page
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    #[serde(default)]
    pub theme: Theme,
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog: None,
            page_size: DEFAULT_PAGE_SIZE,
            theme: Theme::Day,
        }
    }
}

impl Config {
    /// Missing file yields the defaults; a present file must parse
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("failed to parse config {}", path.display()))?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)
            .with_context(|| format!("failed to write config {}", path.display()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let config = Config::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.page_size, DEFAULT_PAGE_SIZE);
        assert_eq!(config.theme, Theme::Day);
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");

        let config = Config {
            catalog: Some(PathBuf::from("/data/catalog.json")),
            page_size: 12,
            theme: Theme::Night,
        };
        config.save_to(&path).unwrap();

        assert_eq!(Config::load_from(&path).unwrap(), config);
    }

    #[test]
    fn partial_config_fills_in_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "theme = \"night\"\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.theme, Theme::Night);
        assert_eq!(config.page_size, DEFAULT_PAGE_SIZE);
        assert!(config.catalog.is_none());
    }

    #[test]
    fn explicit_path_wins_over_environment() {
        let resolved = resolve_workspace_path(Some("/tmp/deck")).unwrap();
        assert_eq!(resolved, PathBuf::from("/tmp/deck"));
    }
}
