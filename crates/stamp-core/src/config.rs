// crates/stamp-core/src/config.rs - Configuration Store
//
// The config file is the only state shared between invocations: it records
// which notebook (directory) and which page (CSV file inside it) new notes
// go to. Everything else lives in the page files themselves.
//
// CONFIG LOCATION (highest to lowest priority):
// 1. Command-line argument (--config)
// 2. Environment variable (TIMESTAMPR_CONFIG)
// 3. ~/.timestampr/config.json
//
// FILE FORMAT:
// ```json
// {
//   "notebook_path": "/home/me/notes",
//   "active_page": "work"
// }
// ```
// Older files written with `notebook` / `page` keys are still readable.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{StampError, StampResult};
use crate::page::PAGE_EXTENSION;

/// Environment variable that overrides the config file location
pub const CONFIG_ENV: &str = "TIMESTAMPR_CONFIG";

/// Directory under the home directory holding the config file
pub const CONFIG_DIR_NAME: &str = ".timestampr";

/// Name of the config file inside `CONFIG_DIR_NAME`
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Active notebook and page selection
///
/// Both fields are optional: a fresh install has neither, and switching
/// notebooks clears the page because page names are per-notebook.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Absolute path of the active notebook directory
    #[serde(default, alias = "notebook")]
    pub notebook_path: Option<PathBuf>,

    /// Name of the active page, without the `.csv` extension
    #[serde(default, alias = "page")]
    pub active_page: Option<String>,
}

impl Config {
    /// Active notebook directory, if one is set
    pub fn notebook(&self) -> Option<&Path> {
        self.notebook_path.as_deref()
    }

    /// Active page name, if one is set
    pub fn page(&self) -> Option<&str> {
        self.active_page.as_deref().filter(|name| !name.is_empty())
    }

    /// Switch to a different notebook. The page selection is dropped.
    pub fn set_notebook(&mut self, path: PathBuf) {
        self.notebook_path = Some(path);
        self.active_page = None;
    }

    /// Switch the active page within the current notebook
    pub fn set_page<S: Into<String>>(&mut self, name: S) {
        self.active_page = Some(name.into());
    }
}

/// Path of page `name` inside `notebook`
pub fn page_file(notebook: &Path, name: &str) -> PathBuf {
    notebook.join(format!("{}.{}", name, PAGE_EXTENSION))
}

/// Reads and writes the config file at a fixed location
#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    /// Create a store for the config file at `path`
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Resolve the config location from the CLI flag, environment and home directory
    pub fn locate(explicit: Option<PathBuf>) -> StampResult<Self> {
        let from_env = std::env::var(CONFIG_ENV).ok();
        Self::locate_with(explicit, from_env)
    }

    /// Same as [`ConfigStore::locate`] with the environment value passed in
    pub fn locate_with(explicit: Option<PathBuf>, from_env: Option<String>) -> StampResult<Self> {
        if let Some(path) = explicit {
            debug!(path = %path.display(), "config location from command line");
            return Ok(Self::new(path));
        }

        if let Some(value) = from_env.filter(|v| !v.trim().is_empty()) {
            debug!(path = %value, "config location from {}", CONFIG_ENV);
            return Ok(Self::new(PathBuf::from(value)));
        }

        Ok(Self::new(Self::default_path()?))
    }

    /// `~/.timestampr/config.json`
    pub fn default_path() -> StampResult<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| StampError::NotFound("cannot determine home directory".to_string()))?;
        Ok(home.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Location of the config file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the config
    ///
    /// A missing file is not an error: it means nothing has been selected yet.
    /// A file that exists but does not parse is reported as `ConfigCorrupt`
    /// so the caller can warn before falling back to defaults.
    pub fn load(&self) -> StampResult<Config> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "no config file, using defaults");
            return Ok(Config::default());
        }

        let content =
            fs::read_to_string(&self.path).map_err(|e| StampError::io(&self.path, e))?;

        serde_json::from_str(&content).map_err(|e| StampError::ConfigCorrupt {
            path: self.path.clone(),
            reason: e.to_string(),
        })
    }

    /// Write the config, creating the parent directory if needed
    pub fn save(&self, config: &Config) -> StampResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| StampError::io(parent, e))?;
        }

        let mut content = serde_json::to_string_pretty(config).map_err(|e| {
            StampError::io(&self.path, std::io::Error::new(std::io::ErrorKind::InvalidData, e))
        })?;
        content.push('\n');

        fs::write(&self.path, content).map_err(|e| StampError::io(&self.path, e))?;
        debug!(path = %self.path.display(), "config saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store_in(temp: &TempDir) -> ConfigStore {
        ConfigStore::new(temp.path().join("cfg").join("config.json"))
    }

    #[test]
    fn test_missing_file_loads_defaults() {
        let temp = TempDir::new().unwrap();
        let config = store_in(&temp).load().unwrap();
        assert_eq!(config, Config::default());
        assert!(config.page().is_none());
    }

    #[test]
    fn test_save_creates_parent_and_round_trips() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp);

        let mut config = Config::default();
        config.set_notebook(temp.path().join("nb"));
        config.set_page("work");
        store.save(&config).unwrap();

        assert!(store.path().exists());
        assert_eq!(store.load().unwrap(), config);
    }

    #[test]
    fn test_corrupt_file_is_reported() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp);
        fs::create_dir_all(store.path().parent().unwrap()).unwrap();
        fs::write(store.path(), "{ not json").unwrap();

        assert!(matches!(store.load(), Err(StampError::ConfigCorrupt { .. })));
    }

    #[test]
    fn test_legacy_keys_are_accepted() {
        let config: Config =
            serde_json::from_str(r#"{"notebook": "/tmp/nb", "page": "p", "extra": 1}"#).unwrap();
        assert_eq!(config.notebook(), Some(Path::new("/tmp/nb")));
        assert_eq!(config.page(), Some("p"));
    }

    #[test]
    fn test_null_page_is_unset() {
        let config: Config =
            serde_json::from_str(r#"{"notebook_path": "/tmp/nb", "active_page": null}"#).unwrap();
        assert!(config.page().is_none());
    }

    #[test]
    fn test_switching_notebook_clears_page() {
        let mut config = Config::default();
        config.set_notebook(PathBuf::from("/a"));
        config.set_page("p");
        config.set_notebook(PathBuf::from("/b"));
        assert_eq!(config.notebook(), Some(Path::new("/b")));
        assert!(config.page().is_none());
    }

    #[test]
    fn test_locate_precedence() {
        let explicit = ConfigStore::locate_with(
            Some(PathBuf::from("/flag.json")),
            Some("/env.json".to_string()),
        )
        .unwrap();
        assert_eq!(explicit.path(), Path::new("/flag.json"));

        let env = ConfigStore::locate_with(None, Some("/env.json".to_string())).unwrap();
        assert_eq!(env.path(), Path::new("/env.json"));
    }
}
