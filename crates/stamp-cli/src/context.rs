use anyhow::Result;
use stamp_core::{Config, ConfigStore, Page, StampError};
use std::path::PathBuf;
use tracing::{debug, warn};

use crate::services::NotebookService;
use crate::services::notebook::new_page_name;
use crate::stdin;

pub const NOTEBOOK_PROMPT: &str = "provide file-path to your notebook (folder)";
pub const PAGE_PROMPT: &str = "name of new page";

/// Application context that gets passed to command handlers
///
/// Holds the loaded config and the store it came from, so handlers can
/// change the active notebook/page and persist it. There is no other
/// process-wide state.
pub struct Context {
    store: ConfigStore,
    config: Config,
}

impl Context {
    /// Locate and load the config
    ///
    /// A corrupt config file is logged and treated as empty rather than
    /// aborting: the next notebook/page switch overwrites it.
    pub fn new(config_path: Option<PathBuf>) -> Result<Self> {
        let store = ConfigStore::locate(config_path)?;
        debug!(path = %store.path().display(), "using config file");

        let config = match store.load() {
            Ok(config) => config,
            Err(err @ StampError::ConfigCorrupt { .. }) => {
                warn!("{}; treating notebook and page as unset", err);
                Config::default()
            }
            Err(err) => return Err(err.into()),
        };

        Ok(Self { store, config })
    }

    #[cfg(test)]
    pub fn with_config(store: ConfigStore, config: Config) -> Self {
        Self { store, config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Make `notebook` active (clearing the page) and persist the change
    pub fn switch_notebook(&mut self, notebook: &NotebookService) -> Result<()> {
        self.config.set_notebook(notebook.path().to_path_buf());
        self.store.save(&self.config)?;
        Ok(())
    }

    /// Make page `name` active and persist the change
    pub fn switch_page(&mut self, name: &str) -> Result<()> {
        self.config.set_page(name);
        self.store.save(&self.config)?;
        Ok(())
    }

    /// Active notebook, which must already exist on disk
    pub fn active_notebook(&self) -> Result<NotebookService> {
        let Some(path) = self.config.notebook() else {
            return Err(StampError::NotFound(
                "no active notebook; run 'stamp notebook' to choose one".to_string(),
            )
            .into());
        };

        if !path.is_dir() {
            return Err(StampError::NotFound(format!(
                "notebook {} does not exist; run 'stamp notebook' to choose one",
                path.display()
            ))
            .into());
        }

        Ok(NotebookService::new(path.to_path_buf()))
    }

    /// Active page for read-only commands. Never prompts.
    pub fn active_page(&self) -> Result<Page> {
        let notebook = self.active_notebook()?;
        let Some(name) = self.config.page() else {
            return Err(StampError::NotFound(
                "no active page; run 'stamp page' to choose one".to_string(),
            )
            .into());
        };
        Ok(notebook.page(name))
    }

    /// Active notebook, asking for one on a terminal when it is unset or gone
    pub fn ensure_notebook(&mut self) -> Result<NotebookService> {
        match self.active_notebook() {
            Ok(notebook) => Ok(notebook),
            Err(err) if !stdin::is_interactive() => Err(err),
            Err(err) => {
                debug!("{:#}", err);
                let answer = stdin::prompt_line(NOTEBOOK_PROMPT)?;
                let notebook = NotebookService::open_or_create(&answer)?;
                self.switch_notebook(&notebook)?;
                Ok(notebook)
            }
        }
    }

    /// Active page file, asking for a page on a terminal when it is unset or missing
    pub fn ensure_page(&mut self, notebook: &NotebookService) -> Result<Page> {
        if let Some(name) = self.config.page() {
            if notebook.has_page(name) {
                return Ok(notebook.page(name));
            }
        }

        if !stdin::is_interactive() {
            return Err(StampError::NotFound(match self.config.page() {
                Some(name) => format!(
                    "page '{}' does not exist in {}; run 'stamp page' to choose one",
                    name,
                    notebook.path().display()
                ),
                None => "no active page; run 'stamp page' to choose one".to_string(),
            })
            .into());
        }

        let name = new_page_name(&stdin::prompt_line(PAGE_PROMPT)?)?;
        let page = notebook.page(&name);
        page.create()?;
        self.switch_page(&name)?;
        Ok(page)
    }
}
