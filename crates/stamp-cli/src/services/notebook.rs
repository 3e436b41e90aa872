// crates/stamp-cli/src/services/notebook.rs - Notebook Directory Service
//
// This service handles the file system side of notebooks: turning what the
// user typed into a usable directory, and discovering the pages inside it.
// It knows HOW to touch the disk; the commands decide WHEN.

use anyhow::{Context as AnyhowContext, Result};
use chrono::Local;
use stamp_core::config::page_file;
use stamp_core::page::PAGE_EXTENSION;
use stamp_core::{Page, StampError};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Name given to a page when the prompt is answered with nothing
const GENERATED_PAGE_FORMAT: &str = "%Y-%m-%d_%H%M%S";

/// A notebook directory and the pages inside it
pub struct NotebookService {
    path: PathBuf,
}

impl NotebookService {
    /// Wrap an existing notebook directory. The path is not validated.
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Create (if needed) and open the notebook at a user-supplied path
    ///
    /// PATH HANDLING:
    /// - A leading `~` is expanded to the home directory
    /// - Missing directories are created, parents included
    /// - The stored path is canonical, so it survives a change of working directory
    pub fn open_or_create(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(StampError::usage("no notebook path supplied").into());
        }

        let expanded = expand_home(trimmed)?;
        fs::create_dir_all(&expanded)
            .with_context(|| format!("Failed to create notebook: {}", expanded.display()))?;

        let path = expanded
            .canonicalize()
            .with_context(|| format!("Failed to resolve notebook: {}", expanded.display()))?;

        debug!(notebook = %path.display(), "notebook ready");
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Page `name` in this notebook (not created)
    pub fn page(&self, name: &str) -> Page {
        Page::in_notebook(&self.path, name)
    }

    /// Whether a page file called `name` exists
    pub fn has_page(&self, name: &str) -> bool {
        page_file(&self.path, name).is_file()
    }

    /// Names of all pages, sorted
    ///
    /// Returns an empty list if the notebook cannot be read; only `*.csv`
    /// files directly inside the notebook count as pages.
    pub fn list_pages(&self) -> Vec<String> {
        let Ok(entries) = fs::read_dir(&self.path) else {
            return Vec::new();
        };

        let mut pages: Vec<String> = entries
            .flatten()
            .map(|entry| entry.path())
            .filter(|path| path.is_file())
            .filter(|path| path.extension().is_some_and(|ext| ext == PAGE_EXTENSION))
            .filter_map(|path| path.file_stem().map(|s| s.to_string_lossy().into_owned()))
            .collect();

        pages.sort();
        pages
    }
}

/// Normalize a page name typed by the user
///
/// A trailing `.csv` is dropped. Names that would escape the notebook
/// directory are rejected.
pub fn clean_page_name(input: &str) -> Result<String> {
    let name = input.trim();
    let name = name
        .strip_suffix(&format!(".{}", PAGE_EXTENSION))
        .unwrap_or(name)
        .trim();

    if name.is_empty() {
        return Err(StampError::usage("page name is empty").into());
    }
    if name == "." || name == ".." || name.contains(['/', '\\']) {
        return Err(StampError::usage(format!(
            "invalid page name '{}': must not contain path separators",
            name
        ))
        .into());
    }

    Ok(name.to_string())
}

/// Page name from a prompt answer; an empty answer gets a timestamp name
pub fn new_page_name(answer: &str) -> Result<String> {
    if answer.trim().is_empty() {
        return Ok(Local::now().format(GENERATED_PAGE_FORMAT).to_string());
    }
    clean_page_name(answer)
}

fn expand_home(input: &str) -> Result<PathBuf> {
    let rest = match input.strip_prefix('~') {
        Some(rest) if rest.is_empty() || rest.starts_with('/') => rest.trim_start_matches('/'),
        _ => return Ok(PathBuf::from(input)),
    };

    let home = dirs::home_dir()
        .ok_or_else(|| StampError::NotFound("cannot determine home directory".to_string()))?;

    Ok(if rest.is_empty() { home } else { home.join(rest) })
}
