use anyhow::Result;

use crate::context::{Context, NOTEBOOK_PROMPT};
use crate::services::NotebookService;
use crate::stdin;

/// Switch the active notebook, creating the directory if needed
///
/// The page selection is cleared: page names belong to a notebook.
pub fn handle(ctx: &mut Context, path: Option<String>) -> Result<()> {
    let path = match path {
        Some(path) => path,
        None => stdin::prompt_line(NOTEBOOK_PROMPT)?,
    };

    let notebook = NotebookService::open_or_create(&path)?;
    ctx.switch_notebook(&notebook)?;

    println!("Notebook changed to {}", notebook.path().display());
    Ok(())
}
