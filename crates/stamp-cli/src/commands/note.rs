// crates/stamp-cli/src/commands/note.rs - New Note Command
//
// `stamp - <text>` is the command people type most, so it does whatever it
// takes to land the note: on a terminal it asks for a notebook and page when
// none is active. When stdin is piped there is nobody to ask and a missing
// selection is an error instead.

use anyhow::Result;

use crate::context::Context;
use crate::output;
use crate::stdin;

/// Append a note to the active page
pub fn handle(ctx: &mut Context, text: Option<String>) -> Result<()> {
    let text = stdin::read_note_text(text)?;

    let notebook = ctx.ensure_notebook()?;
    let page = ctx.ensure_page(&notebook)?;

    let timestamp = page.append(&text)?;

    println!("{}", output::success_line(&page.name(), &timestamp, &text));
    Ok(())
}
