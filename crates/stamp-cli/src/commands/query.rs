// crates/stamp-cli/src/commands/query.rs - Read-Only Page Commands
//
// foot, show, notetime, timenote and search all read the active page once
// and hand the rows to a filter from `stamp_core::query`. None of them
// prompt: a missing notebook or page is reported, not created.

use anyhow::Result;
use stamp_core::query::{self, Selection, TimeQuery};
use stamp_core::{Note, StampError};
use tracing::debug;

use crate::context::Context;
use crate::output;

/// Rows of the active page
fn active_notes(ctx: &Context) -> Result<Vec<Note>> {
    let page = ctx.active_page()?;
    let notes = page.read_all()?;
    debug!(page = %page.path().display(), rows = notes.len(), "page loaded");
    Ok(notes)
}

/// `foot [N|all]` and `show head|foot|all|N|N to M`
pub fn show(ctx: &Context, selection: Selection) -> Result<()> {
    let notes = active_notes(ctx)?;

    if let Selection::Single(index) = selection {
        if index > notes.len() {
            return Err(out_of_range(index, notes.len()));
        }
    }

    output::print_notes(query::select(&notes, selection));
    Ok(())
}

/// `notetime X`: timestamp of note X
pub fn note_time(ctx: &Context, index: usize) -> Result<()> {
    let notes = active_notes(ctx)?;
    let note = query::nth(&notes, index).ok_or_else(|| out_of_range(index, notes.len()))?;

    println!("{}", note.timestamp);
    Ok(())
}

/// `timenote Y` / `timenote Y to Z`
pub fn time_note(ctx: &Context, time_query: &TimeQuery) -> Result<()> {
    let notes = active_notes(ctx)?;
    output::print_notes(query::search_time(&notes, time_query));
    Ok(())
}

/// `search <keyword>`
pub fn search(ctx: &Context, keyword: &str) -> Result<()> {
    let notes = active_notes(ctx)?;
    output::print_notes(query::search_text(&notes, keyword));
    Ok(())
}

fn out_of_range(index: usize, count: usize) -> anyhow::Error {
    StampError::NotFound(format!(
        "note index {} out of range (page has {} notes)",
        index, count
    ))
    .into()
}
