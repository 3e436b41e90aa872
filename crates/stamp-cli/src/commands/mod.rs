// crates/stamp-cli/src/commands/mod.rs - Command Handler Modules
//
// One module per command family:
// - note: append a timestamped note
// - notebook / page: change the active selection
// - active: print the active selection
// - query: read-only views of the active page (foot, show, notetime, timenote, search)

use anyhow::Result;
use stamp_core::Command;

use crate::cli::COMMANDS_HELP;
use crate::context::Context;

pub mod active;
pub mod note;
pub mod notebook;
pub mod page;
pub mod query;

/// Run a routed command against the context
pub fn dispatch(ctx: &mut Context, command: Command) -> Result<()> {
    match command {
        Command::Help => dispatch_help(),
        Command::Note { text } => note::handle(ctx, text),
        Command::Notebook { path } => notebook::handle(ctx, path),
        Command::Page { name } => page::handle(ctx, name),
        Command::Active => active::handle(ctx),
        Command::Show(selection) => query::show(ctx, selection),
        Command::NoteTime(index) => query::note_time(ctx, index),
        Command::TimeNote(time_query) => query::time_note(ctx, &time_query),
        Command::Search(keyword) => query::search(ctx, &keyword),
    }
}

/// Print the command list. Needs no config.
pub fn dispatch_help() -> Result<()> {
    println!("{}", COMMANDS_HELP);
    Ok(())
}
