// crates/stamp-cli/src/commands/page.rs - Page Selection Command
//
// `stamp page` lists the pages of the active notebook and asks which one to
// use. The answer may be:
// - the name of an existing page      -> switch to it
// - the number shown next to a page   -> switch to that page
// - anything else                     -> create a new page with that name
// - nothing                           -> create a page named after the current time

use anyhow::Result;

use crate::context::{Context, PAGE_PROMPT};
use crate::services::notebook::{clean_page_name, new_page_name};
use crate::stdin;

/// Switch the active page, creating the page file if needed
pub fn handle(ctx: &mut Context, name: Option<String>) -> Result<()> {
    let notebook = ctx.ensure_notebook()?;

    let name = match name {
        Some(name) => clean_page_name(&name)?,
        None => {
            let pages = notebook.list_pages();
            print_pages(&pages);
            choose_page(&pages, &stdin::prompt_line(PAGE_PROMPT)?)?
        }
    };

    notebook.page(&name).create()?;
    ctx.switch_page(&name)?;

    println!("Page changed to {}", name);
    Ok(())
}

fn print_pages(pages: &[String]) {
    if pages.is_empty() {
        println!("(no pages yet)");
        return;
    }

    println!("Existing pages:");
    for (i, page) in pages.iter().enumerate() {
        println!("[{}] {}", i + 1, page);
    }
}

/// Resolve a prompt answer against the listed pages
///
/// An exact name wins over a list number, so a page called "2" stays reachable.
fn choose_page(pages: &[String], answer: &str) -> Result<String> {
    let answer = answer.trim();

    if pages.iter().any(|page| page == answer) {
        return Ok(answer.to_string());
    }

    let listed = answer
        .parse::<usize>()
        .ok()
        .and_then(|n| n.checked_sub(1))
        .and_then(|i| pages.get(i));

    match listed {
        Some(page) => Ok(page.clone()),
        None => new_page_name(answer),
    }
}
