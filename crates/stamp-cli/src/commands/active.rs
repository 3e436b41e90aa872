use anyhow::Result;

use crate::context::Context;

const UNSET: &str = "<unset>";

/// Print the active notebook and page
pub fn handle(ctx: &Context) -> Result<()> {
    let config = ctx.config();
    let notebook = config
        .notebook()
        .map(|path| path.display().to_string())
        .unwrap_or_else(|| UNSET.to_string());
    let page = config.page().unwrap_or(UNSET);

    println!("Active notebook: {}", notebook);
    println!("Active page: {}", page);
    Ok(())
}
