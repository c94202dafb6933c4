use anyhow::Result;

use super::CommandContext;

pub fn handle_tui(ctx: CommandContext) -> Result<()> {
    let client = ctx.client()?;
    crate::tui::run_tui(ctx.config, client)?;
    Ok(())
}
