use anyhow::Result;

use super::CommandContext;

pub fn handle_path(ctx: &CommandContext) -> Result<()> {
    println!("{}", ctx.log.path().display());
    Ok(())
}
