//! Remove a period by index.

use crate::app::AppContext;
use crate::cli::RemoveArgs;

pub fn run(ctx: &AppContext, args: &RemoveArgs) -> anyhow::Result<()> {
    let mut session = ctx.open_session()?;
    let removed = session.remove_period(args.index)?;
    session.save()?;

    if !ctx.quiet() {
        println!(
            "Removed {} \"{}\" (period {})",
            removed.kind, removed.name, removed.period
        );
    }
    Ok(())
}
