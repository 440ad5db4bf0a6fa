//! Renumber periods to match list order.

use crate::app::AppContext;

pub fn run(ctx: &AppContext) -> anyhow::Result<()> {
    let mut session = ctx.open_session()?;
    session.reorder();
    session.save()?;

    if !ctx.quiet() {
        println!(
            "Renumbered {} periods sequentially",
            session.schedule().period_definitions.len()
        );
    }
    Ok(())
}
