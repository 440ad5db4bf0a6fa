//! Show the derived wall-clock schedule.

use crate::app::AppContext;
use crate::cli::TimesArgs;

pub fn run(ctx: &AppContext, args: &TimesArgs) -> anyhow::Result<()> {
    let session = ctx.open_session()?;
    let timed = session.clock_times();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&timed)?);
        return Ok(());
    }

    if timed.is_empty() {
        if !ctx.quiet() {
            println!("No periods configured.");
        }
        return Ok(());
    }

    if !ctx.quiet() {
        println!("NO. | NAME | KIND | START | END");
    }
    for entry in &timed {
        println!(
            "{} | {} | {} | {} | {}",
            entry.period,
            entry.name,
            entry.kind,
            entry.start.format("%H:%M"),
            entry.end.format("%H:%M")
        );
    }
    Ok(())
}
