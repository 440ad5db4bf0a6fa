//! Show the configured periods.

use crate::app::AppContext;
use crate::cli::ShowArgs;
use crate::output::{ensure_json_exclusive, parse_output_format, OutputFormat};

pub fn run(ctx: &AppContext, args: &ShowArgs) -> anyhow::Result<()> {
    let session = ctx.open_session()?;
    let schedule = session.schedule();

    let format = parse_output_format(args.format.as_deref())?;
    ensure_json_exclusive(args.json, format)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(schedule)?);
        return Ok(());
    }

    if schedule.period_definitions.is_empty() {
        if !ctx.quiet() {
            println!("No periods configured.");
        }
        return Ok(());
    }

    match format.unwrap_or(OutputFormat::Table) {
        OutputFormat::Table => {
            if !ctx.quiet() {
                println!("NO. | NAME | KIND | MINUTES");
            }
            for definition in &schedule.period_definitions {
                println!(
                    "{} | {} | {} | {}",
                    definition.period, definition.name, definition.kind, definition.duration_minutes
                );
            }
        }
        OutputFormat::Plain => {
            for definition in &schedule.period_definitions {
                println!(
                    "{} {} {} {}",
                    definition.period, definition.kind, definition.duration_minutes, definition.name
                );
            }
        }
    }
    Ok(())
}
