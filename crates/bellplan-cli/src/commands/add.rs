//! Append a period to the schedule.

use bellplan_core::{NewPeriod, PeriodKind};

use crate::app::AppContext;
use crate::cli::AddArgs;

pub fn run(ctx: &AppContext, args: &AddArgs) -> anyhow::Result<()> {
    let kind: PeriodKind = args.kind.parse()?;

    let mut new = NewPeriod::new(kind);
    if let Some(name) = &args.name {
        new = new.with_name(name);
    }
    if let Some(duration) = args.duration {
        new = new.with_duration(duration);
    }

    let mut session = ctx.open_session()?;
    let index = session.add_period(new);
    session.save()?;

    if !ctx.quiet() {
        let definition = &session.schedule().period_definitions[index];
        println!(
            "Added {} \"{}\" ({} min) as period {}",
            definition.kind, definition.name, definition.duration_minutes, definition.period
        );
    }
    Ok(())
}
