//! Show or change profile settings.

use crate::app::AppContext;
use crate::cli::ConfigArgs;
use crate::helpers::parse_time;

pub fn run(ctx: &AppContext, args: &ConfigArgs) -> anyhow::Result<()> {
    let mut session = ctx.open_session()?;

    let mut changed = false;
    if let Some(value) = &args.day_start {
        session.set_day_start_time(parse_time(value)?);
        changed = true;
    }
    if let Some(value) = &args.total_periods {
        session.set_total_periods_per_day(value)?;
        changed = true;
    }
    if let Some(value) = &args.default_duration {
        session.set_default_period_duration(value)?;
        changed = true;
    }

    if changed {
        session.save()?;
        if !ctx.quiet() {
            println!("Updated profile settings");
        }
        return Ok(());
    }

    let schedule = session.schedule();
    println!(
        "day_start_time={}",
        schedule.day_start_time.format("%H:%M")
    );
    println!("total_periods_per_day={}", schedule.total_periods_per_day);
    println!(
        "default_period_duration_minutes={}",
        schedule.default_period_duration_minutes
    );
    Ok(())
}
