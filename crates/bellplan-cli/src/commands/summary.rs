//! Show totals and per-kind counts.

use crate::app::AppContext;
use crate::cli::SummaryArgs;

pub fn run(ctx: &AppContext, args: &SummaryArgs) -> anyhow::Result<()> {
    let session = ctx.open_session()?;
    let summary = session.summary();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    println!("total={}", summary.total);
    println!("class={}", summary.class_periods);
    println!("assembly={}", summary.assembly_periods);
    println!("break={}", summary.break_periods);
    println!("total_duration_minutes={}", summary.total_duration_minutes);
    println!(
        "total_periods_per_day={}",
        session.schedule().total_periods_per_day
    );
    Ok(())
}
