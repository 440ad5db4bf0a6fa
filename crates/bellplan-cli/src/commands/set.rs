//! Set one field of a period.

use bellplan_core::PeriodField;

use crate::app::AppContext;
use crate::cli::SetArgs;

pub fn run(ctx: &AppContext, args: &SetArgs) -> anyhow::Result<()> {
    let field: PeriodField = args.field.parse()?;

    let mut session = ctx.open_session()?;
    session.update_field(args.index, field, &args.value)?;
    session.save()?;

    if !ctx.quiet() {
        let definition = &session.schedule().period_definitions[args.index];
        println!(
            "Updated {} of \"{}\" (index {})",
            args.field, definition.name, args.index
        );
    }
    Ok(())
}
