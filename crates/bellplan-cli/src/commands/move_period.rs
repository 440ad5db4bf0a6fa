//! Move a period up or down one position.

use bellplan_core::Direction;

use crate::app::AppContext;
use crate::cli::MoveArgs;

pub fn run(ctx: &AppContext, args: &MoveArgs) -> anyhow::Result<()> {
    let direction: Direction = args.direction.parse()?;

    let mut session = ctx.open_session()?;
    let moved = session.move_period(args.index, direction)?;

    if moved {
        session.save()?;
        if !ctx.quiet() {
            let target = match direction {
                Direction::Up => args.index - 1,
                Direction::Down => args.index + 1,
            };
            println!("Moved period from index {} to index {}", args.index, target);
        }
    } else if !ctx.quiet() {
        let edge = match direction {
            Direction::Up => "top",
            Direction::Down => "bottom",
        };
        println!("Period is already at the {edge}; nothing to do");
    }
    Ok(())
}
