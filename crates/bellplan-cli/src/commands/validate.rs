//! Check numbering and name uniqueness.
//!
//! Numbering drift is repaired and persisted; duplicate names are a hard
//! failure the user must resolve before the profile can be saved again.

use bellplan_core::ValidationOutcome;

use crate::app::AppContext;

pub fn run(ctx: &AppContext) -> anyhow::Result<()> {
    let mut session = ctx.open_session()?;

    let outcome = session.validate();
    let duplicate_names = session.validate_names();

    match &outcome {
        ValidationOutcome::Clean => {
            if !ctx.quiet() {
                println!("Period numbering: clean");
            }
        }
        ValidationOutcome::Fixed { duplicates } => {
            // The repair can only be persisted once names are unique.
            if duplicate_names.is_empty() {
                session.save()?;
            }
            if !ctx.quiet() {
                let numbers: Vec<String> = duplicates.iter().map(u32::to_string).collect();
                println!(
                    "Period numbering: fixed (duplicate numbers: {})",
                    numbers.join(", ")
                );
            }
        }
    }

    if !duplicate_names.is_empty() {
        return Err(anyhow::anyhow!(
            "Duplicate period names: {}",
            duplicate_names.join(", ")
        ));
    }
    if !ctx.quiet() {
        println!("Period names: unique");
    }
    Ok(())
}
