//! Initialize a new school profile.

use std::path::PathBuf;

use bellplan_core::JsonFileStore;

use crate::app::AppContext;
use crate::cli::InitArgs;

pub fn run(ctx: &AppContext, args: &InitArgs) -> anyhow::Result<()> {
    let path = match &args.path {
        Some(path) => PathBuf::from(path),
        None => ctx.profile_path()?,
    };
    let school = args.school.as_deref().unwrap_or("My School");

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .map_err(|e| anyhow::anyhow!("Failed to create {}: {}", parent.display(), e))?;
        }
    }
    JsonFileStore::create(&path, school)?;

    if !ctx.quiet() {
        println!("Initialized school profile at {}", path.display());
    }
    Ok(())
}
