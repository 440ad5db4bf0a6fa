//! Bellplan CLI - edit a school's daily period schedule from the command
//! line.
//!
//! This is the command-line interface for Bellplan. It provides a
//! user-friendly surface over the core library: each subcommand opens the
//! profile, applies one operation, and saves.

mod app;
mod cli;
mod commands;
mod config;
mod helpers;
mod output;

use clap::Parser;

use bellplan_core::VERSION;

use app::AppContext;
use cli::{Cli, Commands};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let ctx = AppContext::new(&cli);

    match &cli.command {
        Some(Commands::Init(args)) => commands::init::run(&ctx, args),
        Some(Commands::Show(args)) => commands::show::run(&ctx, args),
        Some(Commands::Add(args)) => commands::add::run(&ctx, args),
        Some(Commands::Remove(args)) => commands::remove::run(&ctx, args),
        Some(Commands::Move(args)) => commands::move_period::run(&ctx, args),
        Some(Commands::Set(args)) => commands::set::run(&ctx, args),
        Some(Commands::Config(args)) => commands::config::run(&ctx, args),
        Some(Commands::Reorder) => commands::reorder::run(&ctx),
        Some(Commands::Validate) => commands::validate::run(&ctx),
        Some(Commands::Times(args)) => commands::times::run(&ctx, args),
        Some(Commands::Summary(args)) => commands::summary::run(&ctx, args),
        None => {
            println!("Bellplan v{}", VERSION);
            println!("\nRun `bellplan --help` for usage information.");
            Ok(())
        }
    }
}
