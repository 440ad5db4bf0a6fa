use clap::{Args, Parser, Subcommand};

use bellplan_core::VERSION;

/// Bellplan - edit a school's daily period schedule from the command line
#[derive(Parser)]
#[command(name = "bellplan")]
#[command(author, version = VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the school profile file
    #[arg(short, long, global = true, env = "BELLPLAN_PROFILE")]
    pub profile: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Quiet mode (minimal output)
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

/// Arguments for the `init` command
#[derive(Args)]
pub struct InitArgs {
    /// Path where the profile will be created
    #[arg(value_name = "PATH")]
    pub path: Option<String>,

    /// School display name
    #[arg(long)]
    pub school: Option<String>,
}

/// Arguments for the `show` command
#[derive(Args)]
pub struct ShowArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Output format (table, plain)
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<String>,
}

/// Arguments for the `add` command
#[derive(Args)]
pub struct AddArgs {
    /// Period kind (class, assembly, break)
    #[arg(value_name = "KIND")]
    pub kind: String,

    /// Period name (kind default used when omitted)
    #[arg(long)]
    pub name: Option<String>,

    /// Duration in minutes (profile default used when omitted)
    #[arg(long, value_name = "MINUTES")]
    pub duration: Option<u32>,
}

/// Arguments for the `remove` command
#[derive(Args)]
pub struct RemoveArgs {
    /// Zero-based position of the period to remove
    #[arg(value_name = "INDEX")]
    pub index: usize,
}

/// Arguments for the `move` command
#[derive(Args)]
pub struct MoveArgs {
    /// Zero-based position of the period to move
    #[arg(value_name = "INDEX")]
    pub index: usize,

    /// Direction (up, down)
    #[arg(value_name = "DIRECTION")]
    pub direction: String,
}

/// Arguments for the `set` command
#[derive(Args)]
pub struct SetArgs {
    /// Zero-based position of the period to edit
    #[arg(value_name = "INDEX")]
    pub index: usize,

    /// Field to set (period, duration, name, kind)
    #[arg(value_name = "FIELD")]
    pub field: String,

    /// New value
    #[arg(value_name = "VALUE")]
    pub value: String,
}

/// Arguments for the `config` command
#[derive(Args)]
pub struct ConfigArgs {
    /// Wall-clock time the first period starts
    #[arg(long, value_name = "HH:MM")]
    pub day_start: Option<String>,

    /// Advisory upper bound on periods per day
    #[arg(long, value_name = "N")]
    pub total_periods: Option<String>,

    /// Default duration for new periods, in minutes
    #[arg(long, value_name = "MINUTES")]
    pub default_duration: Option<String>,
}

/// Arguments for the `times` command
#[derive(Args)]
pub struct TimesArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `summary` command
#[derive(Args)]
pub struct SummaryArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize a new school profile
    Init(InitArgs),

    /// Show the configured periods
    Show(ShowArgs),

    /// Append a period to the schedule
    Add(AddArgs),

    /// Remove a period by index
    Remove(RemoveArgs),

    /// Move a period up or down one position
    Move(MoveArgs),

    /// Set one field of a period
    Set(SetArgs),

    /// Show or change profile settings
    Config(ConfigArgs),

    /// Renumber periods to match list order
    Reorder,

    /// Check numbering and name uniqueness, repairing numbering drift
    Validate,

    /// Show the derived wall-clock schedule
    Times(TimesArgs),

    /// Show totals and per-kind counts
    Summary(SummaryArgs),
}
