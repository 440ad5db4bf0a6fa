//! # Bellplan Core
//!
//! Core library for Bellplan - a school period-schedule (bell schedule)
//! editor.
//!
//! This crate provides the schedule data model, its consistency rules, and
//! the profile-store abstraction independent of the CLI interface.
//!
//! ## Architecture
//!
//! - **schedule**: period definitions, structural edits, validation, and
//!   derived clock times
//! - **store**: profile store trait and the JSON-file / in-memory backends
//! - **session**: the Loaded/Dirty edit-session lifecycle
//! - **error**: the error taxonomy shared by all of the above

pub mod error;
pub mod schedule;
pub mod session;
pub mod store;

pub use error::{Result, ScheduleError};
pub use schedule::{
    compute_clock_times, summarize, BreakDefinition, Direction, NewPeriod, PeriodDefinition,
    PeriodField, PeriodKind, ScheduleConfig, ScheduleSummary, TimedPeriod, ValidationOutcome,
};
pub use session::{EditSession, SessionState};
pub use store::{InMemoryStore, JsonFileStore, ProfileStore};

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
