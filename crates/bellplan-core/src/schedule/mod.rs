//! The period-schedule data model.
//!
//! - **types**: the serde data model the profile store persists
//! - **model**: structural edits and validation on `ScheduleConfig`
//! - **times**: derived clock times and summary aggregation

mod model;
mod times;
mod types;

pub use model::{Direction, PeriodField, ValidationOutcome};
pub use times::{compute_clock_times, summarize, ScheduleSummary, TimedPeriod};
pub use types::{BreakDefinition, NewPeriod, PeriodDefinition, PeriodKind, ScheduleConfig};
