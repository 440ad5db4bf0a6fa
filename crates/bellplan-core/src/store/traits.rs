//! Profile store trait definition.
//!
//! The `ProfileStore` trait is the persistence boundary for a school's
//! period schedule. The schedule is loaded whole, edited in memory, and
//! written back whole; there is no partial update.

use crate::error::Result;
use crate::schedule::ScheduleConfig;

/// Persistence interface for the schedule portion of a school profile.
///
/// All implementations must ensure:
/// - `save_schedule` replaces the stored document in one atomic step
/// - the pre-save check (`ScheduleConfig::ensure_saveable`) runs on every
///   save, so duplicate names and non-positive durations never persist
/// - the stored break list is derived from the `kind = break` periods
pub trait ProfileStore {
    /// Fetch the currently persisted schedule.
    ///
    /// Absence of a prior configuration is signaled by returning a default
    /// config with an empty period list, not by an error.
    ///
    /// # Errors
    ///
    /// Returns `ScheduleError::Storage` if the backing document cannot be
    /// read, or `ScheduleError::Validation` if it cannot be parsed.
    fn fetch_schedule(&self) -> Result<ScheduleConfig>;

    /// Replace the persisted schedule with `config`.
    ///
    /// # Returns
    ///
    /// The canonical stored copy (with the derived break list), which the
    /// caller should adopt as its new loaded state.
    ///
    /// # Errors
    ///
    /// Returns `ScheduleError::DuplicateNames` or `ScheduleError::Validation`
    /// when `config` fails the pre-save check, and `ScheduleError::Storage`
    /// when persisting fails. On error nothing is stored.
    fn save_schedule(&mut self, config: &ScheduleConfig) -> Result<ScheduleConfig>;
}
