//! Edit-session lifecycle for a schedule config.
//!
//! A session owns the in-memory `ScheduleConfig` between a fetch and a
//! save. It has exactly two states: `Loaded` (matches the store) and
//! `Dirty` (edited locally). A failed save keeps the session `Dirty` with
//! its edits intact so the caller can retry; a successful save adopts the
//! store's canonical echo and re-enters `Loaded`.

use chrono::NaiveTime;

use crate::error::Result;
use crate::schedule::{
    compute_clock_times, summarize, Direction, NewPeriod, PeriodDefinition, PeriodField,
    ScheduleConfig, ScheduleSummary, TimedPeriod, ValidationOutcome,
};
use crate::store::ProfileStore;

/// Externally visible session state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Matches the persisted copy.
    Loaded,
    /// Edited locally, not yet persisted.
    Dirty,
}

/// One editing session over a schedule, bound to a profile store.
///
/// Mutations delegate to `ScheduleConfig` and mark the session dirty only
/// when they actually change the schedule; failed mutations leave both the
/// config and the state untouched.
#[derive(Debug)]
pub struct EditSession<S: ProfileStore> {
    store: S,
    config: ScheduleConfig,
    state: SessionState,
}

impl<S: ProfileStore> EditSession<S> {
    /// Fetch the schedule from `store` and start a session in `Loaded`.
    ///
    /// # Errors
    ///
    /// Propagates the store's fetch error.
    pub fn load(store: S) -> Result<Self> {
        let config = store.fetch_schedule()?;
        Ok(Self {
            store,
            config,
            state: SessionState::Loaded,
        })
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn schedule(&self) -> &ScheduleConfig {
        &self.config
    }

    /// Append a period; returns the index of the new entry.
    pub fn add_period(&mut self, new: NewPeriod) -> usize {
        let index = self.config.add_period(new);
        self.state = SessionState::Dirty;
        index
    }

    /// Remove the period at `index`, returning it.
    ///
    /// # Errors
    ///
    /// `ScheduleError::IndexOutOfRange`; the session stays clean.
    pub fn remove_period(&mut self, index: usize) -> Result<PeriodDefinition> {
        let removed = self.config.remove_period(index)?;
        self.state = SessionState::Dirty;
        Ok(removed)
    }

    /// Move the period at `index`; boundary no-ops do not dirty the session.
    ///
    /// # Errors
    ///
    /// `ScheduleError::IndexOutOfRange`; the session stays clean.
    pub fn move_period(&mut self, index: usize, direction: Direction) -> Result<bool> {
        let moved = self.config.move_period(index, direction)?;
        if moved {
            self.state = SessionState::Dirty;
        }
        Ok(moved)
    }

    /// Update one field from string input.
    ///
    /// # Errors
    ///
    /// `ScheduleError::IndexOutOfRange` or `ScheduleError::InvalidValue`;
    /// the session stays clean.
    pub fn update_field(&mut self, index: usize, field: PeriodField, value: &str) -> Result<()> {
        self.config.update_field(index, field, value)?;
        self.state = SessionState::Dirty;
        Ok(())
    }

    /// Normalize period numbering to list order.
    pub fn reorder(&mut self) {
        self.config.reorder();
        self.state = SessionState::Dirty;
    }

    /// Scan for duplicate period numbers, repairing them if found.
    /// Dirties the session only when something was repaired.
    pub fn validate(&mut self) -> ValidationOutcome {
        let outcome = self.config.validate();
        if matches!(outcome, ValidationOutcome::Fixed { .. }) {
            self.state = SessionState::Dirty;
        }
        outcome
    }

    /// Duplicated period names, if any.
    pub fn validate_names(&self) -> Vec<String> {
        self.config.validate_names()
    }

    pub fn set_day_start_time(&mut self, time: NaiveTime) {
        self.config.set_day_start_time(time);
        self.state = SessionState::Dirty;
    }

    /// # Errors
    ///
    /// `ScheduleError::InvalidValue`; the session stays clean.
    pub fn set_total_periods_per_day(&mut self, value: &str) -> Result<()> {
        self.config.set_total_periods_per_day(value)?;
        self.state = SessionState::Dirty;
        Ok(())
    }

    /// # Errors
    ///
    /// `ScheduleError::InvalidValue`; the session stays clean.
    pub fn set_default_period_duration(&mut self, value: &str) -> Result<()> {
        self.config.set_default_period_duration(value)?;
        self.state = SessionState::Dirty;
        Ok(())
    }

    /// Derived wall-clock schedule from the profile's day start.
    pub fn clock_times(&self) -> Vec<TimedPeriod> {
        compute_clock_times(self.config.day_start_time, &self.config.period_definitions)
    }

    /// Totals and per-kind counts.
    pub fn summary(&self) -> ScheduleSummary {
        summarize(&self.config.period_definitions)
    }

    /// Persist the current config.
    ///
    /// On success the session adopts the store's canonical copy and
    /// re-enters `Loaded`. On error the config and the `Dirty` state are
    /// kept so no edits are lost.
    ///
    /// # Errors
    ///
    /// Propagates the store's save error, including the pre-save
    /// `DuplicateNames`/`Validation` rejections.
    pub fn save(&mut self) -> Result<()> {
        let canonical = self.store.save_schedule(&self.config)?;
        self.config = canonical;
        self.state = SessionState::Loaded;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::PeriodKind;
    use crate::store::InMemoryStore;

    fn session_with_periods(count: usize) -> EditSession<InMemoryStore> {
        let mut session =
            EditSession::load(InMemoryStore::new()).expect("load should succeed");
        for number in 1..=count {
            session.add_period(
                NewPeriod::new(PeriodKind::Class).with_name(format!("Period {number}")),
            );
        }
        session
    }

    #[test]
    fn test_load_starts_clean() {
        let session = EditSession::load(InMemoryStore::new()).expect("load should succeed");
        assert_eq!(session.state(), SessionState::Loaded);
        assert!(session.schedule().period_definitions.is_empty());
    }

    #[test]
    fn test_successful_edit_dirties_session() {
        let session = session_with_periods(1);
        assert_eq!(session.state(), SessionState::Dirty);
    }

    #[test]
    fn test_failed_edit_keeps_state() {
        let mut session = EditSession::load(InMemoryStore::new()).expect("load should succeed");
        assert!(session.remove_period(0).is_err());
        assert_eq!(session.state(), SessionState::Loaded);
    }

    #[test]
    fn test_boundary_move_does_not_dirty() {
        let mut session = session_with_periods(2);
        session.save().expect("save should succeed");
        assert_eq!(session.state(), SessionState::Loaded);

        let moved = session
            .move_period(0, Direction::Up)
            .expect("move should succeed");
        assert!(!moved);
        assert_eq!(session.state(), SessionState::Loaded);
    }

    #[test]
    fn test_save_returns_to_loaded() {
        let mut session = session_with_periods(2);
        session.save().expect("save should succeed");
        assert_eq!(session.state(), SessionState::Loaded);
    }

    #[test]
    fn test_clean_validate_does_not_dirty() {
        let mut session = session_with_periods(2);
        session.save().expect("save should succeed");
        assert_eq!(session.validate(), ValidationOutcome::Clean);
        assert_eq!(session.state(), SessionState::Loaded);
    }
}
