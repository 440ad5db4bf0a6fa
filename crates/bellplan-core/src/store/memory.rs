//! In-memory profile store, for tests and embedding.

use crate::error::Result;
use crate::schedule::ScheduleConfig;

use super::traits::ProfileStore;

/// Profile store holding one schedule in memory.
///
/// Behaves like the file store without the file: an empty store fetches
/// as the default empty schedule, and saves run the same pre-save checks.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    schedule: Option<ScheduleConfig>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store with an existing schedule (bypasses save checks,
    /// like a document written by an external backend).
    pub fn with_schedule(schedule: ScheduleConfig) -> Self {
        Self {
            schedule: Some(schedule),
        }
    }
}

impl ProfileStore for InMemoryStore {
    fn fetch_schedule(&self) -> Result<ScheduleConfig> {
        Ok(self.schedule.clone().unwrap_or_default())
    }

    fn save_schedule(&mut self, config: &ScheduleConfig) -> Result<ScheduleConfig> {
        config.ensure_saveable()?;
        let mut canonical = config.clone();
        canonical.sync_break_periods();
        self.schedule = Some(canonical.clone());
        Ok(canonical)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::{NewPeriod, PeriodKind};

    #[test]
    fn test_empty_store_fetches_default() {
        let store = InMemoryStore::new();
        let schedule = store.fetch_schedule().expect("fetch should succeed");
        assert!(schedule.period_definitions.is_empty());
    }

    #[test]
    fn test_save_echoes_canonical_copy() {
        let mut store = InMemoryStore::new();
        let mut config = ScheduleConfig::default();
        config.add_period(NewPeriod::new(PeriodKind::Break).with_name("Lunch"));

        let canonical = store.save_schedule(&config).expect("save should succeed");
        assert_eq!(canonical.break_periods.len(), 1);
        assert_eq!(canonical.break_periods[0].name, "Lunch");

        let fetched = store.fetch_schedule().expect("fetch should succeed");
        assert_eq!(fetched, canonical);
    }
}
