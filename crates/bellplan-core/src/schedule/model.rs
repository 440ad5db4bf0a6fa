//! Structural edits and validation for the period list.
//!
//! All operations mutate the list in place and fail fast: an edit that
//! returns an error leaves the schedule exactly as it was (no partial
//! mutation). Duplicate-name detection is deliberately deferred to the
//! pre-save check so intermediate edit states may carry clashing names.

use std::collections::HashSet;
use std::str::FromStr;

use chrono::NaiveTime;

use crate::error::{Result, ScheduleError};

use super::types::{BreakDefinition, NewPeriod, PeriodDefinition, PeriodKind, ScheduleConfig};

/// Direction of an adjacent-swap move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

impl FromStr for Direction {
    type Err = ScheduleError;

    fn from_str(value: &str) -> Result<Self> {
        match value {
            "up" => Ok(Direction::Up),
            "down" => Ok(Direction::Down),
            other => Err(ScheduleError::InvalidValue {
                field: "direction",
                value: other.to_string(),
            }),
        }
    }
}

/// Editable field of a `PeriodDefinition`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PeriodField {
    Period,
    DurationMinutes,
    Name,
    Kind,
}

impl FromStr for PeriodField {
    type Err = ScheduleError;

    fn from_str(value: &str) -> Result<Self> {
        match value {
            "period" => Ok(PeriodField::Period),
            "duration" | "duration_minutes" => Ok(PeriodField::DurationMinutes),
            "name" => Ok(PeriodField::Name),
            "kind" => Ok(PeriodField::Kind),
            other => Err(ScheduleError::InvalidValue {
                field: "field",
                value: other.to_string(),
            }),
        }
    }
}

/// Result of the duplicate-period-number scan.
///
/// `Fixed` means duplicates were found and repaired (stable sort by
/// `period`, then renumber); it reports each duplicated number once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationOutcome {
    Clean,
    Fixed { duplicates: Vec<u32> },
}

/// Coerce a string to a positive integer field value.
fn parse_positive(field: &'static str, value: &str) -> Result<u32> {
    value
        .trim()
        .parse::<u32>()
        .ok()
        .filter(|parsed| *parsed >= 1)
        .ok_or_else(|| ScheduleError::InvalidValue {
            field,
            value: value.to_string(),
        })
}

impl ScheduleConfig {
    /// Append a new period, numbered after the current last position.
    ///
    /// Always succeeds; returns the index of the appended entry.
    pub fn add_period(&mut self, new: NewPeriod) -> usize {
        let period = self.period_definitions.len() as u32 + 1;
        let duration_minutes = new
            .duration_minutes
            .unwrap_or(self.default_period_duration_minutes);
        let name = new
            .name
            .unwrap_or_else(|| new.kind.default_name().to_string());

        self.period_definitions.push(PeriodDefinition {
            period,
            duration_minutes,
            name,
            kind: new.kind,
        });
        self.period_definitions.len() - 1
    }

    /// Remove the entry at `index`, returning it.
    ///
    /// Survivors keep their `period` numbers; renumbering is the explicit
    /// `reorder` operation.
    ///
    /// # Errors
    ///
    /// Returns `ScheduleError::IndexOutOfRange` if `index` is outside the
    /// list.
    pub fn remove_period(&mut self, index: usize) -> Result<PeriodDefinition> {
        self.check_index(index)?;
        Ok(self.period_definitions.remove(index))
    }

    /// Swap the entry at `index` with its neighbor in `direction`.
    ///
    /// A move at the boundary (first entry up, last entry down) is a no-op
    /// and returns `Ok(false)`. After a real swap both touched entries'
    /// `period` numbers are rewritten to match their new positions, and
    /// `Ok(true)` is returned.
    ///
    /// # Errors
    ///
    /// Returns `ScheduleError::IndexOutOfRange` if `index` is outside the
    /// list.
    pub fn move_period(&mut self, index: usize, direction: Direction) -> Result<bool> {
        self.check_index(index)?;
        let neighbor = match direction {
            Direction::Up => {
                if index == 0 {
                    return Ok(false);
                }
                index - 1
            }
            Direction::Down => {
                if index + 1 == self.period_definitions.len() {
                    return Ok(false);
                }
                index + 1
            }
        };

        self.period_definitions.swap(index, neighbor);
        for position in [index, neighbor] {
            self.period_definitions[position].period = position as u32 + 1;
        }
        Ok(true)
    }

    /// Set one field of the entry at `index` from string input.
    ///
    /// Numeric fields coerce via integer parsing; non-numeric, empty, and
    /// zero input is rejected rather than silently truncated. Names must be
    /// non-empty. The entry is untouched when coercion fails.
    ///
    /// # Errors
    ///
    /// Returns `ScheduleError::IndexOutOfRange` for a bad index and
    /// `ScheduleError::InvalidValue` for input that does not coerce.
    pub fn update_field(&mut self, index: usize, field: PeriodField, value: &str) -> Result<()> {
        self.check_index(index)?;
        match field {
            PeriodField::Period => {
                let parsed = parse_positive("period", value)?;
                self.period_definitions[index].period = parsed;
            }
            PeriodField::DurationMinutes => {
                let parsed = parse_positive("duration_minutes", value)?;
                self.period_definitions[index].duration_minutes = parsed;
            }
            PeriodField::Name => {
                let trimmed = value.trim();
                if trimmed.is_empty() {
                    return Err(ScheduleError::InvalidValue {
                        field: "name",
                        value: value.to_string(),
                    });
                }
                self.period_definitions[index].name = trimmed.to_string();
            }
            PeriodField::Kind => {
                let parsed: PeriodKind = value.parse()?;
                self.period_definitions[index].kind = parsed;
            }
        }
        Ok(())
    }

    /// Rewrite every entry's `period` to its 1-based position in the
    /// current list order. Idempotent.
    pub fn reorder(&mut self) {
        for (position, definition) in self.period_definitions.iter_mut().enumerate() {
            definition.period = position as u32 + 1;
        }
    }

    /// Scan for duplicate `period` numbers and repair them.
    ///
    /// Duplicates are remedied by a stable sort on the current `period`
    /// values (ties keep their existing order) followed by `reorder`.
    /// Reports, never errors.
    pub fn validate(&mut self) -> ValidationOutcome {
        let mut seen = HashSet::new();
        let mut duplicates = Vec::new();
        for definition in &self.period_definitions {
            if !seen.insert(definition.period) && !duplicates.contains(&definition.period) {
                duplicates.push(definition.period);
            }
        }

        if duplicates.is_empty() {
            return ValidationOutcome::Clean;
        }

        self.period_definitions
            .sort_by_key(|definition| definition.period);
        self.reorder();
        ValidationOutcome::Fixed { duplicates }
    }

    /// Collect names used by more than one period (case-sensitive), each
    /// reported once in first-occurrence order.
    ///
    /// A non-empty result must be treated as a hard failure by the save
    /// flow; the persisted format requires unique names.
    pub fn validate_names(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut duplicates = Vec::new();
        for definition in &self.period_definitions {
            if !seen.insert(definition.name.as_str()) && !duplicates.contains(&definition.name) {
                duplicates.push(definition.name.clone());
            }
        }
        duplicates
    }

    /// The automatic pre-save invariant check.
    ///
    /// Every `ProfileStore::save_schedule` implementation runs this before
    /// persisting, so an invalid config can never be stored merely because
    /// the caller skipped an explicit validation step.
    ///
    /// # Errors
    ///
    /// Returns `ScheduleError::DuplicateNames` when names clash, and
    /// `ScheduleError::Validation` for zero durations, zero period numbers,
    /// or blank names.
    pub fn ensure_saveable(&self) -> Result<()> {
        let duplicates = self.validate_names();
        if !duplicates.is_empty() {
            return Err(ScheduleError::DuplicateNames(duplicates));
        }

        for definition in &self.period_definitions {
            if definition.duration_minutes == 0 {
                return Err(ScheduleError::Validation(format!(
                    "Period \"{}\" has a zero duration",
                    definition.name
                )));
            }
            if definition.period == 0 {
                return Err(ScheduleError::Validation(format!(
                    "Period \"{}\" has period number 0 (numbering is 1-based)",
                    definition.name
                )));
            }
            if definition.name.trim().is_empty() {
                return Err(ScheduleError::Validation(
                    "A period has a blank name".to_string(),
                ));
            }
        }
        Ok(())
    }

    /// Break list derived from the `kind = break` entries, in display order.
    pub fn derived_breaks(&self) -> Vec<BreakDefinition> {
        self.period_definitions
            .iter()
            .filter(|definition| definition.kind == PeriodKind::Break)
            .map(BreakDefinition::from_period)
            .collect()
    }

    /// Rewrite the stored break list from the period list.
    pub fn sync_break_periods(&mut self) {
        self.break_periods = self.derived_breaks();
    }

    pub fn set_day_start_time(&mut self, time: NaiveTime) {
        self.day_start_time = time;
    }

    /// # Errors
    ///
    /// Returns `ScheduleError::InvalidValue` for non-numeric or zero input.
    pub fn set_total_periods_per_day(&mut self, value: &str) -> Result<()> {
        self.total_periods_per_day = parse_positive("total_periods_per_day", value)?;
        Ok(())
    }

    /// # Errors
    ///
    /// Returns `ScheduleError::InvalidValue` for non-numeric or zero input.
    pub fn set_default_period_duration(&mut self, value: &str) -> Result<()> {
        self.default_period_duration_minutes =
            parse_positive("default_period_duration_minutes", value)?;
        Ok(())
    }

    fn check_index(&self, index: usize) -> Result<()> {
        let len = self.period_definitions.len();
        if index >= len {
            return Err(ScheduleError::IndexOutOfRange { index, len });
        }
        Ok(())
    }
}
