//! Core data types for the period schedule.
//!
//! These types represent the stable data model of a school's daily bell
//! schedule as the profile store persists it.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::error::ScheduleError;

/// Serde codec for wall-clock times in the `HH:MM` profile format.
pub(crate) mod hhmm {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%H:%M";

    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&time.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let value = String::deserialize(deserializer)?;
        NaiveTime::parse_from_str(&value, FORMAT)
            .or_else(|_| NaiveTime::parse_from_str(&value, "%H:%M:%S"))
            .map_err(serde::de::Error::custom)
    }
}

/// Classification of a scheduled interval.
///
/// A tag, not a hierarchy: every period carries the same fields regardless
/// of kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PeriodKind {
    Class,
    Assembly,
    Break,
}

impl PeriodKind {
    /// Display name used when a new period of this kind is synthesized
    /// without an explicit name.
    pub fn default_name(self) -> &'static str {
        match self {
            PeriodKind::Class => "Custom Period",
            PeriodKind::Assembly => "Assembly Period",
            PeriodKind::Break => "Break",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PeriodKind::Class => "class",
            PeriodKind::Assembly => "assembly",
            PeriodKind::Break => "break",
        }
    }
}

impl fmt::Display for PeriodKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PeriodKind {
    type Err = ScheduleError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "class" => Ok(PeriodKind::Class),
            "assembly" => Ok(PeriodKind::Assembly),
            "break" => Ok(PeriodKind::Break),
            other => Err(ScheduleError::InvalidValue {
                field: "kind",
                value: other.to_string(),
            }),
        }
    }
}

/// One scheduled interval in a single day's template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodDefinition {
    /// 1-based display/sequence position
    pub period: u32,

    /// Length of the interval
    pub duration_minutes: u32,

    /// Label shown on the schedule (unique within a saved config)
    pub name: String,

    /// Interval classification
    pub kind: PeriodKind,
}

/// Break metadata as the profile format stores it, separate from the
/// general period list.
///
/// A constrained view of a `PeriodDefinition` with `kind = break`; derived
/// from the period list on save and never edited directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakDefinition {
    /// `period` of the matching `PeriodDefinition`
    pub period: u32,

    /// Length of the break
    pub duration_minutes: u32,

    /// Label of the break
    pub name: String,
}

impl BreakDefinition {
    pub fn from_period(definition: &PeriodDefinition) -> Self {
        Self {
            period: definition.period,
            duration_minutes: definition.duration_minutes,
            name: definition.name.clone(),
        }
    }
}

/// The aggregate root: one school day's schedule template plus the profile
/// settings that drive it.
///
/// Insertion order of `period_definitions` is display order; `period`
/// numbers are not required to match positions until `reorder` normalizes
/// them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleConfig {
    /// Ordered period list (the single source of truth)
    #[serde(default)]
    pub period_definitions: Vec<PeriodDefinition>,

    /// Break list in the stored profile format, derived from
    /// `period_definitions` on save
    #[serde(default)]
    pub break_periods: Vec<BreakDefinition>,

    /// Wall-clock time the first period starts
    #[serde(with = "hhmm")]
    pub day_start_time: NaiveTime,

    /// Advisory upper bound on periods per day (not enforced as a length)
    pub total_periods_per_day: u32,

    /// Fallback duration used when synthesizing a new period
    pub default_period_duration_minutes: u32,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            period_definitions: Vec::new(),
            break_periods: Vec::new(),
            day_start_time: default_day_start(),
            total_periods_per_day: 8,
            default_period_duration_minutes: 45,
        }
    }
}

fn default_day_start() -> NaiveTime {
    NaiveTime::from_hms_opt(8, 0, 0).expect("08:00 is a valid time")
}

/// Builder for synthesizing a period to append.
#[derive(Debug, Clone)]
pub struct NewPeriod {
    /// Interval classification
    pub kind: PeriodKind,

    /// Label override (kind default used when absent)
    pub name: Option<String>,

    /// Duration override (profile default used when absent)
    pub duration_minutes: Option<u32>,
}

impl NewPeriod {
    pub fn new(kind: PeriodKind) -> Self {
        Self {
            kind,
            name: None,
            duration_minutes: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_duration(mut self, minutes: u32) -> Self {
        self.duration_minutes = Some(minutes);
        self
    }
}
