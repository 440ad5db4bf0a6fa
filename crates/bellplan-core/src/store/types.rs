//! Stored-document types for the profile store.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::schedule::ScheduleConfig;

/// Stored document format version.
pub const FORMAT_VERSION: &str = "1.0";

/// Header written alongside the schedule in the stored profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileMeta {
    /// Format version (e.g., "1.0")
    pub format_version: String,

    /// School this profile belongs to
    pub school_id: Uuid,

    /// Display name of the school
    pub school_name: String,

    /// When this profile was created
    pub created_at: DateTime<Utc>,

    /// Last save timestamp (informational)
    pub last_modified: DateTime<Utc>,
}

impl ProfileMeta {
    pub fn new(school_name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            format_version: FORMAT_VERSION.to_string(),
            school_id: Uuid::new_v4(),
            school_name: school_name.into(),
            created_at: now,
            last_modified: now,
        }
    }
}

/// The persisted profile document: header plus schedule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredProfile {
    pub meta: ProfileMeta,
    pub schedule: ScheduleConfig,
}

impl StoredProfile {
    pub fn new(school_name: impl Into<String>) -> Self {
        Self {
            meta: ProfileMeta::new(school_name),
            schedule: ScheduleConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_profile_carries_format_version() {
        let profile = StoredProfile::new("Northside Primary");
        assert_eq!(profile.meta.format_version, FORMAT_VERSION);
        assert_eq!(profile.meta.school_name, "Northside Primary");
        assert!(!profile.meta.school_id.is_nil());
        assert!(profile.schedule.period_definitions.is_empty());
    }

    #[test]
    fn test_document_round_trips_through_json() {
        let profile = StoredProfile::new("Northside Primary");
        let json = serde_json::to_string(&profile).expect("serialize");
        let parsed: StoredProfile = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(parsed.meta.school_id, profile.meta.school_id);
        assert_eq!(parsed.schedule, profile.schedule);
    }
}
