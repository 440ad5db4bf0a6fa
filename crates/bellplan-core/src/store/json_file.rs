//! JSON-file profile store.
//!
//! One pretty-printed `StoredProfile` document per file. Saves go through
//! a sibling temp file followed by an atomic rename, so a crash mid-save
//! leaves the previous document intact.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::Utc;

use crate::error::{Result, ScheduleError};
use crate::schedule::ScheduleConfig;

use super::traits::ProfileStore;
use super::types::StoredProfile;

/// Profile store backed by a single JSON file.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Initialize a fresh profile document at `path`.
    ///
    /// # Errors
    ///
    /// Returns `ScheduleError::Storage` if a document already exists at
    /// `path` or if it cannot be written.
    pub fn create(path: &Path, school_name: &str) -> Result<Self> {
        if path.exists() {
            return Err(ScheduleError::Storage(format!(
                "A profile already exists at {}",
                path.display()
            )));
        }
        let store = Self {
            path: path.to_path_buf(),
        };
        store.write_document(&StoredProfile::new(school_name))?;
        Ok(store)
    }

    /// Open a store over `path`.
    ///
    /// The file is not touched until the first fetch or save; a missing
    /// file reads as an empty schedule.
    pub fn open(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the stored document, if one exists.
    pub fn read_document(&self) -> Result<Option<StoredProfile>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let contents = fs::read_to_string(&self.path)?;
        let document: StoredProfile = serde_json::from_str(&contents)?;
        Ok(Some(document))
    }

    fn write_document(&self, document: &StoredProfile) -> Result<()> {
        let payload = serde_json::to_string_pretty(document)?;
        let temp_path = self.path.with_extension("json.tmp");
        fs::write(&temp_path, payload)?;
        replace_file(&temp_path, &self.path)?;
        Ok(())
    }
}

/// Move the freshly written temp file over the live document.
///
/// On some platforms (notably Windows) `fs::rename` fails when the
/// destination exists, so the fallback removes the destination and
/// retries. If the rename still fails, the temp file is cleaned up.
fn replace_file(temp_path: &Path, destination: &Path) -> io::Result<()> {
    if let Err(initial_err) = fs::rename(temp_path, destination) {
        let _ = fs::remove_file(destination);
        fs::rename(temp_path, destination).map_err(|retry_err| {
            let _ = fs::remove_file(temp_path);
            io::Error::new(
                retry_err.kind(),
                format!(
                    "Atomic replace failed (initial: {}, retry: {})",
                    initial_err, retry_err
                ),
            )
        })?;
    }
    Ok(())
}

impl ProfileStore for JsonFileStore {
    fn fetch_schedule(&self) -> Result<ScheduleConfig> {
        let schedule = self
            .read_document()?
            .map(|document| document.schedule)
            .unwrap_or_default();
        Ok(schedule)
    }

    fn save_schedule(&mut self, config: &ScheduleConfig) -> Result<ScheduleConfig> {
        config.ensure_saveable()?;

        let mut document = self
            .read_document()?
            .unwrap_or_else(|| StoredProfile::new("School"));

        let mut canonical = config.clone();
        canonical.sync_break_periods();

        document.schedule = canonical.clone();
        document.meta.last_modified = Utc::now();
        self.write_document(&document)?;
        Ok(canonical)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_replace_file_overwrites_existing() {
        let dir = tempdir().expect("tempdir");
        let temp = dir.path().join("incoming.tmp");
        let dest = dir.path().join("profile.json");

        fs::write(&dest, "old").expect("write dest");
        fs::write(&temp, "new").expect("write temp");

        replace_file(&temp, &dest).expect("replace should succeed");

        assert!(!temp.exists());
        assert_eq!(fs::read_to_string(&dest).expect("read"), "new");
    }

    #[test]
    fn test_create_refuses_existing_profile() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("profile.json");

        JsonFileStore::create(&path, "Northside Primary").expect("create should succeed");
        let result = JsonFileStore::create(&path, "Northside Primary");
        assert!(matches!(result, Err(ScheduleError::Storage(_))));
    }
}
