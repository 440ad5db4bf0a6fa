//! Application context for the Bellplan CLI.
//!
//! Bundles CLI arguments with the lazily-loaded config file so handlers
//! do not each re-resolve the profile path.

use std::path::PathBuf;

use once_cell::unsync::OnceCell;

use bellplan_core::{EditSession, JsonFileStore};

use crate::cli::Cli;
use crate::config::{self, BellplanConfig};

pub struct AppContext<'a> {
    cli: &'a Cli,
    config: OnceCell<Option<BellplanConfig>>,
}

impl<'a> AppContext<'a> {
    pub fn new(cli: &'a Cli) -> Self {
        Self {
            cli,
            config: OnceCell::new(),
        }
    }

    /// Check if quiet mode is enabled.
    pub fn quiet(&self) -> bool {
        self.cli.quiet
    }

    fn config(&self) -> anyhow::Result<&Option<BellplanConfig>> {
        self.config.get_or_try_init(config::load_config)
    }

    /// Resolve the profile path: flag/env > config file > XDG default.
    pub fn profile_path(&self) -> anyhow::Result<PathBuf> {
        if let Some(path) = &self.cli.profile {
            return Ok(PathBuf::from(path));
        }
        if let Some(config) = self.config()? {
            if let Some(path) = &config.profile.path {
                return Ok(PathBuf::from(path));
            }
        }
        config::default_profile_path()
    }

    /// Open an edit session over the resolved profile.
    ///
    /// A missing profile file loads as an empty schedule, matching the
    /// store contract.
    pub fn open_session(&self) -> anyhow::Result<EditSession<JsonFileStore>> {
        let path = self.profile_path()?;
        let store = JsonFileStore::open(&path);
        EditSession::load(store)
            .map_err(|e| anyhow::anyhow!("Failed to load profile {}: {}", path.display(), e))
    }
}
