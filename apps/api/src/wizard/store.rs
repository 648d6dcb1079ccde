#![allow(dead_code)]

//! Local persistent cache for the in-progress wizard.
//!
//! One fixed entry holds the whole `WizardState` (document + step). Loading
//! must never crash the wizard: a missing or unreadable entry is discarded
//! with a warning and replaced by a fresh state.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::warn;

use crate::wizard::WizardState;

/// Fixed cache entry name, one per directory.
pub const STORE_FILE: &str = "strategy-wizard.json";

pub struct WizardStore {
    path: PathBuf,
}

impl WizardStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store rooted in a directory, using the fixed entry name.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self::new(dir.as_ref().join(STORE_FILE))
    }

    /// Persists the full state. Called after every change.
    pub fn save(&self, state: &WizardState) -> Result<()> {
        let json = serde_json::to_string(state).context("Failed to serialize wizard state")?;
        fs::write(&self.path, json)
            .with_context(|| format!("Failed to write wizard cache {}", self.path.display()))
    }

    /// Loads the saved state, falling back to a fresh one when the entry is
    /// missing or unreadable. Never fails.
    pub fn load(&self) -> WizardState {
        self.try_load().unwrap_or_default()
    }

    fn try_load(&self) -> Option<WizardState> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return None,
            Err(e) => {
                warn!("Discarding unreadable wizard cache {}: {e}", self.path.display());
                return None;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(state) => Some(state),
            Err(e) => {
                warn!("Discarding corrupt wizard cache {}: {e}", self.path.display());
                None
            }
        }
    }

    /// Removes the cache entry; absent entries are fine.
    pub fn clear(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => {
                Err(e).with_context(|| format!("Failed to clear wizard cache {}", self.path.display()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let store = WizardStore::in_dir(dir.path());

        let mut state = WizardState::new();
        state.go_to_step(2);
        state.edit(|s| s.company_name = "Acme Corp".to_string());
        store.save(&state).unwrap();

        let loaded = store.load();
        assert_eq!(loaded.current_step, 2);
        assert_eq!(loaded.strategy.company_name, "Acme Corp");
    }

    #[test]
    fn test_missing_cache_yields_fresh_state() {
        let dir = tempfile::tempdir().unwrap();
        let store = WizardStore::in_dir(dir.path());

        let loaded = store.load();
        assert_eq!(loaded.current_step, 1);
        assert!(loaded.strategy.company_name.is_empty());
    }

    #[test]
    fn test_corrupt_cache_yields_fresh_state() {
        let dir = tempfile::tempdir().unwrap();
        let store = WizardStore::in_dir(dir.path());
        fs::write(dir.path().join(STORE_FILE), "{not valid json").unwrap();

        let loaded = store.load();
        assert_eq!(loaded.current_step, 1);
        assert!(loaded.strategy.pillars.is_empty());
    }

    #[test]
    fn test_wrong_shape_cache_yields_fresh_state() {
        let dir = tempfile::tempdir().unwrap();
        let store = WizardStore::in_dir(dir.path());
        fs::write(dir.path().join(STORE_FILE), r#"{"currentStep": "seven"}"#).unwrap();

        let loaded = store.load();
        assert_eq!(loaded.current_step, 1);
    }

    #[test]
    fn test_clear_removes_entry_and_tolerates_absence() {
        let dir = tempfile::tempdir().unwrap();
        let store = WizardStore::in_dir(dir.path());

        store.save(&WizardState::new()).unwrap();
        store.clear().unwrap();
        assert!(!dir.path().join(STORE_FILE).exists());

        store.clear().unwrap();
    }

    #[test]
    fn test_save_overwrites_previous_entry() {
        let dir = tempfile::tempdir().unwrap();
        let store = WizardStore::in_dir(dir.path());

        let mut state = WizardState::new();
        store.save(&state).unwrap();
        state.go_to_step(5);
        store.save(&state).unwrap();

        assert_eq!(store.load().current_step, 5);
    }
}
