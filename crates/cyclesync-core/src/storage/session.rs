//! JSON persistence for the active planning session.
//!
//! The original session lived in component state and evaporated on
//! reload; a CLI has no resident process, so the selection and the built
//! board survive between invocations in `session.json`. Building a plan
//! overwrites the file and `clear` removes it. Fetched advice is never
//! stored here.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::board::PlanBoard;
use crate::error::ConfigError;
use crate::selection::Selection;

const SESSION_FILE: &str = "session.json";

/// Selection set and (once built) the plan board for the current session.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlanSession {
    #[serde(default)]
    pub selection: Selection,
    #[serde(default)]
    pub board: Option<PlanBoard>,
}

impl PlanSession {
    /// Load the session from the default data directory, or start fresh.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(super::data_dir()?)
    }

    /// Load from an explicit directory.
    pub fn load_from(dir: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let path = dir.into().join(SESSION_FILE);
        match std::fs::read_to_string(&path) {
            Ok(content) => {
                serde_json::from_str(&content).map_err(|e| ConfigError::ParseFailed(e.to_string()))
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(ConfigError::LoadFailed {
                path,
                message: e.to_string(),
            }),
        }
    }

    /// Persist to the default data directory.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(super::data_dir()?)
    }

    /// Persist to an explicit directory.
    pub fn save_to(&self, dir: impl Into<PathBuf>) -> Result<(), ConfigError> {
        let path = dir.into().join(SESSION_FILE);
        let content =
            serde_json::to_string_pretty(self).map_err(|e| ConfigError::ParseFailed(e.to_string()))?;
        std::fs::write(&path, content).map_err(|e| ConfigError::SaveFailed {
            path,
            message: e.to_string(),
        })
    }

    /// Remove the session file from the default data directory.
    pub fn clear() -> Result<(), ConfigError> {
        Self::clear_in(super::data_dir()?)
    }

    /// Remove the session file from an explicit directory.
    pub fn clear_in(dir: impl Into<PathBuf>) -> Result<(), ConfigError> {
        let path = dir.into().join(SESSION_FILE);
        match std::fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(ConfigError::SaveFailed {
                path,
                message: e.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cycle::CyclePhase;
    use crate::selection::Category;

    #[test]
    fn missing_session_starts_fresh() {
        let tmp = tempfile::tempdir().unwrap();
        let session = PlanSession::load_from(tmp.path()).unwrap();
        assert!(session.selection.is_empty());
        assert!(session.board.is_none());
    }

    #[test]
    fn session_round_trip_keeps_selection_and_board() {
        let tmp = tempfile::tempdir().unwrap();

        let mut session = PlanSession::default();
        session
            .selection
            .toggle("Plan outline", Category::Work, CyclePhase::Follicular);
        session.save_to(tmp.path()).unwrap();

        let loaded = PlanSession::load_from(tmp.path()).unwrap();
        assert_eq!(loaded.selection.len(), 1);
        assert!(loaded.selection.contains("Plan outline", Category::Work));
    }

    #[test]
    fn clear_removes_the_file() {
        let tmp = tempfile::tempdir().unwrap();
        PlanSession::default().save_to(tmp.path()).unwrap();
        PlanSession::clear_in(tmp.path()).unwrap();
        assert!(!tmp.path().join("session.json").exists());
        // Idempotent.
        PlanSession::clear_in(tmp.path()).unwrap();
    }
}
