//! TOML persistence for the onboarded user profile.
//!
//! A single profile lives under a fixed file name in the data directory.
//! It is loaded at startup and removed on explicit reset; nothing else in
//! the application is persisted across sessions apart from the plan
//! session file.

use std::path::PathBuf;

use crate::error::ConfigError;
use crate::profile::UserProfile;

const PROFILE_FILE: &str = "profile.toml";

/// Handle to the profile file inside a data directory.
pub struct ProfileStore {
    dir: PathBuf,
}

impl ProfileStore {
    /// Store rooted at the default data directory.
    pub fn open() -> Result<Self, ConfigError> {
        Ok(Self::new(super::data_dir()?))
    }

    /// Store rooted at an explicit directory.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path(&self) -> PathBuf {
        self.dir.join(PROFILE_FILE)
    }

    /// Load the persisted profile, or `None` when onboarding has not run.
    pub fn load(&self) -> Result<Option<UserProfile>, ConfigError> {
        let path = self.path();
        match std::fs::read_to_string(&path) {
            Ok(content) => {
                let profile =
                    toml::from_str(&content).map_err(|e| ConfigError::ParseFailed(e.to_string()))?;
                Ok(Some(profile))
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(ConfigError::LoadFailed {
                path,
                message: e.to_string(),
            }),
        }
    }

    /// Persist the profile, overwriting any existing one.
    pub fn save(&self, profile: &UserProfile) -> Result<(), ConfigError> {
        let path = self.path();
        let content = toml::to_string_pretty(profile)
            .map_err(|e| ConfigError::ParseFailed(e.to_string()))?;
        std::fs::write(&path, content).map_err(|e| ConfigError::SaveFailed {
            path,
            message: e.to_string(),
        })
    }

    /// Remove the persisted profile. Missing file is not an error.
    pub fn clear(&self) -> Result<(), ConfigError> {
        let path = self.path();
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
    use chrono::NaiveDate;

    fn profile() -> UserProfile {
        UserProfile {
            name: "Maya".to_string(),
            interests: vec!["Pilates".to_string()],
            dietary_preference: "Pescatarian".to_string(),
            work_schedule: "Shift Work".to_string(),
            chronotype: "Variable / Irregular".to_string(),
            symptoms: vec!["Insomnia".to_string()],
            goals: String::new(),
            last_period_date: NaiveDate::from_ymd_opt(2024, 5, 20).unwrap(),
            cycle_length: 30,
        }
    }

    #[test]
    fn save_load_clear_round_trip() {
        let tmp = tempfile::tempdir().unwrap();
        let store = ProfileStore::new(tmp.path());

        assert!(store.load().unwrap().is_none());

        store.save(&profile()).unwrap();
        let loaded = store.load().unwrap().unwrap();
        assert_eq!(loaded, profile());

        store.clear().unwrap();
        assert!(store.load().unwrap().is_none());
        // Clearing twice is fine.
        store.clear().unwrap();
    }

    #[test]
    fn corrupt_file_is_a_parse_error() {
        let tmp = tempfile::tempdir().unwrap();
        let store = ProfileStore::new(tmp.path());
        std::fs::write(tmp.path().join("profile.toml"), "not [valid toml").unwrap();
        assert!(matches!(
            store.load(),
            Err(ConfigError::ParseFailed(_))
        ));
    }
}
