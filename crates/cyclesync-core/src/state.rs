//! Explicit application state.
//!
//! The session user, dark-mode flag and view mode are held in one object
//! with an explicit lifecycle: `init` loads the persisted profile at
//! startup, `reset` clears it on explicit user action. Front-ends pass
//! this object around instead of reaching for ambient globals.

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, CoreError};
use crate::profile::UserProfile;
use crate::storage::{PlanSession, ProfileStore};

/// Which main view the planning surface shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    /// Suggestion chips, pre-build.
    #[default]
    Recommendations,
    /// The built phase calendar.
    Calendar,
}

/// Session-wide application state.
#[derive(Debug, Default)]
pub struct AppState {
    pub user: Option<UserProfile>,
    pub dark_mode: bool,
    pub view: ViewMode,
}

impl AppState {
    /// Initialize from persisted storage.
    pub fn init() -> Result<Self, ConfigError> {
        let user = ProfileStore::open()?.load()?;
        Ok(Self {
            user,
            dark_mode: false,
            view: ViewMode::Recommendations,
        })
    }

    /// Whether onboarding has completed.
    pub fn is_onboarded(&self) -> bool {
        self.user.is_some()
    }

    /// Complete onboarding: validate, persist, and adopt the profile.
    pub fn complete_onboarding(&mut self, profile: UserProfile) -> Result<(), CoreError> {
        profile.validate()?;
        ProfileStore::open()?.save(&profile)?;
        self.user = Some(profile);
        Ok(())
    }

    /// Explicit reset: drop the user and wipe persisted profile and
    /// session state.
    pub fn reset(&mut self) -> Result<(), ConfigError> {
        ProfileStore::open()?.clear()?;
        PlanSession::clear()?;
        self.user = None;
        self.view = ViewMode::Recommendations;
        Ok(())
    }
}
