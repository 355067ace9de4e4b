//! Persisted state: the onboarded profile and the CLI plan session.

mod profile_store;
mod session;

pub use profile_store::ProfileStore;
pub use session::PlanSession;

use std::path::PathBuf;

use crate::error::ConfigError;

/// Returns `~/.config/cyclesync[-dev]/` based on CYCLESYNC_ENV.
///
/// Set CYCLESYNC_ENV=dev to use the development data directory.
pub fn data_dir() -> Result<PathBuf, ConfigError> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("CYCLESYNC_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("cyclesync-dev")
    } else {
        base_dir.join("cyclesync")
    };

    std::fs::create_dir_all(&dir).map_err(|e| ConfigError::DataDir(e.to_string()))?;
    Ok(dir)
}
