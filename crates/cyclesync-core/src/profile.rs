//! User profile collected during onboarding.
//!
//! The profile is the sole external input to the cycle calculator and is
//! immutable once onboarding completes. Validation fails fast so that the
//! pure planning functions downstream never see an out-of-range cycle
//! length through the normal path.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Shortest cycle length accepted at onboarding.
pub const MIN_CYCLE_LENGTH: u32 = 21;
/// Longest cycle length accepted at onboarding.
pub const MAX_CYCLE_LENGTH: u32 = 40;

/// Everything the user tells us about themselves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    #[serde(default)]
    pub interests: Vec<String>,
    #[serde(default)]
    pub dietary_preference: String,
    #[serde(default)]
    pub work_schedule: String,
    #[serde(default)]
    pub chronotype: String,
    #[serde(default)]
    pub symptoms: Vec<String>,
    #[serde(default)]
    pub goals: String,
    /// First day of the most recent period.
    pub last_period_date: NaiveDate,
    pub cycle_length: u32,
}

impl UserProfile {
    /// Validate onboarding input. Blocks completion on an empty name or a
    /// cycle length outside the supported range.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::InvalidValue {
                field: "name".to_string(),
                message: "name must not be empty".to_string(),
            });
        }
        if self.cycle_length < MIN_CYCLE_LENGTH || self.cycle_length > MAX_CYCLE_LENGTH {
            return Err(ValidationError::CycleLengthOutOfRange {
                value: self.cycle_length,
                min: MIN_CYCLE_LENGTH,
                max: MAX_CYCLE_LENGTH,
            });
        }
        Ok(())
    }
}
