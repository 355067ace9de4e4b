pub mod advice;
pub mod export;
pub mod plan;
pub mod profile;
pub mod select;
pub mod status;

use chrono::{Local, NaiveDate};
use cyclesync_core::{AppState, CycleStats, UserProfile};

/// Resolve the effective date: an explicit `--today` override or the
/// local wall clock.
pub fn resolve_today(today: Option<String>) -> Result<NaiveDate, Box<dyn std::error::Error>> {
    match today {
        Some(s) => Ok(NaiveDate::parse_from_str(&s, "%Y-%m-%d")?),
        None => Ok(Local::now().date_naive()),
    }
}

/// Load the onboarded profile or fail with a pointer to onboarding.
pub fn require_profile() -> Result<UserProfile, Box<dyn std::error::Error>> {
    let state = AppState::init()?;
    state
        .user
        .ok_or_else(|| "no profile found. Run 'cyclesync profile set' first.".into())
}

/// Recompute cycle stats for the profile; stats are always derived from
/// the wall clock, never cached.
pub fn stats_for(profile: &UserProfile, today: NaiveDate) -> CycleStats {
    CycleStats::compute(profile.last_period_date, profile.cycle_length, today)
}
