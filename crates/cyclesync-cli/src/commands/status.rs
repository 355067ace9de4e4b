//! Cycle status command.

use cyclesync_core::planner;

use super::{require_profile, resolve_today, stats_for};

pub fn run(today: Option<String>) -> Result<(), Box<dyn std::error::Error>> {
    let profile = require_profile()?;
    let today = resolve_today(today)?;
    let stats = stats_for(&profile, today);

    println!(
        "{} Phase -- Day {} of {}",
        stats.phase, stats.current_day, profile.cycle_length
    );
    println!("{}", stats.phase.description());
    println!(
        "{} day(s) until the {} phase.",
        stats.days_until_next_phase, stats.next_phase
    );

    let window = planner::phase_window(&stats, today);
    let first = window.first().copied().unwrap_or(today);
    let last = window.last().copied().unwrap_or(today);
    println!(
        "Phase window: {first} through {last} ({} day(s)).",
        window.len()
    );
    Ok(())
}
