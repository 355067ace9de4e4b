//! Profile commands: onboarding, inspection, reset.

use chrono::NaiveDate;
use clap::Subcommand;
use cyclesync_core::{catalog, AppState, UserProfile};

#[derive(Subcommand)]
pub enum ProfileAction {
    /// Complete onboarding with a new profile
    Set {
        /// Display name
        #[arg(long)]
        name: String,
        /// First day of the most recent period (YYYY-MM-DD)
        #[arg(long)]
        last_period: String,
        /// Cycle length in days (21-40)
        #[arg(long, default_value_t = 28)]
        cycle_length: u32,
        /// Comma-separated interests
        #[arg(long, default_value = "")]
        interests: String,
        /// Dietary preference
        #[arg(long, default_value = "")]
        diet: String,
        /// Work/life schedule
        #[arg(long, default_value = "")]
        work: String,
        /// Energy rhythm / chronotype
        #[arg(long, default_value = "")]
        chronotype: String,
        /// Comma-separated symptoms
        #[arg(long, default_value = "")]
        symptoms: String,
        /// Specific goals
        #[arg(long, default_value = "")]
        goals: String,
    },
    /// Show the stored profile
    Show,
    /// List the onboarding option catalogs
    Options,
    /// Clear the stored profile and session data
    Reset,
}

fn split_list(s: &str) -> Vec<String> {
    s.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn run(action: ProfileAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ProfileAction::Set {
            name,
            last_period,
            cycle_length,
            interests,
            diet,
            work,
            chronotype,
            symptoms,
            goals,
        } => {
            let profile = UserProfile {
                name,
                interests: split_list(&interests),
                dietary_preference: diet,
                work_schedule: work,
                chronotype,
                symptoms: split_list(&symptoms),
                goals,
                last_period_date: NaiveDate::parse_from_str(&last_period, "%Y-%m-%d")?,
                cycle_length,
            };
            let mut state = AppState::init()?;
            state.complete_onboarding(profile)?;
            println!("Profile saved.");
        }
        ProfileAction::Show => {
            let state = AppState::init()?;
            match state.user {
                Some(profile) => println!("{}", serde_json::to_string_pretty(&profile)?),
                None => println!("No profile found. Use 'profile set' to onboard."),
            }
        }
        ProfileAction::Options => {
            println!("Interests:");
            for group in catalog::INTEREST_GROUPS {
                println!("  {}: {}", group.category, group.items.join(", "));
            }
            println!("Dietary preferences: {}", catalog::DIETARY_OPTIONS.join(", "));
            println!("Work styles: {}", catalog::WORK_STYLE_OPTIONS.join(", "));
            println!("Chronotypes: {}", catalog::CHRONOTYPE_OPTIONS.join(", "));
            println!("Symptoms: {}", catalog::SYMPTOM_OPTIONS.join(", "));
        }
        ProfileAction::Reset => {
            let mut state = AppState::init()?;
            state.reset()?;
            println!("Profile and session data cleared.");
        }
    }
    Ok(())
}
