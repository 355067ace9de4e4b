//! Suggestion selection commands.

use clap::Subcommand;
use cyclesync_core::{selection::BUILD_THRESHOLD, Category, PlanSession};

use super::{require_profile, resolve_today, stats_for};

#[derive(Subcommand)]
pub enum SelectAction {
    /// Toggle a suggestion in or out of the selection
    Toggle {
        /// Category: work, movement, nutrition, selfcare
        category: String,
        /// Suggestion text
        text: String,
    },
    /// List the current selection
    List,
}

pub fn run(action: SelectAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        SelectAction::Toggle { category, text } => {
            let category = Category::parse(&category)
                .ok_or_else(|| format!("unknown category '{category}'"))?;
            let profile = require_profile()?;
            let stats = stats_for(&profile, resolve_today(None)?);

            let mut session = PlanSession::load()?;
            session.selection.toggle(&text, category, stats.phase);
            session.save()?;

            if session.selection.contains(&text, category) {
                println!("Selected [{category}] {text}");
            } else {
                println!("Deselected [{category}] {text}");
            }
            println!(
                "{} item(s) selected ({} needed to build a plan).",
                session.selection.len(),
                BUILD_THRESHOLD
            );
        }
        SelectAction::List => {
            let session = PlanSession::load()?;
            if session.selection.is_empty() {
                println!("Nothing selected.");
            } else {
                for item in session.selection.items() {
                    println!("[{}] {}", item.category, item.text);
                }
            }
        }
    }
    Ok(())
}
