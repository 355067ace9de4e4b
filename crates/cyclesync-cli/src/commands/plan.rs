//! Phase plan commands: build the board and edit it.

use chrono::NaiveDate;
use clap::Subcommand;
use cyclesync_core::{planner, Category, PlanBoard, PlanSession};

use super::{require_profile, resolve_today, stats_for};

#[derive(Subcommand)]
pub enum PlanAction {
    /// Distribute the selection over the phase window
    Build {
        /// Override today's date (YYYY-MM-DD)
        #[arg(long)]
        today: Option<String>,
    },
    /// Show the built plan
    Show,
    /// Add a custom item to a day
    Add {
        /// Target date (YYYY-MM-DD)
        date: String,
        /// Item text
        text: String,
        /// Category: work, movement, nutrition, selfcare
        #[arg(long, default_value = "selfcare")]
        category: String,
    },
    /// Remove an item from a day
    Remove {
        /// Bucket id (YYYY-MM-DD)
        date: String,
        /// Item id
        item_id: String,
    },
    /// Edit an item's text and category in place
    Edit {
        /// Bucket id (YYYY-MM-DD)
        date: String,
        /// Item id
        item_id: String,
        /// New text
        text: String,
        /// New category
        #[arg(long)]
        category: String,
    },
    /// Move an item to another day
    Move {
        /// Item id
        item_id: String,
        /// Source bucket id (YYYY-MM-DD)
        from: String,
        /// Target bucket id (YYYY-MM-DD)
        to: String,
    },
    /// Discard the built plan and selection
    Clear,
}

fn parse_category(s: &str) -> Result<Category, Box<dyn std::error::Error>> {
    Category::parse(s).ok_or_else(|| format!("unknown category '{s}'").into())
}

fn require_board(session: &mut PlanSession) -> Result<&mut PlanBoard, Box<dyn std::error::Error>> {
    session
        .board
        .as_mut()
        .ok_or_else(|| "no plan built yet. Run 'plan build' first.".into())
}

fn print_board(board: &PlanBoard) {
    for bucket in board.buckets() {
        println!("{} ({})", bucket.id, bucket.date.format("%A"));
        if bucket.items.is_empty() {
            println!("  (no plans yet)");
        }
        for item in &bucket.items {
            println!("  [{}] {}  (id: {})", item.category, item.text, item.id);
        }
    }
}

pub fn run(action: PlanAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        PlanAction::Build { today } => {
            let profile = require_profile()?;
            let today = resolve_today(today)?;
            let stats = stats_for(&profile, today);

            let mut session = PlanSession::load()?;
            if !session.selection.can_build() {
                return Err(format!(
                    "select at least 3 items before building (currently {}).",
                    session.selection.len()
                )
                .into());
            }

            let window = planner::phase_window(&stats, today);
            let selection = std::mem::take(&mut session.selection);
            let board = planner::distribute(selection.into_items(), &window);

            println!(
                "Built a {}-day plan for the {} phase ({} day(s) left).",
                board.buckets().len(),
                stats.phase,
                stats.days_until_next_phase
            );
            print_board(&board);

            session.board = Some(board);
            session.save()?;
        }
        PlanAction::Show => {
            let mut session = PlanSession::load()?;
            let board = require_board(&mut session)?;
            print_board(board);
        }
        PlanAction::Add {
            date,
            text,
            category,
        } => {
            let category = parse_category(&category)?;
            let profile = require_profile()?;
            let stats = stats_for(&profile, resolve_today(None)?);
            let date = NaiveDate::parse_from_str(&date, "%Y-%m-%d")?;

            let mut session = PlanSession::load()?;
            let board = require_board(&mut session)?;
            match board.add_custom(date, &text, category, stats.phase) {
                Some(id) => println!("Added (id: {id})."),
                None => println!("Nothing added."),
            }
            session.save()?;
        }
        PlanAction::Remove { date, item_id } => {
            let mut session = PlanSession::load()?;
            let board = require_board(&mut session)?;
            board.remove_item(&date, &item_id);
            session.save()?;
            println!("Removed.");
        }
        PlanAction::Edit {
            date,
            item_id,
            text,
            category,
        } => {
            let category = parse_category(&category)?;
            let mut session = PlanSession::load()?;
            let board = require_board(&mut session)?;
            if board.edit_item(&date, &item_id, &text, category) {
                session.save()?;
                println!("Updated.");
            } else {
                println!("Item not found; nothing changed.");
            }
        }
        PlanAction::Move { item_id, from, to } => {
            let mut session = PlanSession::load()?;
            let board = require_board(&mut session)?;
            board.move_item(&item_id, &from, &to);
            session.save()?;
            println!("Moved.");
        }
        PlanAction::Clear => {
            PlanSession::clear()?;
            println!("Plan and selection cleared.");
        }
    }
    Ok(())
}
