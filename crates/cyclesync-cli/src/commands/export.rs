//! Export commands: ICS file and web-calendar quick-add link.

use clap::Subcommand;
use cyclesync_core::{ics, links, PlanSession};

#[derive(Subcommand)]
pub enum ExportAction {
    /// Write the plan as an iCalendar document
    Ics {
        /// Output file; prints to stdout when omitted
        #[arg(long)]
        output: Option<String>,
    },
    /// Print a quick-add link for the first populated day
    Link,
}

pub fn run(action: ExportAction) -> Result<(), Box<dyn std::error::Error>> {
    let session = PlanSession::load()?;
    let board = session
        .board
        .ok_or("no plan built yet. Run 'plan build' first.")?;

    match action {
        ExportAction::Ics { output } => match ics::export_ics(board.buckets()) {
            Some(document) => match output {
                Some(path) => {
                    std::fs::write(&path, &document)?;
                    println!("Wrote {path}.");
                }
                None => print!("{document}"),
            },
            None => println!("Nothing to export: every day is empty."),
        },
        ExportAction::Link => match links::quick_add_link(&board) {
            Some(link) => println!("{link}"),
            None => println!("Nothing to link: every day is empty."),
        },
    }
    Ok(())
}
