use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "cyclesync", version, about = "CycleSync CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Profile management (onboarding, reset)
    Profile {
        #[command(subcommand)]
        action: commands::profile::ProfileAction,
    },
    /// Current cycle status
    Status {
        /// Override today's date (YYYY-MM-DD) for deterministic output
        #[arg(long)]
        today: Option<String>,
    },
    /// Fetch the daily advice plan
    Advice {
        /// Override today's date (YYYY-MM-DD)
        #[arg(long)]
        today: Option<String>,
    },
    /// Suggestion selection
    Select {
        #[command(subcommand)]
        action: commands::select::SelectAction,
    },
    /// Phase plan management
    Plan {
        #[command(subcommand)]
        action: commands::plan::PlanAction,
    },
    /// Export the built plan
    Export {
        #[command(subcommand)]
        action: commands::export::ExportAction,
    },
}

fn main() {
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Profile { action } => commands::profile::run(action),
        Commands::Status { today } => commands::status::run(today),
        Commands::Advice { today } => commands::advice::run(today),
        Commands::Select { action } => commands::select::run(action),
        Commands::Plan { action } => commands::plan::run(action),
        Commands::Export { action } => commands::export::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
