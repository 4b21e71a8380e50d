use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tally::output::Format;
use tally::store::JsonStore;

#[derive(Parser)]
#[command(
    name = "tally",
    version,
    about = "Weighted task tracker with an automatic reach-50% action"
)]
struct Cli {
    /// Output format
    #[arg(long, global = true, value_enum, default_value = "json")]
    format: Format,
    /// Path to the tasks file
    #[arg(long, global = true, default_value = "tasks.json")]
    file: PathBuf,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show current tasks, stats, and chart data
    Status,
    /// Add a new task
    Add {
        /// Task title (defaults to "Untitled")
        title: Option<String>,
        /// Due date: YYYY-MM-DD, "today", "tomorrow", or anything containing "week"
        #[arg(long)]
        due: Option<String>,
        /// Weight 1-3 (lenient; unparseable input falls back to 1)
        #[arg(long)]
        weight: Option<String>,
    },
    /// Toggle completion by id, or by exact title when not numeric
    Complete {
        /// Task id or title
        selector: String,
    },
    /// Edit task fields; omitted flags keep current values
    Edit {
        /// Task id to edit
        id: u64,
        /// New title
        #[arg(long)]
        title: Option<String>,
        /// New due date (same forms as add)
        #[arg(long)]
        due: Option<String>,
        /// New weight 1-3
        #[arg(long)]
        weight: Option<String>,
    },
    /// Delete a task by id
    Delete {
        /// Task id to delete
        id: u64,
    },
    /// Complete the lightest unprotected tasks until progress reaches 50%
    #[command(name = "auto-50")]
    Auto50,
}

fn run(cli: Cli) -> tally::error::Result<()> {
    let store = JsonStore::new(cli.file);
    let today = chrono::Local::now().date_naive();
    let format = cli.format;

    match cli.command {
        Commands::Status => tally::commands::status::run(&store, format),
        Commands::Add { title, due, weight } => {
            tally::commands::add::run(&store, title, due, weight, today, format)
        }
        Commands::Complete { selector } => {
            tally::commands::complete::run(&store, &selector, format)
        }
        Commands::Edit {
            id,
            title,
            due,
            weight,
        } => tally::commands::edit::run(&store, id, title, due, weight, today, format),
        Commands::Delete { id } => tally::commands::delete::run(&store, id, format),
        Commands::Auto50 => tally::commands::auto::run(&store, format),
    }
}

fn main() {
    let cli = Cli::parse();
    let format = cli.format;
    if let Err(e) = run(cli) {
        match format {
            Format::Json => {
                eprintln!(
                    "{}",
                    serde_json::json!({
                        "error": e.code(),
                        "message": e.to_string()
                    })
                );
            }
            _ => eprintln!("error: {e}"),
        }
        std::process::exit(1);
    }
}
