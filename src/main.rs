/// Main entry point for the habit-loop tracker
/// 
/// This file sets up logging, parses command line arguments, opens the
/// file-backed store and runs one activation of the habit store. All logic
/// lives in the library; the binary only renders views and dispatches
/// actions.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;

use habit_loop::{HabitLoopError, HabitStore, JsonFileStore, KeyValueStore};

/// Get the default data file path with robust fallback strategy
fn get_default_data_path() -> Result<PathBuf, HabitLoopError> {
    // Try various locations in order of preference
    let potential_paths = [
        // 1. User's home directory (preferred)
        dirs::home_dir().map(|mut p| {
            p.push(".habit-loop");
            p
        }),
        // 2. User's data directory (platform-specific)
        dirs::data_dir().map(|mut p| {
            p.push("habit-loop");
            p
        }),
        // 3. User's config directory
        dirs::config_dir().map(|mut p| {
            p.push("habit-loop");
            p
        }),
        // 4. Current working directory (last resort)
        std::env::current_dir().ok().map(|mut p| {
            p.push(".habit-loop");
            p
        }),
    ];

    for potential_path in potential_paths.iter().flatten() {
        // Try to create the directory
        if let Ok(()) = std::fs::create_dir_all(potential_path) {
            // Test if we can write to this directory
            let test_file = potential_path.join(".test_write");
            if std::fs::write(&test_file, "test").is_ok() {
                let _ = std::fs::remove_file(&test_file); // Clean up test file
                return Ok(potential_path.join("habits.json"));
            }
        }
    }

    // Ultimate fallback: use a temporary directory
    let mut temp_path = std::env::temp_dir();
    temp_path.push("habit-loop");
    std::fs::create_dir_all(&temp_path)?;

    tracing::warn!("Using temporary directory for data: {}", temp_path.display());
    Ok(temp_path.join("habits.json"))
}

/// Command line arguments for the habit-loop tracker
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the JSON data file
    /// If not provided, uses a default location in the user's home directory
    #[arg(long)]
    data_file: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    /// Enable verbose output (implies debug)
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show today's habits and streak statistics (default)
    Status,
    /// Add a new habit to the daily list
    Add { name: String },
    /// Toggle a habit's completion for today
    Toggle { id: u32 },
    /// Remove a habit from the daily list
    Remove { id: u32 },
    /// Rename a habit
    Rename { id: u32, name: String },
    /// List recorded days, newest first
    History,
    /// Show Monday-to-Sunday completion rates for this week
    Week,
}

fn main() -> Result<(), HabitLoopError> {
    let args = Args::parse();

    // Set up logging based on command line flags
    let log_level = if args.verbose {
        "debug"
    } else if args.debug {
        "info"
    } else {
        "warn"
    };

    tracing_subscriber::fmt()
        .with_env_filter(format!("habit_loop={}", log_level))
        .with_writer(std::io::stderr) // Keep stdout for the rendered views
        .init();

    // Determine data file path
    let data_path = match args.data_file {
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.exists() {
                    std::fs::create_dir_all(parent)?;
                }
            }
            path
        }
        None => get_default_data_path()?,
    };

    info!("Using data file at: {}", data_path.display());

    // Every process start is an activation: init performs migration, the
    // rollover check and the first persist before any action runs.
    let backend = JsonFileStore::open(data_path)?;
    let mut store = HabitStore::new(backend);
    store.init();

    match args.command.unwrap_or(Command::Status) {
        Command::Status => print_status(&store),
        Command::Add { name } => {
            store.add_habit(&name);
            print_status(&store);
        }
        Command::Toggle { id } => {
            store.toggle_habit(id);
            print_status(&store);
        }
        Command::Remove { id } => {
            store.remove_habit(id);
            print_status(&store);
        }
        Command::Rename { id, name } => {
            store.rename_habit(id, &name);
            print_status(&store);
        }
        Command::History => {
            for item in store.history_items() {
                println!("{}  {}/{} ({}%)", item.label, item.done, item.total, item.rate);
            }
        }
        Command::Week => {
            for row in store.weekly_summary() {
                println!("{}  {:>3}%", row.label, row.rate);
            }
        }
    }

    Ok(())
}

/// Render today's list and the derived statistics
fn print_status<S: KeyValueStore>(store: &HabitStore<S>) {
    println!(
        "{}: {} of {} done ({}%)",
        store.last_date(),
        store.done_count(),
        store.total_count(),
        store.completion_rate()
    );
    for habit in store.habits() {
        let mark = if habit.done { "x" } else { " " };
        println!("  [{}] {:>3}  {}", mark, habit.id, habit.name);
    }
    println!(
        "Current streak: {}  Best streak: {}",
        store.current_streak(),
        store.best_streak()
    );
}
