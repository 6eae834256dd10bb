//! ShelfDB Binary
//!
//! Starts an interactive session on the terminal.

use std::io;

use clap::Parser;
use shelfdb::console::Console;
use shelfdb::{Config, RowPolicy, Session};
use tracing_subscriber::{fmt, EnvFilter};

/// ShelfDB
#[derive(Parser, Debug)]
#[command(name = "shelfdb")]
#[command(about = "Menu-driven flat-file inventory manager")]
#[command(version)]
struct Args {
    /// Directory that filenames are resolved against
    #[arg(short, long, default_value = ".")]
    data_dir: String,

    /// Extension appended to every filename
    #[arg(short, long, default_value = ".db")]
    extension: String,

    /// Skip malformed rows on load instead of rejecting the file
    #[arg(short, long)]
    lenient: bool,
}

fn main() {
    // Diagnostics go to stderr so they never interleave with the menu
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    tracing::info!("ShelfDB v{}", shelfdb::VERSION);
    tracing::info!("Data directory: {}", args.data_dir);

    let row_policy = if args.lenient {
        RowPolicy::Skip
    } else {
        RowPolicy::Reject
    };

    let config = Config::builder()
        .data_dir(&args.data_dir)
        .extension(&args.extension)
        .row_policy(row_policy)
        .build();

    let console = Console::new(io::stdin().lock(), io::stdout().lock());

    let mut session = match Session::new(config, console) {
        Ok(s) => s,
        Err(e) => {
            tracing::error!("Failed to start session: {}", e);
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = session.run() {
        tracing::error!("Session error: {}", e);
        std::process::exit(1);
    }
}
