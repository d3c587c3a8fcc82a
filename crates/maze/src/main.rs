//! The `maze` binary: plays one round in the terminal.

use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use maze::{CONFIG_ENV, LOG_ENV, MazeError};

/// A terminal maze shooter.
///
/// Environment: MAZE_CONFIG names a JSON file overriding the game
/// settings, MAZE_LOG names a log file, and RUST_LOG sets the log filter.
#[derive(Parser, Debug)]
#[command(name = "maze")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Map file to play
    #[arg(value_name = "MAP", default_value = "mapa.txt")]
    map: PathBuf,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> Result<(), MazeError> {
    // Held until exit so buffered records are flushed.
    let _log_guard = match env::var_os(LOG_ENV) {
        Some(path) => Some(maze::init_logging(path.as_ref())?),
        None => None,
    };

    let config_path = env::var_os(CONFIG_ENV).map(PathBuf::from);
    let config = maze::load_config(config_path.as_deref())?;

    let outcome = maze::play(&args.map, &config).await?;
    tracing::info!(%outcome, "game over");

    // The terminal is restored by now.
    if let Some(message) = outcome.message() {
        println!("{message}");
    }
    Ok(())
}
