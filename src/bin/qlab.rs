//! Q-Learning Lab CLI - step through tabular Q-learning on an editable grid
//!
//! - `run`: execute a script of lab commands and print the final state
//! - `play`: drive the agent interactively from stdin

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::Level;

#[derive(Parser)]
#[command(name = "qlab")]
#[command(version, about = "Hands-on tabular Q-learning on a grid world", long_about = None)]
struct Cli {
    /// Log every update step to stderr
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a script of lab commands
    Run(qlab::cli::commands::run::RunArgs),

    /// Drive the agent interactively
    Play(qlab::cli::commands::play::PlayArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::WARN })
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Run(args) => qlab::cli::commands::run::execute(args),
        Commands::Play(args) => qlab::cli::commands::play::execute(args),
    }
}
