//! mxzero CLI - render audio through the trial gate and inspect the license.

mod commands;
mod wav;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "mxzero")]
#[command(author, version, about = "mxzero trial gate CLI", long_about = None)]
struct Cli {
    /// Log at debug level (RUST_LOG takes precedence when set)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Process a WAV file through the trial gate
    Process(commands::process::ProcessArgs),

    /// Check the key file and report whether the gate would unlock
    Validate(commands::validate::ValidateArgs),

    /// Print the platform key file location
    KeyPath,

    /// Show envelope timing for a sample rate
    Info(commands::info::InfoArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| default_level.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Process(args) => commands::process::run(args),
        Commands::Validate(args) => commands::validate::run(args),
        Commands::KeyPath => commands::key_path::run(),
        Commands::Info(args) => commands::info::run(args),
    }
}
