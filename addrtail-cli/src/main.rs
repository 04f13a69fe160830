//! addrtail command-line entry point

use addrtail_cli::commands::Commands;
use clap::Parser;

/// Split mailing-address tails into city, state, ZIP and country
#[derive(Debug, Parser)]
#[command(name = "addrtail", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() {
    let cli = Cli::parse();

    if let Err(err) = cli.command.execute() {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}
