//! Command-line entry point for the shiken question extractor

use clap::Parser;
use shiken_cli::commands::Commands;

/// Segment exam documents into normalized question records
#[derive(Debug, Parser)]
#[command(name = "shiken", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Process(args) => args.execute(),
        Commands::Validate(args) => args.execute(),
        Commands::GenerateConfig(args) => args.execute(),
    };

    if let Err(error) = result {
        eprintln!("Error: {error:#}");
        std::process::exit(1);
    }
}
