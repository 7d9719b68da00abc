use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;

#[derive(Parser)]
#[command(author, version = env!("CARGO_PKG_VERSION"), about = "Bootstrap the development environment: submodules, vcpkg, build directory, dependencies", long_about = None)]
struct Cli {
    /// Running with no subcommand performs the full setup
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Sync submodules, bootstrap vcpkg, and install dependencies
    Setup {
        /// Project root (defaults to the parent of this executable's directory)
        #[arg(long)]
        root: Option<PathBuf>,

        /// Print the step plan without running anything
        #[arg(long)]
        dry_run: bool,
    },

    /// Check required tools and project state
    Doctor {
        /// Project root (defaults to the parent of this executable's directory)
        #[arg(long)]
        root: Option<PathBuf>,

        /// Output results as JSON
        #[arg(short, long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command.unwrap_or(Commands::Setup {
        root: None,
        dry_run: false,
    }) {
        Commands::Setup { root, dry_run } => {
            commands::setup::execute(root, dry_run)?;
        }
        Commands::Doctor { root, json } => {
            let exit_code = commands::doctor::execute(root, json)?;
            if exit_code != 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}
