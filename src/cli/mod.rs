pub mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "frontpage")]
#[command(about = "A terminal viewer for top news headlines", long_about = None)]
pub struct Cli {
    /// Path to an alternate configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Override the configured country code (ISO 3166 alpha-2)
    #[arg(long, global = true)]
    pub country: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch the current top headlines and print them
    Fetch,
    /// Launch the TUI
    Tui,
}
