// src/cli/mod.rs
use clap::Parser;
use std::path::PathBuf;

pub mod commands;
pub mod menu;
pub mod handlers;

pub use commands::CliCommand;

#[derive(Parser, Debug)]
#[command(author, version, about = "Generate, score and remember random passwords", long_about = None)]
pub struct Args {
    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Where generated passwords are remembered
    #[arg(long, global = true, env = "HISTORY_FILE")]
    pub history_file: Option<PathBuf>,

    /// Keep history in memory only for this run
    #[arg(long, global = true)]
    pub ephemeral: bool,

    /// Command to execute (interactive menu when omitted)
    #[command(subcommand)]
    pub command: Option<CliCommand>,
}
