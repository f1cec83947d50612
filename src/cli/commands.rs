// src/cli/commands.rs
use clap::{Args, Subcommand};
use std::path::PathBuf;

use crate::models::GenerationPolicy;

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// Generate a password
    Generate(GenerateArgs),

    /// Score an existing password
    Analyze {
        /// Password to score
        #[arg(required = true)]
        password: String,
    },

    /// Inspect or manage the password history
    History {
        #[command(subcommand)]
        action: HistoryCommand,
    },

    /// Run the HTTP API
    Serve {
        /// Port to listen on
        #[arg(long, short)]
        port: Option<u16>,

        /// Address to bind
        #[arg(long)]
        address: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum HistoryCommand {
    /// List remembered passwords, newest first
    List {
        /// Hide all but the last two characters
        #[arg(long)]
        masked: bool,
    },

    /// Show one entry with its strength (1 = newest)
    Show {
        #[arg(required = true)]
        index: usize,
    },

    /// Copy one entry to the clipboard (1 = newest)
    Copy {
        #[arg(required = true)]
        index: usize,
    },

    /// Forget every remembered password
    Clear {
        /// Skip the confirmation prompt
        #[arg(long, short)]
        yes: bool,
    },

    /// Write the history as CSV
    Export {
        /// Output path; "-" writes to stdout
        #[arg(long, short, default_value = crate::history::EXPORT_FILE_NAME)]
        output: PathBuf,
    },
}

#[derive(Args, Debug, Default, Clone)]
pub struct GenerateArgs {
    /// Password length
    #[arg(long, short)]
    pub length: Option<usize>,

    /// Include uppercase letters
    #[arg(long, overrides_with = "no_uppercase")]
    pub uppercase: bool,
    /// Leave out uppercase letters
    #[arg(long)]
    pub no_uppercase: bool,

    /// Include lowercase letters
    #[arg(long, overrides_with = "no_lowercase")]
    pub lowercase: bool,
    /// Leave out lowercase letters
    #[arg(long)]
    pub no_lowercase: bool,

    /// Include numbers
    #[arg(long, overrides_with = "no_numbers")]
    pub numbers: bool,
    /// Leave out numbers
    #[arg(long)]
    pub no_numbers: bool,

    /// Include symbols
    #[arg(long, overrides_with = "no_symbols")]
    pub symbols: bool,
    /// Leave out symbols
    #[arg(long)]
    pub no_symbols: bool,

    /// Exclude similar characters (1 l I 0 O)
    #[arg(long)]
    pub exclude_similar: bool,

    /// Exclude brackets and slashes ({ } [ ] ( ) / \)
    #[arg(long)]
    pub exclude_ambiguous: bool,

    /// Seed for a reproducible password
    #[arg(long)]
    pub seed: Option<u64>,

    /// Copy the password to the clipboard
    #[arg(long, short)]
    pub copy: bool,

    /// Do not remember this password
    #[arg(long)]
    pub no_history: bool,
}

impl GenerateArgs {
    /// Apply command-line overrides on top of the configured defaults.
    pub fn apply(&self, defaults: GenerationPolicy) -> GenerationPolicy {
        let toggle = |on: bool, off: bool, default: bool| {
            if off {
                false
            } else if on {
                true
            } else {
                default
            }
        };

        GenerationPolicy {
            length: self.length.unwrap_or(defaults.length),
            include_uppercase: toggle(self.uppercase, self.no_uppercase, defaults.include_uppercase),
            include_lowercase: toggle(self.lowercase, self.no_lowercase, defaults.include_lowercase),
            include_numbers: toggle(self.numbers, self.no_numbers, defaults.include_numbers),
            include_symbols: toggle(self.symbols, self.no_symbols, defaults.include_symbols),
            exclude_similar: self.exclude_similar || defaults.exclude_similar,
            exclude_ambiguous: self.exclude_ambiguous || defaults.exclude_ambiguous,
        }
    }
}
