//! CLI command definitions
//!
//! All CLI structs and subcommand enums are defined here.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Paxfinder - passenger manifest parser and search
#[derive(Parser, Debug)]
#[command(name = "paxfinder")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to config file (default: ~/.config/paxfinder/config.yaml)
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// State database path (overrides the config file)
    #[arg(long, global = true)]
    pub db: Option<String>,

    /// Output in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Show number, group, class and other details for each passenger
    #[arg(short, long, global = true)]
    pub expanded: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a default configuration file
    Init,

    /// Parse manifest text and add it to the stored passengers
    Add {
        /// File with manifest text (reads stdin when omitted or "-")
        file: Option<PathBuf>,
    },

    /// Show every stored passenger
    List,

    /// Search by flight, surname, given name, seat or number
    ///
    /// All terms must match. With no terms every passenger is shown.
    Search {
        /// Search terms
        terms: Vec<String>,
    },

    /// Show counts per flight and storage details
    Stats,

    /// Remove all stored passengers
    Clear {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Print or write the stored state as JSON
    Export {
        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Merge a JSON file produced by `export` into the stored state
    Import {
        /// Exported JSON file
        file: PathBuf,
    },
}
