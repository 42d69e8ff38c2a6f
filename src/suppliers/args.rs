use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "suppliers")]
#[command(about = "Keep a list of suppliers in a CSV file", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding the CSV file and config (defaults to $SUPPLIERS_DATA or the user data dir)
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Register a new supplier
    #[command(alias = "a")]
    Add {
        /// Display name of the supplier
        name: String,

        /// Contact email
        email: String,
    },

    /// Remove one or more suppliers by id
    #[command(alias = "rm")]
    Remove {
        /// Supplier ids
        #[arg(required = true, num_args = 1..)]
        ids: Vec<String>,

        /// Skip confirmation
        #[arg(short, long)]
        yes: bool,
    },

    /// List suppliers
    #[command(alias = "ls")]
    List {
        /// Only show suppliers whose name or email contains this text
        #[arg(short, long)]
        search: Option<String>,
    },

    /// Show a single supplier
    Show { id: String },

    /// Export all suppliers to a JSON file
    Export {
        /// Destination (defaults to the configured export file)
        path: Option<PathBuf>,
    },

    /// Merge suppliers from a JSON file
    Import { path: PathBuf },

    /// Get or set configuration
    Config {
        /// Configuration key (csv-file, export-file, validate-imports)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
