use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for runlogger
/// CLI application to log running events in a JSON document store
#[derive(Parser)]
#[command(
    name = "runlogger",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple running log CLI: record runs (title, date, time, notes) in a JSON document store",
    long_about = None
)]
pub struct Cli {
    /// Override store path (useful for tests or a custom store file)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the document store and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/vim/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Print the internal operations log
    Log {
        #[arg(long = "print", help = "Print entries from the internal operations log")]
        print: bool,
    },

    /// Add a new running log
    Add {
        /// Title of the run (e.g. "Morning Run")
        title: String,

        /// Date of the run (YYYY-MM-DD, default: today)
        #[arg(long = "date", help = "Date of the run (YYYY-MM-DD, default: today)")]
        date: Option<String>,

        /// Start time (HH:MM, default: current time)
        #[arg(long = "time", help = "Start time (HH:MM, default: current time)")]
        time: Option<String>,

        /// Free-text notes
        #[arg(long = "notes", help = "Free-text notes for the run")]
        notes: Option<String>,
    },

    /// List recorded logs
    List {
        /// Filter by period.
        ///
        /// Supported formats:
        /// - YYYY                   → entire year (e.g. "2025")
        /// - YYYY-MM                → entire month (e.g. "2025-06")
        /// - YYYY-MM-DD             → specific day (e.g. "2025-06-18")
        ///
        /// Ranges (start:end) in the same format:
        /// - YYYY:YYYY
        /// - YYYY-MM:YYYY-MM
        /// - YYYY-MM-DD:YYYY-MM-DD
        ///
        /// If omitted, the entire archive is listed.
        #[arg(
            long,
            short,
            help = "Filter by year/month/day or a custom range (YYYY, YYYY-MM, YYYY-MM-DD, or ranges)"
        )]
        period: Option<String>,

        /// Show the full notes column regardless of configuration
        #[arg(long = "notes", help = "Show full notes instead of the configured view")]
        notes: bool,
    },

    /// Show one log in full detail
    Show {
        /// Document id of the log
        id: u64,
    },

    /// Edit an existing log
    Edit {
        /// Document id of the log
        id: u64,

        #[arg(long = "title", help = "New title")]
        title: Option<String>,

        #[arg(long = "date", help = "New date (YYYY-MM-DD)")]
        date: Option<String>,

        #[arg(long = "time", help = "New start time (HH:MM)")]
        time: Option<String>,

        #[arg(long = "notes", help = "New notes")]
        notes: Option<String>,
    },

    /// Delete a log by id
    Del {
        /// Document id of the log to delete
        id: u64,

        /// Skip the confirmation prompt
        #[arg(long = "yes", short = 'y', help = "Delete without asking for confirmation")]
        yes: bool,
    },

    /// Create a backup copy of the document store
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        /// Compress the backup with gzip
        #[arg(long)]
        compress: bool,
    },

    /// Export the recorded logs
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(
            long,
            value_name = "RANGE",
            help = "Filter export by year/month/day or a custom range"
        )]
        range: Option<String>,

        /// Overwrite the output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },
}
