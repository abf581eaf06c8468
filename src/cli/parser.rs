use crate::export::{ExportFormat, ExportView};
use clap::{Parser, Subcommand};

/// Command-line interface definition for ctc-checkin
#[derive(Parser)]
#[command(
    name = "ctc-checkin",
    version = env!("CARGO_PKG_VERSION"),
    about = "CTC staff check-in / check-out log with an admin summary view",
    long_about = None
)]
pub struct Cli {
    /// Override the CSV backing file (useful for tests or a shared drive)
    #[arg(global = true, long = "data")]
    pub data: Option<String>,

    /// Override the SQLite database (internal log, sqlite backend)
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
    /// Initialize the configuration, data file and database
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Check in or check out
    Submit {
        /// Your name
        name: String,

        /// Your department (Aviation / Survival departments need --flight)
        department: String,

        /// Current location: main, fta, lego, city, other (or the full label)
        #[arg(long = "location", short = 'l', default_value = "main")]
        location: String,

        /// Status: in | out
        #[arg(long = "status", short = 's', default_value = "in")]
        status: String,

        /// Optional notes (e.g. "ETA 1600")
        #[arg(long = "notes", short = 'n', default_value = "")]
        notes: String,

        /// Flight name (required for Aviation/Survival)
        #[arg(long = "flight", short = 'f', default_value = "")]
        flight: String,
    },

    /// Open the Ops Dashboard (admin access only)
    Admin {
        /// Admin PIN; read from stdin when omitted
        #[arg(long = "pin")]
        pin: Option<String>,

        /// Keep the dashboard open, refreshing every `refresh_interval` seconds
        #[arg(long = "watch", short = 'w')]
        watch: bool,

        /// Stop watching after this many refreshes
        #[arg(long = "refreshes", requires = "watch", hide = true)]
        refreshes: Option<usize>,
    },

    /// Full check-in/out log, most recent first
    List {
        #[arg(
            long,
            short,
            help = "Filter by year/month/day or a custom range (YYYY, YYYY-MM, YYYY-MM-DD, start:end, all)"
        )]
        period: Option<String>,

        #[arg(long = "checked-in", help = "Only rows with status Check In")]
        checked_in: bool,

        #[arg(long, help = "Show at most N rows")]
        limit: Option<usize>,
    },

    /// Export the log or a summary
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        /// Output file path (absolute path required)
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, value_enum, default_value = "log")]
        view: ExportView,

        #[arg(
            long,
            value_name = "RANGE",
            help = "Filter export by year/month/day or a custom range"
        )]
        range: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Append the rows of an existing check-in CSV to the active store
    Import {
        #[arg(long, value_name = "FILE")]
        file: String,
    },

    /// Create a backup copy of the data file
    Backup {
        /// Destination file path (absolute path required)
        #[arg(long, value_name = "FILE")]
        file: String,

        /// Compress the backup (.zip)
        #[arg(long)]
        compress: bool,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Print the internal operation log
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },
}
