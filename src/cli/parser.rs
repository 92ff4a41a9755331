use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for hourbank
/// CLI application to record employee overtime and the pay owed
#[derive(Parser)]
#[command(
    name = "hourbank",
    version = env!("CARGO_PKG_VERSION"),
    about = "Record employee overtime hours and calculate the pay owed",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
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
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
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

    /// Record an overtime entry
    Add {
        /// Employee full name
        name: String,

        #[arg(long = "reg", help = "Employee registration number")]
        registration: String,

        #[arg(long = "hours", help = "Overtime hours worked, e.g. 3 or 2,5")]
        hours: String,

        #[arg(long = "date", help = "Work date, kept as typed (e.g. 01/01/2025)")]
        date: String,

        #[arg(long = "rate", help = "Hourly rate paid for overtime")]
        rate: String,
    },

    /// List recorded overtime entries
    List {
        #[arg(long = "reg", help = "Filter by registration number")]
        registration: Option<String>,

        #[arg(long = "search", help = "Filter by employee name (case-insensitive)")]
        search: Option<String>,

        #[arg(long = "summary", help = "Show totals grouped by registration")]
        summary: bool,
    },

    /// Edit an overtime entry in place (unset fields keep their values)
    Edit {
        /// Entry id, as shown by `list`
        id: u64,

        #[arg(long = "name", help = "New employee name")]
        name: Option<String>,

        #[arg(long = "reg", help = "New registration number")]
        registration: Option<String>,

        #[arg(long = "hours", help = "New overtime hours")]
        hours: Option<String>,

        #[arg(long = "date", help = "New work date")]
        date: Option<String>,

        #[arg(long = "rate", help = "New hourly rate")]
        rate: Option<String>,
    },

    /// Delete an overtime entry by id
    Del {
        /// Entry id, as shown by `list`
        id: u64,

        #[arg(long = "yes", short = 'y', help = "Skip the confirmation prompt")]
        yes: bool,
    },

    /// Export overtime entries
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long = "reg", help = "Export only entries for this registration")]
        registration: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Browse the remote employee directory
    Employees {
        #[arg(long = "search", help = "Filter by employee name")]
        search: Option<String>,

        #[arg(long = "url", help = "Override the directory endpoint")]
        url: Option<String>,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database and record integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },
}
