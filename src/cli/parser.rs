use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for feedlogger
#[derive(Parser)]
#[command(
    name = "feedlogger",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple baby feeding tracker: time feeds, keep a local history and build a report",
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

    /// Open the interactive tracker (start/stop feeds, annotate, browse history)
    Track,

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

    /// Database maintenance
    Db {
        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Show the feeding history day by day
    List {
        /// Day to show (YYYY-MM-DD); defaults to the newest day with feeds
        #[arg(long, short, conflicts_with = "all")]
        day: Option<String>,

        /// Show every day, newest first
        #[arg(long)]
        all: bool,
    },

    /// Print the feeding report, or write it to a file
    Report {
        /// Output file path (absolute path required)
        #[arg(long, value_name = "FILE")]
        file: Option<String>,

        /// Overwrite output file without confirmation
        #[arg(long, short = 'f', requires = "file")]
        force: bool,
    },

    /// Export every stored session
    Export {
        #[arg(long, value_enum, value_name = "FORMAT", default_value = "csv")]
        format: ExportFormat,

        /// Output file path (absolute path required)
        #[arg(long, value_name = "FILE")]
        file: String,

        /// Overwrite output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Delete the whole feeding history
    Clear {
        /// Skip the confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// Show or update the profile printed in the report header
    Profile {
        #[arg(long, help = "Mother's name")]
        mother: Option<String>,

        #[arg(long, help = "Child's name")]
        child: Option<String>,

        #[arg(long, help = "Child's age (free text, e.g. '3 weeks')")]
        age: Option<String>,

        #[arg(long = "print", help = "Print the stored profile")]
        print: bool,
    },
}
