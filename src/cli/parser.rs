use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for ttviewer
#[derive(Parser)]
#[command(
    name = "ttviewer",
    version = env!("CARGO_PKG_VERSION"),
    about = "Teacher weekly timetable viewer: look up a teacher's periods from a timetable spreadsheet",
    long_about = None
)]
pub struct Cli {
    /// Override session database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Local timetable spreadsheet (default: timetableNov25.xlsx)
    #[arg(global = true, long = "file", value_name = "FILE")]
    pub file: Option<String>,

    /// Uploaded timetable; takes precedence over --file. Use '-' for stdin
    #[arg(global = true, long = "upload", value_name = "FILE")]
    pub upload: Option<String>,

    /// Session whose view counter is used
    #[arg(global = true, long = "session", default_value = "default")]
    pub session: String,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration file and session database
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
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

    /// Load and validate the timetable, showing the detected period columns
    Check,

    /// List teacher names found in the timetable
    Teachers {
        #[arg(long, short, help = "Only names equal to or containing this text")]
        search: Option<String>,
    },

    /// Show a teacher's weekly timetable (counts as one view)
    View {
        /// Teacher name (case-insensitive; quotes optional)
        name: Vec<String>,

        #[arg(long, value_name = "FILE", help = "Also write the view to FILE")]
        export: Option<String>,

        #[arg(long, value_enum, default_value = "csv", help = "Export format")]
        format: ExportFormat,

        #[arg(long, short = 'f', help = "Overwrite the export file without asking")]
        force: bool,
    },

    /// Show how many views this session has used
    Status,

    /// Reset the session's view counter
    Reset,

    /// End the session, discarding its counter
    End,

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Start an interactive session
    Shell,
}
