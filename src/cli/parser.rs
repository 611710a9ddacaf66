use clap::{Parser, Subcommand, ValueEnum};

/// Command-line interface definition for focuslog
/// CLI application to record focus sessions and review them
#[derive(Parser)]
#[command(
    name = "focuslog",
    version = env!("CARGO_PKG_VERSION"),
    about = "Record focus sessions (planned vs. actual, intensity tier, energy) and review them",
    long_about = None
)]
pub struct Cli {
    /// Override the SQLite database path (remote store)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Override the JSON entries file path (local store)
    #[arg(global = true, long = "file")]
    pub file: Option<String>,

    /// Override the configured store backend
    #[arg(global = true, long = "store", value_enum)]
    pub store: Option<StoreKind>,

    /// Override the identity file path (remote store sign-in)
    #[arg(global = true, long = "identity-file")]
    pub identity_file: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StoreKind {
    Local,
    Remote,
}

impl StoreKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            StoreKind::Local => "local",
            StoreKind::Remote => "remote",
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration and the selected store
    Init,

    /// Manage the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,
    },

    /// Record a focus session
    Add {
        /// Session date (YYYY-MM-DD, default today)
        #[arg(long)]
        date: Option<String>,

        /// Intensity tier: green (90'), yellow (45') or red (15')
        #[arg(long = "type", value_name = "TIER")]
        session_type: Option<String>,

        /// Planned minutes (default derived from the tier)
        #[arg(long)]
        planned: Option<String>,

        /// Actual minutes spent (required)
        #[arg(long)]
        actual: Option<String>,

        /// How many tasks were completed
        #[arg(long = "tasks-done")]
        tasks_done: Option<String>,

        /// Energy after the session: better, same or worse
        #[arg(long)]
        energy: Option<String>,

        /// Free-text notes
        #[arg(long)]
        notes: Option<String>,

        /// Named sub-task to record with the session (repeatable, ordered)
        #[arg(long = "task", value_name = "NAME")]
        tasks: Vec<String>,
    },

    /// List sessions, most recent first
    List {
        #[arg(long, help = "Include notes in the listing")]
        notes: bool,
    },

    /// Delete a session by id
    Del { id: i64 },

    /// Mark a sub-task as done or not done (remote store only)
    Task {
        #[arg(long, value_name = "ID", conflicts_with = "undone")]
        done: Option<i64>,

        #[arg(long, value_name = "ID")]
        undone: Option<i64>,
    },

    /// Sign in as a user (remote store)
    Login { user: String },

    /// Sign out
    Logout,

    /// Show the signed-in user
    Whoami,

    /// Print the internal audit log table (remote store)
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },
}
