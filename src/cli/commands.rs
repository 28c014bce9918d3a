use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "tl", about = concat!("tl v", env!("CARGO_PKG_VERSION"), " - a small task list for the terminal"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Use a different data directory
    #[arg(short = 'C', long = "data-dir", global = true)]
    pub data_dir: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add a task to the top of the list
    Add(AddArgs),
    /// List tasks, optionally filtered
    List(ListArgs),
    /// Mark a task completed, or active again
    Toggle(IdArgs),
    /// Change a task's text
    Edit(EditArgs),
    /// Delete a task
    Delete(DeleteArgs),
    /// Show task statistics
    Stats,
    /// Show or change the theme
    Theme(ThemeArgs),
    /// Read or change config.toml
    Config(ConfigCmd),
    /// View or manage the recovery log
    Recovery(RecoveryCmd),
}

// ---------------------------------------------------------------------------
// Task commands
// ---------------------------------------------------------------------------

#[derive(Args)]
pub struct AddArgs {
    /// Task text
    pub text: String,
    /// Category: work, personal, study, general (default from config)
    #[arg(short, long)]
    pub category: Option<String>,
}

#[derive(Args)]
pub struct ListArgs {
    /// Filter by status (all, active, completed)
    #[arg(long, default_value = "all")]
    pub status: String,
    /// Filter by category (all, work, personal, study, general)
    #[arg(long, default_value = "all")]
    pub category: String,
    /// Case-insensitive substring to search for
    #[arg(short, long)]
    pub search: Option<String>,
}

#[derive(Args)]
pub struct IdArgs {
    /// Task ID
    pub id: u64,
}

#[derive(Args)]
pub struct EditArgs {
    /// Task ID
    pub id: u64,
    /// New text (prompted for when omitted)
    pub text: Option<String>,
}

#[derive(Args)]
pub struct DeleteArgs {
    /// Task ID
    pub id: u64,
    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub yes: bool,
}

// ---------------------------------------------------------------------------
// Theme and config
// ---------------------------------------------------------------------------

#[derive(Args)]
pub struct ThemeArgs {
    /// toggle, light or dark (shows the current theme when omitted)
    pub mode: Option<String>,
}

#[derive(Args)]
pub struct ConfigCmd {
    #[command(subcommand)]
    pub action: ConfigAction,
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Print a config value
    Get(ConfigGetArgs),
    /// Set a config value, keeping the rest of the file intact
    Set(ConfigSetArgs),
}

#[derive(Args)]
pub struct ConfigGetArgs {
    /// default_category, show_key_hints or colors.<light|dark>.<slot>
    pub key: String,
}

#[derive(Args)]
pub struct ConfigSetArgs {
    pub key: String,
    pub value: String,
}

// ---------------------------------------------------------------------------
// Recovery log
// ---------------------------------------------------------------------------

#[derive(Args)]
pub struct RecoveryCmd {
    #[command(subcommand)]
    pub action: Option<RecoveryAction>,
    /// Maximum number of entries to show (default: 10)
    #[arg(long)]
    pub limit: Option<usize>,
}

#[derive(Subcommand)]
pub enum RecoveryAction {
    /// Remove old entries
    Prune(RecoveryPruneArgs),
    /// Print the absolute path to the recovery log
    Path,
}

#[derive(Args)]
pub struct RecoveryPruneArgs {
    /// Remove all entries instead of those older than 30 days
    #[arg(long)]
    pub all: bool,
}
