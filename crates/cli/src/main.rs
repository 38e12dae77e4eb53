mod cmd;
mod logging;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "dayl", version, about = "Jump to daily notes and link people with @ mentions")]
struct Cli {
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[arg(long, global = true)]
    profile: Option<String>,

    /// Reference date for relative dates (defaults to the local date)
    #[arg(long, global = true, value_name = "YYYY-MM-DD")]
    today: Option<NaiveDate>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Validate configuration and print resolved settings
    Doctor,

    /// List jump-to-date options for a query
    Dates(DatesArgs),

    /// Open (creating if needed) the daily note for a date
    Goto(GotoArgs),

    /// Rank @ mention candidates for a query
    Mention(MentionArgs),

    /// Complete the @ mention at a position in a note
    Link(LinkArgs),

    /// Show or change persisted settings
    Settings {
        #[command(subcommand)]
        command: SettingsCommand,
    },
}

#[derive(Debug, Args)]
pub struct DatesArgs {
    /// Natural-language date or filter text
    pub query: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct GotoArgs {
    /// Natural-language date or filter text (interactive picker when omitted)
    pub query: Option<String>,

    /// Take the Nth option (1-based) instead of the first
    #[arg(long, value_name = "N")]
    pub pick: Option<usize>,

    /// Open the note in $EDITOR
    #[arg(long)]
    pub open: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct MentionArgs {
    /// Text typed after the @
    pub query: String,

    /// Maximum number of suggestions to show
    #[arg(long, default_value_t = 20)]
    pub limit: usize,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct LinkArgs {
    /// Note containing the mention (absolute or vault-relative)
    pub file: PathBuf,

    /// Line of the cursor (1-based)
    #[arg(long)]
    pub line: usize,

    /// Cursor column: number of characters before the cursor on the line
    #[arg(long)]
    pub col: usize,

    /// Take the Nth suggestion (1-based) instead of the first
    #[arg(long, value_name = "N")]
    pub pick: Option<usize>,

    /// Print the edited line without writing the file
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Debug, Subcommand)]
pub enum SettingsCommand {
    /// Print the current settings
    Show,

    /// Set the first day of the week (sunday|monday|0|1)
    WeekStart { value: String },
}

fn main() {
    let cli = Cli::parse();
    let config = cli.config.as_deref();
    let profile = cli.profile.as_deref();
    let today = cli.today;

    match cli.command {
        Commands::Doctor => cmd::doctor::run(config, profile),
        Commands::Dates(args) => cmd::dates::run(config, profile, today, args),
        Commands::Goto(args) => cmd::goto::run(config, profile, today, args),
        Commands::Mention(args) => cmd::mention::run(config, profile, today, args),
        Commands::Link(args) => cmd::link::run(config, profile, today, args),
        Commands::Settings { command } => cmd::settings::run(config, profile, command),
    }
}
