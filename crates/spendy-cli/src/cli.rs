use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use spendy_core::VERSION;

/// Spendy - Where'd my money go? A local-first expense tracker
#[derive(Parser)]
#[command(name = "spendy")]
#[command(author, version = VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Directory holding the expense data
    #[arg(short, long, global = true, env = "SPENDY_DATA_DIR")]
    pub data_dir: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Quiet mode (minimal output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Use ASCII symbols only
    #[arg(long, global = true)]
    pub ascii: bool,
}

/// Arguments for the `init` command
#[derive(Args)]
pub struct InitArgs {
    /// Storage backend (file or sqlite)
    #[arg(long, value_name = "BACKEND")]
    pub backend: Option<String>,

    /// Currency symbol used when printing amounts
    #[arg(long, value_name = "SYMBOL")]
    pub currency: Option<String>,

    /// Timezone for "today" and "this month" (IANA name, or "auto")
    #[arg(long)]
    pub timezone: Option<String>,

    /// Overwrite an existing config file
    #[arg(long)]
    pub force: bool,

    /// Disable interactive prompts
    #[arg(long)]
    pub no_input: bool,
}

/// Arguments for the `add` command
#[derive(Args)]
pub struct AddArgs {
    /// How much was spent
    #[arg(value_name = "AMOUNT", allow_hyphen_values = true)]
    pub amount: String,

    /// Category (prompted from the known list when omitted on a TTY)
    #[arg(short, long)]
    pub category: Option<String>,

    /// Optional note
    #[arg(short, long)]
    pub note: Option<String>,

    /// Disable interactive prompts
    #[arg(long)]
    pub no_input: bool,

    /// Output the created expense as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `delete` command
#[derive(Args)]
pub struct DeleteArgs {
    /// Expense ID (full ID or unique prefix)
    #[arg(value_name = "ID")]
    pub id: String,
}

/// Arguments for the `list` command
#[derive(Args)]
pub struct ListArgs {
    /// Filter by category
    #[arg(short, long)]
    pub category: Option<String>,

    /// Limit number of results
    #[arg(long)]
    pub limit: Option<usize>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Output format (table, plain)
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<String>,
}

/// Arguments for report commands (`summary`, `breakdown`)
#[derive(Args)]
pub struct ReportArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Output format (table, plain)
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<String>,
}

/// Arguments for the `export` command
#[derive(Args)]
pub struct ExportArgs {
    /// Output format
    #[arg(long, default_value = "json")]
    pub format: String,
}

/// Arguments for the `completions` command
#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_name = "SHELL")]
    pub shell: Shell,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a config file with storage and display preferences
    Init(InitArgs),

    /// Track a new expense
    Add(AddArgs),

    /// Delete an expense
    #[command(visible_alias = "rm")]
    Delete(DeleteArgs),

    /// List expenses, newest first
    #[command(visible_alias = "ls")]
    List(ListArgs),

    /// Show totals: overall, this month, today, average
    Summary(ReportArgs),

    /// Show spending per category with its share of the total
    Breakdown(ReportArgs),

    /// List the known categories
    Categories,

    /// Export the raw ledger document (portable formats, you own your data)
    Export(ExportArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}
