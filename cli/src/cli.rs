use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

#[derive(Debug, Parser)]
#[command(name = "event-sender")]
#[command(bin_name = "event-sender")]
#[command(about = "Run the EventSender chaincode against a local ledger file")]
#[command(version)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOptions,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Args)]
pub struct GlobalOptions {
    /// Path to the ledger file holding the world state.
    #[arg(long, global = true, env = "EVENT_SENDER_LEDGER")]
    pub ledger: Option<PathBuf>,

    /// Path to a TOML config file (defaults to ./event-sender.toml if present).
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Deploy the chaincode into a new ledger.
    Init(InitArgs),
    /// Submit a transaction calling FUNCTION with ARGS. Everything after
    /// FUNCTION is passed to the chaincode verbatim.
    Invoke(InvokeArgs),
    /// Print the number of events sent so far.
    Query,
    /// List committed events.
    Events(EventsArgs),
    /// Validate the ledger file.
    Check,
    /// Print the contract schema as JSON.
    Schema(SchemaArgs),
    /// Generate shell completion scripts.
    Completions(CompletionsArgs),
}

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Replace an existing ledger.
    #[arg(long)]
    pub force: bool,
}

#[derive(Debug, Args)]
pub struct InvokeArgs {
    /// Function name (`invoke` or `query`).
    pub function: String,

    /// Arguments passed after the function name.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub args: Vec<String>,
}

#[derive(Debug, Args)]
pub struct EventsArgs {
    /// Print events as JSON lines.
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct SchemaArgs {
    /// Pretty-print the JSON.
    #[arg(long)]
    pub pretty: bool,
}

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for.
    #[arg(value_enum)]
    pub shell: Shell,
}
