mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod store;
mod ui;

use clap::Parser;
use cli::{Cli, Commands};
use error::Result;

fn main() {
    if let Err(err) = run() {
        ui::error(err.to_string());
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = config::load(cli.global.config.as_deref())?;
    logging::init(cli.global.verbose, config.log.level.as_deref());
    let ledger = store::resolve_path(cli.global.ledger.as_deref(), &config);

    match cli.command {
        Commands::Init(args) => commands::init::run(&ledger, args),
        Commands::Invoke(args) => commands::invoke::run(&ledger, args),
        Commands::Query => commands::query::run(&ledger),
        Commands::Events(args) => commands::events::run(&ledger, args),
        Commands::Check => commands::check::run(&ledger),
        Commands::Schema(args) => commands::schema::run(args),
        Commands::Completions(args) => commands::completions::run(args),
    }
}
