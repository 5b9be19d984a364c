use std::io;

use clap::CommandFactory;

use crate::{
    cli::{Cli, CompletionsArgs},
    error::Result,
};

pub fn run(args: CompletionsArgs) -> Result<()> {
    let mut cmd = Cli::command();
    clap_complete::generate(args.shell, &mut cmd, "event-sender", &mut io::stdout());
    Ok(())
}
