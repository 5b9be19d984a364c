use std::path::Path;

use crate::{commands::invoke, error::Result};

pub fn run(ledger_path: &Path) -> Result<()> {
    let outcome = invoke::submit(ledger_path, vec!["query".to_string()])?;
    invoke::print_payload(&outcome);
    Ok(())
}
