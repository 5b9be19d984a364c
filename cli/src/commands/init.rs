use std::path::Path;

use event_sender::{mock::MockLedger, Chaincode, EventSender};

use crate::{
    cli::InitArgs,
    error::{CliError, Result},
    store, ui,
};

pub fn run(ledger_path: &Path, args: InitArgs) -> Result<()> {
    if ledger_path.exists() {
        if !args.force {
            return Err(CliError::LedgerExists(ledger_path.to_path_buf()));
        }
        ui::warn(format!("Replacing ledger at {}", ledger_path.display()));
    }

    let chaincode = EventSender::new();
    ui::status(format!("Deploying {}", chaincode.chaincode_id()));

    let mut ledger = MockLedger::new(chaincode);
    let outcome = ledger.init(Vec::new())?;
    store::save(ledger_path, ledger.state())?;

    ui::success(format!(
        "{} deployed in {} ({})",
        EventSender::schema().name,
        outcome.tx_id,
        ledger_path.display()
    ));
    Ok(())
}
