use std::path::Path;

use event_sender::{
    mock::{MockLedger, TxOutcome},
    EventSender,
};
use tracing::debug;

use crate::{
    cli::InvokeArgs,
    error::{CliError, Result},
    store, ui,
};

pub fn run(ledger_path: &Path, args: InvokeArgs) -> Result<()> {
    let mut call = Vec::with_capacity(args.args.len() + 1);
    call.push(args.function);
    call.extend(args.args);

    let outcome = submit(ledger_path, call)?;
    print_payload(&outcome);
    ui::success(format!("{} committed", outcome.tx_id));
    Ok(())
}

/// Runs one transaction, persists the ledger and turns a non-success
/// response into an error.
pub fn submit(ledger_path: &Path, call: Vec<String>) -> Result<TxOutcome> {
    let world = store::load(ledger_path)?;
    let mut ledger = MockLedger::with_state(EventSender::new(), world);

    let outcome = ledger.invoke(call);
    store::save(ledger_path, ledger.state())?;

    if !outcome.response.is_success() {
        let detail = outcome
            .response
            .payload_str()
            .filter(|detail| !detail.is_empty())
            .map(ToString::to_string);
        if let Some(detail) = &detail {
            debug!(tx_id = %outcome.tx_id, %detail, "failure detail");
        }
        return Err(CliError::Rejected {
            tx_id: outcome.tx_id,
            status: outcome.response.status,
            message: detail.unwrap_or(outcome.response.message),
        });
    }

    if let Some(event) = &outcome.event {
        ui::event(&event.event_name, &event.payload_lossy());
    }
    Ok(outcome)
}

pub fn print_payload(outcome: &TxOutcome) {
    if !outcome.response.payload.is_empty() {
        println!("{}", String::from_utf8_lossy(&outcome.response.payload));
    }
}
