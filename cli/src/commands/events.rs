use std::path::Path;

use crate::{cli::EventsArgs, error::Result, store, ui};

pub fn run(ledger_path: &Path, args: EventsArgs) -> Result<()> {
    let world = store::load(ledger_path)?;
    let events = world.events();

    if args.json {
        for event in events {
            println!("{}", serde_json::to_string(event)?);
        }
        return Ok(());
    }

    if events.is_empty() {
        ui::status("No events committed yet");
        return Ok(());
    }

    for event in events {
        println!(
            "{}\t{}\t{}",
            event.tx_id,
            event.event_name,
            event.payload_lossy()
        );
    }
    Ok(())
}
