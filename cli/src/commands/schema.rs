use event_sender::EventSender;

use crate::{cli::SchemaArgs, error::Result};

pub fn run(args: SchemaArgs) -> Result<()> {
    let schema = EventSender::schema();

    if args.pretty {
        println!("{}", serde_json::to_string_pretty(schema)?);
    } else {
        println!("{}", serde_json::to_string(schema)?);
    }

    Ok(())
}
