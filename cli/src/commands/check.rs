use std::path::Path;

use event_sender::{mock::WorldState, EVENT_COUNT_KEY, EVENT_NAME};

use crate::{
    error::{CliError, Result},
    store, ui,
};

pub fn run(ledger_path: &Path) -> Result<()> {
    let world = store::load(ledger_path)?;

    ui::status(format!("Checking ledger at {}", ledger_path.display()));

    let mut failures = 0;
    for (name, ok) in checks(&world) {
        record(&name, ok, &mut failures);
    }

    if failures > 0 {
        return Err(CliError::Message(format!(
            "check failed with {failures} issue(s)"
        )));
    }

    ui::success("All checks passed");
    Ok(())
}

fn checks(world: &WorldState) -> Vec<(String, bool)> {
    let raw = world.get(EVENT_COUNT_KEY);
    let counter = raw.and_then(|value| value.parse::<u64>().ok());
    let emitted = world.events_named(EVENT_NAME).count() as u64;
    let events_in_order = world
        .events_named(EVENT_NAME)
        .enumerate()
        .all(|(n, event)| is_event_number(&event.payload_lossy(), n));

    vec![
        (format!("state key '{EVENT_COUNT_KEY}' present"), raw.is_some()),
        (
            format!("'{EVENT_COUNT_KEY}' is a non-negative integer"),
            counter.is_some(),
        ),
        (
            format!("'{EVENT_COUNT_KEY}' matches {emitted} committed '{EVENT_NAME}' event(s)"),
            counter == Some(emitted),
        ),
        ("events numbered from 0 in commit order".to_string(), events_in_order),
        (
            "transaction count covers committed events".to_string(),
            world.tx_count() > emitted,
        ),
    ]
}

fn is_event_number(payload: &str, n: usize) -> bool {
    payload
        .strip_prefix(&format!("Event {n}"))
        .is_some_and(|rest| rest.is_empty() || rest.starts_with(','))
}

fn record(name: &str, ok: bool, failures: &mut usize) {
    if ok {
        ui::success(name);
    } else {
        *failures += 1;
        ui::error(name);
    }
}

#[cfg(test)]
mod tests {
    use event_sender::{mock::MockLedger, EventSender};

    use super::*;

    fn call(values: &[&str]) -> Vec<String> {
        values.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn healthy_ledger_passes() {
        let mut ledger = MockLedger::new(EventSender::new());
        ledger.init(Vec::new()).unwrap();
        ledger.invoke(call(&["invoke", "a"]));
        ledger.invoke(call(&["invoke"]));

        assert!(checks(ledger.state()).iter().all(|(_, ok)| *ok));
    }

    #[test]
    fn tampered_counter_fails() {
        let mut ledger = MockLedger::new(EventSender::new());
        ledger.init(Vec::new()).unwrap();
        ledger.invoke(call(&["invoke"]));
        ledger.state_mut().put(EVENT_COUNT_KEY, "5");

        let failed: Vec<_> = checks(ledger.state())
            .into_iter()
            .filter(|(_, ok)| !ok)
            .map(|(name, _)| name)
            .collect();
        assert_eq!(failed, ["'noevents' matches 1 committed 'evtsender' event(s)"]);
    }

    #[test]
    fn empty_ledger_fails() {
        let world = WorldState::default();
        let results = checks(&world);
        assert!(!results[0].1);
        assert!(!results[1].1);
    }

    #[test]
    fn event_numbers_match_exactly() {
        assert!(is_event_number("Event 1", 1));
        assert!(is_event_number("Event 1,x,y", 1));
        assert!(!is_event_number("Event 10", 1));
        assert!(!is_event_number("Event 10,x", 1));
        assert!(!is_event_number("Event", 1));
    }

    #[test]
    fn misnumbered_events_fail() {
        let world: WorldState = serde_json::from_value(serde_json::json!({
            "state": { "noevents": "2" },
            "events": [
                { "tx_id": "tx-00000002", "chaincode_id": "EventSender",
                  "event_name": "evtsender", "payload": b"Event 0".to_vec() },
                { "tx_id": "tx-00000003", "chaincode_id": "EventSender",
                  "event_name": "evtsender", "payload": b"Event 10,x".to_vec() },
            ],
            "tx_count": 3,
        }))
        .unwrap();

        let failed: Vec<_> = checks(&world)
            .into_iter()
            .filter(|(_, ok)| !ok)
            .map(|(name, _)| name)
            .collect();
        assert_eq!(failed, ["events numbered from 0 in commit order"]);
    }
}
