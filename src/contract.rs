// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::ContractError;
use crate::schema::{self, ContractSchema};
use crate::shim::{Chaincode, ChaincodeStub, Response};

/// State key holding the number of events sent.
pub const EVENT_COUNT_KEY: &str = "noevents";

/// Name of the event attached to every successful `invoke`.
pub const EVENT_NAME: &str = "evtsender";

/// Identifier the contract registers under.
pub const CHAINCODE_ID: &str = "EventSender";

/// Payload returned by `query`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventCount {
    /// Number of events sent so far.
    #[serde(rename = "NoEvents")]
    pub no_events: u64,
}

/// A resolved invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    /// Bump the counter and emit an event carrying these arguments.
    Invoke(Vec<String>),
    /// Report the counter.
    Query,
    /// Any function the contract does not expose.
    Unknown(String),
}

impl Operation {
    /// Resolves `args` (function name first) into an operation.
    ///
    /// # Errors
    /// Returns [`ContractError::MissingFunction`] when `args` is empty.
    pub fn from_args(args: &[String]) -> Result<Self, ContractError> {
        let (function, params) = args.split_first().ok_or(ContractError::MissingFunction)?;

        Ok(match function.as_str() {
            "invoke" => Self::Invoke(params.to_vec()),
            "query" => Self::Query,
            _ => Self::Unknown(function.clone()),
        })
    }
}

/// Counts the events it emits.
///
/// `init` resets the counter to zero. Each `invoke` attaches an
/// `evtsender` event whose payload is `Event <n>` followed by the call
/// arguments, comma separated, where `<n>` is the counter before the call.
#[derive(Debug, Clone, Copy, Default)]
pub struct EventSender;

impl EventSender {
    /// Creates the contract.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Static description of the contract surface.
    #[must_use]
    pub fn schema() -> &'static ContractSchema {
        &schema::EVENT_SENDER
    }

    fn dispatch<S: ChaincodeStub>(stub: &mut S) -> Result<Response, ContractError> {
        let operation = Operation::from_args(stub.args())?;
        debug!(tx_id = stub.tx_id(), ?operation, "dispatching");

        match operation {
            Operation::Invoke(args) => Self::do_invoke(stub, &args),
            Operation::Query => Self::do_query(stub),
            Operation::Unknown(name) => Ok(Response::bad_request(format!(
                "Unknown function: {name}"
            ))),
        }
    }

    fn do_invoke<S: ChaincodeStub>(
        stub: &mut S,
        args: &[String],
    ) -> Result<Response, ContractError> {
        let event_number = read_event_count(stub)?;
        let next = event_number
            .checked_add(1)
            .ok_or(ContractError::CounterOverflow {
                value: event_number,
            })?;
        stub.put_state(EVENT_COUNT_KEY, &next.to_string())?;

        let payload = event_payload(event_number, args);
        info!(tx_id = stub.tx_id(), event_number, %payload, "emitting event");
        stub.set_event(EVENT_NAME, payload.into_bytes())?;

        Ok(Response::success())
    }

    fn do_query<S: ChaincodeStub>(stub: &S) -> Result<Response, ContractError> {
        let count = EventCount {
            no_events: read_event_count(stub)?,
        };
        Ok(Response::success_with(serde_json::to_vec(&count)?))
    }
}

impl Chaincode for EventSender {
    fn init<S: ChaincodeStub>(&self, stub: &mut S) -> Result<Response, ContractError> {
        stub.put_state(EVENT_COUNT_KEY, "0")?;
        info!(tx_id = stub.tx_id(), "event counter initialized");
        Ok(Response::success())
    }

    fn invoke<S: ChaincodeStub>(&self, stub: &mut S) -> Response {
        Self::dispatch(stub).unwrap_or_else(|err| {
            warn!(tx_id = stub.tx_id(), error = %err, "invocation failed");
            Response::internal_server_error(&err)
        })
    }

    fn chaincode_id(&self) -> &'static str {
        CHAINCODE_ID
    }
}

fn read_event_count<S: ChaincodeStub + ?Sized>(stub: &S) -> Result<u64, ContractError> {
    let value = stub
        .get_state(EVENT_COUNT_KEY)?
        .ok_or(ContractError::MissingState {
            key: EVENT_COUNT_KEY,
        })?;

    value
        .parse::<u64>()
        .map_err(|source| ContractError::CorruptCounter {
            key: EVENT_COUNT_KEY,
            value,
            source,
        })
}

fn event_payload(event_number: u64, args: &[String]) -> String {
    let mut payload = format!("Event {event_number}");
    for arg in args {
        payload.push(',');
        payload.push_str(arg);
    }
    payload
}
