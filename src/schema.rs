// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

//! Schema types for contract metadata.
//!
//! A [`ContractSchema`] describes the functions a chaincode answers to, the
//! events it emits and the state keys it owns.

use serde::Serialize;

/// Schema for a contract function.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct FunctionSchema {
    /// Function name.
    pub name: &'static str,
    /// Documentation string.
    pub doc: &'static str,
    /// Description of the arguments following the function name.
    pub args: &'static str,
    /// Description of the success payload (or "()" for none).
    pub output: &'static str,
    /// Whether the function writes state.
    pub mutates: bool,
}

/// Schema for a contract event.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct EventSchema {
    /// Event name.
    pub name: &'static str,
    /// Payload format.
    pub payload: &'static str,
}

/// Schema for a state key owned by the contract.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct StateSchema {
    /// The key.
    pub key: &'static str,
    /// Encoding of the stored value.
    pub value: &'static str,
}

/// Complete schema for a contract.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ContractSchema {
    /// Contract name.
    pub name: &'static str,
    /// List of contract functions.
    pub functions: &'static [FunctionSchema],
    /// List of contract events.
    pub events: &'static [EventSchema],
    /// List of state keys.
    pub state: &'static [StateSchema],
}

impl ContractSchema {
    /// Returns an iterator over all functions.
    pub fn iter_functions(&self) -> impl Iterator<Item = &FunctionSchema> {
        self.functions.iter()
    }

    /// Returns an iterator over all events.
    pub fn iter_events(&self) -> impl Iterator<Item = &EventSchema> {
        self.events.iter()
    }

    /// Find a function by name.
    #[must_use]
    pub fn get_function(&self, name: &str) -> Option<&FunctionSchema> {
        self.functions.iter().find(|f| f.name == name)
    }

    /// Find an event by name.
    #[must_use]
    pub fn get_event(&self, name: &str) -> Option<&EventSchema> {
        self.events.iter().find(|e| e.name == name)
    }

    /// Find a state key.
    #[must_use]
    pub fn get_state_key(&self, key: &str) -> Option<&StateSchema> {
        self.state.iter().find(|s| s.key == key)
    }
}

pub(crate) static EVENT_SENDER: ContractSchema = ContractSchema {
    name: crate::contract::CHAINCODE_ID,
    functions: &[
        FunctionSchema {
            name: "invoke",
            doc: "Increments the event counter and emits one evtsender event.",
            args: "string[]",
            output: "()",
            mutates: true,
        },
        FunctionSchema {
            name: "query",
            doc: "Returns the number of events sent so far.",
            args: "()",
            output: "{\"NoEvents\": u64}",
            mutates: false,
        },
    ],
    events: &[EventSchema {
        name: crate::contract::EVENT_NAME,
        payload: "utf-8 \"Event <n>[,<arg>...]\"",
    }],
    state: &[StateSchema {
        key: crate::contract::EVENT_COUNT_KEY,
        value: "decimal u64",
    }],
};
