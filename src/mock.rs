// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

//! A single-process ledger that hosts one chaincode.
//!
//! Transactions run one at a time. Each gets a fresh [`MockStub`] that
//! reads the committed [`WorldState`] and buffers its writes and event. The
//! buffer is committed only when the chaincode answers with a success
//! status, so a rejected or failed transaction leaves no trace.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ContractError, StubError};
use crate::shim::{Chaincode, ChaincodeStub, Response};

/// An event recorded with a committed transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChaincodeEvent {
    /// Transaction that emitted the event.
    pub tx_id: String,
    /// Chaincode that emitted the event.
    pub chaincode_id: String,
    /// Event name.
    pub event_name: String,
    /// Event payload.
    pub payload: Vec<u8>,
}

impl ChaincodeEvent {
    /// The payload decoded as UTF-8, replacing invalid sequences.
    #[must_use]
    pub fn payload_lossy(&self) -> String {
        String::from_utf8_lossy(&self.payload).into_owned()
    }
}

/// Committed ledger contents.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorldState {
    #[serde(default)]
    state: BTreeMap<String, String>,
    #[serde(default)]
    events: Vec<ChaincodeEvent>,
    #[serde(default)]
    tx_count: u64,
}

impl WorldState {
    /// The committed value under `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.state.get(key).map(String::as_str)
    }

    /// Overwrites `key` outside of any transaction.
    pub fn put(&mut self, key: &str, value: &str) {
        self.state.insert(key.to_string(), value.to_string());
    }

    /// All committed key/value pairs, ordered by key.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.state.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Every committed event, oldest first.
    #[must_use]
    pub fn events(&self) -> &[ChaincodeEvent] {
        &self.events
    }

    /// Committed events with the given name.
    pub fn events_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a ChaincodeEvent> {
        self.events.iter().filter(move |event| event.event_name == name)
    }

    /// Number of transactions submitted, committed or not.
    #[must_use]
    pub fn tx_count(&self) -> u64 {
        self.tx_count
    }

    fn next_tx_id(&mut self) -> String {
        self.tx_count += 1;
        format!("tx-{:08}", self.tx_count)
    }
}

/// Per-transaction stub backed by a [`WorldState`].
#[derive(Debug)]
pub struct MockStub<'a> {
    world: &'a WorldState,
    tx_id: String,
    args: Vec<String>,
    writes: BTreeMap<String, String>,
    event: Option<(String, Vec<u8>)>,
}

impl<'a> MockStub<'a> {
    /// Opens a transaction against `world`.
    #[must_use]
    pub fn new(world: &'a WorldState, tx_id: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            world,
            tx_id: tx_id.into(),
            args,
            writes: BTreeMap::new(),
            event: None,
        }
    }

    /// Writes buffered so far.
    #[must_use]
    pub fn writes(&self) -> &BTreeMap<String, String> {
        &self.writes
    }

    /// The event set so far, if any.
    #[must_use]
    pub fn event(&self) -> Option<(&str, &[u8])> {
        self.event
            .as_ref()
            .map(|(name, payload)| (name.as_str(), payload.as_slice()))
    }

    fn into_parts(self) -> (BTreeMap<String, String>, Option<(String, Vec<u8>)>) {
        (self.writes, self.event)
    }
}

impl ChaincodeStub for MockStub<'_> {
    fn tx_id(&self) -> &str {
        &self.tx_id
    }

    fn args(&self) -> &[String] {
        &self.args
    }

    fn get_state(&self, key: &str) -> Result<Option<String>, StubError> {
        if key.is_empty() {
            return Err(StubError::EmptyKey);
        }
        Ok(self.world.get(key).map(ToString::to_string))
    }

    fn put_state(&mut self, key: &str, value: &str) -> Result<(), StubError> {
        if key.is_empty() {
            return Err(StubError::EmptyKey);
        }
        self.writes.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn set_event(&mut self, name: &str, payload: Vec<u8>) -> Result<(), StubError> {
        if name.is_empty() {
            return Err(StubError::EmptyEventName);
        }
        self.event = Some((name.to_string(), payload));
        Ok(())
    }
}

/// Result of submitting one transaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TxOutcome {
    /// Transaction id assigned by the ledger.
    pub tx_id: String,
    /// The chaincode's answer.
    pub response: Response,
    /// Event committed with the transaction, if any.
    pub event: Option<ChaincodeEvent>,
}

/// Hosts a chaincode over an in-memory [`WorldState`].
#[derive(Debug)]
pub struct MockLedger<C> {
    chaincode: C,
    world: WorldState,
}

impl<C: Chaincode> MockLedger<C> {
    /// A ledger with an empty world state.
    #[must_use]
    pub fn new(chaincode: C) -> Self {
        Self::with_state(chaincode, WorldState::default())
    }

    /// A ledger resuming from a previously saved world state.
    #[must_use]
    pub fn with_state(chaincode: C, world: WorldState) -> Self {
        Self { chaincode, world }
    }

    /// The committed world state.
    #[must_use]
    pub fn state(&self) -> &WorldState {
        &self.world
    }

    /// Mutable access to the committed world state, bypassing the chaincode.
    pub fn state_mut(&mut self) -> &mut WorldState {
        &mut self.world
    }

    /// Gives back the world state, e.g. to persist it.
    #[must_use]
    pub fn into_state(self) -> WorldState {
        self.world
    }

    /// Deploys the chaincode by running its `init` entry point.
    ///
    /// # Errors
    /// Returns the chaincode's error unchanged; nothing is committed.
    pub fn init(&mut self, args: Vec<String>) -> Result<TxOutcome, ContractError> {
        let tx_id = self.world.next_tx_id();
        let mut stub = MockStub::new(&self.world, tx_id.clone(), args);
        let response = self.chaincode.init(&mut stub)?;
        let parts = stub.into_parts();
        Ok(self.finish(tx_id, response, parts))
    }

    /// Submits one transaction to the chaincode's `invoke` entry point.
    pub fn invoke(&mut self, args: Vec<String>) -> TxOutcome {
        let tx_id = self.world.next_tx_id();
        let mut stub = MockStub::new(&self.world, tx_id.clone(), args);
        let response = self.chaincode.invoke(&mut stub);
        let parts = stub.into_parts();
        self.finish(tx_id, response, parts)
    }

    fn finish(
        &mut self,
        tx_id: String,
        response: Response,
        (writes, event): (BTreeMap<String, String>, Option<(String, Vec<u8>)>),
    ) -> TxOutcome {
        if !response.is_success() {
            debug!(
                %tx_id,
                status = %response.status,
                discarded_writes = writes.len(),
                "transaction not committed"
            );
            return TxOutcome {
                tx_id,
                response,
                event: None,
            };
        }

        debug!(%tx_id, writes = writes.len(), has_event = event.is_some(), "committing transaction");
        self.world.state.extend(writes);

        let event = event.map(|(event_name, payload)| ChaincodeEvent {
            tx_id: tx_id.clone(),
            chaincode_id: self.chaincode.chaincode_id().to_string(),
            event_name,
            payload,
        });
        if let Some(event) = &event {
            self.world.events.push(event.clone());
        }

        TxOutcome {
            tx_id,
            response,
            event,
        }
    }
}
