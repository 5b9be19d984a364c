// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

//! Event emitting example chaincode.
//!
//! The [`EventSender`] contract keeps a single counter in the world state.
//! Every `invoke` call bumps the counter and attaches one `evtsender` event
//! to the transaction; `query` reports how many events have been sent.
//!
//! The contract only talks to its host through the [`ChaincodeStub`]
//! capability. [`mock::MockLedger`] plays the host role for tests and the
//! command line front end.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unused_must_use)]
#![deny(unused_extern_crates)]
#![deny(clippy::pedantic)]
#![warn(missing_debug_implementations, unreachable_pub, rustdoc::all)]

/// The event sender contract.
pub mod contract;
/// Contract and host error types.
pub mod error;
/// In-process ledger for driving a chaincode.
pub mod mock;
/// Contract schema types and utilities.
pub mod schema;
/// Host capability traits and the response type.
pub mod shim;

pub use contract::{
    EventCount, EventSender, Operation, CHAINCODE_ID, EVENT_COUNT_KEY, EVENT_NAME,
};
pub use error::{ContractError, StubError};
pub use shim::{Chaincode, ChaincodeStub, Response, Status};
