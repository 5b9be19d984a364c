// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

use std::num::ParseIntError;

use thiserror::Error;

/// Failure reported by the host through a [`ChaincodeStub`] call.
///
/// [`ChaincodeStub`]: crate::ChaincodeStub
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StubError {
    /// A state key was empty.
    #[error("state key must not be empty")]
    EmptyKey,

    /// An event was set without a name.
    #[error("event name must not be empty")]
    EmptyEventName,

    /// Any other host side failure.
    #[error("{0}")]
    Host(String),
}

/// Errors raised while executing a contract operation.
#[derive(Debug, Error)]
pub enum ContractError {
    /// The invocation carried no function name.
    #[error("no function name supplied")]
    MissingFunction,

    /// A key that must exist after initialization is absent.
    #[error("state key '{key}' is not set")]
    MissingState {
        /// The missing key.
        key: &'static str,
    },

    /// The stored counter is not a non-negative integer.
    #[error("invalid counter value '{value}' under key '{key}'")]
    CorruptCounter {
        /// The key holding the counter.
        key: &'static str,
        /// The raw stored value.
        value: String,
        /// Why parsing failed.
        #[source]
        source: ParseIntError,
    },

    /// Incrementing the counter would overflow.
    #[error("counter overflow at value {value}")]
    CounterOverflow {
        /// The counter value that cannot be incremented.
        value: u64,
    },

    /// The host rejected a stub call.
    #[error("stub call failed")]
    Stub(#[from] StubError),

    /// A response payload could not be encoded.
    #[error("failed to encode payload")]
    Encode(#[from] serde_json::Error),
}
