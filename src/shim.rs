// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

//! The seam between a chaincode and the ledger hosting it.
//!
//! A host hands the contract a [`ChaincodeStub`] for every transaction and
//! expects a [`Response`] back. State and events written through the stub
//! only become visible once the host commits the transaction.

use std::error::Error;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{ContractError, StubError};

/// Capability handed to a chaincode for the duration of one transaction.
pub trait ChaincodeStub {
    /// Identifier of the current transaction.
    fn tx_id(&self) -> &str;

    /// The invocation arguments as strings, function name first.
    fn args(&self) -> &[String];

    /// Splits [`args`](Self::args) into the function name and its
    /// parameters. Returns `None` when no function name was supplied.
    fn function_and_parameters(&self) -> Option<(&str, &[String])> {
        self.args()
            .split_first()
            .map(|(function, params)| (function.as_str(), params))
    }

    /// Reads the committed value stored under `key`.
    ///
    /// # Errors
    /// Returns an error when the host cannot serve the read.
    fn get_state(&self, key: &str) -> Result<Option<String>, StubError>;

    /// Writes `value` under `key` as part of the current transaction.
    ///
    /// # Errors
    /// Returns an error when the key is empty or the host rejects the write.
    fn put_state(&mut self, key: &str, value: &str) -> Result<(), StubError>;

    /// Attaches a named event to the current transaction, replacing any
    /// event set earlier in the same transaction.
    ///
    /// # Errors
    /// Returns an error when the name is empty or the host rejects it.
    fn set_event(&mut self, name: &str, payload: Vec<u8>) -> Result<(), StubError>;
}

/// Entry points a host calls on a chaincode.
pub trait Chaincode {
    /// Called once when the chaincode is deployed.
    ///
    /// # Errors
    /// An error aborts the deployment.
    fn init<S: ChaincodeStub>(&self, stub: &mut S) -> Result<Response, ContractError>;

    /// Called for every transaction. Failures are reported through the
    /// response status, never by panicking.
    fn invoke<S: ChaincodeStub>(&self, stub: &mut S) -> Response;

    /// Identifier under which the chaincode is registered.
    fn chaincode_id(&self) -> &'static str;
}

/// Outcome class of a [`Response`], serialized as its numeric code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
pub enum Status {
    /// The call succeeded.
    Success,
    /// The caller sent something the contract does not understand.
    BadRequest,
    /// The contract failed while processing the call.
    InternalServerError,
}

impl Status {
    /// The numeric status code.
    #[must_use]
    pub const fn code(self) -> u16 {
        match self {
            Self::Success => 200,
            Self::BadRequest => 400,
            Self::InternalServerError => 500,
        }
    }
}

impl From<Status> for u16 {
    fn from(status: Status) -> Self {
        status.code()
    }
}

impl TryFrom<u16> for Status {
    type Error = String;

    fn try_from(code: u16) -> Result<Self, Self::Error> {
        match code {
            200 => Ok(Self::Success),
            400 => Ok(Self::BadRequest),
            500 => Ok(Self::InternalServerError),
            other => Err(format!("unknown response status {other}")),
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Success => "OK",
            Self::BadRequest => "BAD_REQUEST",
            Self::InternalServerError => "INTERNAL_SERVER_ERROR",
        };
        write!(f, "{} {name}", self.code())
    }
}

/// What a chaincode returns to its host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Response {
    /// Outcome class.
    pub status: Status,
    /// Human readable message, empty on success.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub message: String,
    /// Returned data or failure detail.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub payload: Vec<u8>,
}

impl Response {
    /// A successful response without payload.
    #[must_use]
    pub fn success() -> Self {
        Self::success_with(Vec::new())
    }

    /// A successful response carrying `payload`.
    #[must_use]
    pub fn success_with(payload: impl Into<Vec<u8>>) -> Self {
        Self {
            status: Status::Success,
            message: String::new(),
            payload: payload.into(),
        }
    }

    /// A response rejecting the caller's request.
    #[must_use]
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: Status::BadRequest,
            message: message.into(),
            payload: Vec::new(),
        }
    }

    /// A response reporting `error`. The message is the error itself, the
    /// payload holds the whole source chain.
    #[must_use]
    pub fn internal_server_error(error: &dyn Error) -> Self {
        Self {
            status: Status::InternalServerError,
            message: error.to_string(),
            payload: error_chain(error).into_bytes(),
        }
    }

    /// Whether the status is [`Status::Success`].
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status == Status::Success
    }

    /// The payload decoded as UTF-8, if it is valid UTF-8.
    #[must_use]
    pub fn payload_str(&self) -> Option<&str> {
        std::str::from_utf8(&self.payload).ok()
    }
}

fn error_chain(error: &dyn Error) -> String {
    let mut chain = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        chain.push_str(": ");
        chain.push_str(&cause.to_string());
        source = cause.source();
    }
    chain
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn internal_error_carries_source_chain() {
        let source = "x1".parse::<u64>().unwrap_err();
        let err = ContractError::CorruptCounter {
            key: "noevents",
            value: "x1".to_string(),
            source,
        };

        let response = Response::internal_server_error(&err);

        assert_eq!(response.status, Status::InternalServerError);
        assert_eq!(response.message, "invalid counter value 'x1' under key 'noevents'");
        assert_eq!(
            response.payload_str(),
            Some("invalid counter value 'x1' under key 'noevents': invalid digit found in string")
        );
    }

    #[test]
    fn wrapped_stub_error_appears_once() {
        let err = ContractError::from(StubError::Host("disk gone".to_string()));

        let response = Response::internal_server_error(&err);

        assert_eq!(response.message, "stub call failed");
        assert_eq!(response.payload_str(), Some("stub call failed: disk gone"));
    }

    #[test]
    fn status_serializes_as_code() {
        let json = serde_json::to_string(&Response::bad_request("nope")).unwrap();
        assert_eq!(json, r#"{"status":400,"message":"nope"}"#);

        let back: Response = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Response::bad_request("nope"));
        assert!(serde_json::from_str::<Response>(r#"{"status":302}"#).is_err());
    }

    #[test]
    fn status_display() {
        assert_eq!(Status::Success.to_string(), "200 OK");
        assert_eq!(Status::BadRequest.to_string(), "400 BAD_REQUEST");
    }
}
