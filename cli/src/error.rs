use std::path::PathBuf;

use event_sender::{ContractError, Status};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("{0}")]
    Message(String),

    #[error("ledger already exists: {0} (use --force to replace it)")]
    LedgerExists(PathBuf),

    #[error("no ledger at {0}, run `event-sender init` first")]
    LedgerMissing(PathBuf),

    #[error("transaction {tx_id} rejected ({status}): {message}")]
    Rejected {
        tx_id: String,
        status: Status,
        message: String,
    },

    #[error("chaincode init failed: {0}")]
    Contract(#[from] ContractError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
}
