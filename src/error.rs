// src/error.rs

use std::{io, path::PathBuf};

use ethers::types::Address;
use thiserror::Error;

type ChainError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Fatal deployment errors. Never recovered locally; these surface to the
/// process boundary so a failed deployment is never reported as successful.
#[derive(Debug, Error)]
pub enum DeploymentFailure {
    #[error("missing deployment artifact for {name} at {path}: {source}")]
    Artifact {
        name: String,
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("artifact for {name} is not valid hex bytecode: {source}")]
    Bytecode {
        name: String,
        #[source]
        source: hex::FromHexError,
    },
    #[error("network rejected deployment of {name}: {source}")]
    Rejected {
        name: String,
        #[source]
        source: ChainError,
    },
}

/// Local filesystem errors while persisting the address record. Returned as a
/// value so the caller decides whether to abort; the deploy flow logs and
/// continues, since the contract is already live on-chain by the time the
/// record is written.
#[derive(Debug, Error)]
pub enum RecordWriteFailure {
    #[error("could not create record directory {0}: {1}")]
    CreateDir(PathBuf, #[source] io::Error),
    #[error("could not encode address record: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("could not write record file {0}: {1}")]
    WriteFile(PathBuf, #[source] io::Error),
}

/// Errors from the read-verification flow. Fatal to that flow.
#[derive(Debug, Error)]
pub enum ReadError {
    #[error("no contract code at {address} on the active network")]
    ResolutionFailure { address: Address },
    #[error("call to {function} at {address} failed: {source}")]
    CallFailure {
        function: &'static str,
        address: Address,
        #[source]
        source: ChainError,
    },
}
