//! Error types for the workflow.

use std::fmt;

/// Workflow error type.
#[derive(Debug)]
pub enum Error {
    /// Configuration error (missing or malformed credentials).
    Config(String),
    /// Transport or client failure talking to the ledger.
    Ledger(String),
    /// The network returned a terminal rejection for a required step.
    Rejected(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Config(msg) => write!(f, "config error: {msg}"),
            Error::Ledger(msg) => write!(f, "ledger error: {msg}"),
            Error::Rejected(msg) => write!(f, "rejected by network: {msg}"),
        }
    }
}

impl std::error::Error for Error {}
