//! Error type for a single fetch attempt.
//!
//! # Design
//! The screen only ever sees `FetchOutcome::Failure`. `FetchError` exists so
//! the worker can log what actually went wrong before collapsing every cause
//! into that one outcome.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    /// The server answered with anything other than 200 OK.
    #[error("unexpected HTTP status {status}")]
    UnexpectedStatus { status: u16 },

    /// The request never produced a response (refused, DNS, reset, ...).
    #[error("transport failed: {0}")]
    Transport(String),

    /// The body was not a JSON array of `{shortName, name}` objects.
    #[error("malformed states payload: {0}")]
    Json(#[from] serde_json::Error),
}
