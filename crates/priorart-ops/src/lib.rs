//! Priorart OPS Provider
//!
//! Adapter for the EPO Open Patent Services API. Implements the
//! `SearchProvider` trait from `priorart-domain`: an OAuth
//! client-credentials token exchange, one biblio search, per-result
//! claims and description fetches, and regex extraction of process
//! conditions from the representative claim.
//!
//! Credentials and endpoint come in through [`OpsConfig`]; this crate
//! never reads the environment itself.

#![warn(missing_docs)]

pub mod client;
pub mod conditions;
mod response;

use thiserror::Error;

pub use client::{
    OpsClient, OpsConfig, DEFAULT_ENDPOINT, DEFAULT_SIZE_LIMIT, FULLTEXT_PREFIX_CHARS,
};
pub use conditions::parse_conditions;

/// Errors from the OPS adapter
///
/// Failures are classified but never retried or recovered; every error
/// propagates to the caller. Regex-extraction misses are not errors.
#[derive(Error, Debug)]
pub enum OpsError {
    /// Network or transport error
    #[error("HTTP error: {0}")]
    Http(String),

    /// Token exchange failed
    #[error("Authentication error: {0}")]
    Auth(String),

    /// Non-success response from an OPS service
    #[error("OPS API error (HTTP {status}): {body}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Response body, as returned
        body: String,
    },

    /// Response body did not match the expected shape
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl From<reqwest::Error> for OpsError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            OpsError::InvalidResponse(e.to_string())
        } else {
            OpsError::Http(e.to_string())
        }
    }
}
