//! Priorart Lens Provider
//!
//! Adapter for The Lens patent search API. Implements the
//! `SearchProvider` trait from `priorart-domain` over the Lens search
//! endpoint: one POST per search, bearer-token auth, simplified records
//! out.
//!
//! Credentials and endpoint come in through [`LensConfig`]; this crate
//! never reads the environment itself.

#![warn(missing_docs)]

pub mod client;

use thiserror::Error;

pub use client::{LensClient, LensConfig, DEFAULT_ENDPOINT, DEFAULT_SIZE_LIMIT};

/// Errors from the Lens adapter
///
/// Failures are classified but never retried or recovered; every error
/// propagates to the caller.
#[derive(Error, Debug)]
pub enum LensError {
    /// Network or transport error
    #[error("HTTP error: {0}")]
    Http(String),

    /// Non-success response from the Lens API
    #[error("Lens API error (HTTP {status}): {body}")]
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

impl From<reqwest::Error> for LensError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            LensError::InvalidResponse(e.to_string())
        } else {
            LensError::Http(e.to_string())
        }
    }
}
