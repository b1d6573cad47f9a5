//! Error types for the two pipeline stages.
//!
//! Fetch failures are [`TransportError`]s, generation failures are
//! [`DataError`]s. Both carry the underlying cause unchanged and are lifted
//! into [`Error`] at the top level.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("{0}")]
    Request(#[from] reqwest::Error),

    #[error("request to {url} failed with status code: {status}")]
    Status {
        status: reqwest::StatusCode,
        url: String,
    },

    #[error("{}: {source}", path.display())]
    Cache {
        path: PathBuf,
        source: std::io::Error,
    },
}

#[derive(Debug, thiserror::Error)]
pub enum DataError {
    #[error("{}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Only the decoder's own message, as the underlying call reports it.
    #[error("{0}")]
    Decode(#[from] serde_json::Error),

    #[error("rendering template failed")]
    Render(#[from] std::fmt::Error),

    #[error("{}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error(transparent)]
    Data(#[from] DataError),
}
