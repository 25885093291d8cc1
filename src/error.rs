//! Error types for the fetch and rendering path

use thiserror::Error;

/// Errors produced while fetching, parsing or presenting results
#[derive(Debug, Error)]
pub enum Error {
    /// The request never produced a response (connect, timeout, TLS...)
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The search endpoint answered with a non-2xx status
    #[error("search endpoint returned HTTP {0}")]
    Status(u16),

    /// The body was not JSON or a record lacked a required field
    #[error("malformed search response: {0}")]
    MalformedResponse(#[from] serde_json::Error),

    /// Row markup could not be rendered
    #[error("template error: {0}")]
    Template(#[from] tera::Error),

    /// The controller event loop is no longer running
    #[error("autocomplete controller is closed")]
    ControllerClosed,
}

impl Error {
    /// Whether the failure came from the network rather than the payload
    pub fn is_transport(&self) -> bool {
        matches!(self, Error::Transport(_) | Error::Status(_))
    }
}

pub type Result<T> = std::result::Result<T, Error>;
