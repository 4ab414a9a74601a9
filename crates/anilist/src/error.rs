//! Error types for the anilist crate.
//!
//! Every failed call produces exactly one [`Error`], scoped to that call.
//!
//! # Error Handling
//!
//! - [`Error::InvalidArgument`]: a parameter was rejected before any request was sent
//! - [`Error::Transport`]: the request never produced a usable response (connection,
//!   timeout, or a non-2xx status without a GraphQL envelope)
//! - [`Error::Api`]: AniList answered with a GraphQL `errors` array
//! - [`Error::MalformedResponse`]: the response did not have the expected shape
//!
//! # Example
//!
//! ```no_run
//! use anilist::{AniListClient, Error};
//!
//! # async fn example() {
//! let client = AniListClient::new();
//!
//! match client.media().anime(1).await {
//!     Ok(anime) => println!("{}", anime["title"]["romaji"]),
//!     Err(Error::Api { status, errors }) => {
//!         eprintln!("AniList rejected the query ({status}): {errors:?}");
//!     }
//!     Err(e) if e.is_retryable() => eprintln!("Network trouble, try again: {e}"),
//!     Err(e) => eprintln!("Error: {e}"),
//! }
//! # }
//! ```

use serde::Deserialize;
use thiserror::Error;

/// The error type for AniList operations.
#[derive(Debug, Error)]
pub enum Error {
    /// A caller-supplied parameter was missing, malformed, or named an
    /// unknown kind.
    ///
    /// Raised before any network I/O.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The HTTP round-trip failed.
    ///
    /// Covers connection errors, timeouts, and non-2xx responses that did not
    /// carry a GraphQL error envelope. Never retried by the client.
    #[error("transport error: {message}")]
    Transport {
        /// Description of the failure.
        message: String,
        /// The HTTP status code, when a response was received.
        status: Option<u16>,
        /// The underlying reqwest error, if any.
        #[source]
        source: Option<reqwest::Error>,
    },

    /// The GraphQL engine returned a non-empty `errors` array.
    ///
    /// Any partial `data` sent alongside the errors is discarded.
    #[error("AniList API error ({status}): {}", join_messages(.errors))]
    Api {
        /// The HTTP status code of the response.
        status: u16,
        /// The errors reported by the API, in order.
        errors: Vec<GraphqlError>,
    },

    /// The response was not the JSON shape the query expected.
    #[error("malformed response: {0}")]
    MalformedResponse(String),
}

impl Error {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        Error::InvalidArgument(message.into())
    }

    /// Classify a reqwest failure.
    ///
    /// Errors raised while building the request never reached the network
    /// and are reported as invalid arguments.
    pub(crate) fn transport(err: reqwest::Error) -> Self {
        if err.is_builder() {
            return Error::InvalidArgument(format!("could not build request: {err}"));
        }
        let status = err.status().map(|s| s.as_u16());
        let message = if err.is_timeout() {
            "request timed out".to_string()
        } else if err.is_connect() {
            "could not connect to the AniList endpoint".to_string()
        } else {
            err.to_string()
        };
        Error::Transport {
            message,
            status,
            source: Some(err),
        }
    }

    pub(crate) fn status_only(status: u16) -> Self {
        Error::Transport {
            message: format!("unexpected HTTP status {status}"),
            status: Some(status),
            source: None,
        }
    }

    /// The HTTP status code associated with this error, if one was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Transport { status, .. } => *status,
            Error::Api { status, .. } => Some(*status),
            Error::InvalidArgument(_) | Error::MalformedResponse(_) => None,
        }
    }

    /// Whether retrying the same call could plausibly succeed.
    ///
    /// Only transport failures qualify; the client itself never retries.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Error::Transport { .. })
    }

    /// The messages reported by the API, empty for non-API errors.
    pub fn api_messages(&self) -> Vec<&str> {
        match self {
            Error::Api { errors, .. } => errors.iter().map(|e| e.message.as_str()).collect(),
            _ => Vec::new(),
        }
    }
}

/// One entry of a GraphQL `errors` array.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GraphqlError {
    /// The human-readable message.
    pub message: String,
    /// The HTTP-like status AniList attaches to most errors.
    #[serde(default)]
    pub status: Option<u16>,
    /// Where in the document the error was detected.
    #[serde(default)]
    pub locations: Vec<ErrorLocation>,
}

/// A line/column position inside a GraphQL document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct ErrorLocation {
    /// 1-based line.
    pub line: u32,
    /// 1-based column.
    pub column: u32,
}

fn join_messages(errors: &[GraphqlError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

/// A specialized Result type for AniList operations.
pub type Result<T> = std::result::Result<T, Error>;
