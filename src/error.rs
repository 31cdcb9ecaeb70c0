//! Error types for the Qonto client
//!
//! Every public operation returns `Result<T, Error>`. Errors fall into four
//! groups: validation failures raised before any network I/O, structured
//! remote API errors, transport/decode failures, and the `Done` sentinel
//! reported by an exhausted page iterator.

use std::fmt;
use thiserror::Error;

/// Structured error returned by the remote API on a non-2xx response.
///
/// The body of such a response is a JSON object holding at least a
/// `message` field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    /// HTTP method of the outgoing request
    pub method: reqwest::Method,
    /// Full URL of the outgoing request
    pub url: String,
    /// Status code of the incoming response
    pub status: u16,
    /// Description sent by the API
    pub message: String,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} -> {} \"{}\"",
            self.method, self.url, self.status, self.message
        )
    }
}

impl std::error::Error for ApiError {}

/// The main error type for the Qonto client
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Validation Errors
    // ============================================================================
    #[error("Missing Qonto credentials")]
    MissingCredentials,

    #[error("Missing \"slug\" parameter")]
    MissingBankAccountSlug,

    #[error("Missing \"iban\" parameter")]
    MissingBankAccountIban,

    #[error("A bank account is required")]
    BankAccountNeeded,

    #[error("An attachment is required")]
    AttachmentNeeded,

    #[error("Attachment '{id}' has no download URL")]
    MissingAttachmentUrl { id: String },

    #[error("Found no bank account for organization '{organization}'")]
    NoBankAccount { organization: String },

    #[error("Configuration error: {message}")]
    Config { message: String },

    // ============================================================================
    // Remote API Errors
    // ============================================================================
    #[error("API error: {0}")]
    Api(ApiError),

    #[error("GET {url} returned {status}")]
    HttpStatus { url: String, status: u16 },

    // ============================================================================
    // Transport / Decode Errors
    // ============================================================================
    #[error("Qonto API could not be reached ({url}): {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Could not decode the response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Attachment download from {url} failed: {source}")]
    Download {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Attachment download from {url} returned {status}")]
    DownloadStatus { url: String, status: u16 },

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Failed to parse credentials file: {0}")]
    CredentialsFile(#[from] serde_yaml::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ============================================================================
    // Cancellation / Exhaustion
    // ============================================================================
    #[error("Request to {url} was cancelled")]
    Cancelled { url: String },

    #[error("No more pages")]
    Done,
}

impl Error {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// True for errors raised before any network I/O took place
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Error::MissingCredentials
                | Error::MissingBankAccountSlug
                | Error::MissingBankAccountIban
                | Error::BankAccountNeeded
                | Error::AttachmentNeeded
                | Error::MissingAttachmentUrl { .. }
                | Error::NoBankAccount { .. }
                | Error::Config { .. }
        )
    }

    /// True for the iterator exhaustion sentinel
    pub fn is_done(&self) -> bool {
        matches!(self, Error::Done)
    }

    /// True when the call was aborted through its context
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Error::Cancelled { .. })
    }

    /// HTTP status carried by a remote error, if any
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Api(api) => Some(api.status),
            Error::HttpStatus { status, .. } | Error::DownloadStatus { status, .. } => {
                Some(*status)
            }
            Error::Transport { source, .. } | Error::Download { source, .. } => {
                source.status().map(|s| s.as_u16())
            }
            _ => None,
        }
    }

    /// The structured API error, if this is one
    pub fn as_api_error(&self) -> Option<&ApiError> {
        match self {
            Error::Api(api) => Some(api),
            _ => None,
        }
    }
}

/// Result type alias for the Qonto client
pub type Result<T> = std::result::Result<T, Error>;
