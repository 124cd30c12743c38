//! Error types for the staffdesk console.
//!
//! This module defines the centralized error type [`ConsoleError`] and a type alias
//! [`Result`] used throughout the crate. Every failure a workflow can hit ends up as
//! one of these variants, and the console boundary turns each of them into a single
//! user-visible notification via [`ConsoleError::notice_key`] and
//! [`ConsoleError::server_message`].

use thiserror::Error;

/// The main error type for console operations.
///
/// The variants follow the three failure classes a workflow can produce:
/// validation skips handled locally, store failures (remote or transport), and
/// missing records. The remaining variants cover the ambient concerns of the
/// crate (configuration, I/O, parsing).
#[derive(Debug, Error)]
pub enum ConsoleError {
    /// Batch delete was requested with an empty selection.
    ///
    /// Handled locally: no store call is made and the user is warned.
    #[error("no rows selected for deletion")]
    NothingSelected,

    /// The store answered with a non-2xx status.
    ///
    /// `message` carries the `{ "message" }` field of the error body when the
    /// store provided one.
    #[error("store rejected the request (status {status}): {}", message.as_deref().unwrap_or("no message"))]
    Store {
        /// HTTP status code returned by the store.
        status: u16,
        /// Optional human-readable message from the store.
        message: Option<String>,
    },

    /// The request never produced a usable response.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// A detail fetch returned no usable record.
    #[error("employee not found: {0}")]
    NotFound(String),

    /// A workflow was triggered while another one holds the loading gate.
    #[error("another operation is still running")]
    Busy,

    /// The dialog was asked to do something its current state does not allow.
    #[error("dialog error: {0}")]
    Dialog(String),

    /// Configuration is invalid or missing.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A TOML configuration file could not be parsed.
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// A payload could not be (de)serialized.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ConsoleError {
    /// Localization key of the notification shown for this error.
    #[must_use]
    pub const fn notice_key(&self) -> &'static str {
        match self {
            Self::NothingSelected => "pleaseSelectDelete",
            _ => "errorOccurred",
        }
    }

    /// Message supplied by the store, if any.
    ///
    /// Blank messages count as absent so the localized fallback is used instead.
    #[must_use]
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Store { message: Some(m), .. } if !m.trim().is_empty() => Some(m.as_str()),
            _ => None,
        }
    }

    /// Whether the error comes from the store (remote rejection, transport, or missing record).
    #[must_use]
    pub const fn is_store_error(&self) -> bool {
        matches!(self, Self::Store { .. } | Self::Transport(_) | Self::NotFound(_))
    }
}

/// A specialized `Result` type for console operations.
pub type Result<T> = std::result::Result<T, ConsoleError>;
