//! Error types for the Nursys client.
//!
//! This module contains the error taxonomy surfaced by every call:
//! - `NursysError`: the main error enum that classifies a failed invocation
//! - `ContextError`: why a caller-supplied context ended the call
//!
//! A rejected call (`Remote`) is kept apart from a failed transport
//! (`Transport`) and from an unreadable reply (`Decoding`), since upstream
//! rejection bodies carry diagnostics callers inspect.

use reqwest::StatusCode;
use thiserror::Error;

/// Why a [`crate::Context`] stopped a call.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContextError {
    #[error("context cancelled")]
    Cancelled,

    #[error("context deadline exceeded")]
    DeadlineExceeded,
}

#[derive(Error, Debug)]
pub enum NursysError {
    #[error("Failed to encode request body: {0}")]
    Encoding(#[source] serde_json::Error),

    #[error("Failed to construct request for {url}: {source}")]
    RequestConstruction {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("Request aborted: {0}")]
    Context(#[from] ContextError),

    #[error("nursys: request returned {}: {body}", .status.as_u16())]
    Remote { status: StatusCode, body: String },

    #[error("Failed to decode response body: {0}")]
    Decoding(#[source] serde_json::Error),

    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest_middleware::Error),

    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),

    #[error("Missing configuration: {0}")]
    MissingConfig(String),
}

impl NursysError {
    /// The upstream answered with a status other than 200/202.
    #[must_use]
    pub const fn is_remote(&self) -> bool {
        matches!(self, Self::Remote { .. })
    }

    #[must_use]
    pub const fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }

    #[must_use]
    pub const fn is_decoding(&self) -> bool {
        matches!(self, Self::Decoding(_))
    }

    #[must_use]
    pub const fn is_cancelled(&self) -> bool {
        matches!(self, Self::Context(ContextError::Cancelled))
    }

    #[must_use]
    pub const fn is_deadline_exceeded(&self) -> bool {
        matches!(self, Self::Context(ContextError::DeadlineExceeded))
    }

    /// Status code of a rejected call.
    #[must_use]
    pub const fn remote_status(&self) -> Option<StatusCode> {
        match self {
            Self::Remote { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Raw body of a rejected call, for callers that parse upstream diagnostics.
    #[must_use]
    pub fn remote_body(&self) -> Option<&str> {
        match self {
            Self::Remote { body, .. } => Some(body),
            _ => None,
        }
    }
}
