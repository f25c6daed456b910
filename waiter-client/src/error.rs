//! Client error types

use http::StatusCode;
use shared::CatalogParseError;
use shared::models::InvalidSeat;
use thiserror::Error;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// Connection, DNS or timeout failure
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Non-2xx response
    #[error("HTTP status {status}")]
    HttpStatus { status: StatusCode, body: String },

    /// Malformed catalog body
    #[error("Catalog parse error: {0}")]
    CatalogParse(#[from] CatalogParseError),

    /// Positional read past the end of the catalog
    #[error("Index {index} out of range for catalog of size {size}")]
    IndexOutOfRange { index: usize, size: usize },

    /// Seat number outside the fixed capacity
    #[error("Invalid seat: {0}")]
    InvalidSeat(#[from] InvalidSeat),

    /// Invalid configuration
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ClientError {
    /// Detail line shown to the user under a load failure
    pub fn user_detail(&self) -> String {
        match self {
            Self::HttpStatus { status, .. } => format!("Status: {}", status.as_u16()),
            Self::Transport(e) => format!("Details: {}", e),
            Self::CatalogParse(e) => format!("Failed to parse menu data: {}", e),
            other => format!("Details: {}", other),
        }
    }

    /// HTTP status code, if the server answered
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::HttpStatus { status, .. } => Some(*status),
            Self::Transport(e) => e.status(),
            _ => None,
        }
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
