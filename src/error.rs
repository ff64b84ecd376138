//! Error types for potion_crafter operations

use std::fmt;

/// Unified error type for catalog and crafting operations
#[derive(Debug)]
pub enum Error {
    /// Blank or malformed caller input, rejected before any I/O
    InvalidInput(String),
    /// HTTP request failed (network error, timeout, etc.)
    Network(reqwest::Error),
    /// Catalog API returned an error status code
    HttpStatus(reqwest::StatusCode),
    /// Failed to parse a JSON payload
    Parse(serde_json::Error),
    /// Missing or malformed configuration
    Config(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            Error::Network(e) => write!(f, "Network error: {}", e),
            Error::HttpStatus(status) => write!(f, "HTTP error: {}", status),
            Error::Parse(e) => write!(f, "Parse error: {}", e),
            Error::Config(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Network(e) => Some(e),
            Error::Parse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Network(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Parse(err)
    }
}

/// Result alias for potion_crafter operations
pub type Result<T> = std::result::Result<T, Error>;
