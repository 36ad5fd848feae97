//! Error Types

use std::net::SocketAddr;

use thiserror::Error;

/// Result type alias for server setup
pub type Result<T> = std::result::Result<T, ServerError>;

/// Server error types
#[derive(Error, Debug)]
pub enum ServerError {
    /// Invalid environment configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Listener could not be bound
    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    /// Generic IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Pre-rendered JSON could not be produced
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ServerError {
    /// Hint logged next to the error on startup failure
    pub const fn hint(&self) -> Option<&'static str> {
        match self {
            Self::Config(_) => Some("Check BIND_ADDR and the other variables in .env"),
            Self::Bind { .. } => Some("Is another process already listening on that address?"),
            Self::Io(_) | Self::Json(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bind_error_message() {
        let err = ServerError::Bind {
            addr: "127.0.0.1:3000".parse().unwrap(),
            source: std::io::Error::from(std::io::ErrorKind::AddrInUse),
        };
        assert!(err.to_string().starts_with("Failed to bind 127.0.0.1:3000"));
        assert!(err.hint().is_some());
    }

    #[test]
    fn test_io_has_no_hint() {
        let err = ServerError::from(std::io::Error::other("boom"));
        assert!(err.hint().is_none());
    }
}
