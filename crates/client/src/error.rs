//! Client error types

use beacon_protocol::ProtocolError;
use thiserror::Error;

/// Errors that can occur while preparing or sending hits
#[derive(Debug, Error)]
pub enum ClientError {
    /// The parameter set failed validation; nothing was sent
    #[error("hit failed validation with {} error(s)", .0.len())]
    InvalidHit(Vec<ProtocolError>),

    /// Building or encoding the payload failed
    #[error("protocol error: {0}")]
    Protocol(#[from] ProtocolError),

    /// Form encoding failed
    #[error("serialization error: {0}")]
    Serialization(String),

    /// Network error while contacting the collection endpoint
    #[error("network error: {0}")]
    Network(String),

    /// Collection endpoint returned a non-success status
    #[error("server error: HTTP {0}")]
    Server(u16),

    /// One encoded hit exceeds the collector's size limit
    #[error("hit too large: {size} bytes (max {max})")]
    HitTooLarge { size: usize, max: usize },

    /// The combined batch body exceeds the collector's size limit
    #[error("batch too large: {size} bytes (max {max})")]
    BatchTooLarge { size: usize, max: usize },

    /// Too many hits for one batch request
    #[error("too many hits in batch: {count} (max {max})")]
    TooManyHits { count: usize, max: usize },
}

impl ClientError {
    /// Validation errors carried by an `InvalidHit`, if any
    pub fn validation_errors(&self) -> &[ProtocolError] {
        match self {
            Self::InvalidHit(errors) => errors,
            _ => &[],
        }
    }
}

/// Result type for client operations
pub type Result<T> = std::result::Result<T, ClientError>;
