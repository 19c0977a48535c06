//! Protocol error types
//!
//! Errors that can occur while validating or encoding a hit. Nothing in
//! this crate retries; retry policy belongs to the transport layer.

use thiserror::Error;

/// Errors produced by the validator, the encoders, and the payload builder
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ProtocolError {
    /// A field the protocol mandates is absent
    #[error("missing required field: {0}")]
    MissingRequiredField(&'static str),

    /// A value was rejected by its encoder
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    /// A token outside its closed enumeration — a caller bug
    #[error("unknown enum value for {field}: {value:?}")]
    UnknownEnumValue { field: &'static str, value: String },

    /// An encoder failure surfaced while building the payload
    #[error("encoding failed for {key}: {cause}")]
    EncodingFailed {
        key: &'static str,
        cause: Box<ProtocolError>,
    },
}

impl ProtocolError {
    /// Create a missing required field error
    #[inline]
    pub fn missing_required_field(key: &'static str) -> Self {
        Self::MissingRequiredField(key)
    }

    /// Create an invalid value error
    #[inline]
    pub fn invalid_value(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidValue {
            field,
            reason: reason.into(),
        }
    }

    /// Create an unknown enum value error
    #[inline]
    pub fn unknown_enum_value(field: &'static str, value: impl Into<String>) -> Self {
        Self::UnknownEnumValue {
            field,
            value: value.into(),
        }
    }

    /// Wrap an encoder failure with the wire key being built
    #[inline]
    pub fn encoding_failed(key: &'static str, cause: ProtocolError) -> Self {
        Self::EncodingFailed {
            key,
            cause: Box::new(cause),
        }
    }

    /// Whether the caller can fix the parameter set and revalidate
    ///
    /// Unknown enum values indicate a bug in calling code rather than bad
    /// input data.
    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::MissingRequiredField(_) | Self::InvalidValue { .. } => true,
            Self::UnknownEnumValue { .. } => false,
            Self::EncodingFailed { cause, .. } => cause.is_recoverable(),
        }
    }
}

/// Non-fatal findings reported alongside validation errors
///
/// Warnings never make a hit invalid; they flag values the collector is
/// known to silently drop or ignore.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationWarning {
    /// Queue time above the four-hour soft limit
    #[error("queue time {millis}ms exceeds the four-hour soft limit; the hit may not be processed")]
    QueueTimeAboveSoftLimit { millis: i64 },
}

/// Result type for protocol operations
pub type Result<T> = std::result::Result<T, ProtocolError>;
