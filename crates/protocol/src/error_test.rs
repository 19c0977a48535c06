//! Tests for protocol error types

use crate::error::{ProtocolError, ValidationWarning};

#[test]
fn test_missing_required_field_display() {
    let err = ProtocolError::missing_required_field("tid");
    assert_eq!(err.to_string(), "missing required field: tid");
}

#[test]
fn test_invalid_value_display() {
    let err = ProtocolError::invalid_value("qt", "negative value -1");
    assert_eq!(err.to_string(), "invalid value for qt: negative value -1");
}

#[test]
fn test_unknown_enum_value_display() {
    let err = ProtocolError::unknown_enum_value("t", "appview");
    assert_eq!(err.to_string(), "unknown enum value for t: \"appview\"");
}

#[test]
fn test_encoding_failed_display_includes_the_cause() {
    let cause = ProtocolError::invalid_value("qt", "negative value -1");
    let err = ProtocolError::encoding_failed("qt", cause);
    assert_eq!(
        err.to_string(),
        "encoding failed for qt: invalid value for qt: negative value -1"
    );
}

#[test]
fn test_recoverability() {
    assert!(ProtocolError::missing_required_field("tid").is_recoverable());
    assert!(ProtocolError::invalid_value("qt", "negative").is_recoverable());
    assert!(!ProtocolError::unknown_enum_value("t", "appview").is_recoverable());
}

#[test]
fn test_encoding_failed_recoverability_follows_the_cause() {
    let recoverable =
        ProtocolError::encoding_failed("qt", ProtocolError::invalid_value("qt", "negative"));
    assert!(recoverable.is_recoverable());

    let bug = ProtocolError::encoding_failed("t", ProtocolError::unknown_enum_value("t", "x"));
    assert!(!bug.is_recoverable());
}

#[test]
fn test_warning_display() {
    let warning = ValidationWarning::QueueTimeAboveSoftLimit { millis: 14_400_001 };
    assert!(warning.to_string().contains("14400001ms"));
}
