//! Value encoders
//!
//! One pure function per encoding kind, plus [`encode_field`] which
//! dispatches on the schema entry. Encoders are deterministic and
//! side-effect free; the only failures are negative integers and tokens
//! outside a closed enumeration.

use crate::error::ProtocolError;
use crate::hit::TriState;
use crate::params::FieldValue;
use crate::schema::{Encoding, FieldSpec};

/// Soft upper bound for time deltas (four hours in milliseconds)
///
/// Hits reported with a larger delta may not be processed by the
/// collector. Values above the bound still encode; only the validator
/// warns about them.
pub const QUEUE_TIME_SOFT_LIMIT_MS: i64 = 4 * 60 * 60 * 1000;

/// Encode one field value according to its schema entry
///
/// `Ok(None)` means the key is omitted from the payload. A value whose
/// shape does not match the declared encoding kind is defensively rejected
/// as an invalid value.
pub fn encode_field(
    spec: &FieldSpec,
    value: &FieldValue<'_>,
) -> Result<Option<String>, ProtocolError> {
    match (spec.encoding, value) {
        (Encoding::RawString, FieldValue::Text(s)) => Ok(encode_raw(s)),
        (Encoding::TriStateBoolean, FieldValue::Flag(flag)) => {
            Ok(encode_tri_state(*flag).map(str::to_owned))
        }
        (Encoding::EnumToken(allowed), FieldValue::Token(token)) => {
            encode_enum_token(spec.key, allowed, token).map(Some)
        }
        (Encoding::Integer, FieldValue::Integer(n)) => encode_integer(spec.key, *n).map(Some),
        (Encoding::TimeDeltaMillis, FieldValue::Millis(ms)) => {
            encode_time_delta(spec.key, *ms).map(Some)
        }
        (encoding, value) => Err(ProtocolError::invalid_value(
            spec.key,
            format!("value {:?} does not match encoding {:?}", value, encoding),
        )),
    }
}

/// Pass-through string; empty input means the key is omitted
#[inline]
pub fn encode_raw(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_owned())
    }
}

/// True → "1", False → "0", Unset → omit the key
///
/// The mapping is literal. The collector treats mere presence of some flag
/// keys as active whatever the value; that is protocol semantics, not the
/// encoder's concern.
#[inline]
pub const fn encode_tri_state(flag: TriState) -> Option<&'static str> {
    flag.as_token()
}

/// Fixed lowercase token from a closed enumeration
///
/// A token outside `allowed` is a caller bug and is rejected rather than
/// passed through.
pub fn encode_enum_token(
    field: &'static str,
    allowed: &[&str],
    token: &str,
) -> Result<String, ProtocolError> {
    if allowed.contains(&token) {
        Ok(token.to_owned())
    } else {
        Err(ProtocolError::unknown_enum_value(field, token))
    }
}

/// Non-negative integer to its decimal string
pub fn encode_integer(field: &'static str, value: i64) -> Result<String, ProtocolError> {
    if value < 0 {
        return Err(ProtocolError::invalid_value(
            field,
            format!("negative value {}", value),
        ));
    }
    Ok(value.to_string())
}

/// Time delta in milliseconds
///
/// Same rules as [`encode_integer`]; values above
/// [`QUEUE_TIME_SOFT_LIMIT_MS`] still encode.
#[inline]
pub fn encode_time_delta(field: &'static str, millis: i64) -> Result<String, ProtocolError> {
    encode_integer(field, millis)
}
