//! Hit validation
//!
//! Checks a populated parameter set against the schema and the hit-type
//! specific rules, collecting every violation in one pass so the caller
//! sees the complete picture before any network attempt. Validation never
//! mutates the parameter set and performs no I/O.

use crate::encode::QUEUE_TIME_SOFT_LIMIT_MS;
use crate::error::{ProtocolError, ValidationWarning};
use crate::hit::HitType;
use crate::params::HitParams;
use crate::schema::{self, FieldId};

/// Wire key reported when a pageview carries neither `dl` nor `dh`+`dp`
pub const PAGEVIEW_LOCATION_KEY: &str = "dl|dh+dp";

/// Validate a parameter set; an empty vector means valid
///
/// All violations are collected, never just the first:
///
/// 1. every protocol-mandatory field must be present;
/// 2. pageview hits need a document location (`dl`, or `dh` and `dp`
///    together);
/// 3. values the encoders would reject are reported here too, so a set
///    that validates cleanly is guaranteed to build.
pub fn validate(params: &HitParams) -> Vec<ProtocolError> {
    let mut errors = Vec::new();

    for spec in schema::fields() {
        if spec.required && !params.is_set(spec.id) {
            errors.push(ProtocolError::missing_required_field(spec.key));
        }
    }

    if params.hit_type() == HitType::Pageview && !has_document_location(params) {
        errors.push(ProtocolError::missing_required_field(PAGEVIEW_LOCATION_KEY));
    }

    if let Some(qt) = params.general.queue_time_ms {
        if qt < 0 {
            errors.push(ProtocolError::invalid_value(
                "qt",
                format!("negative value {}", qt),
            ));
        }
    }

    if let Some(path) = params.content.document_path.as_deref() {
        if !path.is_empty() && !path.starts_with('/') {
            errors.push(ProtocolError::invalid_value(
                "dp",
                format!("path {:?} must begin with '/'", path),
            ));
        }
    }

    errors
}

/// Pageview rule: a full URL, or host name and path together
fn has_document_location(params: &HitParams) -> bool {
    params.is_set(FieldId::DocumentLocation)
        || (params.is_set(FieldId::DocumentHostName) && params.is_set(FieldId::DocumentPath))
}

/// Non-fatal findings: the hit still encodes, but the collector may drop it
pub fn soft_warnings(params: &HitParams) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    if let Some(qt) = params.general.queue_time_ms {
        if qt > QUEUE_TIME_SOFT_LIMIT_MS {
            warnings.push(ValidationWarning::QueueTimeAboveSoftLimit { millis: qt });
        }
    }

    warnings
}
