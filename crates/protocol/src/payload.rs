//! Payload building
//!
//! Walks the schema registry in declaration order against a populated
//! parameter set and produces the ordered key/value pairs the transport
//! serializes. Output is byte-identical for identical input, which lets a
//! transport cache or deduplicate serialized payloads.

use crate::encode;
use crate::error::ProtocolError;
use crate::params::HitParams;
use crate::schema;

/// An ordered, encoded hit payload
///
/// Pairs appear in stable registry order. Values are not yet URL-encoded;
/// that is the transport's job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Payload {
    pairs: Vec<(&'static str, String)>,
}

impl Payload {
    /// The encoded pairs in registry order
    #[inline]
    pub fn pairs(&self) -> &[(&'static str, String)] {
        &self.pairs
    }

    /// The value recorded under `key`, if any
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Whether `key` appears in the payload
    #[inline]
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Number of encoded pairs
    #[inline]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Whether the payload holds no pairs
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Consume the payload and take ownership of the pairs
    #[inline]
    pub fn into_pairs(self) -> Vec<(&'static str, String)> {
        self.pairs
    }
}

impl<'a> IntoIterator for &'a Payload {
    type Item = &'a (&'static str, String);
    type IntoIter = std::slice::Iter<'a, (&'static str, String)>;

    fn into_iter(self) -> Self::IntoIter {
        self.pairs.iter()
    }
}

/// Build the wire pairs for a parameter set
///
/// Callers are expected to run [`crate::validate::validate`] first.
/// Missing required fields are still caught here as a defensive check,
/// and encoder failures are wrapped in `EncodingFailed` rather than
/// silently dropped. Absent optional fields are skipped.
pub fn build(params: &HitParams) -> Result<Payload, ProtocolError> {
    let mut pairs = Vec::with_capacity(schema::fields().len());

    for spec in schema::fields() {
        let Some(value) = params.value(spec.id) else {
            if spec.required {
                return Err(ProtocolError::missing_required_field(spec.key));
            }
            continue;
        };

        match encode::encode_field(spec, &value) {
            Ok(Some(encoded)) => pairs.push((spec.key, encoded)),
            // Encoders omit empty strings and unset flags; a required field
            // reduced to nothing is still a contract violation.
            Ok(None) if spec.required => {
                return Err(ProtocolError::missing_required_field(spec.key));
            }
            Ok(None) => {}
            Err(cause) => return Err(ProtocolError::encoding_failed(spec.key, cause)),
        }
    }

    Ok(Payload { pairs })
}
