//! Transport seam between built payloads and the network
//!
//! The core hands over ordered key/value pairs; this module form-encodes
//! them and defines the narrow trait an actual sender implements. Retry,
//! backoff, and offline queueing belong behind that trait, never in front
//! of it.

use async_trait::async_trait;

use beacon_protocol::Payload;

use crate::error::ClientError;

/// Largest form-encoded hit that may travel as a GET query string
pub const MAX_GET_QUERY: usize = 2000;

/// Largest form-encoded hit body the collector accepts
pub const MAX_HIT_BODY: usize = 8192;

/// Most hits one batch request may carry
pub const MAX_BATCH_HITS: usize = 20;

/// Largest combined batch body the collector accepts
pub const MAX_BATCH_BODY: usize = 16384;

/// HTTP method chosen for one hit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitMethod {
    Get,
    Post,
}

impl HitMethod {
    /// GET for small payloads, POST once the query-string limit is exceeded
    #[inline]
    pub const fn for_body(encoded_len: usize) -> Self {
        if encoded_len <= MAX_GET_QUERY {
            Self::Get
        } else {
            Self::Post
        }
    }
}

/// Form-encode a built payload for a query string or request body
///
/// Applies URL-encoding to each value and joins pairs with `&` and `=`.
pub fn encode_form(payload: &Payload) -> Result<String, ClientError> {
    serde_urlencoded::to_string(payload.pairs())
        .map_err(|e| ClientError::Serialization(e.to_string()))
}

/// Narrow seam the tracker sends through
///
/// Implementations own the HTTP concerns end to end. Errors come back to
/// the caller untouched; nothing at this seam retries.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Send one form-encoded hit
    async fn send(&self, body: &str, method: HitMethod) -> Result<(), ClientError>;

    /// Send several form-encoded hits in one request
    async fn send_batch(&self, bodies: &[String]) -> Result<(), ClientError>;
}
