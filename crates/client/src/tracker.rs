//! Tracker facade
//!
//! Runs the full validate → build → encode → send sequence for one hit.
//! Validation failures surface before any network attempt; soft warnings
//! are logged and never block the send.

use tracing::{debug, warn};

use beacon_protocol::{payload, validate, HitParams};

use crate::error::ClientError;
use crate::transport::{encode_form, HitMethod, Transport};

/// Sends validated hits through a transport
///
/// # Example
///
/// ```no_run
/// use beacon_client::{HttpTransport, Tracker};
/// use beacon_protocol::{HitParams, HitType};
///
/// # async fn example() -> Result<(), beacon_client::ClientError> {
/// let tracker = Tracker::new(HttpTransport::new());
///
/// let params = HitParams::new(HitType::Pageview)
///     .with_tracking_id("UA-1234-5")
///     .with_client_id("35009a79-1a05-49d7-b876-2b884d0f825b")
///     .with_document_location("http://foo.com/home?a=b");
///
/// tracker.send(&params).await?;
/// # Ok(())
/// # }
/// ```
pub struct Tracker<T: Transport> {
    transport: T,
}

impl<T: Transport> Tracker<T> {
    /// Create a tracker over the given transport
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// Access the underlying transport
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Validate, build, and send a single hit
    pub async fn send(&self, params: &HitParams) -> Result<(), ClientError> {
        let body = self.prepare(params)?;
        let method = HitMethod::for_body(body.len());
        self.transport.send(&body, method).await
    }

    /// Validate, build, and send several hits in one batch request
    ///
    /// Every hit is validated before anything is sent; the first invalid
    /// one fails the whole batch.
    pub async fn send_batch(&self, hits: &[HitParams]) -> Result<(), ClientError> {
        let mut bodies = Vec::with_capacity(hits.len());
        for params in hits {
            bodies.push(self.prepare(params)?);
        }
        self.transport.send_batch(&bodies).await
    }

    /// Validate, build, and form-encode one hit
    fn prepare(&self, params: &HitParams) -> Result<String, ClientError> {
        let errors = validate::validate(params);
        if !errors.is_empty() {
            return Err(ClientError::InvalidHit(errors));
        }

        for warning in validate::soft_warnings(params) {
            warn!(%warning, hit_type = %params.hit_type(), "hit may be dropped by the collector");
        }

        let built = payload::build(params)?;
        let body = encode_form(&built)?;
        debug!(hit_type = %params.hit_type(), bytes = body.len(), "hit prepared");
        Ok(body)
    }
}
