//! Beacon Client - the transport collaborator for measurement hits
//!
//! `beacon-protocol` produces ordered key/value pairs; this crate carries
//! them the rest of the way:
//!
//! - [`transport`] - form encoding, method selection, and the narrow
//!   [`Transport`] trait senders implement
//! - [`http`] - reqwest-backed transport against the collection endpoint
//! - [`tracker`] - validate → build → encode → send facade
//! - [`endpoint`] - static endpoint configuration
//!
//! Retry, backoff, and offline queueing are deliberately out of scope;
//! they belong behind the [`Transport`] trait in calling code.
//!
//! # Quick Start
//!
//! ```no_run
//! use beacon_client::{HttpTransport, Tracker};
//! use beacon_protocol::{HitParams, HitType};
//!
//! # async fn example() -> Result<(), beacon_client::ClientError> {
//! let tracker = Tracker::new(HttpTransport::new());
//!
//! let params = HitParams::new(HitType::Pageview)
//!     .with_tracking_id("UA-1234-5")
//!     .with_client_id("35009a79-1a05-49d7-b876-2b884d0f825b")
//!     .with_document_location("http://foo.com/home?a=b");
//!
//! tracker.send(&params).await?;
//! # Ok(())
//! # }
//! ```

pub mod endpoint;
pub mod error;
pub mod http;
pub mod tracker;
pub mod transport;

pub use error::{ClientError, Result};
pub use http::HttpTransport;
pub use tracker::Tracker;
pub use transport::{
    encode_form, HitMethod, Transport, MAX_BATCH_BODY, MAX_BATCH_HITS, MAX_GET_QUERY, MAX_HIT_BODY,
};

// Test modules - only compiled during testing
#[cfg(test)]
mod http_test;
