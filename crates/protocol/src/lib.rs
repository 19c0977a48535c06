//! Beacon Protocol - typed hit parameters for the measurement wire format
//!
//! This crate is the purely computational core of beacon. It maps
//! strongly-typed, semantically-named hit parameters to the flat key/value
//! wire format expected by the collection endpoint:
//!
//! - [`schema`] - static field registry: wire key, required-ness, encoding
//! - [`hit`] - closed wire enums (`HitType`, `SessionControl`, `TriState`)
//! - [`params`] - the parameter set for one hit, grouped by concern
//! - [`encode`] - pure per-kind value encoders
//! - [`validate`] - hit-type aware validation, collecting all violations
//! - [`payload`] - ordered payload building in stable registry order
//!
//! # Design Principles
//!
//! - **No I/O**: transport, retry, and queueing live in `beacon-client`
//! - **Static schema**: the registry is a compile-time constant table,
//!   safe for unsynchronized concurrent reads
//! - **Deterministic output**: identical parameter sets build
//!   byte-identical payloads
//!
//! # Quick Start
//!
//! ```
//! use beacon_protocol::{HitParams, HitType, payload, validate};
//!
//! let params = HitParams::new(HitType::Pageview)
//!     .with_tracking_id("UA-1234-5")
//!     .with_client_id("35009a79-1a05-49d7-b876-2b884d0f825b")
//!     .with_document_location("http://foo.com/home?a=b");
//!
//! assert!(validate::validate(&params).is_empty());
//!
//! let payload = payload::build(&params).unwrap();
//! assert_eq!(payload.get("v"), Some("1"));
//! assert_eq!(payload.get("t"), Some("pageview"));
//! ```

pub mod encode;
pub mod error;
pub mod hit;
pub mod params;
pub mod payload;
pub mod schema;
pub mod validate;

pub use encode::QUEUE_TIME_SOFT_LIMIT_MS;
pub use error::{ProtocolError, Result, ValidationWarning};
pub use hit::{HitType, SessionControl, TriState};
pub use params::{
    ContentParams, FieldValue, GeneralParams, HitParams, SessionParams, SystemInfoParams,
    TrafficSourceParams, UserParams, PROTOCOL_VERSION,
};
pub use payload::Payload;
pub use schema::{Encoding, FieldId, FieldSpec, SCHEMA};

#[cfg(test)]
mod error_test;
#[cfg(test)]
mod payload_test;
