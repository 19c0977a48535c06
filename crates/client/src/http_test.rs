//! Tests for HTTP transport limits
//!
//! Limit checks run before any request is built, so these tests never
//! touch the network.

use crate::error::ClientError;
use crate::http::HttpTransport;
use crate::transport::{HitMethod, Transport, MAX_BATCH_HITS, MAX_HIT_BODY};

fn offline_transport() -> HttpTransport {
    // Unroutable on purpose; nothing in these tests should get that far.
    HttpTransport::with_endpoint("http://127.0.0.1:9/collect", "http://127.0.0.1:9/batch")
}

#[tokio::test]
async fn test_oversized_hit_is_rejected_before_sending() {
    let transport = offline_transport();
    let body = "x".repeat(MAX_HIT_BODY + 1);
    let err = transport.send(&body, HitMethod::Post).await.unwrap_err();
    assert!(matches!(
        err,
        ClientError::HitTooLarge { size, max } if size == MAX_HIT_BODY + 1 && max == MAX_HIT_BODY
    ));
}

#[tokio::test]
async fn test_too_many_hits_in_a_batch_is_rejected() {
    let transport = offline_transport();
    let bodies: Vec<String> = (0..MAX_BATCH_HITS + 1).map(|i| format!("cid={}", i)).collect();
    let err = transport.send_batch(&bodies).await.unwrap_err();
    assert!(matches!(
        err,
        ClientError::TooManyHits { count, max } if count == MAX_BATCH_HITS + 1 && max == MAX_BATCH_HITS
    ));
}

#[tokio::test]
async fn test_oversized_batch_member_is_rejected() {
    let transport = offline_transport();
    let bodies = vec!["x".repeat(MAX_HIT_BODY + 1)];
    let err = transport.send_batch(&bodies).await.unwrap_err();
    assert!(matches!(err, ClientError::HitTooLarge { .. }));
}

#[tokio::test]
async fn test_oversized_batch_body_is_rejected() {
    let transport = offline_transport();
    // Each hit is under the per-hit limit, but the joined body is not.
    let bodies: Vec<String> = (0..3).map(|_| "x".repeat(8000)).collect();
    let err = transport.send_batch(&bodies).await.unwrap_err();
    assert!(matches!(err, ClientError::BatchTooLarge { .. }));
}
