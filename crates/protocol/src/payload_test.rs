//! Tests for payload building

use crate::error::ProtocolError;
use crate::hit::{HitType, TriState};
use crate::params::HitParams;
use crate::payload::build;
use crate::validate::validate;

fn spec_example_pageview() -> HitParams {
    HitParams::new(HitType::Pageview)
        .with_tracking_id("UA-1234-5")
        .with_client_id("35009a79-1a05-49d7-b876-2b884d0f825b")
        .with_document_location("http://foo.com/home?a=b")
}

// =============================================================================
// End-to-end scenario
// =============================================================================

#[test]
fn test_minimal_pageview_builds_the_expected_pairs() {
    let params = spec_example_pageview();
    assert!(validate(&params).is_empty());

    let payload = build(&params).unwrap();
    assert_eq!(payload.get("v"), Some("1"));
    assert_eq!(payload.get("tid"), Some("UA-1234-5"));
    assert_eq!(payload.get("t"), Some("pageview"));
    assert_eq!(
        payload.get("cid"),
        Some("35009a79-1a05-49d7-b876-2b884d0f825b")
    );
    assert_eq!(payload.get("dl"), Some("http://foo.com/home?a=b"));
    assert_eq!(payload.len(), 5);
}

#[test]
fn test_untouched_flags_emit_no_keys() {
    let payload = build(&spec_example_pageview()).unwrap();
    assert!(!payload.contains_key("ni"));
    assert!(!payload.contains_key("aip"));
    assert!(!payload.contains_key("je"));
}

#[test]
fn test_explicit_false_flag_emits_zero() {
    let params = spec_example_pageview().with_non_interaction(false);
    let payload = build(&params).unwrap();
    assert_eq!(payload.get("ni"), Some("0"));
}

#[test]
fn test_queue_time_pair() {
    let params = spec_example_pageview().with_queue_time(560);
    let payload = build(&params).unwrap();
    assert_eq!(payload.get("qt"), Some("560"));
}

// =============================================================================
// Ordering and determinism
// =============================================================================

#[test]
fn test_pairs_follow_registry_order() {
    let params = spec_example_pageview().with_queue_time(560);
    let payload = build(&params).unwrap();
    let keys: Vec<&str> = payload.pairs().iter().map(|(k, _)| *k).collect();
    assert_eq!(keys, vec!["v", "tid", "qt", "t", "cid", "dl"]);
}

#[test]
fn test_cache_buster_is_the_final_pair() {
    let mut params = spec_example_pageview();
    params.general.cache_buster = Some("289372387623".into());
    let payload = build(&params).unwrap();
    let (key, value) = payload.pairs().last().unwrap();
    assert_eq!(*key, "z");
    assert_eq!(value, "289372387623");
}

#[test]
fn test_two_builds_of_the_same_set_are_identical() {
    let mut params = spec_example_pageview().with_queue_time(560);
    params.system.user_language = Some("en-us".into());
    params.traffic.campaign_medium = Some("organic".into());

    let first = build(&params).unwrap();
    let second = build(&params).unwrap();
    assert_eq!(first, second);
    assert_eq!(first.pairs(), second.pairs());
}

// =============================================================================
// Failure paths
// =============================================================================

#[test]
fn test_missing_required_field_fails_fast() {
    let mut params = spec_example_pageview();
    params.user.client_id = None;
    let err = build(&params).unwrap_err();
    assert_eq!(err, ProtocolError::MissingRequiredField("cid"));
}

#[test]
fn test_required_field_reduced_to_empty_fails_fast() {
    let mut params = spec_example_pageview();
    params.general.tracking_id = Some(String::new());
    let err = build(&params).unwrap_err();
    assert_eq!(err, ProtocolError::MissingRequiredField("tid"));
}

#[test]
fn test_encoder_failure_is_wrapped_with_the_wire_key() {
    let params = spec_example_pageview().with_queue_time(-1);
    let err = build(&params).unwrap_err();
    match err {
        ProtocolError::EncodingFailed { key, cause } => {
            assert_eq!(key, "qt");
            assert!(matches!(
                *cause,
                ProtocolError::InvalidValue { field: "qt", .. }
            ));
        }
        other => panic!("expected EncodingFailed, got {:?}", other),
    }
}

#[test]
fn test_skipped_optionals_leave_no_trace() {
    let params = spec_example_pageview();
    let payload = build(&params).unwrap();
    for (key, value) in payload.pairs() {
        assert!(!value.is_empty(), "empty value leaked for key {}", key);
    }
}

#[test]
fn test_all_tri_states_together() {
    let mut params = spec_example_pageview();
    params.general.anonymize_ip = TriState::True;
    params.general.non_interaction = TriState::False;
    // java_enabled stays Unset
    let payload = build(&params).unwrap();
    assert_eq!(payload.get("aip"), Some("1"));
    assert_eq!(payload.get("ni"), Some("0"));
    assert!(!payload.contains_key("je"));
}
