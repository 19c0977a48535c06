//! Benchmarks for payload building
//!
//! These benchmarks verify that:
//! 1. Building a minimal hit stays cheap (registry walk + a few allocations)
//! 2. Cost grows roughly with the number of populated fields
//! 3. Validation adds no meaningful overhead on a valid set

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use beacon_protocol::{payload, validate, HitParams, HitType, TriState};

/// Minimal valid pageview: just the protocol-mandatory fields plus `dl`
fn minimal_pageview() -> HitParams {
    HitParams::new(HitType::Pageview)
        .with_tracking_id("UA-1234-5")
        .with_client_id("35009a79-1a05-49d7-b876-2b884d0f825b")
        .with_document_location("http://foo.com/home?a=b")
}

/// Pageview with most of the schema populated
fn full_pageview() -> HitParams {
    let mut params = minimal_pageview().with_queue_time(560);
    params.general.anonymize_ip = TriState::True;
    params.general.cache_buster = Some("289372387623".into());
    params.user.user_id = Some("as8eknlll".into());
    params.system.screen_resolution = Some("800x600".into());
    params.system.viewport_size = Some("123x456".into());
    params.system.document_encoding = Some("UTF-8".into());
    params.system.user_language = Some("en-us".into());
    params.content.document_title = Some("Settings".into());
    params.content.document_path = Some("/home".into());
    params.content.document_host_name = Some("foo.com".into());
    params.traffic.document_referrer = Some("http://example.com".into());
    params.traffic.campaign_name = Some("(direct)".into());
    params.traffic.campaign_medium = Some("organic".into());
    params
}

fn bench_build_minimal(c: &mut Criterion) {
    let params = minimal_pageview();
    c.bench_function("build_minimal_pageview", |b| {
        b.iter(|| payload::build(black_box(&params)).unwrap())
    });
}

fn bench_build_full(c: &mut Criterion) {
    let params = full_pageview();
    c.bench_function("build_full_pageview", |b| {
        b.iter(|| payload::build(black_box(&params)).unwrap())
    });
}

fn bench_validate(c: &mut Criterion) {
    let params = full_pageview();
    c.bench_function("validate_full_pageview", |b| {
        b.iter(|| validate::validate(black_box(&params)))
    });
}

criterion_group!(benches, bench_build_minimal, bench_build_full, bench_validate);
criterion_main!(benches);
