//! Field schema registry
//!
//! Declares, for every protocol parameter, its short wire key, whether the
//! protocol mandates it for all hits, and how its value encodes. The table
//! is a process-wide constant: declaration order is stable run-to-run, and
//! the table is safe for unsynchronized concurrent reads.

/// Wire tokens accepted under the `t` (hit type) key
pub const HIT_TYPE_TOKENS: &[&str] = &[
    "pageview",
    "screenview",
    "event",
    "transaction",
    "item",
    "social",
    "exception",
    "timing",
];

/// Wire tokens accepted under the `sc` (session control) key
pub const SESSION_CONTROL_TOKENS: &[&str] = &["start", "end"];

/// Identity of one protocol parameter
///
/// Closed set: an unknown field is unrepresentable, so schema lookups
/// cannot fail at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldId {
    // General
    ProtocolVersion,
    TrackingId,
    AnonymizeIp,
    QueueTime,
    // Hit
    HitType,
    NonInteraction,
    // User
    ClientId,
    UserId,
    // System info
    ScreenResolution,
    ViewportSize,
    DocumentEncoding,
    ScreenColors,
    UserLanguage,
    JavaEnabled,
    FlashVersion,
    // Content
    DocumentLocation,
    DocumentHostName,
    DocumentPath,
    DocumentTitle,
    ScreenName,
    LinkId,
    // Session
    SessionControl,
    IpOverride,
    UserAgentOverride,
    // Traffic source
    DocumentReferrer,
    CampaignName,
    CampaignSource,
    CampaignMedium,
    CampaignKeyword,
    CampaignContent,
    CampaignId,
    AdWordsId,
    DisplayAdsId,
    // General, trailing
    CacheBuster,
}

/// How a field's value maps to its wire string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    /// Pass-through string; empty means "not present"
    RawString,
    /// True → "1", False → "0", Unset → key omitted
    TriStateBoolean,
    /// Fixed lowercase token from a closed set; anything else is a caller bug
    EnumToken(&'static [&'static str]),
    /// Non-negative decimal integer
    Integer,
    /// Non-negative milliseconds, with a soft four-hour upper bound
    TimeDeltaMillis,
}

/// One schema entry: wire key, required-ness, encoding kind
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub id: FieldId,
    pub key: &'static str,
    pub required: bool,
    pub encoding: Encoding,
}

const fn field(id: FieldId, key: &'static str, required: bool, encoding: Encoding) -> FieldSpec {
    FieldSpec {
        id,
        key,
        required,
        encoding,
    }
}

/// The full registry, in declaration order.
///
/// Keys are unique across the table. `z` is declared last: the protocol
/// recommends the cache buster be the final parameter of the request.
pub const SCHEMA: &[FieldSpec] = &[
    field(FieldId::ProtocolVersion, "v", true, Encoding::RawString),
    field(FieldId::TrackingId, "tid", true, Encoding::RawString),
    field(FieldId::AnonymizeIp, "aip", false, Encoding::TriStateBoolean),
    field(FieldId::QueueTime, "qt", false, Encoding::TimeDeltaMillis),
    field(FieldId::HitType, "t", true, Encoding::EnumToken(HIT_TYPE_TOKENS)),
    field(FieldId::NonInteraction, "ni", false, Encoding::TriStateBoolean),
    field(FieldId::ClientId, "cid", true, Encoding::RawString),
    field(FieldId::UserId, "uid", false, Encoding::RawString),
    field(FieldId::ScreenResolution, "sr", false, Encoding::RawString),
    field(FieldId::ViewportSize, "vp", false, Encoding::RawString),
    field(FieldId::DocumentEncoding, "de", false, Encoding::RawString),
    field(FieldId::ScreenColors, "sd", false, Encoding::RawString),
    field(FieldId::UserLanguage, "ul", false, Encoding::RawString),
    field(FieldId::JavaEnabled, "je", false, Encoding::TriStateBoolean),
    field(FieldId::FlashVersion, "fl", false, Encoding::RawString),
    field(FieldId::DocumentLocation, "dl", false, Encoding::RawString),
    field(FieldId::DocumentHostName, "dh", false, Encoding::RawString),
    field(FieldId::DocumentPath, "dp", false, Encoding::RawString),
    field(FieldId::DocumentTitle, "dt", false, Encoding::RawString),
    field(FieldId::ScreenName, "cd", false, Encoding::RawString),
    field(FieldId::LinkId, "linkid", false, Encoding::RawString),
    field(
        FieldId::SessionControl,
        "sc",
        false,
        Encoding::EnumToken(SESSION_CONTROL_TOKENS),
    ),
    field(FieldId::IpOverride, "uip", false, Encoding::RawString),
    field(FieldId::UserAgentOverride, "ua", false, Encoding::RawString),
    field(FieldId::DocumentReferrer, "dr", false, Encoding::RawString),
    field(FieldId::CampaignName, "cn", false, Encoding::RawString),
    field(FieldId::CampaignSource, "cs", false, Encoding::RawString),
    field(FieldId::CampaignMedium, "cm", false, Encoding::RawString),
    field(FieldId::CampaignKeyword, "ck", false, Encoding::RawString),
    field(FieldId::CampaignContent, "cc", false, Encoding::RawString),
    field(FieldId::CampaignId, "ci", false, Encoding::RawString),
    field(FieldId::AdWordsId, "gclid", false, Encoding::RawString),
    field(FieldId::DisplayAdsId, "dclid", false, Encoding::RawString),
    field(FieldId::CacheBuster, "z", false, Encoding::RawString),
];

/// All schema entries in stable registry order
#[inline]
pub fn fields() -> &'static [FieldSpec] {
    SCHEMA
}

/// Look up the schema entry for a field
///
/// Every `FieldId` has exactly one entry; a miss here would mean the table
/// itself is broken, which is a programming error.
pub fn spec_of(id: FieldId) -> &'static FieldSpec {
    SCHEMA
        .iter()
        .find(|spec| spec.id == id)
        .expect("field missing from schema table")
}
