//! Parameter set for a single hit
//!
//! A pure data holder grouped by concern: general, user, system info,
//! content, session, and traffic source. No validation lives here; the
//! validator and the payload builder read values through
//! [`HitParams::value`].
//!
//! A parameter set is created fresh per outgoing hit, populated by the
//! caller, validated, built, then discarded. Nothing is shared across
//! hits.

use serde::{Deserialize, Serialize};

use crate::hit::{HitType, SessionControl, TriState};
use crate::schema::FieldId;

/// Protocol version sent under `v`. Only changes on incompatible protocol
/// revisions.
pub const PROTOCOL_VERSION: &str = "1";

/// A field's value as exposed to the encoders
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldValue<'a> {
    /// Raw string, passed through as-is
    Text(&'a str),
    /// Tri-state boolean flag
    Flag(TriState),
    /// Plain non-negative integer
    Integer(i64),
    /// Time delta in milliseconds
    Millis(i64),
    /// Fixed wire token from a closed enumeration
    Token(&'static str),
}

/// General parameters: property, IP handling, latency
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GeneralParams {
    /// Tracking / web property ID, format `UA-XXXX-Y` (`tid`)
    pub tracking_id: Option<String>,
    /// Anonymize the sender's IP address (`aip`)
    pub anonymize_ip: TriState,
    /// Delta in ms between when the hit occurred and when it was sent (`qt`)
    pub queue_time_ms: Option<i64>,
    /// Consider the hit non-interactive (`ni`)
    pub non_interaction: TriState,
    /// Random value defeating caches on GET requests (`z`)
    pub cache_buster: Option<String>,
}

/// User identification
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserParams {
    /// Anonymous UUID identifying the device or browser instance (`cid`)
    pub client_id: Option<String>,
    /// Known, non-PII user identifier supplied by the site owner (`uid`)
    pub user_id: Option<String>,
}

/// System info: screen, encoding, language, capability flags
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SystemInfoParams {
    /// Screen resolution, e.g. `800x600` (`sr`)
    pub screen_resolution: Option<String>,
    /// Viewable browser/device area, e.g. `123x456` (`vp`)
    pub viewport_size: Option<String>,
    /// Character set of the document, e.g. `UTF-8` (`de`)
    pub document_encoding: Option<String>,
    /// Screen color depth, e.g. `24-bits` (`sd`)
    pub screen_colors: Option<String>,
    /// User language, e.g. `en-us` (`ul`)
    pub user_language: Option<String>,
    /// Whether Java was enabled (`je`)
    pub java_enabled: TriState,
    /// Flash version, e.g. `10 1 r103` (`fl`)
    pub flash_version: Option<String>,
}

/// Content information: what the hit describes
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContentParams {
    /// Full URL of the page (`dl`)
    pub document_location: Option<String>,
    /// Hostname serving the content (`dh`)
    pub document_host_name: Option<String>,
    /// Path portion of the page URL, must begin with `/` (`dp`)
    pub document_path: Option<String>,
    /// Page / document title (`dt`)
    pub document_title: Option<String>,
    /// Screen name, used by app tracking for screenview hits (`cd`)
    pub screen_name: Option<String>,
    /// Clicked DOM element ID for enhanced link attribution (`linkid`)
    pub link_id: Option<String>,
}

/// Session parameters: duration control and overrides
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionParams {
    /// Force a session to start or end with this hit (`sc`)
    pub session_control: Option<SessionControl>,
    /// IP address of the user; always anonymized by the collector (`uip`)
    pub ip_override: Option<String>,
    /// User agent of the browser (`ua`)
    pub user_agent_override: Option<String>,
}

/// Traffic source: referrer, campaign, and ad identifiers
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TrafficSourceParams {
    /// Referral source URL (`dr`)
    pub document_referrer: Option<String>,
    /// Campaign name (`cn`)
    pub campaign_name: Option<String>,
    /// Campaign source (`cs`)
    pub campaign_source: Option<String>,
    /// Campaign medium (`cm`)
    pub campaign_medium: Option<String>,
    /// Campaign keyword (`ck`)
    pub campaign_keyword: Option<String>,
    /// Campaign content (`cc`)
    pub campaign_content: Option<String>,
    /// Campaign ID (`ci`)
    pub campaign_id: Option<String>,
    /// AdWords ID (`gclid`)
    pub adwords_id: Option<String>,
    /// Display Ads ID (`dclid`)
    pub display_ads_id: Option<String>,
}

/// All parameters for one outgoing hit
///
/// The hit type is fixed at construction; everything else is populated
/// through the public concern groups.
///
/// # Example
///
/// ```
/// use beacon_protocol::{HitParams, HitType};
///
/// let mut params = HitParams::new(HitType::Pageview);
/// params.general.tracking_id = Some("UA-1234-5".into());
/// params.user.client_id = Some("35009a79-1a05-49d7-b876-2b884d0f825b".into());
/// params.content.document_location = Some("http://foo.com/home?a=b".into());
///
/// assert_eq!(params.hit_type(), HitType::Pageview);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HitParams {
    hit_type: HitType,
    pub general: GeneralParams,
    pub user: UserParams,
    pub system: SystemInfoParams,
    pub content: ContentParams,
    pub session: SessionParams,
    pub traffic: TrafficSourceParams,
}

impl HitParams {
    /// Create an empty parameter set for the given hit type
    pub fn new(hit_type: HitType) -> Self {
        Self {
            hit_type,
            general: GeneralParams::default(),
            user: UserParams::default(),
            system: SystemInfoParams::default(),
            content: ContentParams::default(),
            session: SessionParams::default(),
            traffic: TrafficSourceParams::default(),
        }
    }

    /// The hit type this set was created with
    #[inline]
    pub const fn hit_type(&self) -> HitType {
        self.hit_type
    }

    /// Convenience: set the tracking ID
    #[must_use]
    pub fn with_tracking_id(mut self, tid: impl Into<String>) -> Self {
        self.general.tracking_id = Some(tid.into());
        self
    }

    /// Convenience: set the client ID
    #[must_use]
    pub fn with_client_id(mut self, cid: impl Into<String>) -> Self {
        self.user.client_id = Some(cid.into());
        self
    }

    /// Convenience: set the document location URL
    #[must_use]
    pub fn with_document_location(mut self, url: impl Into<String>) -> Self {
        self.content.document_location = Some(url.into());
        self
    }

    /// Convenience: set the queue time in milliseconds
    #[must_use]
    pub fn with_queue_time(mut self, millis: i64) -> Self {
        self.general.queue_time_ms = Some(millis);
        self
    }

    /// Convenience: mark the hit as non-interactive (or explicitly not)
    #[must_use]
    pub fn with_non_interaction(mut self, flag: impl Into<TriState>) -> Self {
        self.general.non_interaction = flag.into();
        self
    }

    /// The value currently held for a field, or `None` if nothing was set
    ///
    /// Tri-state flags are always reported; the encoder omits `Unset`.
    /// The protocol version is a constant and is always present.
    pub fn value(&self, id: FieldId) -> Option<FieldValue<'_>> {
        match id {
            FieldId::ProtocolVersion => Some(FieldValue::Text(PROTOCOL_VERSION)),
            FieldId::TrackingId => text(&self.general.tracking_id),
            FieldId::AnonymizeIp => Some(FieldValue::Flag(self.general.anonymize_ip)),
            FieldId::QueueTime => self.general.queue_time_ms.map(FieldValue::Millis),
            FieldId::HitType => Some(FieldValue::Token(self.hit_type.as_token())),
            FieldId::NonInteraction => Some(FieldValue::Flag(self.general.non_interaction)),
            FieldId::ClientId => text(&self.user.client_id),
            FieldId::UserId => text(&self.user.user_id),
            FieldId::ScreenResolution => text(&self.system.screen_resolution),
            FieldId::ViewportSize => text(&self.system.viewport_size),
            FieldId::DocumentEncoding => text(&self.system.document_encoding),
            FieldId::ScreenColors => text(&self.system.screen_colors),
            FieldId::UserLanguage => text(&self.system.user_language),
            FieldId::JavaEnabled => Some(FieldValue::Flag(self.system.java_enabled)),
            FieldId::FlashVersion => text(&self.system.flash_version),
            FieldId::DocumentLocation => text(&self.content.document_location),
            FieldId::DocumentHostName => text(&self.content.document_host_name),
            FieldId::DocumentPath => text(&self.content.document_path),
            FieldId::DocumentTitle => text(&self.content.document_title),
            FieldId::ScreenName => text(&self.content.screen_name),
            FieldId::LinkId => text(&self.content.link_id),
            FieldId::SessionControl => self
                .session
                .session_control
                .map(|sc| FieldValue::Token(sc.as_token())),
            FieldId::IpOverride => text(&self.session.ip_override),
            FieldId::UserAgentOverride => text(&self.session.user_agent_override),
            FieldId::DocumentReferrer => text(&self.traffic.document_referrer),
            FieldId::CampaignName => text(&self.traffic.campaign_name),
            FieldId::CampaignSource => text(&self.traffic.campaign_source),
            FieldId::CampaignMedium => text(&self.traffic.campaign_medium),
            FieldId::CampaignKeyword => text(&self.traffic.campaign_keyword),
            FieldId::CampaignContent => text(&self.traffic.campaign_content),
            FieldId::CampaignId => text(&self.traffic.campaign_id),
            FieldId::AdWordsId => text(&self.traffic.adwords_id),
            FieldId::DisplayAdsId => text(&self.traffic.display_ads_id),
            FieldId::CacheBuster => text(&self.general.cache_buster),
        }
    }

    /// Whether a field is present under encoder semantics
    ///
    /// Empty strings and `TriState::Unset` count as absent, matching what
    /// the encoders will omit from the payload.
    pub fn is_set(&self, id: FieldId) -> bool {
        match self.value(id) {
            None => false,
            Some(FieldValue::Text(s)) => !s.is_empty(),
            Some(FieldValue::Flag(flag)) => flag.is_set(),
            Some(FieldValue::Integer(_) | FieldValue::Millis(_) | FieldValue::Token(_)) => true,
        }
    }
}

fn text(value: &Option<String>) -> Option<FieldValue<'_>> {
    value.as_deref().map(FieldValue::Text)
}
