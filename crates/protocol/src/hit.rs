//! Hit classification and closed wire enums
//!
//! `HitType` selects what kind of hit a parameter set describes and drives
//! the conditionally-required field rules. `SessionControl` and `TriState`
//! are the other closed value types that map to fixed wire tokens.

use serde::{Deserialize, Serialize};

/// The type of hit being reported (sent under the `t` key)
///
/// Fixed at parameter-set construction and immutable afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HitType {
    /// A page load on the web
    Pageview,
    /// A screen view in an app
    Screenview,
    /// A user interaction event
    Event,
    /// An ecommerce transaction
    Transaction,
    /// A single item within a transaction
    Item,
    /// A social network interaction
    Social,
    /// A crash or caught exception
    Exception,
    /// A user timing measurement
    Timing,
}

impl HitType {
    /// All hit types, in wire-token order
    pub const ALL: [HitType; 8] = [
        Self::Pageview,
        Self::Screenview,
        Self::Event,
        Self::Transaction,
        Self::Item,
        Self::Social,
        Self::Exception,
        Self::Timing,
    ];

    /// Get the lowercase wire token for this hit type
    #[inline]
    pub const fn as_token(self) -> &'static str {
        match self {
            Self::Pageview => "pageview",
            Self::Screenview => "screenview",
            Self::Event => "event",
            Self::Transaction => "transaction",
            Self::Item => "item",
            Self::Social => "social",
            Self::Exception => "exception",
            Self::Timing => "timing",
        }
    }

    /// Parse a wire token back into a hit type
    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|hit| hit.as_token() == token)
    }
}

impl std::fmt::Display for HitType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_token())
    }
}

/// Session duration control (sent under the `sc` key)
///
/// `Start` forces a new session to begin with the hit; `End` forces the
/// current session to end with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionControl {
    Start,
    End,
}

impl SessionControl {
    /// Get the lowercase wire token
    #[inline]
    pub const fn as_token(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::End => "end",
        }
    }

    /// Parse a wire token back into a session control value
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "start" => Some(Self::Start),
            "end" => Some(Self::End),
            _ => None,
        }
    }
}

impl std::fmt::Display for SessionControl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_token())
    }
}

/// A boolean with an explicit "not set" state
///
/// `Unset` omits the key from the payload entirely; explicit `False` emits
/// the "0" token. The distinction matters because the collector treats mere
/// presence of some flag keys as active, whatever the value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TriState {
    True,
    False,
    #[default]
    Unset,
}

impl TriState {
    /// Whether a value was explicitly chosen (either true or false)
    #[inline]
    pub const fn is_set(self) -> bool {
        !matches!(self, Self::Unset)
    }

    /// Wire token: "1" for true, "0" for false, `None` for unset
    #[inline]
    pub const fn as_token(self) -> Option<&'static str> {
        match self {
            Self::True => Some("1"),
            Self::False => Some("0"),
            Self::Unset => None,
        }
    }
}

impl From<bool> for TriState {
    #[inline]
    fn from(value: bool) -> Self {
        if value {
            Self::True
        } else {
            Self::False
        }
    }
}
