//! Cookie Jar Domain Models
//!
//! This module contains the data structures of the cookie jar domain:
//! the closed set of cookie flavors, the identity-bearing cookie itself,
//! and the request/response shapes used by the jar service.

use serde::{Deserialize, Serialize};
use std::{fmt, hash::Hash, str::FromStr};
use uuid::Uuid;

// =============================================================================
// Categories
// =============================================================================

/// A closed set of item kinds that a bag can hold.
///
/// Every variant has a fixed human-readable label and a single-character
/// glyph used when a bag is rendered.
pub trait Category: Copy + Eq + Hash + fmt::Debug + 'static {
    /// Every variant, in display order.
    const ALL: &'static [Self];

    /// Human-readable name, e.g. `"Chocolate Chip"`.
    fn label(&self) -> &'static str;

    /// Single glyph drawn for one item of this kind.
    fn glyph(&self) -> char;
}

/// There are strictly three cookie flavors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CookieFlavor {
    ChocolateChip,
    Fortune,
    Stroopwafel,
}

impl CookieFlavor {
    /// Name used on the command line and in JSON bodies.
    pub fn key(&self) -> &'static str {
        match self {
            CookieFlavor::ChocolateChip => "chocolateChip",
            CookieFlavor::Fortune => "fortune",
            CookieFlavor::Stroopwafel => "stroopwafel",
        }
    }
}

impl Category for CookieFlavor {
    const ALL: &'static [Self] = &[
        CookieFlavor::ChocolateChip,
        CookieFlavor::Fortune,
        CookieFlavor::Stroopwafel,
    ];

    fn label(&self) -> &'static str {
        match self {
            CookieFlavor::ChocolateChip => "Chocolate Chip",
            CookieFlavor::Fortune => "Fortune",
            CookieFlavor::Stroopwafel => "Stroopwafel",
        }
    }

    fn glyph(&self) -> char {
        match self {
            CookieFlavor::ChocolateChip => '🍪',
            CookieFlavor::Fortune => '🥠',
            CookieFlavor::Stroopwafel => '🧇',
        }
    }
}

impl fmt::Display for CookieFlavor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Returned when a flavor name matches none of the known flavors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseFlavorError {
    input: String,
}

impl fmt::Display for ParseFlavorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let accepted: Vec<&str> = CookieFlavor::ALL.iter().map(CookieFlavor::key).collect();
        write!(
            f,
            "unknown cookie flavor '{}' (expected one of: {})",
            self.input,
            accepted.join(", ")
        )
    }
}

impl std::error::Error for ParseFlavorError {}

impl FromStr for CookieFlavor {
    type Err = ParseFlavorError;

    /// Accepts the camelCase key or the label, ignoring case, spaces,
    /// hyphens and underscores (`"chocolate-chip"` works too).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalize = |raw: &str| -> String {
            raw.chars()
                .filter(|c| !matches!(c, ' ' | '-' | '_'))
                .flat_map(char::to_lowercase)
                .collect()
        };

        let wanted = normalize(s);
        CookieFlavor::ALL
            .iter()
            .copied()
            .find(|flavor| normalize(flavor.key()) == wanted || normalize(flavor.label()) == wanted)
            .ok_or_else(|| ParseFlavorError {
                input: s.to_string(),
            })
    }
}

impl<'de> Deserialize<'de> for CookieFlavor {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

// =============================================================================
// Items
// =============================================================================

/// One item of category `C`.
///
/// The `id` exists only so that two items of the same category are still
/// distinct members of an identity-keyed collection. It is never reused and
/// carries no ordering.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Item<C> {
    category: C,
    id: Uuid,
}

impl<C: Category> Item<C> {
    /// Creates an item with a freshly generated identity.
    pub fn new(category: C) -> Self {
        Self {
            category,
            id: Uuid::new_v4(),
        }
    }

    pub fn category(&self) -> C {
        self.category
    }

    /// Identity token; only meaningful for telling items apart.
    pub fn id(&self) -> Uuid {
        self.id
    }
}

/// A cookie has a flavor and an identity.
pub type Cookie = Item<CookieFlavor>;

impl fmt::Display for Item<CookieFlavor> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} Cookie", self.category.label())
    }
}

// =============================================================================
// Jar Service Inputs / Responses
// =============================================================================

/// Returns the default quantity (1) for cookie insertion
fn default_quantity() -> u32 {
    1
}

/// Most cookies a single insert request may bake
pub const MAX_QUANTITY: u32 = 1_000;

/// Input for creating a jar
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateJarInput {
    /// Optional jar identifier; generated when absent
    pub jar_id: Option<String>,
}

/// Input for putting cookies into a jar
#[derive(Debug, Deserialize)]
pub struct InsertCookiesInput {
    /// Flavor of every cookie baked for this request
    pub flavor: CookieFlavor,

    /// Number of fresh cookies to insert (defaults to 1, at most `MAX_QUANTITY`)
    #[serde(default = "default_quantity")]
    pub quantity: u32,
}

/// Input for moving every cookie from one jar to another
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferInput {
    /// Jar that receives the cookies
    pub target_jar_id: String,
}

/// Snapshot of a jar's contents
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct JarView {
    /// Jar identifier
    pub jar_id: String,

    /// Number of cookies currently in the jar
    pub count: usize,

    pub is_empty: bool,

    /// One emoji per cookie, in no particular order
    pub emojis: String,

    /// Per-flavor summary, e.g. `"2x Chocolate Chip, 1x Fortune"`
    pub summary: String,
}

/// A cookie as it leaves the jar
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CookieView {
    pub flavor: String,
    pub label: String,
    pub emoji: String,
}

impl From<&Cookie> for CookieView {
    fn from(cookie: &Cookie) -> Self {
        let flavor = cookie.category();
        Self {
            flavor: flavor.key().to_string(),
            label: flavor.label().to_string(),
            emoji: flavor.glyph().to_string(),
        }
    }
}

/// Response for removing one cookie; `cookie` is `None` when the jar was empty
#[derive(Debug, Serialize, Deserialize)]
pub struct RemoveCookieResponse {
    pub cookie: Option<CookieView>,
    pub jar: JarView,
}

/// Response for a whole-jar transfer
#[derive(Debug, Serialize, Deserialize)]
pub struct TransferResponse {
    /// Number of cookies moved
    pub moved: usize,
    pub from: JarView,
    pub to: JarView,
}

/// Response listing every jar
#[derive(Debug, Serialize, Deserialize)]
pub struct JarListResponse {
    pub jars: Vec<JarView>,
}

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// API error response
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiError {
    /// Error message
    pub error: String,

    /// Optional additional details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: None,
        }
    }

    pub fn with_details(error: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: Some(details.into()),
        }
    }
}
