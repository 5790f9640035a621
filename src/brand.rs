//! Brand records: a client name plus the three brand role colors.
//!
//! A [`BrandRecord`] is owned and edited by the caller. The palette generator
//! only reads it, and the crate never persists it; the JSON helpers exist so
//! that a persistence layer can store records as opaque documents.
//!
//! # JSON Format
//!
//! ```json
//! {
//!   "clientName": "BR Termitalia s.r.l.",
//!   "primary": { "hex": "#2B1A54", "name": "Termitalia Purple" },
//!   "secondary": { "hex": "#2AACE2", "name": "Wave Blue" },
//!   "accent": { "hex": "#F26522", "name": "Flame Orange" }
//! }
//! ```
//!
//! A missing role is omitted; a role that is present always carries a
//! well-formed hex color, since malformed hex strings fail to deserialize.

use serde::{Deserialize, Serialize};

use crate::color::HexColor;
use crate::roles::RoleSuggestion;

// ============================================================================
// BrandColor
// ============================================================================

/// A brand color and its display name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
pub struct BrandColor {
    /// The color itself.
    pub hex: HexColor,
    /// Display name, e.g. `"Wave Blue"`.
    pub name: String,
}

impl BrandColor {
    /// Pairs a color with its display name.
    pub fn new(hex: HexColor, name: impl Into<String>) -> Self {
        Self {
            hex,
            name: name.into(),
        }
    }
}

// ============================================================================
// BrandRecord
// ============================================================================

/// A client's brand: name plus primary, secondary and accent slots.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct BrandRecord {
    /// Free-text client name, used in export file names.
    pub client_name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary: Option<BrandColor>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary: Option<BrandColor>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accent: Option<BrandColor>,
}

impl BrandRecord {
    /// Creates a record with no colors assigned.
    pub fn new(client_name: impl Into<String>) -> Self {
        Self {
            client_name: client_name.into(),
            ..Self::default()
        }
    }

    /// The demo client shipped with the studio.
    pub fn demo() -> Self {
        Self::new("BR Termitalia s.r.l.")
            .with_primary(HexColor::from_rgb(0x2B, 0x1A, 0x54), "Termitalia Purple")
            .with_secondary(HexColor::from_rgb(0x2A, 0xAC, 0xE2), "Wave Blue")
            .with_accent(HexColor::from_rgb(0xF2, 0x65, 0x22), "Flame Orange")
    }

    /// Starter record for a new client.
    pub fn blank() -> Self {
        Self::new("Nome Cliente")
            .with_primary(HexColor::from_rgb(0x1E, 0x3A, 0x5F), "Primary")
            .with_secondary(HexColor::from_rgb(0x3B, 0x82, 0xF6), "Secondary")
            .with_accent(HexColor::from_rgb(0xF5, 0x9E, 0x0B), "Accent")
    }

    /// Sets the primary role.
    pub fn with_primary(mut self, hex: HexColor, name: impl Into<String>) -> Self {
        self.primary = Some(BrandColor::new(hex, name));
        self
    }

    /// Sets the secondary role.
    pub fn with_secondary(mut self, hex: HexColor, name: impl Into<String>) -> Self {
        self.secondary = Some(BrandColor::new(hex, name));
        self
    }

    /// Sets the accent role.
    pub fn with_accent(mut self, hex: HexColor, name: impl Into<String>) -> Self {
        self.accent = Some(BrandColor::new(hex, name));
        self
    }

    /// Returns the three roles when all of them are set.
    pub fn roles(&self) -> Option<(&BrandColor, &BrandColor, &BrandColor)> {
        Some((
            self.primary.as_ref()?,
            self.secondary.as_ref()?,
            self.accent.as_ref()?,
        ))
    }

    /// Returns true if all three roles are set.
    pub fn is_complete(&self) -> bool {
        self.roles().is_some()
    }

    /// Replaces the three roles with a suggestion, keeping the client name.
    pub fn apply_suggestion(&mut self, suggestion: RoleSuggestion) {
        self.primary = Some(suggestion.primary);
        self.secondary = Some(suggestion.secondary);
        self.accent = Some(suggestion.accent);
    }

    /// Serializes the record to a JSON string.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Serializes the record to a pretty-printed JSON string.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserializes a record from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
