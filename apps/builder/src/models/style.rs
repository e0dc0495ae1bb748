//! Template style — the visual variant chosen by the host page.
//!
//! Set once at startup (the original flow selects it on the template picker
//! screen, defaulting to `modern`), read-only everywhere else. The style
//! decides which set of preview slots the render pass addresses.

use serde::{Deserialize, Serialize};

use crate::errors::BuilderError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateStyle {
    Modern,
    Creative,
    Simple,
}

impl TemplateStyle {
    /// Parses a style name as supplied by configuration. Case-insensitive.
    pub fn parse(raw: &str) -> Result<Self, BuilderError> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "modern" => Ok(TemplateStyle::Modern),
            "creative" => Ok(TemplateStyle::Creative),
            "simple" => Ok(TemplateStyle::Simple),
            other => Err(BuilderError::UnknownStyle(other.to_string())),
        }
    }

    /// The id suffix used by the page naming contract (`previewName-modern` etc.).
    pub fn suffix(&self) -> &'static str {
        match self {
            TemplateStyle::Modern => "modern",
            TemplateStyle::Creative => "creative",
            TemplateStyle::Simple => "simple",
        }
    }
}

impl Default for TemplateStyle {
    fn default() -> Self {
        TemplateStyle::Modern
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
