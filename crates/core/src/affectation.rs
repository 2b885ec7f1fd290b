//! Affectation categories used to classify scenes and elements.
//!
//! Every affectation type row in the store carries one of three slugs. The
//! slug is what the web client keys its icons and filters on, so scenes and
//! elements expose the resolved slug rather than the numeric type id.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// Impact category of a scene or element.
///
/// - `Biotic`    -- living systems (fauna, flora, ecosystems).
/// - `Anthropic` -- human activity and infrastructure.
/// - `Physical`  -- abiotic environment (water, soil, glaciers, air).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum AffectationSlug {
    Biotic,
    Anthropic,
    Physical,
}

impl AffectationSlug {
    /// String representation for display, logging, and database storage.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Biotic => "biotic",
            Self::Anthropic => "anthropic",
            Self::Physical => "physical",
        }
    }
}

impl std::fmt::Display for AffectationSlug {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for AffectationSlug {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "biotic" => Ok(Self::Biotic),
            "anthropic" => Ok(Self::Anthropic),
            "physical" => Ok(Self::Physical),
            other => Err(CoreError::Validation(format!(
                "unknown affectation slug '{other}', expected biotic, anthropic or physical"
            ))),
        }
    }
}
