//! Tolerance bands: named ceilings on the aggregate difference.

use crate::error::{Result, SimilarityError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How much difference still counts as similar.
///
/// A comparison is similar when its difference is at most
/// [`ToleranceBand::upper_bound`]; the bound is inclusive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToleranceBand {
    Extreme,
    VeryStrong,
    Strong,
    ModeratelyStrong,
    #[default]
    Normal,
    ModeratelyWeak,
    Weak,
    VeryWeak,
    Lame,
}

impl ToleranceBand {
    /// Strictest first.
    pub const ALL: [ToleranceBand; 9] = [
        Self::Extreme,
        Self::VeryStrong,
        Self::Strong,
        Self::ModeratelyStrong,
        Self::Normal,
        Self::ModeratelyWeak,
        Self::Weak,
        Self::VeryWeak,
        Self::Lame,
    ];

    /// Largest difference accepted as similar.
    #[must_use]
    pub const fn upper_bound(self) -> f64 {
        match self {
            Self::Extreme => 0.05,
            Self::VeryStrong => 0.15,
            Self::Strong => 0.25,
            Self::ModeratelyStrong => 0.35,
            Self::Normal => 0.50,
            Self::ModeratelyWeak => 0.60,
            Self::Weak => 0.70,
            Self::VeryWeak => 0.85,
            Self::Lame => 0.95,
        }
    }

    /// Whether `difference` falls inside the band.
    #[must_use]
    pub fn accepts(self, difference: f64) -> bool {
        difference <= self.upper_bound()
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Extreme => "extreme",
            Self::VeryStrong => "very_strong",
            Self::Strong => "strong",
            Self::ModeratelyStrong => "moderately_strong",
            Self::Normal => "normal",
            Self::ModeratelyWeak => "moderately_weak",
            Self::Weak => "weak",
            Self::VeryWeak => "very_weak",
            Self::Lame => "lame",
        }
    }
}

impl fmt::Display for ToleranceBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ToleranceBand {
    type Err = SimilarityError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_ascii_lowercase().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|band| band.name() == wanted)
            .ok_or_else(|| SimilarityError::invalid(format!("unknown tolerance band '{s}'")))
    }
}
