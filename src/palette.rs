//! Configurable presentation palette.
//!
//! `color_of` stays a fixed total function; a `Palette` only overrides the
//! token handed to renderers, so themes never change classification.

use crate::trust_scale::{color_of, TrustTier};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub high: String,
    pub medium: String,
    pub low: String,
    pub unknown: String,
}

impl Default for Palette {
    fn default() -> Self {
        Palette {
            high: color_of(TrustTier::High).as_str().to_string(),
            medium: color_of(TrustTier::Medium).as_str().to_string(),
            low: color_of(TrustTier::Low).as_str().to_string(),
            unknown: color_of(TrustTier::Unknown).as_str().to_string(),
        }
    }
}

impl Palette {
    /// Token rendered for a tier under this palette.
    pub fn token_for(&self, tier: TrustTier) -> &str {
        match tier {
            TrustTier::High => &self.high,
            TrustTier::Medium => &self.medium,
            TrustTier::Low => &self.low,
            TrustTier::Unknown => &self.unknown,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trust_scale::DisplayColor;

    #[test]
    fn test_default_palette_matches_color_table() {
        let palette = Palette::default();
        for tier in [
            TrustTier::High,
            TrustTier::Medium,
            TrustTier::Low,
            TrustTier::Unknown,
        ] {
            assert_eq!(palette.token_for(tier), color_of(tier).as_str());
        }
        assert_eq!(palette.token_for(TrustTier::High), DisplayColor::Green.as_str());
    }

    #[test]
    fn test_theme_override_leaves_classification_alone() {
        let palette = Palette {
            high: "emerald".to_string(),
            ..Palette::default()
        };
        assert_eq!(palette.token_for(TrustTier::High), "emerald");
        // Classification is untouched by theming
        assert_eq!(color_of(TrustTier::High), DisplayColor::Green);
    }
}
