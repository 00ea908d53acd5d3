//! Trust-score classification core.
//!
//! Maps a possibly-absent numeric trust score onto a discrete tier and a
//! display color. Pure functions only; every other module depends on this
//! one and none of it depends back.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Scores at or above this value classify as [`TrustTier::High`].
pub const HIGH_THRESHOLD: f64 = 70.0;

/// Scores at or above this value (and below [`HIGH_THRESHOLD`]) classify as
/// [`TrustTier::Medium`].
pub const MEDIUM_THRESHOLD: f64 = 40.0;

/// Discrete trust bucket derived from a raw score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrustTier {
    High,
    Medium,
    Low,
    Unknown,
}

impl TrustTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            TrustTier::High => "high",
            TrustTier::Medium => "medium",
            TrustTier::Low => "low",
            TrustTier::Unknown => "unknown",
        }
    }
}

impl FromStr for TrustTier {
    type Err = ();

    fn from_str(input: &str) -> Result<TrustTier, Self::Err> {
        match input.to_lowercase().as_str() {
            "high" => Ok(TrustTier::High),
            "medium" => Ok(TrustTier::Medium),
            "low" => Ok(TrustTier::Low),
            "unknown" => Ok(TrustTier::Unknown),
            _ => Err(()),
        }
    }
}

impl fmt::Display for TrustTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Closed presentation palette. Carries no meaning beyond rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayColor {
    Green,
    Yellow,
    Red,
    Gray,
}

impl DisplayColor {
    pub fn as_str(&self) -> &'static str {
        match self {
            DisplayColor::Green => "green",
            DisplayColor::Yellow => "yellow",
            DisplayColor::Red => "red",
            DisplayColor::Gray => "gray",
        }
    }
}

impl fmt::Display for DisplayColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Classify a raw score into a trust tier.
///
/// First-match threshold ladder: absent scores are `Unknown`, then `High`
/// at 70+, `Medium` at 40+, `Low` at 0+. Negative scores fall through to
/// `Unknown` rather than `Low`.
pub fn classify(score: Option<f64>) -> TrustTier {
    match score {
        None => TrustTier::Unknown,
        Some(s) if s >= HIGH_THRESHOLD => TrustTier::High,
        Some(s) if s >= MEDIUM_THRESHOLD => TrustTier::Medium,
        Some(s) if s >= 0.0 => TrustTier::Low,
        Some(_) => TrustTier::Unknown,
    }
}

/// Total mapping from tier to display color.
pub fn color_of(tier: TrustTier) -> DisplayColor {
    match tier {
        TrustTier::High => DisplayColor::Green,
        TrustTier::Medium => DisplayColor::Yellow,
        TrustTier::Low => DisplayColor::Red,
        TrustTier::Unknown => DisplayColor::Gray,
    }
}

/// Convenience entry point for renderers; always agrees with
/// `color_of(classify(score))`.
pub fn color_from_score(score: Option<f64>) -> DisplayColor {
    color_of(classify(score))
}

/// Human-readable label for a score: `"Unknown"` when absent, otherwise the
/// rounded percentage (`Some(88.0)` renders as `"88%"`).
pub fn score_label(score: Option<f64>) -> String {
    match score {
        Some(s) => format!("{s:.0}%"),
        None => "Unknown".to_string(),
    }
}

/// Meter fill for a score, clamped into [0, 100]. Absent scores fill 0.
pub fn fill_percent(score: Option<f64>) -> f64 {
    match score {
        Some(s) => s.clamp(0.0, 100.0),
        None => 0.0,
    }
}

/// Tier, color, and label bundle for badge-style rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrustBadge {
    pub tier: TrustTier,
    pub color: DisplayColor,
    pub label: String,
}

impl TrustBadge {
    pub fn for_score(score: Option<f64>) -> Self {
        let tier = classify(score);
        TrustBadge {
            tier,
            color: color_of(tier),
            label: score_label(score),
        }
    }
}
