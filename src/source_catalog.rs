// source_catalog.rs
// Purpose: in-memory registry of scored information sources, their evidence,
// and the aggregates the dashboard surfaces (summary stats, alerts, compare).

use crate::chart_data::{RadarPoint, SeriesPoint, TrendPoint};
use crate::errors::{TrustboardError, TrustboardResult};
use crate::trust_scale::TrustBadge;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Profile of a tracked information source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceProfile {
    pub id: String,
    pub name: String,
    pub category: String,
    pub trust_score: Option<f64>,
    pub description: String,
}

/// Volume/consistency/bias metrics used for side-by-side comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceMetrics {
    pub volume: f64,
    pub consistency: f64,
    pub bias: f64,
}

/// A single supporting or contradicting signal attached to a source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvidenceRecord {
    pub id: String,
    pub kind: String,
    pub confidence: Option<f64>,
    pub summary: String,
}

impl EvidenceRecord {
    /// Tooltip label: rounded percentage, or `?%` when confidence is absent.
    pub fn label(&self) -> String {
        match self.confidence {
            Some(c) => format!("{c:.0}%"),
            None => "?%".to_string(),
        }
    }
}

/// Alert severity, with the accent token its card renders in. This accent
/// palette is separate from the closed trust DisplayColor set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertStatus {
    Info,
    Warning,
    Error,
    Success,
}

impl AlertStatus {
    pub fn accent_token(&self) -> &'static str {
        match self {
            AlertStatus::Info => "blue",
            AlertStatus::Warning => "yellow",
            AlertStatus::Error => "red",
            AlertStatus::Success => "green",
        }
    }
}

/// Operational alert surfaced on the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Alert {
    pub status: AlertStatus,
    pub title: String,
    pub description: String,
}

/// Everything the catalog tracks for one source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceEntry {
    pub profile: SourceProfile,
    pub metrics: SourceMetrics,
    pub evidence: Vec<EvidenceRecord>,
    pub radar: Vec<RadarPoint>,
    pub reasoning: String,
}

/// Listing row: a profile joined with its classification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassifiedSource {
    pub id: String,
    pub name: String,
    pub category: String,
    pub trust_score: Option<f64>,
    #[serde(flatten)]
    pub badge: TrustBadge,
}

impl ClassifiedSource {
    pub fn from_profile(profile: &SourceProfile) -> Self {
        ClassifiedSource {
            id: profile.id.clone(),
            name: profile.name.clone(),
            category: profile.category.clone(),
            trust_score: profile.trust_score,
            badge: TrustBadge::for_score(profile.trust_score),
        }
    }
}

/// Side-by-side metric row for two sources.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompareRow {
    pub metric: String,
    pub a: Option<f64>,
    pub b: Option<f64>,
}

/// Comparison of two catalog sources.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comparison {
    pub source_a: String,
    pub source_b: String,
    pub rows: Vec<CompareRow>,
}

impl Comparison {
    /// Differential series (a - b per metric); absent values count as zero.
    pub fn differential(&self) -> Vec<SeriesPoint> {
        self.rows
            .iter()
            .map(|r| SeriesPoint {
                name: r.metric.clone(),
                value: r.a.unwrap_or(0.0) - r.b.unwrap_or(0.0),
            })
            .collect()
    }
}

/// Catalog-level aggregates for the dashboard summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogSummary {
    pub source_count: usize,
    pub average_trust: Option<f64>,
    pub badge: TrustBadge,
    pub alerts: Vec<Alert>,
}

/// Registry of scored sources plus the shared trend series the feed ships
/// alongside them.
#[derive(Debug, Clone, Default)]
pub struct SourceCatalog {
    entries: HashMap<String, SourceEntry>,
    trend: Vec<TrendPoint>,
}

impl SourceCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, entry: SourceEntry) {
        tracing::debug!(source = %entry.profile.id, "catalog entry registered");
        self.entries.insert(entry.profile.id.clone(), entry);
    }

    pub fn set_trend(&mut self, trend: Vec<TrendPoint>) {
        self.trend = trend;
    }

    pub fn trend(&self) -> &[TrendPoint] {
        &self.trend
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&SourceEntry> {
        self.entries.get(id)
    }

    /// Classified listing, highest score first; score-less sources sort last.
    pub fn list(&self) -> Vec<ClassifiedSource> {
        let mut items: Vec<ClassifiedSource> = self
            .entries
            .values()
            .map(|e| ClassifiedSource::from_profile(&e.profile))
            .collect();
        items.sort_by(|x, y| match (x.trust_score, y.trust_score) {
            (Some(a), Some(b)) => b
                .partial_cmp(&a)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| x.name.cmp(&y.name)),
            (Some(_), None) => std::cmp::Ordering::Less,
            (None, Some(_)) => std::cmp::Ordering::Greater,
            (None, None) => x.name.cmp(&y.name),
        });
        items
    }

    /// Mean of the present scores; absent when no source has a score.
    pub fn average_trust(&self) -> Option<f64> {
        let scores: Vec<f64> = self
            .entries
            .values()
            .filter_map(|e| e.profile.trust_score)
            .collect();
        if scores.is_empty() {
            None
        } else {
            Some(scores.iter().sum::<f64>() / scores.len() as f64)
        }
    }

    /// Alerts for sources below the automation threshold or without enough
    /// scoring history.
    pub fn alerts(&self, threshold: f64) -> Vec<Alert> {
        let mut alerts = Vec::new();
        for source in self.list() {
            match source.trust_score {
                Some(s) if s < threshold => alerts.push(Alert {
                    status: AlertStatus::Warning,
                    title: format!("Low trust: {}", source.name),
                    description: format!(
                        "Score {} is below the automation threshold of {threshold:.0}%.",
                        source.badge.label
                    ),
                }),
                None => alerts.push(Alert {
                    status: AlertStatus::Info,
                    title: format!("Insufficient data: {}", source.name),
                    description: "No trust score yet; excluded from automation.".to_string(),
                }),
                _ => {}
            }
        }
        alerts
    }

    pub fn summary(&self, threshold: f64) -> CatalogSummary {
        let average_trust = self.average_trust();
        CatalogSummary {
            source_count: self.len(),
            average_trust,
            badge: TrustBadge::for_score(average_trust),
            alerts: self.alerts(threshold),
        }
    }

    /// Bar series of source volumes, largest first.
    pub fn volume_series(&self) -> Vec<SeriesPoint> {
        let mut series: Vec<SeriesPoint> = self
            .entries
            .values()
            .map(|e| SeriesPoint {
                name: e.profile.name.clone(),
                value: e.metrics.volume,
            })
            .collect();
        series.sort_by(|x, y| {
            y.value
                .partial_cmp(&x.value)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| x.name.cmp(&y.name))
        });
        series
    }

    /// Side-by-side comparison of two sources by id.
    pub fn compare(&self, a: &str, b: &str) -> TrustboardResult<Comparison> {
        let left = self
            .get(a)
            .ok_or_else(|| TrustboardError::not_found("source", a))?;
        let right = self
            .get(b)
            .ok_or_else(|| TrustboardError::not_found("source", b))?;

        let rows = vec![
            CompareRow {
                metric: "Trust".to_string(),
                a: left.profile.trust_score,
                b: right.profile.trust_score,
            },
            CompareRow {
                metric: "Volume".to_string(),
                a: Some(left.metrics.volume),
                b: Some(right.metrics.volume),
            },
            CompareRow {
                metric: "Consistency".to_string(),
                a: Some(left.metrics.consistency),
                b: Some(right.metrics.consistency),
            },
            CompareRow {
                metric: "Bias".to_string(),
                a: Some(left.metrics.bias),
                b: Some(right.metrics.bias),
            },
        ];

        Ok(Comparison {
            source_a: left.profile.name.clone(),
            source_b: right.profile.name.clone(),
            rows,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trust_scale::{DisplayColor, TrustTier};

    fn entry(id: &str, name: &str, score: Option<f64>, volume: f64) -> SourceEntry {
        SourceEntry {
            profile: SourceProfile {
                id: id.to_string(),
                name: name.to_string(),
                category: "news".to_string(),
                trust_score: score,
                description: String::new(),
            },
            metrics: SourceMetrics {
                volume,
                consistency: 50.0,
                bias: 40.0,
            },
            evidence: Vec::new(),
            radar: Vec::new(),
            reasoning: String::new(),
        }
    }

    fn catalog() -> SourceCatalog {
        let mut catalog = SourceCatalog::new();
        catalog.insert(entry("SRC-001", "SourceA", Some(88.0), 120.0));
        catalog.insert(entry("SRC-002", "SourceB", Some(34.0), 186.0));
        catalog.insert(entry("SRC-003", "SourceC", None, 12.0));
        catalog
    }

    #[test]
    fn test_listing_orders_by_score_with_unknowns_last() {
        let listing = catalog().list();
        assert_eq!(listing.len(), 3);
        assert_eq!(listing[0].name, "SourceA");
        assert_eq!(listing[0].badge.tier, TrustTier::High);
        assert_eq!(listing[1].badge.tier, TrustTier::Low);
        assert_eq!(listing[2].trust_score, None);
        assert_eq!(listing[2].badge.color, DisplayColor::Gray);
    }

    #[test]
    fn test_average_trust_ignores_absent_scores() {
        let catalog = catalog();
        let avg = catalog.average_trust().expect("two scores present");
        assert!((avg - 61.0).abs() < 1e-9);
        assert!(SourceCatalog::new().average_trust().is_none());
    }

    #[test]
    fn test_alerts_cover_low_and_unscored_sources() {
        let alerts = catalog().alerts(60.0);
        assert_eq!(alerts.len(), 2);
        assert_eq!(alerts[0].status, AlertStatus::Warning);
        assert!(alerts[0].title.contains("SourceB"));
        assert_eq!(alerts[1].status, AlertStatus::Info);
        assert!(alerts[1].title.contains("SourceC"));
    }

    #[test]
    fn test_alert_accent_tokens() {
        assert_eq!(AlertStatus::Info.accent_token(), "blue");
        assert_eq!(AlertStatus::Warning.accent_token(), "yellow");
        assert_eq!(AlertStatus::Error.accent_token(), "red");
        assert_eq!(AlertStatus::Success.accent_token(), "green");
    }

    #[test]
    fn test_summary_classifies_the_average() {
        let summary = catalog().summary(60.0);
        assert_eq!(summary.source_count, 3);
        assert_eq!(summary.badge.tier, TrustTier::Medium);
        assert_eq!(summary.badge.label, "61%");
    }

    #[test]
    fn test_compare_rows_and_differential() {
        let catalog = catalog();
        let cmp = catalog
            .compare("SRC-001", "SRC-002")
            .expect("both sources exist");
        assert_eq!(cmp.rows.len(), 4);
        assert_eq!(cmp.rows[0].metric, "Trust");
        assert_eq!(cmp.rows[0].a, Some(88.0));

        let diff = cmp.differential();
        assert_eq!(diff[0].value, 54.0);
        assert_eq!(diff[1].name, "Volume");
        assert_eq!(diff[1].value, -66.0);
    }

    #[test]
    fn test_compare_missing_source_is_not_found() {
        let err = catalog()
            .compare("SRC-001", "SRC-999")
            .expect_err("unknown id");
        assert!(matches!(err, TrustboardError::NotFound { .. }));
    }

    #[test]
    fn test_evidence_label_handles_absent_confidence() {
        let record = EvidenceRecord {
            id: "EV-1".to_string(),
            kind: "article".to_string(),
            confidence: Some(72.4),
            summary: String::new(),
        };
        assert_eq!(record.label(), "72%");

        let unscored = EvidenceRecord {
            confidence: None,
            ..record
        };
        assert_eq!(unscored.label(), "?%");
    }

    #[test]
    fn test_volume_series_orders_descending() {
        let series = catalog().volume_series();
        assert_eq!(series[0].name, "SourceB");
        assert_eq!(series[0].value, 186.0);
        assert_eq!(series[2].name, "SourceC");
    }
}
