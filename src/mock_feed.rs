// mock_feed.rs
// Purpose: deterministic stand-in for the scoring backend. Seeds the source
// catalog and trend series; simulates fetch latency the way the real feed
// client would block on the network.

use crate::chart_data::{self, RadarPoint, TrendPoint};
use crate::config_loader::FeedConfig;
use crate::insight;
use crate::source_catalog::{
    EvidenceRecord, SourceCatalog, SourceEntry, SourceMetrics, SourceProfile,
};
use chrono::{Duration as ChronoDuration, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::Duration;

const TREND_POINTS: usize = 12;
const EVIDENCE_ROWS: usize = 5;

const RADAR_AXES: [&str; 5] = ["Accuracy", "Freshness", "Depth", "Bias", "Consistency"];

// id, name, category, trust score, description, volume, consistency, bias
const SOURCE_FIXTURES: [(&str, &str, &str, Option<f64>, &str, f64, f64, f64); 5] = [
    (
        "SRC-001",
        "SourceA",
        "news",
        Some(88.0),
        "Leading publisher with consistent reliability over time.",
        120.0,
        80.0,
        34.0,
    ),
    (
        "SRC-002",
        "SourceB",
        "reports",
        Some(75.0),
        "High-volume reporting desk; reliability varies by beat.",
        186.0,
        61.0,
        45.0,
    ),
    (
        "SRC-003",
        "SourceC",
        "social",
        Some(66.0),
        "Aggregated social feed with moderate verification.",
        140.0,
        55.0,
        48.0,
    ),
    (
        "SRC-004",
        "SourceD",
        "forum",
        Some(34.0),
        "Community forum; anecdotal and lightly moderated.",
        90.0,
        40.0,
        60.0,
    ),
    (
        "SRC-005",
        "SourceE",
        "wire",
        None,
        "Newly onboarded wire; no scoring history yet.",
        12.0,
        20.0,
        50.0,
    ),
];

/// Seeded fixture provider. Identical seeds produce identical scores,
/// metrics, and confidences; trend timestamps are relative to fetch time.
#[derive(Debug, Clone)]
pub struct MockFeed {
    seed: u64,
    latency: Duration,
}

impl MockFeed {
    pub fn new(seed: u64, latency: Duration) -> Self {
        MockFeed { seed, latency }
    }

    pub fn from_config(config: &FeedConfig) -> Self {
        MockFeed::new(config.seed, Duration::from_millis(config.latency_ms))
    }

    /// Fetch the catalog, paying the simulated network latency first.
    pub async fn fetch(&self) -> SourceCatalog {
        tokio::time::sleep(self.latency).await;
        let catalog = self.build_catalog();
        tracing::debug!(
            sources = catalog.len(),
            seed = self.seed,
            "mock feed delivered catalog"
        );
        catalog
    }

    /// Synchronous catalog construction; used by `fetch` and by the CLI.
    pub fn build_catalog(&self) -> SourceCatalog {
        let mut rng = StdRng::seed_from_u64(self.seed);
        let mut catalog = SourceCatalog::new();

        for (id, name, category, trust_score, description, volume, consistency, bias) in
            SOURCE_FIXTURES
        {
            let profile = SourceProfile {
                id: id.to_string(),
                name: name.to_string(),
                category: category.to_string(),
                trust_score,
                description: description.to_string(),
            };
            let evidence = Self::evidence_rows(&mut rng, trust_score.is_some());
            let radar = Self::radar_profile(&mut rng);
            let reasoning = insight::reasoning_for(&profile);
            catalog.insert(SourceEntry {
                profile,
                metrics: SourceMetrics {
                    volume,
                    consistency,
                    bias,
                },
                evidence,
                radar,
                reasoning,
            });
        }

        catalog.set_trend(Self::trend_points(&mut rng));
        catalog
    }

    fn evidence_rows(rng: &mut StdRng, scored: bool) -> Vec<EvidenceRecord> {
        (0..EVIDENCE_ROWS)
            .map(|i| EvidenceRecord {
                id: format!("EV-{}", i + 1),
                kind: if i % 2 == 0 { "article" } else { "report" }.to_string(),
                confidence: scored.then(|| rng.random_range(60.0f64..90.0).round()),
                summary: "Supporting signal referencing prior event.".to_string(),
            })
            .collect()
    }

    fn radar_profile(rng: &mut StdRng) -> Vec<RadarPoint> {
        let distribution: Vec<(String, f64)> = RADAR_AXES
            .iter()
            .map(|axis| (axis.to_string(), rng.random_range(30.0f64..95.0).round()))
            .collect();
        chart_data::radar_series(&distribution)
    }

    fn trend_points(rng: &mut StdRng) -> Vec<TrendPoint> {
        let now = Utc::now();
        (0..TREND_POINTS)
            .map(|i| TrendPoint {
                timestamp: now - ChronoDuration::hours((TREND_POINTS - 1 - i) as i64),
                metric: rng.random_range(40.0..80.0),
            })
            .collect()
    }
}
