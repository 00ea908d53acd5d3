//! Mock AI commentary.
//!
//! There is no model behind this module. `InsightEngine::ask` sleeps a
//! configured interval and returns a templated reply, which is exactly what
//! the product's "AI" did before real inference existed. The canned notes
//! are the fixed page-level commentary the dashboard shows.

use crate::source_catalog::{SourceEntry, SourceProfile};
use crate::trust_scale::{classify, score_label, TrustTier};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use uuid::Uuid;

/// Reply to a single insight request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InsightReply {
    pub id: Uuid,
    pub reply: String,
}

/// Page-level commentary block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsightNote {
    pub title: String,
    pub insight: String,
}

impl InsightNote {
    fn new(title: &str, insight: &str) -> Self {
        InsightNote {
            title: title.to_string(),
            insight: insight.to_string(),
        }
    }
}

/// Simulated reasoning backend with configurable latency.
#[derive(Debug, Clone)]
pub struct InsightEngine {
    latency: Duration,
}

impl InsightEngine {
    pub fn new(latency: Duration) -> Self {
        InsightEngine { latency }
    }

    /// Answer a free-form prompt after the simulated thinking delay.
    pub async fn ask(&self, prompt: &str) -> InsightReply {
        let id = Uuid::new_v4();
        tokio::time::sleep(self.latency).await;
        let reply = format!(
            "AI response for: \"{prompt}\"\nReasoning: (mock) The system evaluated trust & relevance heuristics."
        );
        tracing::info!(
            request_id = %id,
            latency_ms = self.latency.as_millis() as u64,
            "insight request served"
        );
        InsightReply { id, reply }
    }
}

/// Recent commentary shown on the dashboard page.
pub fn dashboard_notes() -> Vec<InsightNote> {
    vec![
        InsightNote::new(
            "Emerging pattern",
            "Cluster of low-trust signals around topic X.",
        ),
        InsightNote::new(
            "Stability",
            "Top 5 sources maintained high trust >80%.",
        ),
    ]
}

/// Model-page overview commentary.
pub fn model_overview() -> InsightNote {
    InsightNote::new(
        "Model Overview",
        "Model reliability stable. Feature weights indicate rising importance for consistency; monitor drift.\nUncertainty distribution skewed towards middle buckets; opportunity for calibration.",
    )
}

/// Comparison commentary: names the stronger source by trust and the higher
/// volume provider, then closes with the fixed bias assessment.
pub fn comparison_summary(a: &SourceEntry, b: &SourceEntry) -> InsightNote {
    let a_trust = a.profile.trust_score.unwrap_or(0.0);
    let b_trust = b.profile.trust_score.unwrap_or(0.0);
    let (stronger, weaker) = if a_trust >= b_trust {
        (&a.profile.name, &b.profile.name)
    } else {
        (&b.profile.name, &a.profile.name)
    };
    let volume_leader = if a.metrics.volume >= b.metrics.volume {
        &a.profile.name
    } else {
        &b.profile.name
    };
    InsightNote::new(
        "Comparison",
        &format!(
            "{stronger} shows stronger consistency and trust; {volume_leader} provides higher volume{}.\nBias differential falls within acceptable range; consider hybrid aggregation strategy.",
            if volume_leader == weaker { " but lower reliability" } else { "" }
        ),
    )
}

/// Per-source reasoning text, keyed off the source's trust tier.
pub fn reasoning_for(profile: &SourceProfile) -> String {
    match classify(profile.trust_score) {
        TrustTier::High => "The trust score remains high due to consistent accuracy and low volatility.\nBias dimension slightly elevated; monitor shifts over political topics.".to_string(),
        TrustTier::Medium => format!(
            "The trust score sits mid-range at {}; accuracy is acceptable but consistency fluctuates.\nRe-evaluate after the next scoring window.",
            score_label(profile.trust_score)
        ),
        TrustTier::Low => format!(
            "The trust score is low at {}; repeated contradicting signals and weak sourcing.\nAutomation should not rely on this source without manual review.",
            score_label(profile.trust_score)
        ),
        TrustTier::Unknown => "No trust score is available yet; scoring history is insufficient.\nCollect additional signals before enabling automation.".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source_catalog::SourceMetrics;

    fn source(name: &str, score: Option<f64>, volume: f64) -> SourceEntry {
        SourceEntry {
            profile: SourceProfile {
                id: name.to_string(),
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

    #[tokio::test]
    async fn test_ask_returns_templated_reply() {
        let engine = InsightEngine::new(Duration::from_millis(0));
        let reply = engine.ask("why is SourceA trusted?").await;
        assert!(reply
            .reply
            .starts_with("AI response for: \"why is SourceA trusted?\""));
        assert!(reply.reply.contains("(mock)"));
    }

    #[test]
    fn test_comparison_summary_names_the_leaders() {
        let a = source("SourceA", Some(88.0), 120.0);
        let b = source("SourceB", Some(73.0), 186.0);
        let note = comparison_summary(&a, &b);
        assert!(note.insight.starts_with("SourceA shows stronger"));
        assert!(note.insight.contains("SourceB provides higher volume but lower reliability"));
    }

    #[test]
    fn test_reasoning_follows_the_tier() {
        assert!(reasoning_for(&source("A", Some(88.0), 1.0).profile).contains("remains high"));
        assert!(reasoning_for(&source("B", Some(55.0), 1.0).profile).contains("55%"));
        assert!(reasoning_for(&source("C", Some(10.0), 1.0).profile).contains("low at 10%"));
        assert!(reasoning_for(&source("D", None, 1.0).profile).contains("insufficient"));
    }

    #[test]
    fn test_dashboard_notes_fixture() {
        let notes = dashboard_notes();
        assert_eq!(notes.len(), 2);
        assert_eq!(notes[0].title, "Emerging pattern");
    }
}
