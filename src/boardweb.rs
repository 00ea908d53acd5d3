use crate::app_state::AppState;
use crate::chart_data::{self, FeatureWeight, HistogramBucket, RadarPoint, SeriesPoint};
use crate::errors::{SafeReadLock, TrustboardError};
use crate::insight::{self, InsightNote, InsightReply};
use crate::source_catalog::{Alert, ClassifiedSource, SourceProfile};
use crate::trust_scale::{
    classify, color_of, fill_percent, score_label, DisplayColor, TrustBadge, TrustTier,
};
use axum::{
    extract::{Extension, Path, Query},
    response::Json,
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::CorsLayer;

const TIERS: [TrustTier; 4] = [
    TrustTier::High,
    TrustTier::Medium,
    TrustTier::Low,
    TrustTier::Unknown,
];

#[derive(Debug, Serialize, Deserialize)]
pub struct ClassifyRequest {
    pub score: Option<f64>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ClassifyResponse {
    pub score: Option<f64>,
    pub tier: TrustTier,
    pub color: DisplayColor,
    pub token: String,
    pub label: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ScaleEntry {
    pub tier: TrustTier,
    pub color: DisplayColor,
    pub token: String,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatEntry {
    pub label: String,
    pub value: String,
    pub sub_label: String,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrustCard {
    pub score: Option<f64>,
    pub tier: TrustTier,
    pub color: DisplayColor,
    pub label: String,
    pub fill: f64,
    pub explanation: String,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryResponse {
    pub stats: Vec<StatEntry>,
    pub trust_card: TrustCard,
    pub alerts: Vec<Alert>,
    pub trend: Vec<SeriesPoint>,
    pub volume: Vec<SeriesPoint>,
    pub notes: Vec<InsightNote>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SourceListResponse {
    pub sources: Vec<ClassifiedSource>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvidenceView {
    pub id: String,
    pub kind: String,
    pub confidence: Option<f64>,
    pub label: String,
    pub summary: String,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceDetailResponse {
    pub profile: SourceProfile,
    #[serde(flatten)]
    pub badge: TrustBadge,
    pub fill: f64,
    pub evidence: Vec<EvidenceView>,
    pub metrics: Vec<RadarPoint>,
    pub reasoning: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CompareQuery {
    pub a: String,
    pub b: String,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BadgedCompareRow {
    pub metric: String,
    pub a: Option<f64>,
    pub b: Option<f64>,
    pub a_badge: TrustBadge,
    pub b_badge: TrustBadge,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompareResponse {
    pub source_a: String,
    pub source_b: String,
    pub rows: Vec<BadgedCompareRow>,
    pub differential: Vec<SeriesPoint>,
    pub summary: InsightNote,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelInsightsResponse {
    pub feature_importance: Vec<FeatureWeight>,
    pub uncertainty: Vec<HistogramBucket>,
    pub note: InsightNote,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AskRequest {
    pub prompt: String,
}

/// Build the full dashboard router: trust endpoints with versioned aliases,
/// catalog and insight endpoints, and health checks.
pub fn build_board_router(state: Arc<AppState>) -> Router {
    Router::new()
        // classification core
        .route("/api/trust/classify", post(classify_score))
        .route("/api/trust/scale", get(trust_scale_table))
        // versioned aliases
        .route("/v1/trust/classify", post(classify_score))
        .route("/v1/trust/scale", get(trust_scale_table))
        // dashboard data
        .route("/api/dashboard/summary", get(dashboard_summary))
        .route("/api/sources", get(list_sources))
        .route("/api/sources/compare", get(compare_sources))
        .route("/api/sources/{id}", get(source_detail))
        .route("/api/model/insights", get(model_insights))
        .route("/api/insight/ask", post(ask_insight))
        // health endpoints
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        .layer(CorsLayer::permissive())
        .layer(Extension(state))
}

#[axum::debug_handler]
async fn classify_score(
    Extension(state): Extension<Arc<AppState>>,
    Json(req): Json<ClassifyRequest>,
) -> Json<ClassifyResponse> {
    let tier = classify(req.score);
    Json(ClassifyResponse {
        score: req.score,
        tier,
        color: color_of(tier),
        token: state.config.palette.token_for(tier).to_string(),
        label: score_label(req.score),
    })
}

#[axum::debug_handler]
async fn trust_scale_table(
    Extension(state): Extension<Arc<AppState>>,
) -> Json<Vec<ScaleEntry>> {
    Json(
        TIERS
            .iter()
            .map(|&tier| ScaleEntry {
                tier,
                color: color_of(tier),
                token: state.config.palette.token_for(tier).to_string(),
            })
            .collect(),
    )
}

#[axum::debug_handler]
async fn dashboard_summary(
    Extension(state): Extension<Arc<AppState>>,
) -> Result<Json<SummaryResponse>, TrustboardError> {
    let catalog = state.catalog.safe_read()?;
    let threshold = state.config.trust.automation_threshold;
    let summary = catalog.summary(threshold);
    let notes = insight::dashboard_notes();

    let stats = vec![
        StatEntry {
            label: "Sources".to_string(),
            value: summary.source_count.to_string(),
            sub_label: "tracked".to_string(),
        },
        StatEntry {
            label: "Alerts".to_string(),
            value: summary.alerts.len().to_string(),
            sub_label: format!("below {threshold:.0}%"),
        },
        StatEntry {
            label: "Avg Trust".to_string(),
            value: summary.badge.label.clone(),
            sub_label: "past 7d".to_string(),
        },
        StatEntry {
            label: "AI Insights".to_string(),
            value: notes.len().to_string(),
            sub_label: "this week".to_string(),
        },
    ];

    let trust_card = TrustCard {
        score: summary.average_trust,
        tier: summary.badge.tier,
        color: summary.badge.color,
        label: summary.badge.label.clone(),
        fill: fill_percent(summary.average_trust),
        explanation: "Average trust computed from last 7 days.".to_string(),
    };

    Ok(Json(SummaryResponse {
        stats,
        trust_card,
        alerts: summary.alerts,
        trend: chart_data::line_series(catalog.trend()),
        volume: catalog.volume_series(),
        notes,
    }))
}

#[axum::debug_handler]
async fn list_sources(
    Extension(state): Extension<Arc<AppState>>,
) -> Result<Json<SourceListResponse>, TrustboardError> {
    let catalog = state.catalog.safe_read()?;
    Ok(Json(SourceListResponse {
        sources: catalog.list(),
    }))
}

#[axum::debug_handler]
async fn source_detail(
    Extension(state): Extension<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<SourceDetailResponse>, TrustboardError> {
    let catalog = state.catalog.safe_read()?;
    let entry = catalog
        .get(&id)
        .ok_or_else(|| TrustboardError::not_found("source", id.as_str()))?;

    let evidence = entry
        .evidence
        .iter()
        .map(|r| EvidenceView {
            id: r.id.clone(),
            kind: r.kind.clone(),
            confidence: r.confidence,
            label: r.label(),
            summary: r.summary.clone(),
        })
        .collect();

    Ok(Json(SourceDetailResponse {
        profile: entry.profile.clone(),
        badge: TrustBadge::for_score(entry.profile.trust_score),
        fill: fill_percent(entry.profile.trust_score),
        evidence,
        metrics: entry.radar.clone(),
        reasoning: entry.reasoning.clone(),
    }))
}

#[axum::debug_handler]
async fn compare_sources(
    Extension(state): Extension<Arc<AppState>>,
    Query(query): Query<CompareQuery>,
) -> Result<Json<CompareResponse>, TrustboardError> {
    let catalog = state.catalog.safe_read()?;
    let left = catalog
        .get(&query.a)
        .ok_or_else(|| TrustboardError::not_found("source", query.a.as_str()))?;
    let right = catalog
        .get(&query.b)
        .ok_or_else(|| TrustboardError::not_found("source", query.b.as_str()))?;

    let comparison = catalog.compare(&query.a, &query.b)?;
    let differential = comparison.differential();
    let rows = comparison
        .rows
        .iter()
        .map(|r| BadgedCompareRow {
            metric: r.metric.clone(),
            a: r.a,
            b: r.b,
            a_badge: TrustBadge::for_score(r.a),
            b_badge: TrustBadge::for_score(r.b),
        })
        .collect();

    Ok(Json(CompareResponse {
        source_a: comparison.source_a.clone(),
        source_b: comparison.source_b.clone(),
        rows,
        differential,
        summary: insight::comparison_summary(left, right),
    }))
}

async fn model_insights() -> Json<ModelInsightsResponse> {
    Json(ModelInsightsResponse {
        feature_importance: chart_data::feature_importance(),
        uncertainty: chart_data::uncertainty_histogram(),
        note: insight::model_overview(),
    })
}

#[axum::debug_handler]
async fn ask_insight(
    Extension(state): Extension<Arc<AppState>>,
    Json(req): Json<AskRequest>,
) -> Json<InsightReply> {
    Json(state.insight.ask(&req.prompt).await)
}

async fn healthz() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

async fn readyz(
    Extension(state): Extension<Arc<AppState>>,
) -> Result<Json<serde_json::Value>, TrustboardError> {
    let catalog = state.catalog.safe_read()?;
    Ok(Json(serde_json::json!({ "ready": !catalog.is_empty() })))
}
