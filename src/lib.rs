//! Library root for the `trustboard` crate
//!
//! Trust-score classification core plus the catalog, chart, insight, web,
//! and CLI layers a trust dashboard consumes.

// Core error handling
pub mod errors;

// Trust classification core
pub mod palette;
pub mod trust_scale;

// Catalog & mock data
pub mod chart_data;
pub mod mock_feed;
pub mod source_catalog;

// AI commentary mock
pub mod insight;

// Configuration & CLI
pub mod cli;
pub mod config_loader;

// Web server interface
pub mod boardweb;

// Shared state
pub mod app_state;

// Re-export the classification surface renderers consume
pub use errors::{TrustboardError, TrustboardResult};
pub use trust_scale::{
    classify, color_from_score, color_of, fill_percent, score_label, DisplayColor, TrustBadge,
    TrustTier,
};
