use crate::palette::Palette;
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    pub bind_addr: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            bind_addr: "127.0.0.1:8085".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TrustConfig {
    /// Minimum acceptable trust for automation; sources under it raise alerts.
    pub automation_threshold: f64,
}

impl Default for TrustConfig {
    fn default() -> Self {
        TrustConfig {
            automation_threshold: 60.0,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FeedConfig {
    pub seed: u64,
    pub latency_ms: u64,
}

impl Default for FeedConfig {
    fn default() -> Self {
        FeedConfig {
            seed: 42,
            latency_ms: 300,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct InsightConfig {
    pub latency_ms: u64,
}

impl Default for InsightConfig {
    fn default() -> Self {
        InsightConfig { latency_ms: 400 }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct TrustboardConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub trust: TrustConfig,
    #[serde(default)]
    pub feed: FeedConfig,
    #[serde(default)]
    pub insight: InsightConfig,
    #[serde(default)]
    pub palette: Palette,
}

pub fn load_config(path: Option<&str>) -> Result<TrustboardConfig, figment::Error> {
    let figment = Figment::from(Serialized::defaults(TrustboardConfig::default()))
        .merge(Toml::file(path.unwrap_or("trustboard.toml")))
        .merge(Env::prefixed("TRUSTBOARD_").split("__"));

    let config: TrustboardConfig = figment.extract()?;

    if !(0.0..=100.0).contains(&config.trust.automation_threshold) {
        return Err(figment::Error::from(
            "trust.automation_threshold must be within 0..=100".to_string(),
        ));
    }

    Ok(config)
}
