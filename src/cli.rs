use crate::app_state::AppState;
use crate::boardweb::build_board_router;
use crate::config_loader::{load_config, TrustboardConfig};
use crate::insight::InsightEngine;
use crate::mock_feed::MockFeed;
use crate::trust_scale::TrustBadge;
use clap::{Parser, Subcommand};
use std::time::Duration;

/// Top-level CLI interface for trustboard
#[derive(Parser)]
#[command(
    name = "trustboard",
    version = "0.1.0",
    about = "Trust-score classification and dashboard service"
)]
pub struct Cli {
    /// Path to the configuration file (defaults to trustboard.toml)
    #[arg(short, long)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Serve the dashboard API
    Serve {
        /// Bind address override, e.g. 0.0.0.0:8085
        #[arg(short, long)]
        addr: Option<String>,
    },

    /// Classify a trust score (omit --score for the unknown case)
    Classify {
        #[arg(short, long)]
        score: Option<f64>,
    },

    /// List the seeded source catalog
    Sources,

    /// Ask the mock insight engine a question
    Ask { prompt: String },
}

pub fn run(cli: Cli) -> anyhow::Result<()> {
    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Serve { addr } => serve(config, addr),
        Commands::Classify { score } => {
            let badge = TrustBadge::for_score(score);
            println!("{}", serde_json::to_string_pretty(&badge)?);
            Ok(())
        }
        Commands::Sources => {
            let catalog = MockFeed::from_config(&config.feed).build_catalog();
            for source in catalog.list() {
                println!(
                    "{:<8} {:<10} {:>8}  {:<8} {}",
                    source.id,
                    source.name,
                    source.badge.label,
                    source.badge.tier,
                    source.category
                );
            }
            Ok(())
        }
        Commands::Ask { prompt } => {
            let engine = InsightEngine::new(Duration::from_millis(config.insight.latency_ms));
            let rt = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()?;
            let reply = rt.block_on(engine.ask(&prompt));
            println!("{}", reply.reply);
            Ok(())
        }
    }
}

fn serve(config: TrustboardConfig, addr: Option<String>) -> anyhow::Result<()> {
    let rt = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    rt.block_on(async move {
        let bind = addr.unwrap_or_else(|| config.server.bind_addr.clone());
        let state = AppState::bootstrap(config).await;
        let app = build_board_router(state);

        let socket_addr: std::net::SocketAddr = bind.parse()?;
        let listener = tokio::net::TcpListener::bind(socket_addr).await?;
        tracing::info!("HTTP server listening on http://{bind}");
        axum::serve(listener, app).await?;
        Ok(())
    })
}
