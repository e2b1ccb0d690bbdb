// Mindgauge backend entry point
// Heuristic mental-state assessment over an HTTP boundary

mod analysis;
mod api;
mod config;
mod database;
mod error;
mod models;
mod sentiment;
#[cfg(test)]
mod tests;

use std::sync::Arc;

use tracing::info;
use tracing_bunyan_formatter::{BunyanFormattingLayer, JsonStorageLayer};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::{EnvFilter, Registry};

use crate::analysis::MindAnalyzer;
use crate::api::AppState;
use crate::config::Config;
use crate::sentiment::HttpSentimentClient;

fn init_tracing() -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let formatting_layer = BunyanFormattingLayer::new("mindgauge".into(), std::io::stdout);
    let subscriber = Registry::default()
        .with(env_filter)
        .with(JsonStorageLayer)
        .with(formatting_layer);
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    init_tracing()?;

    let config = Config::from_env()?;

    let pool = database::init_db(&config.database_url()).await?;

    let oracle = Arc::new(HttpSentimentClient::new(
        &config.sentiment_url,
        config.sentiment_auth_token.clone(),
    )?);
    let analyzer = Arc::new(MindAnalyzer::new(oracle));

    let app = api::create_router(AppState { analyzer, pool });

    info!("Listening on {}", config.bind_addr);
    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
