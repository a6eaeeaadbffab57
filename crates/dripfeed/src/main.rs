//! dripfeed: posts the scheduled entry for the current time slot to a
//! Telegram channel, at most once per slot per day.
//!
//! One invocation is one run. An external scheduler (cron or similar) is
//! expected to trigger it periodically; the binary itself never loops.

use std::sync::Arc;

use clap::Parser;
use miette::Result;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use dripfeed::config::Config;
use dripfeed::run::Poster;
use dripfeed_gcs::{GcsClient, ServiceAccountTokenProvider};
use dripfeed_telegram::TelegramClient;

#[tokio::main]
async fn main() -> Result<()> {
    // Pick up a local .env if present; deployments set the environment directly.
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "dripfeed=info".to_string()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::parse();

    let token = ServiceAccountTokenProvider::from_key_json(&config.gcs_key_json)
        .await
        .map_err(|e| miette::miette!("failed to build GCS credentials: {}", e))?;
    let gcs = GcsClient::new(config.bucket, Arc::new(token));
    let telegram = TelegramClient::new(config.telegram_token, config.channel_id);

    let poster = Poster::new(gcs, telegram, config.content_object);

    match poster.run().await {
        Ok(outcome) => {
            info!(?outcome, "run finished");
            Ok(())
        }
        Err(e) => {
            error!(error = %e, "run failed");
            Err(miette::miette!("{}", e))
        }
    }
}
