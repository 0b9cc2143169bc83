//! Delve Player - composition root binary.

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use delve_player::config::PlayerConfig;
use delve_player::infrastructure::{ApiAdapter, SystemRandom};
use delve_player::runner::{self, RunnerDeps};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "delve_player=info".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = PlayerConfig::from_env()?;
    tracing::info!(
        api = %config.api_base_url,
        timeout_ms = config.request_timeout_ms,
        "Starting Delve Player"
    );

    let deps = RunnerDeps {
        raw_api: Arc::new(ApiAdapter::from_config(&config)),
        rng: Arc::new(SystemRandom::new()),
        config,
    };
    let mut controller = deps.into_controller();

    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    runner::run(&mut controller, stdin, tokio::io::stdout()).await?;
    Ok(())
}
