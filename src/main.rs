use cursor_tracker::{run_tracker, TrackerConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting cursor-tracker v{}", env!("CARGO_PKG_VERSION"));

    run_tracker(TrackerConfig::default())
        .map_err(|e| anyhow::anyhow!("failed to run tracker window: {e}"))
}
