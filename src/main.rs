//! Demo session driver for the EcoCitizen engine.
//!
//! Runs one short headless session: starts the periodic refresh, logs a few
//! activities, redeems a reward, and dumps the resulting state snapshot as
//! JSON before tearing the session down.

use color_eyre::Result;
use ecocitizen::{Engine, EngineConfig, SimulatedMetricsSource};
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let (handle, join) = Engine::spawn(SimulatedMetricsSource::new(), EngineConfig::default());
    handle.start_refresh().await?;

    handle.set_active_view("activities").await?;
    for label in ["Recycling", "Tree Planting", "Energy Usage"] {
        let awarded = handle.log_activity(label).await?;
        info!(label, awarded, "logged activity");
    }

    handle.set_active_view("rewards").await?;
    handle.redeem_reward("Free Bus Pass")?;

    // Let one refresh tick land before dumping the state.
    tokio::time::sleep(Duration::from_millis(5500)).await;

    let snapshot = handle.state();
    println!("{}", serde_json::to_string_pretty(&snapshot)?);

    handle.stop_refresh().await?;
    handle.shutdown();
    join.await?;
    Ok(())
}
