use anyhow::Result;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use smart_building_twin::{config::Config, simulator};

fn main() -> Result<()> {
    // Load .env (ignore error if file absent — env vars may be set externally)
    let _ = dotenvy::dotenv();

    // Initialise tracing
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    let config = Config::from_env()?;
    info!(
        sensors = config.sensor_ids.len(),
        rounds = config.rounds,
        "Generating demo batch"
    );

    let batch = simulator::generate_batch(&config.sensor_ids, config.rounds);
    for reading in &batch {
        println!("{}", serde_json::to_string_pretty(reading)?);
        println!("---");
    }

    info!(readings = batch.len(), "Demo batch complete");
    Ok(())
}
