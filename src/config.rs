use anyhow::{Context, Result};

/// Demo-batch settings, read from the environment.
#[derive(Debug, Clone)]
pub struct Config {
    /// Sensor IDs to simulate, in batch order.
    /// Format: comma-separated list (e.g. `"temp_zone_101,occ_room_202"`).
    pub sensor_ids: Vec<String>,
    /// Number of rounds to generate per sensor.
    pub rounds: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            sensor_ids: parse_sensor_ids(&optional(
                "SIM_SENSOR_IDS",
                "temp_zone_101,humid_zone_101,occ_room_202,light_lobby",
            )),
            rounds: optional("SIM_ROUNDS", "2")
                .parse()
                .context("SIM_ROUNDS must be a non-negative integer")?,
        })
    }
}

/// Parse `"id1,id2"` into a list, trimming whitespace and skipping empty
/// entries.
fn parse_sensor_ids(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
        .collect()
}

fn optional(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_owned())
}
