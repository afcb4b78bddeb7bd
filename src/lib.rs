pub mod assets;
pub mod config;
pub mod simulator;

pub use assets::{AssetStatus, HvacAsset, InvalidStatus};
pub use simulator::models::{Reading, ReadingValue, SensorKind};
