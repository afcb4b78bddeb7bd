use std::{collections::HashMap, fmt, str::FromStr};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

// ---------------------------------------------------------------------------
// AssetStatus
// ---------------------------------------------------------------------------

/// Operational status of a building asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetStatus {
    On,
    Off,
    Idle,
}

impl fmt::Display for AssetStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            AssetStatus::On => "on",
            AssetStatus::Off => "off",
            AssetStatus::Idle => "idle",
        };
        f.write_str(s)
    }
}

/// Rejected status value — only `"on"`, `"off"`, and `"idle"` are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid status {value:?}: must be one of 'on', 'off', 'idle'")]
pub struct InvalidStatus {
    pub value: String,
}

impl FromStr for AssetStatus {
    type Err = InvalidStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "on" => Ok(Self::On),
            "off" => Ok(Self::Off),
            "idle" => Ok(Self::Idle),
            other => Err(InvalidStatus {
                value: other.to_owned(),
            }),
        }
    }
}

// ---------------------------------------------------------------------------
// HvacAsset
// ---------------------------------------------------------------------------

/// In-memory model of one HVAC unit's configuration and last-known state.
///
/// All state changes go through the setter methods; each successful mutation
/// refreshes `last_updated`. The record is not internally synchronized — a
/// caller sharing it across threads must serialize access externally.
#[derive(Debug, Clone, Serialize)]
pub struct HvacAsset {
    asset_id: String,
    temperature_setpoint: f64,
    current_temperature: Option<f64>,
    status: AssetStatus,
    last_updated: Option<DateTime<Utc>>,
    /// Free-form asset information (manufacturer, model, location, ...).
    pub metadata: HashMap<String, serde_json::Value>,
}

impl HvacAsset {
    /// Default temperature setpoint in °C.
    pub const DEFAULT_SETPOINT: f64 = 21.0;

    /// Create an asset with the default 21.0 °C setpoint, status `off`, and
    /// no temperature reading yet.
    pub fn new(asset_id: impl Into<String>) -> Self {
        Self::with_setpoint(asset_id, Self::DEFAULT_SETPOINT)
    }

    /// Create an asset with an explicit setpoint.
    pub fn with_setpoint(asset_id: impl Into<String>, setpoint: f64) -> Self {
        Self {
            asset_id: asset_id.into(),
            temperature_setpoint: setpoint,
            current_temperature: None,
            status: AssetStatus::Off,
            last_updated: None,
            metadata: HashMap::new(),
        }
    }

    pub fn asset_id(&self) -> &str {
        &self.asset_id
    }

    pub fn temperature_setpoint(&self) -> f64 {
        self.temperature_setpoint
    }

    pub fn current_temperature(&self) -> Option<f64> {
        self.current_temperature
    }

    pub fn status(&self) -> AssetStatus {
        self.status
    }

    /// Instant of the last successful mutation; `None` until the first one.
    pub fn last_updated(&self) -> Option<DateTime<Utc>> {
        self.last_updated
    }

    /// Record a new temperature reading.
    ///
    /// Deliberately unvalidated: any `f64` is accepted, physically plausible
    /// or not. Callers that need bounds must check before calling.
    pub fn update_temperature(&mut self, value: f64) {
        self.current_temperature = Some(value);
        self.touch();
    }

    /// Set the operational status from its string form.
    ///
    /// Fails with [`InvalidStatus`] for anything outside `on`/`off`/`idle`
    /// (matching is case-sensitive); the record is untouched on failure.
    pub fn set_status(&mut self, value: &str) -> Result<(), InvalidStatus> {
        self.status = value.parse::<AssetStatus>()?;
        self.touch();
        Ok(())
    }

    /// Change the temperature setpoint. No bounds checking.
    pub fn set_setpoint(&mut self, value: f64) {
        self.temperature_setpoint = value;
        self.touch();
    }

    fn touch(&mut self) {
        self.last_updated = Some(Utc::now());
    }
}

impl fmt::Display for HvacAsset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "asset {}: setpoint {:.1} °C, current ",
            self.asset_id, self.temperature_setpoint
        )?;
        match self.current_temperature {
            Some(t) => write!(f, "{t:.1} °C")?,
            None => f.write_str("unset")?,
        }
        write!(f, ", status {}", self.status)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
