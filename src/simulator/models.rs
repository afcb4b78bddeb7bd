use std::{collections::BTreeMap, fmt};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// SensorKind
// ---------------------------------------------------------------------------

/// Sensor classification inferred from the ID's naming convention.
///
/// `classify` checks the known prefixes in declaration order and the first
/// match wins; anything unrecognized — including the empty string — is
/// `Generic`, never an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SensorKind {
    Temperature,
    Humidity,
    Occupancy,
    Illuminance,
    Co2,
    Generic,
}

/// Prefix → kind table, in match-priority order.
const PREFIXES: [(&str, SensorKind); 5] = [
    ("temp_", SensorKind::Temperature),
    ("humid_", SensorKind::Humidity),
    ("occ_", SensorKind::Occupancy),
    ("light_", SensorKind::Illuminance),
    ("co2_", SensorKind::Co2),
];

impl SensorKind {
    pub fn classify(sensor_id: &str) -> Self {
        PREFIXES
            .iter()
            .find(|(prefix, _)| sensor_id.starts_with(prefix))
            .map(|&(_, kind)| kind)
            .unwrap_or(SensorKind::Generic)
    }

    /// Physical-unit tag attached to readings of this kind.
    pub fn unit(&self) -> &'static str {
        match self {
            SensorKind::Temperature => "celsius",
            SensorKind::Humidity => "percent",
            SensorKind::Occupancy => "boolean",
            SensorKind::Illuminance => "lux",
            SensorKind::Co2 => "ppm",
            SensorKind::Generic => "unknown",
        }
    }

    /// `sensor_type` tag written into reading metadata.
    pub fn sensor_type(&self) -> &'static str {
        match self {
            SensorKind::Temperature => "temperature",
            SensorKind::Humidity => "humidity",
            SensorKind::Occupancy => "occupancy",
            SensorKind::Illuminance => "illuminance",
            SensorKind::Co2 => "co2",
            SensorKind::Generic => "generic",
        }
    }
}

impl fmt::Display for SensorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.sensor_type())
    }
}

// ---------------------------------------------------------------------------
// ReadingValue — bare-number value of a simulated reading
//
// A batch mixes continuous readings (temperature, humidity, generic) with
// discrete ones (occupancy, illuminance, CO2). #[serde(untagged)] keeps the
// wire form a bare JSON number either way. Integer MUST come before Float —
// whole-number values like a 0/1 occupancy flag would otherwise deserialize
// as floats.
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ReadingValue {
    Integer(i64),
    Float(f64),
}

impl ReadingValue {
    /// Numeric view of the value regardless of variant.
    pub fn as_f64(&self) -> f64 {
        match self {
            ReadingValue::Integer(v) => *v as f64,
            ReadingValue::Float(v) => *v,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            ReadingValue::Integer(v) => Some(*v),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Reading
// ---------------------------------------------------------------------------

/// One simulated sensor reading.
///
/// The serde form of this struct is the data-interchange contract: a flat
/// JSON object with keys `sensor_id`, `timestamp`, `value`, `unit`, and
/// `metadata`. `timestamp` serializes as RFC3339 UTC with a trailing `Z`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    pub sensor_id: String,
    pub timestamp: DateTime<Utc>,
    pub value: ReadingValue,
    pub unit: String,
    /// Contains at least `sensor_type`.
    pub metadata: BTreeMap<String, serde_json::Value>,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    // --- SensorKind ---------------------------------------------------------

    #[test]
    fn classify_maps_each_known_prefix() {
        assert_eq!(SensorKind::classify("temp_zone_101"), SensorKind::Temperature);
        assert_eq!(SensorKind::classify("humid_zone_101"), SensorKind::Humidity);
        assert_eq!(SensorKind::classify("occ_room_202"), SensorKind::Occupancy);
        assert_eq!(SensorKind::classify("light_lobby"), SensorKind::Illuminance);
        assert_eq!(SensorKind::classify("co2_floor_3"), SensorKind::Co2);
    }

    #[test]
    fn classify_falls_through_to_generic() {
        assert_eq!(SensorKind::classify("pressure_01"), SensorKind::Generic);
        assert_eq!(SensorKind::classify(""), SensorKind::Generic);
        // Prefix must match at the start, not merely appear in the ID.
        assert_eq!(SensorKind::classify("zone_temp_101"), SensorKind::Generic);
        // A bare prefix with nothing after it still classifies.
        assert_eq!(SensorKind::classify("temp_"), SensorKind::Temperature);
    }

    #[test]
    fn unit_and_sensor_type_tags_match_table() {
        let expected = [
            (SensorKind::Temperature, "celsius", "temperature"),
            (SensorKind::Humidity, "percent", "humidity"),
            (SensorKind::Occupancy, "boolean", "occupancy"),
            (SensorKind::Illuminance, "lux", "illuminance"),
            (SensorKind::Co2, "ppm", "co2"),
            (SensorKind::Generic, "unknown", "generic"),
        ];
        for (kind, unit, sensor_type) in expected {
            assert_eq!(kind.unit(), unit);
            assert_eq!(kind.sensor_type(), sensor_type);
        }
    }

    // --- ReadingValue -------------------------------------------------------

    #[test]
    fn value_serializes_as_bare_number() {
        assert_eq!(serde_json::to_value(ReadingValue::Float(22.5)).unwrap(), json!(22.5));
        assert_eq!(serde_json::to_value(ReadingValue::Integer(1)).unwrap(), json!(1));
    }

    #[test]
    fn whole_numbers_deserialize_as_integers() {
        let v: ReadingValue = serde_json::from_str("1").unwrap();
        assert_eq!(v, ReadingValue::Integer(1));
        let v: ReadingValue = serde_json::from_str("650.75").unwrap();
        assert_eq!(v, ReadingValue::Float(650.75));
    }

    #[test]
    fn as_f64_covers_both_variants() {
        assert_eq!(ReadingValue::Integer(420).as_f64(), 420.0);
        assert_eq!(ReadingValue::Float(19.5).as_f64(), 19.5);
        assert_eq!(ReadingValue::Integer(420).as_i64(), Some(420));
        assert_eq!(ReadingValue::Float(19.5).as_i64(), None);
    }

    // --- Reading ------------------------------------------------------------

    #[test]
    fn reading_serializes_flat_with_all_contract_keys() {
        let reading = Reading {
            sensor_id: "temp_zone_101".to_owned(),
            timestamp: "2025-01-15T14:30:00Z".parse().unwrap(),
            value: ReadingValue::Float(22.5),
            unit: "celsius".to_owned(),
            metadata: [("sensor_type".to_owned(), json!("temperature"))].into(),
        };

        let v = serde_json::to_value(&reading).unwrap();
        assert_eq!(
            v,
            json!({
                "sensor_id": "temp_zone_101",
                "timestamp": "2025-01-15T14:30:00Z",
                "value": 22.5,
                "unit": "celsius",
                "metadata": { "sensor_type": "temperature" }
            })
        );
    }

    #[test]
    fn reading_timestamp_uses_z_suffix_not_offset() {
        let reading = Reading {
            sensor_id: "occ_room_202".to_owned(),
            timestamp: "2025-01-15T14:30:00.123456Z".parse().unwrap(),
            value: ReadingValue::Integer(1),
            unit: "boolean".to_owned(),
            metadata: [("sensor_type".to_owned(), json!("occupancy"))].into(),
        };

        let v = serde_json::to_value(&reading).unwrap();
        let ts = v["timestamp"].as_str().unwrap();
        assert!(ts.ends_with('Z'), "timestamp was {ts:?}");
        assert!(!ts.contains("+00:00"), "timestamp was {ts:?}");
    }

    #[test]
    fn reading_roundtrips_through_json() {
        let reading = Reading {
            sensor_id: "co2_floor_3".to_owned(),
            timestamp: "2025-01-15T14:30:00Z".parse().unwrap(),
            value: ReadingValue::Integer(850),
            unit: "ppm".to_owned(),
            metadata: [("sensor_type".to_owned(), json!("co2"))].into(),
        };

        let json = serde_json::to_string(&reading).unwrap();
        let back: Reading = serde_json::from_str(&json).unwrap();
        assert_eq!(back, reading);
    }
}
