pub mod clock;
pub mod models;

use std::collections::BTreeMap;

use rand::Rng;
use tracing::debug;

use self::clock::{Clock, SystemClock};
use self::models::{Reading, ReadingValue, SensorKind};

/// Draw one simulated reading for `sensor_id`.
///
/// The sensor kind is inferred from the ID prefix; the value is drawn
/// uniformly from the kind's range:
///
/// | prefix   | value range        | rounding   | unit    |
/// |----------|--------------------|------------|---------|
/// | `temp_`  | 18.0–25.0 °C       | 1 decimal  | celsius |
/// | `humid_` | 30.0–70.0 %RH      | 1 decimal  | percent |
/// | `occ_`   | 0 or 1             | —          | boolean |
/// | `light_` | 0–1000 lux         | —          | lux     |
/// | `co2_`   | 400–1500 ppm       | —          | ppm     |
/// | (none)   | 0.0–100.0          | 2 decimals | unknown |
///
/// Uses the system clock and the thread-local RNG; see [`generate_with`]
/// for the injectable variant.
pub fn generate(sensor_id: &str) -> Reading {
    generate_with(sensor_id, &SystemClock, &mut rand::rng())
}

/// [`generate`] with the clock and randomness source passed in, so tests
/// can substitute a fixed instant and a seeded RNG.
pub fn generate_with<C, R>(sensor_id: &str, clock: &C, rng: &mut R) -> Reading
where
    C: Clock,
    R: Rng + ?Sized,
{
    let kind = SensorKind::classify(sensor_id);
    let metadata = BTreeMap::from([(
        "sensor_type".to_owned(),
        serde_json::Value::from(kind.sensor_type()),
    )]);

    Reading {
        sensor_id: sensor_id.to_owned(),
        timestamp: clock.now(),
        value: sample_value(kind, rng),
        unit: kind.unit().to_owned(),
        metadata,
    }
}

/// Generate `count` rounds of readings, one per sensor ID per round.
///
/// Output is round-major: every ID's round-1 reading precedes every ID's
/// round-2 reading. Total length is `count * sensor_ids.len()`; an empty ID
/// list or `count == 0` yields an empty vec.
pub fn generate_batch<S: AsRef<str>>(sensor_ids: &[S], count: usize) -> Vec<Reading> {
    generate_batch_with(sensor_ids, count, &SystemClock, &mut rand::rng())
}

/// [`generate_batch`] with injected clock and RNG.
pub fn generate_batch_with<S, C, R>(
    sensor_ids: &[S],
    count: usize,
    clock: &C,
    rng: &mut R,
) -> Vec<Reading>
where
    S: AsRef<str>,
    C: Clock,
    R: Rng + ?Sized,
{
    let mut readings = Vec::with_capacity(count * sensor_ids.len());
    for _ in 0..count {
        for id in sensor_ids {
            readings.push(generate_with(id.as_ref(), clock, rng));
        }
    }

    debug!(
        sensors = sensor_ids.len(),
        rounds = count,
        readings = readings.len(),
        "Generated reading batch"
    );
    readings
}

/// Uniform draw from the kind's value range, rounded per the table above.
fn sample_value<R: Rng + ?Sized>(kind: SensorKind, rng: &mut R) -> ReadingValue {
    match kind {
        SensorKind::Temperature => ReadingValue::Float(round1(rng.random_range(18.0..=25.0))),
        SensorKind::Humidity => ReadingValue::Float(round1(rng.random_range(30.0..=70.0))),
        SensorKind::Occupancy => ReadingValue::Integer(rng.random_range(0..=1)),
        SensorKind::Illuminance => ReadingValue::Integer(rng.random_range(0..=1000)),
        SensorKind::Co2 => ReadingValue::Integer(rng.random_range(400..=1500)),
        SensorKind::Generic => ReadingValue::Float(round2(rng.random_range(0.0..=100.0))),
    }
}

fn round1(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
