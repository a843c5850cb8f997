use anyhow::Result;
use serde::Deserialize;
use std::path::Path;

use crate::attitude::Attitude;
use crate::geo::GeoPoint;

/// Scenario file: station positions, body attitude, and the sweep/grid
/// parameters. Every section is optional and falls back to the default
/// demo scenario.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct Scenario {
    pub transmitter: TransmitterConfig,
    pub receiver: ReceiverConfig,
    pub target: TargetConfig,
    pub attitude: Attitude,
    pub sweep: SweepConfig,
    pub grid: GridConfig,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct TransmitterConfig {
    pub latitude_deg: f64,
    pub longitude_deg: f64,
    pub altitude_m: f64,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ReceiverConfig {
    pub latitude_deg: f64,
    pub longitude_deg: f64,
    pub altitude_m: f64,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct TargetConfig {
    pub latitude_deg: f64,
    pub longitude_deg: f64,
    pub altitude_m: f64,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SweepConfig {
    pub start_ghz: f64,
    pub stop_ghz: f64,
    pub points: usize,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    pub azimuth_min_deg: f64,
    pub azimuth_max_deg: f64,
    pub azimuth_step_deg: f64,
    pub elevation_min_deg: f64,
    pub elevation_max_deg: f64,
    pub elevation_step_deg: f64,
    /// Grid reference frequency; when unset, the midpoint of the sweep band.
    pub freq_ghz: Option<f64>,
}

impl Default for TransmitterConfig {
    fn default() -> Self {
        Self {
            latitude_deg: 30.0,
            longitude_deg: -100.0,
            altitude_m: 100.0,
        }
    }
}

impl Default for ReceiverConfig {
    fn default() -> Self {
        Self {
            latitude_deg: 25.0,
            longitude_deg: -90.0,
            altitude_m: 100.0,
        }
    }
}

impl Default for TargetConfig {
    fn default() -> Self {
        Self {
            latitude_deg: 28.0,
            longitude_deg: -95.0,
            altitude_m: 10000.0,
        }
    }
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            start_ghz: 8.0,
            stop_ghz: 12.0,
            points: 40,
        }
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            azimuth_min_deg: -180.0,
            azimuth_max_deg: 180.0,
            azimuth_step_deg: 5.0,
            elevation_min_deg: -60.0,
            elevation_max_deg: 60.0,
            elevation_step_deg: 5.0,
            freq_ghz: None,
        }
    }
}

impl Scenario {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let scenario: Scenario = toml::from_str(&contents)?;
        Ok(scenario)
    }

    pub fn transmitter_point(&self) -> GeoPoint {
        GeoPoint::new(
            self.transmitter.latitude_deg,
            self.transmitter.longitude_deg,
            self.transmitter.altitude_m,
        )
    }

    pub fn receiver_point(&self) -> GeoPoint {
        GeoPoint::new(
            self.receiver.latitude_deg,
            self.receiver.longitude_deg,
            self.receiver.altitude_m,
        )
    }

    pub fn target_point(&self) -> GeoPoint {
        GeoPoint::new(
            self.target.latitude_deg,
            self.target.longitude_deg,
            self.target.altitude_m,
        )
    }

    pub fn grid_freq_ghz(&self) -> f64 {
        self.grid
            .freq_ghz
            .unwrap_or((self.sweep.start_ghz + self.sweep.stop_ghz) * 0.5)
    }
}

impl GridConfig {
    pub fn azimuths_deg(&self) -> Vec<f64> {
        step_range(
            self.azimuth_min_deg,
            self.azimuth_max_deg,
            self.azimuth_step_deg,
        )
    }

    pub fn elevations_deg(&self) -> Vec<f64> {
        step_range(
            self.elevation_min_deg,
            self.elevation_max_deg,
            self.elevation_step_deg,
        )
    }
}

// Inclusive range with a fixed step; a non-positive step yields just the
// start value instead of looping forever.
fn step_range(start: f64, stop: f64, step: f64) -> Vec<f64> {
    let mut values = Vec::new();
    if step <= 0.0 {
        values.push(start);
        return values;
    }
    let mut v = start;
    while v <= stop {
        values.push(v);
        v += step;
    }
    values
}
