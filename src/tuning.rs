//! Data-driven population parameters
//!
//! Everything the scatter pass draws from: how many bodies and which size and
//! speed ranges. Loaded from a JSON file when one is supplied, defaults
//! otherwise. Physics constants (pointer reach, push speed, mass factor) are
//! fixed in `crate::consts` and deliberately not tunable.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Population tuning knobs
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tuning {
    /// How many bodies to scatter
    pub body_count: usize,
    /// Body size range in pixels
    pub min_size: f32,
    pub max_size: f32,
    /// Initial speed range in pixels per tick
    pub min_speed: f32,
    pub max_speed: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            body_count: DEFAULT_BODY_COUNT,
            min_size: DEFAULT_MIN_SIZE,
            max_size: DEFAULT_MAX_SIZE,
            min_speed: DEFAULT_MIN_SPEED,
            max_speed: DEFAULT_MAX_SPEED,
        }
    }
}

impl Tuning {
    /// Ranges that scatter can actually sample from
    pub fn is_valid(&self) -> bool {
        self.min_size > 0.0
            && self.max_size >= self.min_size
            && self.min_speed >= 0.0
            && self.max_speed >= self.min_speed
            && self.max_size.is_finite()
            && self.max_speed.is_finite()
    }

    /// Load tuning from a JSON file, falling back to defaults on any failure
    pub fn load(path: &str) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str::<Tuning>(&json) {
                Ok(tuning) if tuning.is_valid() => {
                    log::info!("loaded tuning from {path}");
                    tuning
                }
                Ok(_) => {
                    log::warn!("tuning in {path} has unusable ranges, using defaults");
                    Self::default()
                }
                Err(err) => {
                    log::warn!("failed to parse {path}: {err}, using defaults");
                    Self::default()
                }
            },
            Err(err) => {
                log::warn!("failed to read {path}: {err}, using defaults");
                Self::default()
            }
        }
    }
}
