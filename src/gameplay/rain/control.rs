//! Effective rain rate and its clamping rule, shared by config, CLI and
//! interactive entry.

use bevy::prelude::*;

pub use crate::core::config::{MAX_RAIN_RATE, MIN_RAIN_RATE};

/// Ticks assumed per second when converting a rate into a spawn interval.
/// The simulation is frame-locked at this cadence.
pub const TICKS_PER_SECOND: f32 = 60.0;

pub const RATE_WARNING: &str = "Warning: Rain rate too high!";

#[derive(Resource, Debug, Clone, PartialEq)]
pub struct RainControl {
    rate: u32,
    pub warning: Option<String>,
}

impl Default for RainControl {
    fn default() -> Self {
        Self {
            rate: 5,
            warning: None,
        }
    }
}

impl RainControl {
    pub fn rate(&self) -> u32 {
        self.rate
    }

    /// Apply a requested rate: clamp to `MIN_RAIN_RATE..=MAX_RAIN_RATE`.
    /// The warning message is set iff the raw request exceeded the maximum;
    /// requests at or below zero clamp to the minimum silently.
    pub fn request(&mut self, raw: i64) {
        if raw > MAX_RAIN_RATE as i64 {
            self.rate = MAX_RAIN_RATE;
            self.warning = Some(RATE_WARNING.to_string());
            info!("rain rate {raw} clamped to {MAX_RAIN_RATE}");
        } else {
            self.rate = raw.max(MIN_RAIN_RATE as i64) as u32;
            self.warning = None;
            if raw < MIN_RAIN_RATE as i64 {
                info!("rain rate {raw} clamped to {MIN_RAIN_RATE}");
            }
        }
    }

    /// Ticks between spawns at the current rate (counter comparison is `>=`,
    /// so fractional intervals round up in practice).
    pub fn spawn_interval_ticks(&self) -> f32 {
        TICKS_PER_SECOND / self.rate as f32
    }
}
