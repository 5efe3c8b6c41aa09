//! Data-driven game balance
//!
//! Every gameplay constant lives in [`Tuning`]. The defaults come from
//! [`crate::consts`]; a JSON file may override any subset of them.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Errors from loading or validating a tuning file
#[derive(Error, Debug)]
pub enum TuningError {
    /// The file could not be read
    #[error("failed to read tuning file: {0}")]
    Io(#[from] std::io::Error),

    /// The file is not valid tuning JSON
    #[error("failed to parse tuning JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// A value is out of range or inconsistent with another
    #[error("invalid tuning: {field} {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

/// Gameplay constants (all distances in playfield units, per 60 Hz frame)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub field_width: f32,
    pub field_height: f32,
    pub ground_y: f32,

    pub gravity: f32,
    /// Velocity set by a flap (negative = upward)
    pub flap_velocity: f32,

    pub tube_speed: f32,
    pub tube_width: f32,
    pub tube_gap: f32,
    pub tube_lip_overhang: f32,
    pub tube_lip_height: f32,
    pub gap_top_min: f32,
    pub gap_top_max: f32,
    pub tube_spawn_x: [f32; TUBE_COUNT],
    pub tube_recycle_x: f32,

    pub bird_x: f32,
    pub bird_spawn_y: f32,
    pub bird_size: f32,

    pub tilt_per_velocity: f32,
    pub tilt_min: f32,
    pub tilt_max: f32,
    /// Fraction of the remaining tilt closed each frame
    pub tilt_smoothing: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            field_width: FIELD_WIDTH,
            field_height: FIELD_HEIGHT,
            ground_y: GROUND_Y,

            gravity: GRAVITY,
            flap_velocity: FLAP_VELOCITY,

            tube_speed: TUBE_SPEED,
            tube_width: TUBE_WIDTH,
            tube_gap: TUBE_GAP,
            tube_lip_overhang: TUBE_LIP_OVERHANG,
            tube_lip_height: TUBE_LIP_HEIGHT,
            gap_top_min: TUBE_GAP_TOP_MIN,
            gap_top_max: TUBE_GAP_TOP_MAX,
            tube_spawn_x: TUBE_SPAWN_X,
            tube_recycle_x: TUBE_RECYCLE_X,

            bird_x: BIRD_X,
            bird_spawn_y: BIRD_SPAWN_Y,
            bird_size: BIRD_SIZE,

            tilt_per_velocity: TILT_PER_VELOCITY,
            tilt_min: TILT_MIN,
            tilt_max: TILT_MAX,
            tilt_smoothing: TILT_SMOOTHING,
        }
    }
}

impl Tuning {
    /// Parse and validate tuning JSON; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Load and validate a tuning file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TuningError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)?;
        let tuning = Self::from_json(&json)?;
        log::info!("Loaded tuning from {}", path.display());
        Ok(tuning)
    }

    pub fn to_json(&self) -> Result<String, TuningError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<(), TuningError> {
        let invalid = |field, reason| Err(TuningError::Invalid { field, reason });

        let all = [
            self.field_width,
            self.field_height,
            self.ground_y,
            self.gravity,
            self.flap_velocity,
            self.tube_speed,
            self.tube_width,
            self.tube_gap,
            self.tube_lip_overhang,
            self.tube_lip_height,
            self.gap_top_min,
            self.gap_top_max,
            self.tube_recycle_x,
            self.bird_x,
            self.bird_spawn_y,
            self.bird_size,
            self.tilt_per_velocity,
            self.tilt_min,
            self.tilt_max,
            self.tilt_smoothing,
        ];
        if all.iter().chain(self.tube_spawn_x.iter()).any(|v| !v.is_finite()) {
            return invalid("values", "must be finite");
        }

        if self.field_width <= 0.0 || self.field_height <= 0.0 {
            return invalid("field", "must have positive size");
        }
        if self.ground_y <= 0.0 || self.ground_y > self.field_height {
            return invalid("ground_y", "must lie inside the field");
        }
        if self.flap_velocity >= 0.0 {
            return invalid("flap_velocity", "must be negative (upward)");
        }
        if self.tube_speed < 0.0 {
            return invalid("tube_speed", "must not be negative");
        }
        if self.tube_width <= 0.0 {
            return invalid("tube_width", "must be positive");
        }
        if self.tube_gap <= 0.0 {
            return invalid("tube_gap", "must be positive");
        }
        if self.tube_lip_overhang < 0.0 {
            return invalid("tube_lip_overhang", "must not be negative");
        }
        if self.tube_lip_height < 0.0 || self.tube_lip_height > self.tube_gap {
            return invalid("tube_lip_height", "must be within 0..=tube_gap");
        }
        if self.gap_top_min < 0.0 || self.gap_top_min > self.gap_top_max {
            return invalid("gap_top_min", "must be within 0..=gap_top_max");
        }
        if self.gap_top_max + self.tube_gap > self.field_height {
            return invalid("gap_top_max", "leaves no room for the gap");
        }
        if self.bird_size <= 0.0 {
            return invalid("bird_size", "must be positive");
        }
        if self.tilt_min > 0.0 || self.tilt_max < 0.0 {
            return invalid("tilt", "range must contain 0");
        }
        if self.tilt_smoothing <= 0.0 || self.tilt_smoothing > 1.0 {
            return invalid("tilt_smoothing", "must be in (0, 1]");
        }
        Ok(())
    }
}
