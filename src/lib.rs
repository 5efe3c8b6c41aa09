//! Tube Flap - a side-scrolling tube dodging arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, scrolling, scoring, collisions)
//! - `snapshot`: Per-frame view of the simulation for an external renderer
//! - `tuning`: Data-driven game balance
//! - `autopilot`: Idle/demo controller that plays the game

pub mod autopilot;
pub mod sim;
pub mod snapshot;
pub mod tuning;

pub use autopilot::Autopilot;
pub use snapshot::RenderSnapshot;
pub use tuning::{Tuning, TuningError};

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz, one frame)
    pub const SIM_DT: f32 = 1.0 / 60.0;

    /// Playfield dimensions
    pub const FIELD_WIDTH: f32 = 400.0;
    pub const FIELD_HEIGHT: f32 = 600.0;

    /// Ground strip along the bottom of the playfield
    pub const GROUND_Y: f32 = 550.0;
    pub const GROUND_HEIGHT: f32 = 50.0;

    /// Tube defaults
    pub const TUBE_WIDTH: f32 = 50.0;
    pub const TUBE_SPEED: f32 = 3.0;
    pub const TUBE_GAP: f32 = 150.0;
    /// Rim sticks out this far on both sides of the tube body
    pub const TUBE_LIP_OVERHANG: f32 = 6.0;
    /// Height of the rim across each tube mouth
    pub const TUBE_LIP_HEIGHT: f32 = 14.0;
    pub const TUBE_GAP_TOP_MIN: f32 = 100.0;
    pub const TUBE_GAP_TOP_MAX: f32 = 400.0;
    /// Tube slots on screen at once
    pub const TUBE_COUNT: usize = 3;
    pub const TUBE_SPAWN_X: [f32; TUBE_COUNT] = [600.0, 800.0, 1000.0];
    /// Where a tube reappears after scrolling off the left edge
    pub const TUBE_RECYCLE_X: f32 = 550.0;

    /// Bird defaults
    pub const BIRD_X: f32 = 50.0;
    pub const BIRD_SPAWN_Y: f32 = 400.0;
    pub const BIRD_SIZE: f32 = 35.0;
    pub const GRAVITY: f32 = 0.5;
    pub const FLAP_VELOCITY: f32 = -7.0;

    /// Tilt (degrees, positive = nose up)
    pub const TILT_PER_VELOCITY: f32 = 6.0;
    pub const TILT_MIN: f32 = -60.0;
    pub const TILT_MAX: f32 = 30.0;
    pub const TILT_SMOOTHING: f32 = 0.2;
}

/// Axis-aligned extent of a `width` x `height` box rotated by `degrees`
#[inline]
pub fn rotated_extent(width: f32, height: f32, degrees: f32) -> (f32, f32) {
    let (sin, cos) = degrees.to_radians().sin_cos();
    (
        width * cos.abs() + height * sin.abs(),
        width * sin.abs() + height * cos.abs(),
    )
}

/// Exponential smoothing step from `current` toward `target`
#[inline]
pub fn approach(current: f32, target: f32, factor: f32) -> f32 {
    current + (target - current) * factor
}
