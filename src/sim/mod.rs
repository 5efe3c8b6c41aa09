//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded or injected RNG only
//! - Stable iteration order (by tube slot)
//! - No rendering or platform dependencies

pub mod collision;
pub mod rect;
pub mod state;
pub mod tick;

pub use collision::{Barrier, bird_collision, first_hit};
pub use rect::Rect;
pub use state::{Bird, GameEvent, GamePhase, GameState, RunState, TUBE_COUNT, Tube};
pub use tick::{TickInput, tick};
