//! Collision detection between the bird and the playfield
//!
//! The bird's hitbox is the bounding box of its rotated sprite, so a steep
//! tilt makes it slightly larger than the upright sprite.

use serde::{Deserialize, Serialize};

use super::rect::Rect;
use super::state::GameState;

/// What the bird ran into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Barrier {
    /// Upper half of the tube in the given slot
    UpperTube(usize),
    /// Lower half of the tube in the given slot
    LowerTube(usize),
    Ground,
}

/// First barrier overlapping `hitbox`, checking tubes in slot order then the ground
pub fn first_hit(hitbox: &Rect, state: &GameState) -> Option<Barrier> {
    for (i, tube) in state.tubes.iter().enumerate() {
        if hitbox.intersects(&tube.upper_rect(&state.tuning)) {
            return Some(Barrier::UpperTube(i));
        }
        if hitbox.intersects(&tube.lower_rect(&state.tuning)) {
            return Some(Barrier::LowerTube(i));
        }
    }

    if hitbox.intersects(&state.ground_rect()) {
        return Some(Barrier::Ground);
    }

    None
}

/// Check the bird's current hitbox against every barrier
pub fn bird_collision(state: &GameState) -> Option<Barrier> {
    first_hit(&state.bird.hitbox(&state.tuning), state)
}
