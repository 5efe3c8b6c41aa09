//! Idle/demo mode - an AI that plays the game
//!
//! Steers for the middle of the next tube's gap the bird has not cleared yet.
//! It is good enough for attract screens and soak runs, not perfect play.

use crate::sim::{GameState, TickInput};

/// Flap-deciding controller; holds no state between frames besides its tuning
#[derive(Debug, Clone)]
pub struct Autopilot {
    /// Flap once the bird is this far below the aim point
    pub slack: f32,
    /// Restart automatically after a crash
    pub restart: bool,
}

impl Default for Autopilot {
    fn default() -> Self {
        Self {
            slack: 12.0,
            restart: true,
        }
    }
}

impl Autopilot {
    /// Height the bird's top edge should hold right now
    pub fn aim_y(&self, state: &GameState) -> f32 {
        let tuning = &state.tuning;
        let next = state
            .tubes
            .iter()
            .filter(|t| t.trailing_edge(tuning) + tuning.tube_lip_overhang >= tuning.bird_x)
            .min_by(|a, b| a.x.total_cmp(&b.x));

        match next {
            // Keep the sprite's centre on the gap's centre
            Some(tube) => tube.gap_center(tuning) - tuning.bird_size / 2.0,
            None => tuning.bird_spawn_y,
        }
    }

    /// Pick this frame's input
    pub fn decide(&self, state: &GameState) -> TickInput {
        if state.is_game_over() {
            return if self.restart {
                TickInput::Flap
            } else {
                TickInput::None
            };
        }

        let bird = &state.bird;
        let below_aim = bird.y > self.aim_y(state) + self.slack;
        let falling = bird.velocity > 0.0;
        if below_aim && falling {
            TickInput::Flap
        } else {
            TickInput::None
        }
    }
}
