//! Fixed timestep simulation tick
//!
//! Core game loop that advances simulation deterministically.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::collision::bird_collision;
use super::state::{GameEvent, GameState, draw_gap_top};
use crate::approach;
use crate::consts::SIM_DT;
use crate::snapshot::RenderSnapshot;

/// Input for a single tick, polled once per frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TickInput {
    #[default]
    None,
    /// Flap (space); restarts the run when game over
    Flap,
    /// Window closed / quit requested
    Quit,
}

/// Advance the game state by one step, drawing new gap tops from `rng`
///
/// `dt` is in seconds; movement constants are per 60 Hz frame and scale with
/// `dt / SIM_DT`. Tilt smoothing is applied once per call.
pub fn tick<R: Rng + ?Sized>(state: &mut GameState, input: TickInput, dt: f32, rng: &mut R) {
    state.events.clear();

    if !state.run.running {
        return;
    }

    let flapped = match input {
        TickInput::Quit => {
            state.run.running = false;
            log::info!("Quit requested at frame {}", state.frame);
            return;
        }
        TickInput::Flap => true,
        TickInput::None => false,
    };

    if flapped {
        if state.run.paused {
            state.reset(rng);
            state.bird.velocity = state.tuning.flap_velocity;
            state.events.push(GameEvent::Flapped);
            // The restart frame shows the spawn layout with the impulse queued
            return;
        }
        state.bird.velocity = state.tuning.flap_velocity;
        state.events.push(GameEvent::Flapped);
    }

    // Nothing moves until a flap restarts the run
    if state.run.paused {
        return;
    }

    state.frame += 1;
    let steps = dt / SIM_DT;
    let tuning = &state.tuning;

    // Bird physics; a flap replaces this frame's gravity
    let bird = &mut state.bird;
    if !flapped {
        bird.velocity += tuning.gravity * steps;
    }
    bird.y += bird.velocity * steps;

    // Tilt toward the velocity-derived target
    let target = (-bird.velocity * tuning.tilt_per_velocity).clamp(tuning.tilt_min, tuning.tilt_max);
    bird.angle = approach(bird.angle, target, tuning.tilt_smoothing);

    // Scroll, recycle off-screen tubes, then score
    for (i, tube) in state.tubes.iter_mut().enumerate() {
        tube.x -= state.tube_speed * steps;

        if tube.x < -tuning.tube_width {
            tube.x = tuning.tube_recycle_x;
            tube.gap_top = draw_gap_top(tuning, rng);
            tube.passed = false;
            log::debug!("Tube {} recycled with gap top {:.1}", i, tube.gap_top);
            state.events.push(GameEvent::TubeRecycled {
                tube: i,
                gap_top: tube.gap_top,
            });
        }

        if !tube.passed && tube.trailing_edge(tuning) <= tuning.bird_x {
            tube.passed = true;
            state.run.score += 1;
            log::debug!("Tube {} cleared, score {}", i, state.run.score);
            state.events.push(GameEvent::Scored {
                tube: i,
                score: state.run.score,
            });
        }
    }

    if let Some(barrier) = bird_collision(state) {
        state.run.paused = true;
        state.tube_speed = 0.0;
        state.bird.velocity = 0.0;
        log::info!(
            "Crashed into {:?} at frame {} with score {}",
            barrier,
            state.frame,
            state.run.score
        );
        state.events.push(GameEvent::Crashed {
            into: barrier,
            score: state.run.score,
        });
    }

    log::trace!(
        "frame {} bird y {:.2} v {:.2} angle {:.1}",
        state.frame,
        state.bird.y,
        state.bird.velocity,
        state.bird.angle
    );
}

impl GameState {
    /// Advance one step using the state's own seeded RNG and return what to draw
    pub fn advance(&mut self, input: TickInput, dt: f32) -> RenderSnapshot {
        let mut rng = self.take_rng();
        tick(self, input, dt, &mut rng);
        self.restore_rng(rng);
        RenderSnapshot::capture(self)
    }
}
