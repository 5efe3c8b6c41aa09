//! Game state and core simulation types
//!
//! Everything the simulation mutates lives in [`GameState`]; nothing is global.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::Barrier;
use super::rect::Rect;
use crate::tuning::{Tuning, TuningError};

pub use crate::consts::TUBE_COUNT;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Run ended; waiting for a flap to restart
    GameOver,
}

/// A tube: upper and lower barrier separated by a fixed gap
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tube {
    /// Left edge of the tube body
    pub x: f32,
    /// Height of the upper barrier (top of the gap)
    pub gap_top: f32,
    /// Already scored this pass cycle
    pub passed: bool,
}

impl Tube {
    pub fn new(x: f32, gap_top: f32) -> Self {
        Self {
            x,
            gap_top,
            passed: false,
        }
    }

    /// Right edge of the tube body
    #[inline]
    pub fn trailing_edge(&self, tuning: &Tuning) -> f32 {
        self.x + tuning.tube_width
    }

    /// Rim across the tube mouth, wider than the body on both sides
    fn lip_rect(&self, tuning: &Tuning, y: f32) -> Rect {
        Rect::new(
            self.x - tuning.tube_lip_overhang,
            y,
            tuning.tube_width + 2.0 * tuning.tube_lip_overhang,
            tuning.tube_lip_height,
        )
    }

    /// Upper barrier: body from the top of the field to the gap, rim at the bottom
    pub fn upper_rect(&self, tuning: &Tuning) -> Rect {
        let body = Rect::new(self.x, 0.0, tuning.tube_width, self.gap_top);
        let lip = self.lip_rect(tuning, self.gap_top - tuning.tube_lip_height);
        body.union(&lip)
    }

    /// Lower barrier: rim on top, body down to the bottom of the field
    pub fn lower_rect(&self, tuning: &Tuning) -> Rect {
        let top = self.gap_top + tuning.tube_gap;
        let body = Rect::new(self.x, top, tuning.tube_width, tuning.field_height - top);
        let lip = self.lip_rect(tuning, top);
        body.union(&lip)
    }

    /// Vertical centre of the gap
    pub fn gap_center(&self, tuning: &Tuning) -> f32 {
        self.gap_top + tuning.tube_gap / 2.0
    }
}

/// The player's bird
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bird {
    /// Top edge of the sprite
    pub y: f32,
    /// Vertical velocity (positive = falling)
    pub velocity: f32,
    /// Visual tilt in degrees (positive = nose up)
    pub angle: f32,
}

impl Bird {
    pub fn spawn(tuning: &Tuning) -> Self {
        Self {
            y: tuning.bird_spawn_y,
            velocity: 0.0,
            angle: 0.0,
        }
    }

    /// Sprite centre, snapped to whole units like the sprite blit
    pub fn center(&self, tuning: &Tuning) -> Vec2 {
        let half = (tuning.bird_size / 2.0).floor();
        Vec2::new(tuning.bird_x + half, self.y.trunc() + half)
    }

    /// Bounds of the sprite rotated by the current tilt, on whole units
    pub fn hitbox(&self, tuning: &Tuning) -> Rect {
        Rect::rotated_bounds(
            self.center(tuning),
            tuning.bird_size,
            tuning.bird_size,
            self.angle,
        )
    }
}

/// Score and run flags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunState {
    pub score: u32,
    /// Cleared by a quit request
    pub running: bool,
    /// Set on collision, cleared on reset
    pub paused: bool,
}

impl Default for RunState {
    fn default() -> Self {
        Self {
            score: 0,
            running: true,
            paused: false,
        }
    }
}

/// Things that happened during one step, for sound/log hooks in the driver
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    Flapped,
    Scored { tube: usize, score: u32 },
    TubeRecycled { tube: usize, gap_top: f32 },
    Crashed { into: Barrier, score: u32 },
    Reset,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub tuning: Tuning,
    /// Simulation frame counter
    pub frame: u64,
    pub bird: Bird,
    pub tubes: [Tube; TUBE_COUNT],
    pub run: RunState,
    /// Current scroll speed (zero while game over)
    pub tube_speed: f32,
    /// Events from the most recent step
    pub events: Vec<GameEvent>,
    rng: Pcg32,
}

impl GameState {
    /// Create a new game with default tuning
    pub fn new(seed: u64) -> Self {
        Self::build(seed, Tuning::default())
    }

    /// Create a new game; tube gaps are drawn from a PCG stream seeded with `seed`
    pub fn with_tuning(seed: u64, tuning: Tuning) -> Result<Self, TuningError> {
        tuning.validate()?;
        Ok(Self::build(seed, tuning))
    }

    fn build(seed: u64, tuning: Tuning) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let tubes = spawn_tubes(&tuning, &mut rng);
        Self {
            seed,
            bird: Bird::spawn(&tuning),
            tubes,
            run: RunState::default(),
            tube_speed: tuning.tube_speed,
            frame: 0,
            events: Vec::new(),
            tuning,
            rng,
        }
    }

    pub fn phase(&self) -> GamePhase {
        if self.run.paused {
            GamePhase::GameOver
        } else {
            GamePhase::Playing
        }
    }

    pub fn is_game_over(&self) -> bool {
        self.run.paused
    }

    pub fn score(&self) -> u32 {
        self.run.score
    }

    /// Reinitialise bird, tubes and score in place and clear the pause
    pub fn reset<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.bird = Bird::spawn(&self.tuning);
        self.tubes = spawn_tubes(&self.tuning, rng);
        self.run.score = 0;
        self.run.paused = false;
        self.tube_speed = self.tuning.tube_speed;
        self.events.push(GameEvent::Reset);
        log::info!("Run reset (seed {}, frame {})", self.seed, self.frame);
    }

    /// Ground strip along the bottom of the field
    pub fn ground_rect(&self) -> Rect {
        Rect::new(
            0.0,
            self.tuning.ground_y,
            self.tuning.field_width,
            self.tuning.field_height - self.tuning.ground_y,
        )
    }

    /// All six barriers, tube by tube (upper then lower)
    pub fn barrier_rects(&self) -> [Rect; TUBE_COUNT * 2] {
        let mut rects = [Rect::new(0.0, 0.0, 0.0, 0.0); TUBE_COUNT * 2];
        for (i, tube) in self.tubes.iter().enumerate() {
            rects[i * 2] = tube.upper_rect(&self.tuning);
            rects[i * 2 + 1] = tube.lower_rect(&self.tuning);
        }
        rects
    }

    /// Take the state's own RNG out for a step that also borrows `self`
    pub(crate) fn take_rng(&mut self) -> Pcg32 {
        std::mem::replace(&mut self.rng, Pcg32::seed_from_u64(self.seed))
    }

    pub(crate) fn restore_rng(&mut self, rng: Pcg32) {
        self.rng = rng;
    }
}

pub(crate) fn draw_gap_top<R: Rng + ?Sized>(tuning: &Tuning, rng: &mut R) -> f32 {
    rng.random_range(tuning.gap_top_min..=tuning.gap_top_max)
}

fn spawn_tubes<R: Rng + ?Sized>(tuning: &Tuning, rng: &mut R) -> [Tube; TUBE_COUNT] {
    tuning
        .tube_spawn_x
        .map(|x| Tube::new(x, draw_gap_top(tuning, rng)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;

    #[test]
    fn test_new_state() {
        let state = GameState::new(12345);
        assert_eq!(state.phase(), GamePhase::Playing);
        assert_eq!(state.score(), 0);
        assert!(state.run.running);
        assert_eq!(state.bird.y, BIRD_SPAWN_Y);
        assert_eq!(state.bird.velocity, 0.0);
        assert_eq!(state.tube_speed, TUBE_SPEED);

        for (tube, x) in state.tubes.iter().zip(TUBE_SPAWN_X) {
            assert_eq!(tube.x, x);
            assert!(!tube.passed);
            assert!((TUBE_GAP_TOP_MIN..=TUBE_GAP_TOP_MAX).contains(&tube.gap_top));
        }
    }

    #[test]
    fn test_same_seed_same_tubes() {
        let a = GameState::new(7);
        let b = GameState::new(7);
        assert_eq!(a.tubes, b.tubes);
    }

    #[test]
    fn test_barrier_geometry() {
        let tuning = Tuning::default();
        let tube = Tube::new(200.0, 150.0);

        let upper = tube.upper_rect(&tuning);
        assert_eq!(upper, Rect::new(194.0, 0.0, 62.0, 150.0));

        let lower = tube.lower_rect(&tuning);
        assert_eq!(lower, Rect::new(194.0, 300.0, 62.0, 300.0));

        // The gap between them is exactly the tuned height
        assert_eq!(lower.y - upper.bottom(), TUBE_GAP);
        assert_eq!(tube.gap_center(&tuning), 225.0);
    }

    #[test]
    fn test_barrier_rects_order() {
        let state = GameState::new(1);
        let rects = state.barrier_rects();
        for (i, tube) in state.tubes.iter().enumerate() {
            assert_eq!(rects[i * 2], tube.upper_rect(&state.tuning));
            assert_eq!(rects[i * 2 + 1], tube.lower_rect(&state.tuning));
        }
    }

    #[test]
    fn test_bird_hitbox_centered_on_sprite() {
        let tuning = Tuning::default();
        let bird = Bird {
            y: 400.7,
            velocity: 0.0,
            angle: 0.0,
        };
        assert_eq!(bird.center(&tuning), Vec2::new(67.0, 417.0));

        // Top-left sits on whole units: 67 - 35 / 2 and 417 - 35 / 2
        assert_eq!(bird.hitbox(&tuning), Rect::new(50.0, 400.0, 35.0, 35.0));
    }

    #[test]
    fn test_tilted_hitbox_snaps_to_whole_units() {
        let tuning = Tuning::default();
        let bird = Bird {
            y: 300.0,
            velocity: 0.0,
            angle: 30.0,
        };
        // 35 * (cos 30 + sin 30) = 47.8, truncated to 47
        assert_eq!(bird.hitbox(&tuning), Rect::new(44.0, 294.0, 47.0, 47.0));
    }

    #[test]
    fn test_with_tuning_rejects_invalid() {
        let tuning = Tuning {
            gap_top_min: 300.0,
            gap_top_max: 200.0,
            ..Default::default()
        };
        assert!(matches!(
            GameState::with_tuning(1, tuning),
            Err(TuningError::Invalid { field: "gap_top_min", .. })
        ));

        let tuning = Tuning {
            gravity: f32::NAN,
            ..Default::default()
        };
        assert!(GameState::with_tuning(1, tuning).is_err());
    }

    #[test]
    fn test_with_tuning_accepts_valid() {
        let tuning = Tuning {
            tube_speed: 2.0,
            ..Default::default()
        };
        let state = GameState::with_tuning(9, tuning).unwrap();
        assert_eq!(state.tube_speed, 2.0);
    }

    #[test]
    fn test_ground_rect() {
        let state = GameState::new(1);
        assert_eq!(state.ground_rect(), Rect::new(0.0, 550.0, 400.0, 50.0));
    }
}
