//! Per-frame view of the simulation for an external renderer
//!
//! Everything a frontend needs to draw one frame, with no access to the
//! simulation internals. Serializable so it can be piped to another process.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::sim::rect::Rect;
use crate::sim::state::{GameState, TUBE_COUNT};

/// Where the game-over lines are drawn
pub const GAME_OVER_ANCHOR: Vec2 = Vec2::new(200.0, 300.0);
pub const CONTINUE_ANCHOR: Vec2 = Vec2::new(160.0, 400.0);
/// Where the running score is drawn
pub const HUD_ANCHOR: Vec2 = Vec2::new(5.0, 5.0);

/// A line of text with its top-left screen position
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextLine {
    pub text: String,
    pub pos: Vec2,
}

/// Bird placement for drawing the rotated sprite
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BirdView {
    pub x: f32,
    pub y: f32,
    /// Degrees, positive = nose up
    pub angle: f32,
    /// Rotated sprite bounds (also the hitbox)
    pub bounds: Rect,
}

/// Everything drawn in one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderSnapshot {
    pub frame: u64,
    /// Barriers tube by tube: upper, lower
    pub barriers: [Rect; TUBE_COUNT * 2],
    pub ground: Rect,
    pub bird: BirdView,
    pub score: u32,
    pub game_over: bool,
    /// False once quit was requested; the driver exits after drawing this frame
    pub running: bool,
    pub hud: TextLine,
    /// Game-over lines, empty while playing
    pub overlay: Vec<TextLine>,
}

impl RenderSnapshot {
    pub fn capture(state: &GameState) -> Self {
        let score = state.score();
        let game_over = state.is_game_over();

        let overlay = if game_over {
            vec![
                TextLine {
                    text: game_over_text(score),
                    pos: GAME_OVER_ANCHOR,
                },
                TextLine {
                    text: CONTINUE_TEXT.to_string(),
                    pos: CONTINUE_ANCHOR,
                },
            ]
        } else {
            Vec::new()
        };

        Self {
            frame: state.frame,
            barriers: state.barrier_rects(),
            ground: state.ground_rect(),
            bird: BirdView {
                x: state.tuning.bird_x,
                y: state.bird.y,
                angle: state.bird.angle,
                bounds: state.bird.hitbox(&state.tuning),
            },
            score,
            game_over,
            running: state.run.running,
            hud: TextLine {
                text: format!("Score: {}", score),
                pos: HUD_ANCHOR,
            },
            overlay,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

pub const CONTINUE_TEXT: &str = "Press Space to Continue";

pub fn game_over_text(score: u32) -> String {
    format!("Game over, score: {}", score)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::SIM_DT;
    use crate::sim::TickInput;

    #[test]
    fn test_playing_snapshot() {
        let state = GameState::new(5);
        let snapshot = RenderSnapshot::capture(&state);

        assert!(!snapshot.game_over);
        assert!(snapshot.running);
        assert!(snapshot.overlay.is_empty());
        assert_eq!(snapshot.hud.text, "Score: 0");
        assert_eq!(snapshot.barriers[0], state.tubes[0].upper_rect(&state.tuning));
        assert_eq!(snapshot.barriers[5], state.tubes[2].lower_rect(&state.tuning));
        assert_eq!(snapshot.bird.x, 50.0);
    }

    #[test]
    fn test_game_over_overlay() {
        let mut state = GameState::new(5);
        state.run.score = 7;
        state.bird.y = 545.0;
        let snapshot = state.advance(TickInput::None, SIM_DT);

        assert!(snapshot.game_over);
        let lines: Vec<&str> = snapshot.overlay.iter().map(|l| l.text.as_str()).collect();
        assert_eq!(lines, ["Game over, score: 7", "Press Space to Continue"]);
        assert_eq!(snapshot.overlay[0].pos, GAME_OVER_ANCHOR);
        assert_eq!(snapshot.overlay[1].pos, CONTINUE_ANCHOR);
    }

    #[test]
    fn test_json_shape() {
        let snapshot = RenderSnapshot::capture(&GameState::new(5));
        let value: serde_json::Value = serde_json::from_str(&snapshot.to_json().unwrap()).unwrap();
        assert_eq!(value["barriers"].as_array().map(Vec::len), Some(6));
        assert_eq!(value["score"], 0);
        assert_eq!(value["game_over"], false);
    }
}
