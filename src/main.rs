//! Tube Flap entry point
//!
//! Headless driver: runs the fixed-step loop with the autopilot at the
//! controls and prints the final frame as JSON. A windowed frontend plugs in
//! at the same seam by polling its own input and drawing each snapshot.
//!
//! Environment:
//! - `TUBE_FLAP_FRAMES`: frames to simulate (default 3600, one minute)
//! - `TUBE_FLAP_SEED`: run seed (default 1)
//! - `TUBE_FLAP_TUNING`: path to a tuning JSON file

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use tube_flap::consts::SIM_DT;
    use tube_flap::sim::{GameEvent, GameState, TickInput};
    use tube_flap::{Autopilot, Tuning};

    env_logger::init();
    log::info!("Tube Flap (headless) starting...");

    let frames: u64 = env_or("TUBE_FLAP_FRAMES", 60 * 60);
    let seed: u64 = env_or("TUBE_FLAP_SEED", 1);

    let tuning = match std::env::var("TUBE_FLAP_TUNING") {
        Ok(path) => match Tuning::load(&path) {
            Ok(tuning) => tuning,
            Err(e) => {
                log::error!("{}: {}", path, e);
                std::process::exit(1);
            }
        },
        Err(_) => Tuning::default(),
    };

    let mut state = match GameState::with_tuning(seed, tuning) {
        Ok(state) => state,
        Err(e) => {
            log::error!("Rejected tuning: {}", e);
            std::process::exit(1);
        }
    };
    let pilot = Autopilot::default();
    let mut best = 0;
    log::info!("Game initialized with seed: {}", seed);

    for _ in 0..frames {
        let input = pilot.decide(&state);
        state.advance(input, SIM_DT);

        for event in &state.events {
            match event {
                GameEvent::Crashed { into, score } => {
                    log::info!("Crashed into {:?}, score {}", into, score);
                }
                GameEvent::Scored { score, .. } => best = best.max(*score),
                other => log::trace!("{:?}", other),
            }
        }
    }

    let snapshot = state.advance(TickInput::Quit, SIM_DT);
    log::info!("Ran {} frames, best score {}", state.frame, best);

    match snapshot.to_json() {
        Ok(json) => println!("{}", json),
        Err(e) => log::error!("Failed to encode snapshot: {}", e),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn env_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    match std::env::var(key) {
        Ok(raw) => raw.parse().unwrap_or_else(|_| {
            log::warn!("Ignoring unparseable {}={:?}", key, raw);
            default
        }),
        Err(_) => default,
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // A browser frontend drives GameState::advance from its own frame callback
}
