//! Top-level scene switching: welcome screen and game.

use crate::core::config::GameConfig;
use crate::core::constants::{
    WELCOME_SPIN_DEG_PER_SEC, WELCOME_SPIN_END_DEG, WELCOME_SPIN_START_DEG,
};
use crate::input::GameInput;
use crate::run::{JumpOutcome, Run, RunEvent};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Title screen animation state.
#[derive(Debug, Clone, PartialEq)]
pub struct WelcomeScreen {
    /// Mascot rotation in degrees; spins two turns then stops.
    pub angle: f64,
    /// Drives the wavy title.
    pub elapsed_ms: u64,
}

impl Default for WelcomeScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl WelcomeScreen {
    pub fn new() -> Self {
        Self {
            angle: WELCOME_SPIN_START_DEG,
            elapsed_ms: 0,
        }
    }

    pub fn update(&mut self, dt_ms: u64) {
        self.elapsed_ms += dt_ms;
        if self.angle < WELCOME_SPIN_END_DEG {
            self.angle += dt_ms as f64 / 1000.0 * WELCOME_SPIN_DEG_PER_SEC;
        }
    }

    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed_ms as f64 / 1000.0
    }
}

#[derive(Debug, Clone)]
pub enum Scene {
    Welcome(WelcomeScreen),
    Game(Box<Run>),
}

/// Owns the current scene and the RNG every run draws from.
pub struct SceneController {
    config: GameConfig,
    scene: Scene,
    rng: StdRng,
}

impl SceneController {
    pub fn new(config: GameConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            config,
            scene: Scene::Welcome(WelcomeScreen::new()),
            rng,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn run(&self) -> Option<&Run> {
        match &self.scene {
            Scene::Game(run) => Some(run.as_ref()),
            Scene::Welcome(_) => None,
        }
    }

    pub fn run_mut(&mut self) -> Option<&mut Run> {
        match &mut self.scene {
            Scene::Game(run) => Some(run.as_mut()),
            Scene::Welcome(_) => None,
        }
    }

    pub fn enter_welcome(&mut self) {
        self.scene = Scene::Welcome(WelcomeScreen::new());
    }

    /// Replace whatever is running with a fresh run.
    pub fn enter_game(&mut self, high_score: u64) {
        let run = Run::start(self.config.variant, high_score, &mut self.rng);
        self.scene = Scene::Game(Box::new(run));
    }

    /// Returns true if the input started a new run.
    pub fn handle_input(&mut self, input: GameInput) -> bool {
        if input != GameInput::Activate {
            return false;
        }

        let outcome = match &mut self.scene {
            Scene::Welcome(_) => JumpOutcome::Restart { high_score: 0 },
            Scene::Game(run) => run.jump(),
        };
        match outcome {
            JumpOutcome::Restart { high_score } => {
                self.enter_game(high_score);
                true
            }
            JumpOutcome::Jumped | JumpOutcome::Ignored => false,
        }
    }

    /// Advance the current scene and collect what the run emitted.
    pub fn tick(&mut self, dt_ms: u64) -> Vec<RunEvent> {
        match &mut self.scene {
            Scene::Welcome(welcome) => {
                welcome.update(dt_ms);
                Vec::new()
            }
            Scene::Game(run) => {
                run.tick(dt_ms, &mut self.rng);
                run.drain_events()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::Variant;

    fn controller() -> SceneController {
        SceneController::new(GameConfig {
            seed: Some(7),
            ..GameConfig::default()
        })
    }

    #[test]
    fn test_starts_on_welcome() {
        let c = controller();
        assert!(matches!(c.scene(), Scene::Welcome(_)));
        assert!(c.run().is_none());
    }

    #[test]
    fn test_activate_on_welcome_starts_fresh_game() {
        let mut c = controller();
        assert!(c.handle_input(GameInput::Activate));
        let run = c.run().expect("game scene");
        assert_eq!(run.state.high_score, 0);
        assert_eq!(run.state.score, 0);
        assert_eq!(run.variant, Variant::B);
    }

    #[test]
    fn test_other_input_is_ignored() {
        let mut c = controller();
        assert!(!c.handle_input(GameInput::Other));
        assert!(matches!(c.scene(), Scene::Welcome(_)));
    }

    #[test]
    fn test_enter_welcome_discards_run() {
        let mut c = controller();
        c.enter_game(5);
        c.enter_welcome();
        assert!(c.run().is_none());
    }

    #[test]
    fn test_welcome_spin_stops_after_two_turns() {
        let mut welcome = WelcomeScreen::new();
        welcome.update(1000);
        assert!((welcome.angle - 510.0).abs() < 1e-9);
        for _ in 0..10 {
            welcome.update(1000);
        }
        assert!(welcome.angle >= WELCOME_SPIN_END_DEG);
        assert!(welcome.angle < WELCOME_SPIN_END_DEG + WELCOME_SPIN_DEG_PER_SEC);
        assert_eq!(welcome.elapsed_ms, 11_000);
    }

    #[test]
    fn test_welcome_tick_emits_nothing() {
        let mut c = controller();
        assert!(c.tick(100).is_empty());
    }
}
