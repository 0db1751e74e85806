//! The run state machine: one play-through from start to game over.

pub mod autopilot;
pub mod collision;
pub mod jump;
pub mod spawn;
pub mod tick;
pub mod types;

pub use types::{JumpOutcome, PostEffect, Run, RunEvent, RunState, RunTimer, SoundCue};

use rand::Rng;

impl Run {
    /// Handle the activate input.
    pub fn jump(&mut self) -> JumpOutcome {
        jump::jump(self)
    }

    /// Advance by `dt_ms` of wall time. Returns true if any frame ran.
    pub fn tick<R: Rng>(&mut self, dt_ms: u64, rng: &mut R) -> bool {
        tick::tick_run(self, dt_ms, rng)
    }

    /// Advance exactly one frame.
    pub fn step<R: Rng>(&mut self, rng: &mut R) {
        tick::step(self, rng);
    }
}
