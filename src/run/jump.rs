//! The activate input: restart after game over, otherwise jump.

use super::types::{JumpOutcome, Run, SoundCue};
use crate::core::constants::JUMP_FORCE;

/// Handle one activate input. First matching rule wins:
///
/// 1. game over: ask for a restart carrying the high score
/// 2. upside down and (multi-jump or neither rising nor falling): jump
///    away from the ceiling floor
/// 3. grounded or multi-jump: jump up
/// 4. otherwise nothing
pub fn jump(run: &mut Run) -> JumpOutcome {
    let state = &run.state;
    if state.is_game_over {
        return JumpOutcome::Restart {
            high_score: state.high_score,
        };
    }

    let multi_jump = state.multi_jump_enabled;
    if state.is_upside_down
        && (multi_jump || (!run.player.is_falling() && !run.player.is_jumping()))
    {
        run.player.jump(-JUMP_FORCE);
        run.play(SoundCue::Jump);
        JumpOutcome::Jumped
    } else if run.player.is_grounded() || multi_jump {
        run.player.jump(JUMP_FORCE);
        run.play(SoundCue::Jump);
        JumpOutcome::Jumped
    } else {
        JumpOutcome::Ignored
    }
}
