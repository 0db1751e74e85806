//! Per-frame advancement: timers, physics, collisions, score and lighting.

use super::collision::{end_multi_jump, end_upside_down, resolve_collisions};
use super::spawn::spawn_item;
use super::types::{PostEffect, Run, RunEvent, RunTimer, SoundCue};
use crate::core::constants::{
    LIGHT_BLUR, LIGHT_RADIUS, MAX_FRAME_MS, NIGHT_BANNER_SECS, NIGHT_CHECK_INTERVAL_SECS,
    NIGHT_MIN_SCORE, NIGHT_THRESHOLD, PHYSICS_TICK_MS, SPEED_MULTIPLIER, SPEED_STEP_SCORE,
};
use rand::Rng;

/// Frame length in seconds.
pub const STEP_SECS: f64 = PHYSICS_TICK_MS as f64 / 1000.0;

/// Advance the run by `dt_ms` of wall time, in fixed 16ms steps.
///
/// Returns true if at least one step ran.
pub fn tick_run<R: Rng>(run: &mut Run, dt_ms: u64, rng: &mut R) -> bool {
    run.accumulated_time_ms += dt_ms.min(MAX_FRAME_MS);

    let mut changed = false;
    while run.accumulated_time_ms >= PHYSICS_TICK_MS {
        run.accumulated_time_ms -= PHYSICS_TICK_MS;
        step(run, rng);
        changed = true;
    }
    changed
}

/// One fixed frame.
///
/// Order: due timers, movement (unless frozen), collisions, score, lighting.
pub fn step<R: Rng>(run: &mut Run, rng: &mut R) {
    run.tick_count += 1;
    run.timers.advance(PHYSICS_TICK_MS);
    while let Some(timer) = run.timers.pop_due() {
        handle_timer(run, timer, rng);
    }

    if !run.frozen {
        run.player
            .integrate(run.gravity, STEP_SECS, run.floor.as_ref());
        run.items.advance(STEP_SECS);
        run.items.remove_offscreen();
        resolve_collisions(run, rng);
    }

    advance_score(run);
    update_light(run);
}

fn handle_timer<R: Rng>(run: &mut Run, timer: RunTimer, rng: &mut R) {
    match timer {
        RunTimer::Spawn => spawn_item(run, rng),
        RunTimer::NightCheck => {
            run.timers
                .schedule_secs(NIGHT_CHECK_INTERVAL_SECS, RunTimer::NightCheck);
            night_check(run, rng);
        }
        RunTimer::NightFall { banner } => night_fall(run, banner),
        RunTimer::UpsideDownEnd { epoch } => end_upside_down(run, epoch),
        RunTimer::MultiJumpEnd { epoch } => end_multi_jump(run, epoch),
    }
}

/// Per-frame score step. Frozen once the run is over.
///
/// Beating a previous high score celebrates once, on the frame the score
/// first passes it. Every 1000 points the scroll speed grows by 10%.
pub fn advance_score(run: &mut Run) {
    if run.state.is_game_over {
        return;
    }

    run.state.score += 1;
    let state = &run.state;
    if state.high_score != 0 && state.score == state.high_score + 1 {
        log::info!("new high score past {}", state.high_score);
        run.play(SoundCue::NewHighScore);
        run.push_event(RunEvent::ScoreBurst);
    }

    if run.state.score % SPEED_STEP_SCORE == 0 {
        run.state.speed *= SPEED_MULTIPLIER;
        log::debug!(
            "speed up to {:.1} at score {}",
            run.state.speed,
            run.state.score
        );
    }
}

/// While dark, keep the light centred on the player.
pub fn update_light(run: &mut Run) {
    if run.state.is_dark {
        run.post_effect = PostEffect::Light {
            center: run.player.center(),
            radius: LIGHT_RADIUS,
            blur: LIGHT_BLUR,
        };
    }
}

/// The periodic night roll. Shows the banner and schedules nightfall, or
/// (outside upside-down mode) turns the lights back on.
pub fn night_check<R: Rng>(run: &mut Run, rng: &mut R) {
    let state = &run.state;
    let falls = !state.is_game_over
        && !state.is_dark
        && !state.is_upside_down
        && state.score > NIGHT_MIN_SCORE
        && rng.gen::<f64>() > NIGHT_THRESHOLD;

    if falls {
        let banner = run.next_banner();
        run.night_banner = Some(banner);
        run.timers
            .schedule_secs(NIGHT_BANNER_SECS, RunTimer::NightFall { banner });
    } else if !run.state.is_upside_down {
        run.post_effect = PostEffect::None;
        run.state.is_dark = false;
    }
}

/// Banner expired: hide it and, unless the run moved on, go dark.
pub fn night_fall(run: &mut Run, banner: u64) {
    if run.night_banner == Some(banner) {
        run.night_banner = None;
    }
    if !run.state.is_game_over && !run.state.is_upside_down {
        run.state.is_dark = true;
        run.play(SoundCue::LightOff);
        log::info!("night fell at score {}", run.state.score);
    }
}
