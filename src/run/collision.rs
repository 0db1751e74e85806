//! What happens when the player touches an item, and how power-ups expire.

use super::types::{PostEffect, Run, RunEvent, RunTimer, SoundCue};
use crate::core::constants::{
    GRAVITY, MULTI_JUMP_SECS, UPSIDE_DOWN_MAX_SECS, UPSIDE_DOWN_MIN_SECS,
};
use crate::world::{Edge, Floor, Item, ItemId, ItemKind};
use rand::Rng;

/// Pickups resolve before trees, so a kong touched on the same frame as a
/// tree clears it first.
const RESOLUTION_ORDER: [ItemKind; 4] = [
    ItemKind::Food,
    ItemKind::Bolt,
    ItemKind::Kong,
    ItemKind::Tree,
];

/// Check the player against every live item and apply the matching policy.
pub fn resolve_collisions<R: Rng>(run: &mut Run, rng: &mut R) {
    for kind in RESOLUTION_ORDER {
        if run.state.is_game_over {
            return;
        }
        let hits = run.items.overlapping(kind, &run.player.bounds);
        for id in hits {
            match kind {
                ItemKind::Tree => {
                    hit_tree(run);
                    break;
                }
                ItemKind::Food => eat_food(run, id),
                ItemKind::Bolt => hit_bolt(run, id, rng),
                ItemKind::Kong => hit_kong(run, id),
            }
        }
    }
}

/// Player ran into a tree: freeze everything and end the run.
pub fn hit_tree(run: &mut Run) {
    if run.state.is_game_over {
        return;
    }

    run.frozen = true;
    let (x, y) = run.player.center();
    run.push_event(RunEvent::Explosion { x, y });
    run.push_event(RunEvent::CameraShake);
    run.play(SoundCue::Explosion);
    run.night_banner = None;

    let state = &mut run.state;
    state.is_game_over = true;
    state.is_dark = false;
    run.post_effect = PostEffect::None;
    if state.score > state.high_score {
        state.high_score = state.score;
    }

    let (score, high_score) = (state.score, state.high_score);
    log::info!("game over at score {} (high score {})", score, high_score);
    run.push_event(RunEvent::GameOver { score, high_score });
}

/// Eat a food item. In variant A this opens a multi-jump window; a pickup
/// during an open window does not extend it.
pub fn eat_food(run: &mut Run, id: ItemId) {
    if run.items.remove(ItemKind::Food, id).is_none() {
        return;
    }
    run.play(SoundCue::Crunch);

    if run.variant.food_grants_multi_jump() && !run.state.multi_jump_enabled {
        run.state.multi_jump_enabled = true;
        run.power_epoch += 1;
        run.timers.schedule_secs(
            MULTI_JUMP_SECS,
            RunTimer::MultiJumpEnd {
                epoch: run.power_epoch,
            },
        );
        log::debug!("multi-jump enabled for {}s", MULTI_JUMP_SECS);
    }
}

/// Close the multi-jump window opened under `epoch`.
pub fn end_multi_jump(run: &mut Run, epoch: u64) {
    if epoch != run.power_epoch || !run.state.multi_jump_enabled {
        return;
    }
    run.state.multi_jump_enabled = false;
    run.play(SoundCue::MultiJumpOff);
}

/// Touch a bolt: flip gravity for a random while. Ignored in the dark.
pub fn hit_bolt<R: Rng>(run: &mut Run, id: ItemId, rng: &mut R) {
    if run.items.remove(ItemKind::Bolt, id).is_none() {
        return;
    }
    if run.state.is_dark {
        return;
    }

    run.play(SoundCue::UpsideDown);
    run.items.clear_all();
    run.post_effect = PostEffect::Invert;
    run.gravity = -GRAVITY;
    // Replacing the floor keeps exactly one alive
    run.floor = Some(Floor::new(Edge::Top));
    run.player.flip_y = true;
    run.hud_edge = Edge::Bottom;
    run.state.is_upside_down = true;
    run.orientation_epoch += 1;

    let duration = rng.gen_range(UPSIDE_DOWN_MIN_SECS..UPSIDE_DOWN_MAX_SECS);
    run.timers.schedule_secs(
        duration,
        RunTimer::UpsideDownEnd {
            epoch: run.orientation_epoch,
        },
    );
    log::info!(
        "upside down at score {} for {:.1}s",
        run.state.score,
        duration
    );
}

/// Undo the flip started under `epoch`.
pub fn end_upside_down(run: &mut Run, epoch: u64) {
    if epoch != run.orientation_epoch || !run.state.is_upside_down {
        return;
    }

    run.play(SoundCue::UpsideDownOff);
    run.player.flip_y = false;
    run.items.clear_all();
    run.gravity = GRAVITY;
    run.hud_edge = Edge::Top;
    run.state.is_upside_down = false;
    run.post_effect = PostEffect::None;
    run.floor = Some(Floor::new(Edge::Bottom));
    log::info!("back on the ground at score {}", run.state.score);
}

/// Touch a kong: every tree on screen explodes.
pub fn hit_kong(run: &mut Run, id: ItemId) {
    if run.items.remove(ItemKind::Kong, id).is_none() {
        return;
    }
    run.play(SoundCue::Blip);

    let upside_down = run.state.is_upside_down;
    for tree in run.items.take(ItemKind::Tree) {
        let (x, y) = burst_origin(&tree, upside_down);
        run.push_event(RunEvent::Explosion { x, y });
    }
}

/// Centre of an item, reached from its anchor point: down from a top anchor
/// when upside down, up from a bottom anchor otherwise.
pub fn burst_origin(item: &Item, upside_down: bool) -> (f64, f64) {
    let (x, y) = item.anchor_point();
    let half_h = item.bounds.h / 2.0;
    let y = if upside_down { y + half_h } else { y - half_h };
    (x + item.bounds.w / 2.0, y)
}
