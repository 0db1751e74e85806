//! Spawn policy: which item comes next, where it goes, and when the next
//! spawn happens.

use super::types::{Run, RunTimer};
use crate::core::constants::{
    BOLT_MIN_SCORE, BOLT_THRESHOLD, FLOOR_HEIGHT, FOOD_MIN_SCORE, FOOD_THRESHOLD, KONG_THRESHOLD,
    SPAWN_DELAY_MAX_SECS, SPAWN_DELAY_MIN_SECS, TREE_MAX_HEIGHT, TREE_MIN_HEIGHT, TREE_WIDTH,
    WORLD_HEIGHT, WORLD_WIDTH,
};
use crate::world::{Aabb, Edge, ItemId, ItemKind};
use rand::Rng;

/// Pick the item kind for a uniform draw `r` in [0, 1).
///
/// First match wins: bolt, food, kong (variant B), then tree.
pub fn choose_item(run: &Run, r: f64) -> ItemKind {
    let state = &run.state;
    let exclusive = run.variant.exclusive_pickups();
    let absent = |kind: ItemKind| !exclusive || !run.items.contains(kind);

    if state.score > BOLT_MIN_SCORE
        && r > BOLT_THRESHOLD
        && !state.is_upside_down
        && !state.is_dark
        && absent(ItemKind::Bolt)
    {
        ItemKind::Bolt
    } else if state.score > FOOD_MIN_SCORE && r > FOOD_THRESHOLD && absent(ItemKind::Food) {
        ItemKind::Food
    } else if run.variant.has_kong() && r > KONG_THRESHOLD && !run.items.contains(ItemKind::Kong) {
        ItemKind::Kong
    } else {
        ItemKind::Tree
    }
}

/// Box for a new item at the right screen edge, resting against the current
/// floor (bottom-anchored normally, top-anchored upside down).
pub fn spawn_bounds(kind: ItemKind, size: (f64, f64), upside_down: bool) -> Aabb {
    let (w, h) = size;
    let offset = kind.floor_offset();
    let y = if upside_down {
        FLOOR_HEIGHT + offset
    } else {
        WORLD_HEIGHT - FLOOR_HEIGHT - offset - h
    };
    Aabb::new(WORLD_WIDTH, y, w, h)
}

/// Add an item of `kind` moving at the current speed.
pub fn place_item(run: &mut Run, kind: ItemKind, size: (f64, f64)) -> ItemId {
    let upside_down = run.state.is_upside_down;
    let bounds = spawn_bounds(kind, size, upside_down);
    let flip_y = kind == ItemKind::Kong && upside_down;
    let id = run.items.insert(
        kind,
        bounds,
        run.state.speed,
        Edge::for_orientation(upside_down),
        flip_y,
    );
    log::debug!(
        "spawned {} at score {} (speed {:.1})",
        kind.name(),
        run.state.score,
        run.state.speed
    );
    id
}

/// One link of the spawn chain: spawn an item and schedule the next call.
/// Once the run is over the chain stops.
pub fn spawn_item<R: Rng>(run: &mut Run, rng: &mut R) {
    if run.state.is_game_over {
        return;
    }

    let r: f64 = rng.gen();
    let kind = choose_item(run, r);
    let size = kind
        .sprite_size()
        .unwrap_or_else(|| (TREE_WIDTH, rng.gen_range(TREE_MIN_HEIGHT..TREE_MAX_HEIGHT)));
    place_item(run, kind, size);

    let delay = rng.gen_range(SPAWN_DELAY_MIN_SECS..SPAWN_DELAY_MAX_SECS);
    run.timers.schedule_secs(delay, RunTimer::Spawn);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::Variant;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn run_at_score(variant: Variant, score: u64) -> Run {
        let mut run = Run::new(variant, 0);
        run.state.score = score;
        run
    }

    #[test]
    fn test_low_score_spawns_trees_only_in_variant_a() {
        let run = run_at_score(Variant::A, 0);
        for r in [0.0, 0.5, 0.9, 0.96, 0.999] {
            assert_eq!(choose_item(&run, r), ItemKind::Tree);
        }
    }

    #[test]
    fn test_kong_threshold_in_variant_b() {
        let run = run_at_score(Variant::B, 0);
        assert_eq!(choose_item(&run, 0.87), ItemKind::Tree);
        assert_eq!(choose_item(&run, 0.88), ItemKind::Kong);
    }

    #[test]
    fn test_cascade_order() {
        let run = run_at_score(Variant::B, 5000);
        assert_eq!(choose_item(&run, 0.96), ItemKind::Bolt);
        assert_eq!(choose_item(&run, 0.93), ItemKind::Food);
        assert_eq!(choose_item(&run, 0.90), ItemKind::Kong);
        assert_eq!(choose_item(&run, 0.50), ItemKind::Tree);
    }

    #[test]
    fn test_score_gates_are_strict() {
        let run = run_at_score(Variant::A, 4000);
        assert_eq!(choose_item(&run, 0.99), ItemKind::Food);
        let run = run_at_score(Variant::A, 2000);
        assert_eq!(choose_item(&run, 0.99), ItemKind::Tree);
    }

    #[test]
    fn test_bolt_suppressed_when_dark_or_upside_down() {
        let mut run = run_at_score(Variant::A, 5000);
        run.state.is_dark = true;
        assert_eq!(choose_item(&run, 0.99), ItemKind::Food);

        run.state.is_dark = false;
        run.state.is_upside_down = true;
        assert_eq!(choose_item(&run, 0.99), ItemKind::Food);
    }

    #[test]
    fn test_live_pickup_blocks_duplicate_in_variant_b() {
        let mut run = run_at_score(Variant::B, 5000);
        place_item(&mut run, ItemKind::Bolt, (28.0, 40.0));
        assert_eq!(choose_item(&run, 0.99), ItemKind::Food);

        place_item(&mut run, ItemKind::Food, (32.0, 32.0));
        assert_eq!(choose_item(&run, 0.99), ItemKind::Kong);

        place_item(&mut run, ItemKind::Kong, (56.0, 56.0));
        assert_eq!(choose_item(&run, 0.99), ItemKind::Tree);
    }

    #[test]
    fn test_variant_a_allows_duplicate_pickups() {
        let mut run = run_at_score(Variant::A, 5000);
        place_item(&mut run, ItemKind::Bolt, (28.0, 40.0));
        assert_eq!(choose_item(&run, 0.99), ItemKind::Bolt);
    }

    #[test]
    fn test_spawn_bounds_follow_orientation() {
        let normal = spawn_bounds(ItemKind::Food, (32.0, 32.0), false);
        assert_eq!(normal.x, WORLD_WIDTH);
        assert_eq!(normal.bottom(), WORLD_HEIGHT - FLOOR_HEIGHT - 10.0);

        let inverted = spawn_bounds(ItemKind::Food, (32.0, 32.0), true);
        assert_eq!(inverted.y, FLOOR_HEIGHT + 10.0);
    }

    #[test]
    fn test_place_item_uses_current_speed_and_flips_kong() {
        let mut run = run_at_score(Variant::B, 0);
        run.state.speed = 600.0;
        run.state.is_upside_down = true;
        let id = place_item(&mut run, ItemKind::Kong, (56.0, 56.0));
        let kong = run.items.get(ItemKind::Kong, id).unwrap();
        assert_eq!(kong.velocity, 600.0);
        assert_eq!(kong.anchor, Edge::Top);
        assert!(kong.flip_y);
    }

    #[test]
    fn test_spawn_item_reschedules_itself() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let mut run = run_at_score(Variant::B, 0);
        spawn_item(&mut run, &mut rng);
        assert_eq!(run.items.len(), 1);
        assert_eq!(run.timers.len(), 1);

        // Tree heights stay in range
        for tree in run.items.of(ItemKind::Tree) {
            assert!(tree.bounds.h >= TREE_MIN_HEIGHT && tree.bounds.h < TREE_MAX_HEIGHT);
        }
    }

    #[test]
    fn test_spawn_chain_stops_after_game_over() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let mut run = run_at_score(Variant::B, 0);
        run.state.is_game_over = true;
        spawn_item(&mut run, &mut rng);
        assert!(run.items.is_empty());
        assert!(run.timers.is_empty());
    }
}
