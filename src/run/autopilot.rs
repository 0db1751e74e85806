//! Scripted player for the headless simulator: jump when a tree is about
//! to reach the runner.

use super::types::Run;
use crate::world::ItemKind;

/// How far ahead to look, in seconds of scroll at the current speed.
pub const LOOKAHEAD_SECS: f64 = 0.3;

/// True when a tree is within the lookahead window and the player is
/// resting on the floor.
pub fn should_jump(run: &Run) -> bool {
    if run.state.is_game_over || run.player.vel_y != 0.0 {
        return false;
    }

    let front = run.player.bounds.right();
    let reach = run.state.speed * LOOKAHEAD_SECS;
    run.items.of(ItemKind::Tree).iter().any(|tree| {
        let gap = tree.bounds.x - front;
        (0.0..=reach).contains(&gap)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::Variant;
    use crate::run::spawn::place_item;

    fn grounded_run() -> Run {
        let mut run = Run::new(Variant::B, 0);
        run.player.vel_y = 0.0;
        run
    }

    #[test]
    fn test_no_tree_no_jump() {
        assert!(!should_jump(&grounded_run()));
    }

    #[test]
    fn test_jumps_for_close_tree() {
        let mut run = grounded_run();
        let id = place_item(&mut run, ItemKind::Tree, (48.0, 60.0));
        assert!(!should_jump(&run));

        let front = run.player.bounds.right();
        if let Some(tree) = run.items.get_mut(ItemKind::Tree, id) {
            tree.bounds.x = front + 50.0;
        }
        assert!(should_jump(&run));
    }

    #[test]
    fn test_ignores_tree_behind() {
        let mut run = grounded_run();
        let id = place_item(&mut run, ItemKind::Tree, (48.0, 60.0));
        if let Some(tree) = run.items.get_mut(ItemKind::Tree, id) {
            tree.bounds.x = 0.0;
        }
        assert!(!should_jump(&run));
    }

    #[test]
    fn test_no_jump_while_airborne() {
        let mut run = grounded_run();
        let id = place_item(&mut run, ItemKind::Tree, (48.0, 60.0));
        let front = run.player.bounds.right();
        if let Some(tree) = run.items.get_mut(ItemKind::Tree, id) {
            tree.bounds.x = front + 10.0;
        }
        run.player.vel_y = -100.0;
        assert!(!should_jump(&run));
    }
}
