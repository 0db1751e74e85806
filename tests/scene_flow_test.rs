//! Integration test: scene flow
//!
//! Welcome screen to game, jumping through the controller, restart with
//! the carried high score, and rendering of whatever scene is current.

use rouky_jump::core::config::{parse_args, CliCommand, GameConfig};
use rouky_jump::core::{Language, Variant};
use rouky_jump::input::GameInput;
use rouky_jump::run::collision::hit_tree;
use rouky_jump::run::RunEvent;
use rouky_jump::scene::{Scene, SceneController};
use rouky_jump::ui::effects::EffectLayer;
use rouky_jump::ui::game_scene::build_game_buffer;

fn seeded(variant: Variant) -> SceneController {
    SceneController::new(GameConfig {
        variant,
        seed: Some(99),
        language: Language::English,
    })
}

fn row_text(buffer: &rouky_jump::ui::common::CellBuffer, row: i32) -> String {
    (0..buffer.width() as i32)
        .filter_map(|c| buffer.get(c, row).map(|cell| cell.ch))
        .collect()
}

// =============================================================================
// Transitions
// =============================================================================

#[test]
fn test_welcome_to_game_on_activate() {
    let mut controller = seeded(Variant::B);
    assert!(controller.tick(500).is_empty());
    assert!(matches!(controller.scene(), Scene::Welcome(_)));

    assert!(controller.handle_input(GameInput::Activate));
    let run = controller.run().expect("game started");
    assert_eq!(run.state.score, 0);
    assert_eq!(run.state.high_score, 0);
    assert_eq!(run.items.len(), 1);
}

#[test]
fn test_restart_carries_high_score() {
    let mut controller = seeded(Variant::B);
    controller.enter_game(0);

    let run = controller.run_mut().expect("game");
    run.state.score = 1500;
    hit_tree(run);
    assert_eq!(run.state.high_score, 1500);

    assert!(controller.handle_input(GameInput::Activate));
    let fresh = controller.run().expect("new run");
    assert_eq!(fresh.state.high_score, 1500);
    assert_eq!(fresh.state.score, 0);
    assert!(!fresh.state.is_game_over);
    assert!(!fresh.state.is_upside_down);
    assert!(!fresh.state.is_dark);
}

#[test]
fn test_lower_score_keeps_previous_high_score() {
    let mut controller = seeded(Variant::A);
    controller.enter_game(900);

    let run = controller.run_mut().expect("game");
    run.state.score = 300;
    hit_tree(run);

    controller.handle_input(GameInput::Activate);
    assert_eq!(controller.run().map(|r| r.state.high_score), Some(900));
}

#[test]
fn test_activate_jumps_while_running() {
    let mut controller = seeded(Variant::B);
    controller.enter_game(0);

    // Let the player land
    for _ in 0..60 {
        controller.tick(16);
        if let Some(run) = controller.run_mut() {
            run.items.clear_all();
        }
    }
    assert!(!controller.handle_input(GameInput::Activate));
    let run = controller.run().expect("game");
    assert!(run.player.is_jumping());
}

#[test]
fn test_tick_returns_run_events() {
    let mut controller = seeded(Variant::B);
    controller.enter_game(0);
    for _ in 0..60 {
        controller.tick(16);
        if let Some(run) = controller.run_mut() {
            run.items.clear_all();
        }
    }
    controller.handle_input(GameInput::Activate);
    let events = controller.tick(16);
    assert!(events.contains(&RunEvent::Sound(rouky_jump::run::SoundCue::Jump)));
    assert!(controller.tick(16).is_empty());
}

// =============================================================================
// Configuration
// =============================================================================

#[test]
fn test_cli_config_reaches_the_run() {
    let args: Vec<String> = ["--variant", "a", "--seed", "5", "--lang", "fr"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    let config = match parse_args(&args, Language::English) {
        Ok(CliCommand::Play(config)) => config,
        other => panic!("unexpected {:?}", other),
    };

    let mut controller = SceneController::new(config);
    controller.handle_input(GameInput::Activate);
    assert_eq!(controller.run().map(|r| r.variant), Some(Variant::A));
    assert_eq!(controller.config().language, Language::French);
}

#[test]
fn test_same_seed_same_run() {
    let play = || {
        let mut controller = seeded(Variant::B);
        controller.enter_game(0);
        for _ in 0..300 {
            controller.tick(16);
        }
        let run = controller.run().expect("game");
        (run.state.score, run.items.len(), run.state.is_game_over)
    };
    assert_eq!(play(), play());
}

// =============================================================================
// Rendering
// =============================================================================

#[test]
fn test_game_over_screen_renders_text() {
    let mut controller = seeded(Variant::B);
    controller.enter_game(0);
    let run = controller.run_mut().expect("game");
    run.state.score = 12;
    hit_tree(run);

    let mut effects = EffectLayer::new();
    effects.apply(&controller.tick(16));
    assert!(!effects.is_empty());

    let run = controller.run().expect("game");
    let buffer = build_game_buffer(80, 24, run, &effects, Language::English);
    assert!(row_text(&buffer, 12).contains("Game Over"));
}
