pub mod common;
pub mod effects;
pub mod game_scene;
pub mod welcome_scene;

use crate::scene::{Scene, SceneController};
use effects::EffectLayer;
use ratatui::Frame;

/// Main UI drawing function: dispatch on the current scene.
pub fn draw(frame: &mut Frame, controller: &SceneController, effects: &EffectLayer) {
    let size = frame.size();
    let language = controller.config().language;

    match controller.scene() {
        Scene::Welcome(welcome) => {
            welcome_scene::render_welcome_scene(frame, size, welcome, language);
        }
        Scene::Game(run) => {
            game_scene::render_game_scene(frame, size, run, effects, language);
        }
    }
}
