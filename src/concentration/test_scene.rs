//=========================================================================
// Test Scene
//=========================================================================
//
// Minimal second scene: a static label, the same pause toggle, and a
// key binding back to the play scene. Exists to exercise scene
// switching end to end.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::cell::RefCell;
use std::rc::Rc;

use log::debug;

//=== Internal Dependencies ===============================================

use super::SCENE_PLAY;
use crate::core::assets::ResourceMap;
use crate::core::input::event::{EventKind, InputEvent, KeyCode};
use crate::core::scene::{GameCommand, Scene, SceneHooks, SceneServices};

//=== TestState ===========================================================

/// Shared visual state of the test scene.
#[derive(Debug, Default)]
pub struct TestState {
    pub label_visible: bool,
}

//=== TestHooks ===========================================================

struct TestHooks {
    state: Rc<RefCell<TestState>>,
}

impl SceneHooks for TestHooks {
    fn on_start(&mut self, _services: &mut SceneServices<'_>) {
        self.state.borrow_mut().label_visible = true;
        debug!("test scene started");
    }

    fn on_stop(&mut self, _services: &mut SceneServices<'_>) {
        self.state.borrow_mut().label_visible = false;
        debug!("test scene stopped");
    }
}

//=== Scene Construction ==================================================

/// Builds the test scene.
pub fn build(resources: Rc<ResourceMap>) -> Scene {
    build_with_state(resources).0
}

/// Builds the test scene and exposes its shared state (for tests).
pub fn build_with_state(resources: Rc<ResourceMap>) -> (Scene, Rc<RefCell<TestState>>) {
    let state = Rc::new(RefCell::new(TestState::default()));

    let mut scene = Scene::new(
        Box::new(TestHooks { state: Rc::clone(&state) }),
        resources,
    );

    scene.bind(EventKind::KeyDown, Box::new(on_key_down));

    (scene, state)
}

//=== Input Handlers ======================================================

fn on_key_down(event: &InputEvent, services: &mut SceneServices<'_>) {
    match event.key() {
        Some(KeyCode::KeyF) => {
            services.commands.push(GameCommand::TogglePause);
        }
        Some(KeyCode::KeyX) => {
            services
                .commands
                .push(GameCommand::GoToScene(SCENE_PLAY.to_string()));
        }
        _ => {}
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
