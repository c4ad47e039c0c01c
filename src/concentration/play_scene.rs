//=========================================================================
// Play Scene
//=========================================================================
//
// The concentration play scene: a face-down card that flips over with a
// chained scale tween when clicked, a pause banner, and key bindings
// for pause toggling and switching to the test scene.
//
// Visual state lives in a shared `PlayState` cell so the lifecycle
// hooks, input handlers, and tween callbacks all observe one card.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::cell::RefCell;
use std::rc::Rc;

use log::debug;

//=== Internal Dependencies ===============================================

use super::{ASSET_WHISTLE, SCENE_TEST};
use crate::core::assets::ResourceMap;
use crate::core::input::event::{EventKind, InputEvent, KeyCode};
use crate::core::scene::{GameCommand, Scene, SceneHooks, SceneServices};
use crate::core::surface::Rect;
use crate::core::tween::{Easing, Tween};

//=== Card Layout =========================================================

const CARD_WIDTH: f32 = 140.0;
const CARD_HEIGHT: f32 = 190.0;
const CARD_X: f32 = 450.0;
const CARD_Y: f32 = 550.0;

/// Seconds for each half of the flip (shrink, then grow).
const FLIP_HALF: f32 = 0.1;

//=== PlayState ===========================================================

/// Shared visual state of the play scene's card and pause banner.
#[derive(Debug)]
pub struct PlayState {
    pub face_up: bool,
    pub card_scale_y: f32,
    pub card_interactive: bool,
    pub pause_text_visible: bool,
}

impl Default for PlayState {
    fn default() -> Self {
        Self {
            face_up: false,
            card_scale_y: 1.0,
            card_interactive: true,
            pause_text_visible: false,
        }
    }
}

/// The card sprite's hit area (anchored at its center).
fn card_bounds() -> Rect {
    Rect::new(
        CARD_X - CARD_WIDTH / 2.0,
        CARD_Y - CARD_HEIGHT / 2.0,
        CARD_WIDTH,
        CARD_HEIGHT,
    )
}

//=== PlayHooks ===========================================================

struct PlayHooks {
    state: Rc<RefCell<PlayState>>,
}

impl SceneHooks for PlayHooks {
    fn on_start(&mut self, _services: &mut SceneServices<'_>) {
        // Entering the scene resets the card layout.
        *self.state.borrow_mut() = PlayState::default();
        debug!("play scene started");
    }

    fn on_stop(&mut self, _services: &mut SceneServices<'_>) {
        debug!("play scene stopped");
    }

    fn on_pause(&mut self, _services: &mut SceneServices<'_>) {
        self.state.borrow_mut().pause_text_visible = true;
    }

    fn on_resume(&mut self, _services: &mut SceneServices<'_>) {
        self.state.borrow_mut().pause_text_visible = false;
    }
}

//=== Scene Construction ==================================================

/// Builds the play scene.
pub fn build(resources: Rc<ResourceMap>) -> Scene {
    build_with_state(resources).0
}

/// Builds the play scene and exposes its shared state (for tests).
pub fn build_with_state(resources: Rc<ResourceMap>) -> (Scene, Rc<RefCell<PlayState>>) {
    let state = Rc::new(RefCell::new(PlayState::default()));

    let mut scene = Scene::new(
        Box::new(PlayHooks { state: Rc::clone(&state) }),
        resources,
    );

    scene.bind(EventKind::KeyDown, Box::new(on_key_down));

    let click_state = Rc::clone(&state);
    scene.bind(
        EventKind::PointerUp,
        Box::new(move |event, services| on_pointer_up(event, services, &click_state)),
    );

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
                .push(GameCommand::GoToScene(SCENE_TEST.to_string()));
        }
        _ => {}
    }
}

fn on_pointer_up(event: &InputEvent, services: &mut SceneServices<'_>, state: &Rc<RefCell<PlayState>>) {
    let Some((x, y)) = event.position() else {
        return;
    };

    if !card_bounds().contains(x, y) {
        return;
    }

    if !state.borrow().card_interactive {
        // Mid-flip; ignore the click.
        return;
    }

    if let Some(clip) = services.get_resource(ASSET_WHISTLE).and_then(|r| r.clip()) {
        services.audio.play(clip);
    }

    flip_card(services, state);
}

//=== Card Flip ===========================================================

/// Starts the two-stage flip: scale the card to zero height, swap the
/// face at the midpoint, then scale back up. Interactivity is off for
/// the duration.
fn flip_card(services: &mut SceneServices<'_>, state: &Rc<RefCell<PlayState>>) {
    let lock = Rc::clone(state);
    let shrink = Rc::clone(state);
    let swap = Rc::clone(state);
    let grow = Rc::clone(state);
    let unlock = Rc::clone(state);

    let tween = Tween::new([1.0])
        .to([0.0], FLIP_HALF)
        .easing(Easing::QuadraticOut)
        .on_start(move || lock.borrow_mut().card_interactive = false)
        .on_update(move |values| shrink.borrow_mut().card_scale_y = values[0])
        .chain(
            Tween::new([0.0])
                .to([1.0], FLIP_HALF)
                .easing(Easing::QuadraticOut)
                .on_start(move || {
                    let mut state = swap.borrow_mut();
                    state.face_up = !state.face_up;
                })
                .on_update(move |values| grow.borrow_mut().card_scale_y = values[0])
                .on_complete(move || unlock.borrow_mut().card_interactive = true),
        );

    services.tweens.start(tween);
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::assets::{ClipId, Resource, TextureId};
    use crate::core::audio::AudioMixer;
    use crate::core::game::GameContext;
    use crate::core::input::event::PointerButton;
    use crate::core::input::EventSource;
    use crate::core::surface::{NodeHandle, RenderSurface, StageMetrics};

    //--- Test Collaborators -----------------------------------------------

    struct NullSurface;

    impl RenderSurface for NullSurface {
        fn add_child(&mut self, _node: NodeHandle) {}
        fn remove_child(&mut self, _node: NodeHandle) {}
        fn clear_children(&mut self) {}
        fn metrics(&self) -> StageMetrics {
            StageMetrics::new(1280.0, 720.0)
        }
    }

    struct RecordingAudio {
        played: Rc<RefCell<Vec<ClipId>>>,
    }

    impl AudioMixer for RecordingAudio {
        fn play(&mut self, clip: ClipId) {
            self.played.borrow_mut().push(clip);
        }
        fn pause_all(&mut self) {}
        fn resume_all(&mut self) {}
    }

    fn play_resources() -> Rc<ResourceMap> {
        let mut map = ResourceMap::new();
        map.insert(super::super::ASSET_CARD_BACK, Resource::Texture(TextureId(1)));
        map.insert(super::super::ASSET_CARD_FRONT, Resource::Texture(TextureId(2)));
        map.insert(ASSET_WHISTLE, Resource::Audio(ClipId(7)));
        Rc::new(map)
    }

    fn audio_ctx() -> (GameContext, Rc<RefCell<Vec<ClipId>>>) {
        let played = Rc::new(RefCell::new(Vec::new()));
        let ctx = GameContext::new(
            Box::new(NullSurface),
            Box::new(RecordingAudio { played: Rc::clone(&played) }),
        );
        (ctx, played)
    }

    fn started_scene() -> (Scene, Rc<RefCell<PlayState>>, EventSource, GameContext, Rc<RefCell<Vec<ClipId>>>) {
        let (mut scene, state) = build_with_state(play_resources());
        let mut events = EventSource::new();
        let (mut ctx, played) = audio_ctx();
        scene.start(&mut events, &mut ctx);
        (scene, state, events, ctx, played)
    }

    fn click_card() -> InputEvent {
        InputEvent::PointerUp {
            x: CARD_X,
            y: CARD_Y,
            button: PointerButton::Primary,
        }
    }

    //--- Flip Tests -------------------------------------------------------

    #[test]
    fn clicking_the_card_plays_the_whistle_and_starts_the_flip() {
        let (mut scene, state, _events, mut ctx, played) = started_scene();

        scene.dispatch(&click_card(), &mut ctx);

        assert_eq!(*played.borrow(), vec![ClipId(7)]);
        assert_eq!(scene.tween_count(), 1);

        // First advance locks the card and starts shrinking.
        scene.update(0.05, &mut ctx);
        let snapshot = state.borrow();
        assert!(!snapshot.card_interactive);
        assert!(snapshot.card_scale_y < 1.0);
        assert!(!snapshot.face_up);
    }

    #[test]
    fn flip_swaps_the_face_at_the_midpoint_and_unlocks_at_the_end() {
        let (mut scene, state, _events, mut ctx, _) = started_scene();

        scene.dispatch(&click_card(), &mut ctx);

        // Finish the shrink half; the chained grow half is promoted.
        scene.update(FLIP_HALF, &mut ctx);
        assert_eq!(state.borrow().card_scale_y, 0.0);

        // First advance of the grow half swaps the face.
        scene.update(FLIP_HALF / 2.0, &mut ctx);
        assert!(state.borrow().face_up);
        assert!(!state.borrow().card_interactive);

        // Finish the grow half: full height, interactive again.
        scene.update(FLIP_HALF, &mut ctx);
        let snapshot = state.borrow();
        assert_eq!(snapshot.card_scale_y, 1.0);
        assert!(snapshot.card_interactive);
        assert_eq!(scene.tween_count(), 0);
    }

    #[test]
    fn second_flip_turns_the_card_back_down() {
        let (mut scene, state, _events, mut ctx, _) = started_scene();

        scene.dispatch(&click_card(), &mut ctx);
        scene.update(1.0, &mut ctx);
        scene.update(1.0, &mut ctx);
        assert!(state.borrow().face_up);

        scene.dispatch(&click_card(), &mut ctx);
        scene.update(1.0, &mut ctx);
        scene.update(1.0, &mut ctx);
        assert!(!state.borrow().face_up);
    }

    #[test]
    fn clicks_are_ignored_mid_flip() {
        let (mut scene, _state, _events, mut ctx, played) = started_scene();

        scene.dispatch(&click_card(), &mut ctx);
        scene.update(0.05, &mut ctx);

        // Card is locked; a second click starts nothing.
        scene.dispatch(&click_card(), &mut ctx);
        assert_eq!(scene.tween_count(), 1);
        assert_eq!(played.borrow().len(), 1);
    }

    #[test]
    fn clicks_outside_the_card_do_nothing() {
        let (mut scene, _state, _events, mut ctx, played) = started_scene();

        let miss = InputEvent::PointerUp { x: 10.0, y: 10.0, button: PointerButton::Primary };
        scene.dispatch(&miss, &mut ctx);

        assert_eq!(scene.tween_count(), 0);
        assert!(played.borrow().is_empty());
    }

    #[test]
    fn missing_whistle_resource_is_tolerated() {
        // Build with an empty resource map: the click still flips, it
        // just plays nothing.
        let (mut scene, _state) = build_with_state(Rc::new(ResourceMap::new()));
        let mut events = EventSource::new();
        let (mut ctx, played) = audio_ctx();
        scene.start(&mut events, &mut ctx);

        scene.dispatch(&click_card(), &mut ctx);

        assert!(played.borrow().is_empty());
        assert_eq!(scene.tween_count(), 1);
    }

    //--- Key Binding Tests ------------------------------------------------

    #[test]
    fn key_f_queues_a_pause_toggle() {
        let (mut scene, _state, _events, mut ctx, _) = started_scene();

        scene.dispatch(&InputEvent::KeyDown(KeyCode::KeyF), &mut ctx);

        assert_eq!(ctx.commands.take(), vec![GameCommand::TogglePause]);
    }

    #[test]
    fn key_x_queues_a_transition_to_the_test_scene() {
        let (mut scene, _state, _events, mut ctx, _) = started_scene();

        scene.dispatch(&InputEvent::KeyDown(KeyCode::KeyX), &mut ctx);

        assert_eq!(
            ctx.commands.take(),
            vec![GameCommand::GoToScene(SCENE_TEST.to_string())]
        );
    }

    #[test]
    fn other_keys_queue_nothing() {
        let (mut scene, _state, _events, mut ctx, _) = started_scene();

        scene.dispatch(&InputEvent::KeyDown(KeyCode::Space), &mut ctx);

        assert!(ctx.commands.is_empty());
    }

    //--- Pause Banner Tests -----------------------------------------------

    #[test]
    fn pause_banner_follows_pause_state() {
        let (mut scene, state, _events, mut ctx, _) = started_scene();

        scene.pause(&mut ctx);
        assert!(state.borrow().pause_text_visible);

        scene.resume(&mut ctx);
        assert!(!state.borrow().pause_text_visible);
    }

    #[test]
    fn restart_resets_the_card() {
        let (mut scene, state, mut events, mut ctx, _) = started_scene();

        // Flip the card up, then leave and re-enter the scene.
        scene.dispatch(&click_card(), &mut ctx);
        scene.update(1.0, &mut ctx);
        scene.update(1.0, &mut ctx);
        assert!(state.borrow().face_up);

        scene.stop(&mut events, &mut ctx);
        scene.start(&mut events, &mut ctx);

        let snapshot = state.borrow();
        assert!(!snapshot.face_up);
        assert_eq!(snapshot.card_scale_y, 1.0);
        assert!(snapshot.card_interactive);
    }
}
