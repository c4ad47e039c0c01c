//=========================================================================
// Game Controller
//=========================================================================
//
// Top-level coordinator: owns the scene manager, the global event
// source, the asset manifest, and the shared game context handed to
// scenes.
//
// Architecture:
// ```text
//   GameHooks (load / setup_scenes)      ← game-specific
//        │
//   Game ─ phase: Created → Ready → Loading → Running → Destroyed
//        ├─ SceneManager  (single active scene)
//        ├─ EventSource   (platform events in, scene dispatch out)
//        └─ GameContext   (surface, audio, command queue)
// ```
//
// The context object replaces a global controller singleton: scenes and
// widgets receive capabilities explicitly, and several independent
// games can coexist in one process.
//
// Precondition violations (init twice, start before init, destroy
// before init) log a diagnostic and no-op; nothing here panics.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::rc::Rc;

use log::{debug, error, info, warn};

//=== Internal Dependencies ===============================================

use crate::core::assets::{AssetLoader, AssetManifest, LoadPoll, ResourceMap};
use crate::core::audio::AudioMixer;
use crate::core::input::event::InputEvent;
use crate::core::input::EventSource;
use crate::core::scene::{CommandQueue, GameCommand, SceneManager};
use crate::core::surface::{NodeHandle, RenderSurface, StageMetrics};

//=== GameContext =========================================================

/// Shared capabilities passed down to scenes and widgets.
///
/// Owned by the [`Game`] once initialized and released on destroy.
pub struct GameContext {
    /// The injected render surface.
    pub surface: Box<dyn RenderSurface>,

    /// The injected audio mixer.
    pub audio: Box<dyn AudioMixer>,

    /// Deferred commands queued by scene code, processed at the tick
    /// boundary.
    pub commands: CommandQueue,
}

impl GameContext {
    pub fn new(surface: Box<dyn RenderSurface>, audio: Box<dyn AudioMixer>) -> Self {
        Self {
            surface,
            audio,
            commands: CommandQueue::new(),
        }
    }
}

//=== GameHooks ===========================================================

/// Game-specific behavior composed into the controller.
pub trait GameHooks {
    /// Declares the assets the game needs. Called once during `init`.
    fn load(&mut self) -> AssetManifest;

    /// Registers scenes and transitions to the initial one. Called once
    /// when asset loading completes.
    fn setup_scenes(&mut self, setup: &mut SetupContext<'_>);
}

//=== SetupContext ========================================================

/// Capabilities available to [`GameHooks::setup_scenes`].
pub struct SetupContext<'a> {
    pub scenes: &'a mut SceneManager,
    pub events: &'a mut EventSource,
    pub ctx: &'a mut GameContext,

    /// The freshly loaded resource lookup, to share with new scenes.
    pub resources: &'a Rc<ResourceMap>,
}

impl SetupContext<'_> {
    /// Transitions to a registered scene.
    pub fn go_to_scene(&mut self, name: &str) -> bool {
        self.scenes.go_to_scene(name, self.events, self.ctx)
    }
}

//=== GamePhase ===========================================================

/// Coarse lifecycle of the game controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Constructed; `init` not yet called.
    Created,

    /// Initialized: surface attached, manifest declared.
    Ready,

    /// Assets loading; polled every tick.
    Loading,

    /// Scenes set up, tick loop live.
    Running,

    /// Torn down and inert.
    Destroyed,
}

//=== Game ================================================================

/// The game controller.
///
/// Drives the whole lifecycle from an external per-frame tick:
///
/// 1. `init(surface, audio, sizing)` — one-time; collects the asset
///    manifest via [`GameHooks::load`].
/// 2. `start(loader)` — begins the asynchronous asset load.
/// 3. `tick(delta)` — polls the load; once complete, runs
///    [`GameHooks::setup_scenes`] and thereafter routes input and
///    updates the current scene each frame.
/// 4. `destroy()` — clears all scenes and the surface; the game is
///    inert afterwards.
pub struct Game {
    hooks: Box<dyn GameHooks>,
    scenes: SceneManager,
    events: EventSource,
    ctx: Option<GameContext>,
    manifest: AssetManifest,
    loader: Option<Box<dyn AssetLoader>>,
    resources: Rc<ResourceMap>,
    phase: GamePhase,
    requested_size: StageMetrics,
    overlay: Option<NodeHandle>,
    debug_mode: bool,
    last_progress: f32,
}

impl Game {
    //--- Construction -----------------------------------------------------

    /// Creates an uninitialized game around the given hooks.
    pub fn new(hooks: Box<dyn GameHooks>) -> Self {
        Self {
            hooks,
            scenes: SceneManager::new(),
            events: EventSource::new(),
            ctx: None,
            manifest: AssetManifest::new(),
            loader: None,
            resources: Rc::new(ResourceMap::new()),
            phase: GamePhase::Created,
            requested_size: StageMetrics::default(),
            overlay: None,
            debug_mode: false,
            last_progress: 0.0,
        }
    }

    /// Enables the persistent debug overlay (frame-rate readout node)
    /// and no-current-scene diagnostics. Effective if set before `init`.
    pub fn set_debug_mode(&mut self, debug: bool) {
        self.debug_mode = debug;
    }

    //--- Lifecycle --------------------------------------------------------

    /// One-time initialization: records the render surface and stage
    /// sizing, then collects the asset manifest from the game's `load`
    /// hook. Logs and no-ops if already initialized.
    pub fn init(
        &mut self,
        surface: Box<dyn RenderSurface>,
        audio: Box<dyn AudioMixer>,
        sizing: StageMetrics,
    ) {
        if self.phase != GamePhase::Created {
            error!("game already initialized");
            return;
        }

        info!("initializing stage at {}x{}", sizing.width, sizing.height);
        self.requested_size = sizing;
        self.ctx = Some(GameContext::new(surface, audio));
        self.overlay = self.debug_mode.then(NodeHandle::next);
        self.manifest = self.hooks.load();
        self.phase = GamePhase::Ready;
    }

    /// Begins the asynchronous asset load. Logs and no-ops if `init`
    /// was not called or no assets were declared.
    pub fn start(&mut self, mut loader: Box<dyn AssetLoader>) {
        match self.phase {
            GamePhase::Ready => {}
            GamePhase::Created => {
                error!("game not initialized");
                return;
            }
            _ => {
                error!("game already started");
                return;
            }
        }

        if self.manifest.is_empty() {
            error!("no assets declared for the game");
            return;
        }

        info!("loading {} assets", self.manifest.len());
        loader.begin(&self.manifest);
        self.loader = Some(loader);
        self.last_progress = 0.0;
        self.phase = GamePhase::Loading;
    }

    /// Advances the game by one frame.
    ///
    /// While loading, polls the loader; while running, routes input to
    /// the current scene, updates it, and processes queued commands.
    pub fn tick(&mut self, delta: f32) {
        match self.phase {
            GamePhase::Loading => self.poll_loader(),
            GamePhase::Running => self.run_frame(delta),
            _ => {}
        }
    }

    /// Tears the game down: cleans up and clears every scene, empties
    /// the surface, and releases the context. Safe to call once; later
    /// calls log and no-op.
    pub fn destroy(&mut self) {
        match self.phase {
            GamePhase::Created | GamePhase::Destroyed => {
                error!("game not initialized; cannot destroy");
                return;
            }
            _ => {}
        }

        info!("destroying game");
        self.scenes.clear_all(&mut self.events);
        if let Some(ctx) = self.ctx.as_mut() {
            ctx.surface.clear_children();
        }
        self.ctx = None;
        self.loader = None;
        self.events.clear_pending();
        self.phase = GamePhase::Destroyed;
    }

    //--- Scene Control ----------------------------------------------------

    /// Transitions to a registered scene; on success the surface child
    /// list is reset to exactly the new scene's root plus the debug
    /// overlay, if any.
    pub fn go_to_scene(&mut self, name: &str) -> bool {
        let Some(ctx) = self.ctx.as_mut() else {
            warn!("go_to_scene({:?}) before init", name);
            return false;
        };

        if self.scenes.go_to_scene(name, &mut self.events, ctx) {
            self.reset_surface();
            true
        } else {
            false
        }
    }

    //--- Input ------------------------------------------------------------

    /// Queues a platform input event for the next frame.
    pub fn publish_event(&mut self, event: InputEvent) {
        self.events.publish(event);
    }

    //--- Queries ----------------------------------------------------------

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Stage size as reported by the surface; zeroed when uninitialized
    /// so widget layout code can run unconditionally.
    pub fn stage_metrics(&self) -> StageMetrics {
        self.ctx
            .as_ref()
            .map(|ctx| ctx.surface.metrics())
            .unwrap_or_default()
    }

    pub fn scene_manager(&self) -> &SceneManager {
        &self.scenes
    }

    /// Stage size requested at init (may differ from what the surface
    /// reports if the host resized it).
    pub fn requested_size(&self) -> StageMetrics {
        self.requested_size
    }

    //--- Internal: Loading ------------------------------------------------

    fn poll_loader(&mut self) {
        let Some(loader) = self.loader.as_mut() else {
            return;
        };

        match loader.poll() {
            LoadPoll::InProgress(progress) => {
                if (progress - self.last_progress).abs() > f32::EPSILON {
                    debug!("loading assets: {:.0}%", progress * 100.0);
                    self.last_progress = progress;
                }
            }
            LoadPoll::Complete(map) => {
                info!("asset load complete ({} resources)", map.len());
                self.resources = Rc::new(map);
                self.loader = None;
                self.setup_scenes();
                self.phase = GamePhase::Running;
            }
        }
    }

    fn setup_scenes(&mut self) {
        {
            let Some(ctx) = self.ctx.as_mut() else {
                return;
            };
            let mut setup = SetupContext {
                scenes: &mut self.scenes,
                events: &mut self.events,
                ctx,
                resources: &self.resources,
            };
            self.hooks.setup_scenes(&mut setup);
        }

        self.reset_surface();
    }

    //--- Internal: Frame --------------------------------------------------

    fn run_frame(&mut self, delta: f32) {
        let events = self.events.drain();

        if let Some(ctx) = self.ctx.as_mut() {
            for event in &events {
                self.scenes.dispatch(event, ctx);
            }

            self.scenes.update(delta, ctx);

            if self.debug_mode && self.scenes.current().is_none() {
                debug!("no current scene");
            }
        }

        self.process_commands();
    }

    fn process_commands(&mut self) {
        let commands = match self.ctx.as_mut() {
            Some(ctx) => ctx.commands.take(),
            None => return,
        };

        for command in commands {
            match command {
                GameCommand::PauseScene => self.with_current(|scene, ctx| scene.pause(ctx)),
                GameCommand::ResumeScene => self.with_current(|scene, ctx| scene.resume(ctx)),
                GameCommand::TogglePause => self.with_current(|scene, ctx| {
                    if scene.is_paused() {
                        scene.resume(ctx);
                    } else {
                        scene.pause(ctx);
                    }
                }),
                GameCommand::GoToScene(name) => {
                    self.go_to_scene(&name);
                }
            }
        }
    }

    fn with_current<F>(&mut self, f: F)
    where
        F: FnOnce(&mut crate::core::scene::Scene, &mut GameContext),
    {
        let Some(ctx) = self.ctx.as_mut() else {
            return;
        };
        if let Some(current) = self.scenes.current() {
            let mut scene = current.borrow_mut();
            f(&mut scene, ctx);
        }
    }

    /// Resets the surface child list to the current scene's root plus
    /// the persistent overlay, if any.
    fn reset_surface(&mut self) {
        let Some(ctx) = self.ctx.as_mut() else {
            return;
        };

        ctx.surface.clear_children();

        if let Some(overlay) = self.overlay {
            ctx.surface.add_child(overlay);
        }

        if let Some(current) = self.scenes.current() {
            if let Some(root) = current.borrow().root() {
                ctx.surface.add_child(root);
            }
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::assets::{Resource, TextureId};
    use crate::core::audio::NullAudio;
    use crate::core::input::event::{EventKind, KeyCode};
    use crate::core::scene::{Scene, SceneHooks};
    use std::cell::{Cell, RefCell};

    //--- Test Collaborators -----------------------------------------------

    #[derive(Default)]
    struct SurfaceLog {
        children: RefCell<Vec<NodeHandle>>,
        clears: Cell<u32>,
    }

    struct RecordingSurface {
        log: Rc<SurfaceLog>,
        size: StageMetrics,
    }

    impl RenderSurface for RecordingSurface {
        fn add_child(&mut self, node: NodeHandle) {
            self.log.children.borrow_mut().push(node);
        }
        fn remove_child(&mut self, node: NodeHandle) {
            self.log.children.borrow_mut().retain(|n| *n != node);
        }
        fn clear_children(&mut self) {
            self.log.children.borrow_mut().clear();
            self.log.clears.set(self.log.clears.get() + 1);
        }
        fn metrics(&self) -> StageMetrics {
            self.size
        }
    }

    fn recording_surface() -> (Box<dyn RenderSurface>, Rc<SurfaceLog>) {
        let log = Rc::new(SurfaceLog::default());
        let surface = RecordingSurface {
            log: Rc::clone(&log),
            size: StageMetrics::new(1280.0, 720.0),
        };
        (Box::new(surface), log)
    }

    struct InstantLoader;

    impl AssetLoader for InstantLoader {
        fn begin(&mut self, _manifest: &AssetManifest) {}

        fn poll(&mut self) -> LoadPoll {
            let mut map = ResourceMap::new();
            map.insert("card-back.png", Resource::Texture(TextureId(1)));
            LoadPoll::Complete(map)
        }
    }

    struct SlowLoader {
        polls: u32,
    }

    impl AssetLoader for SlowLoader {
        fn begin(&mut self, _manifest: &AssetManifest) {}

        fn poll(&mut self) -> LoadPoll {
            self.polls += 1;
            if self.polls < 3 {
                LoadPoll::InProgress(self.polls as f32 / 3.0)
            } else {
                LoadPoll::Complete(ResourceMap::new())
            }
        }
    }

    //--- Test Game --------------------------------------------------------

    struct NullHooks;

    impl SceneHooks for NullHooks {}

    struct SwitchOnKey;

    impl SceneHooks for SwitchOnKey {}

    struct TestHooks {
        loads: Rc<Cell<u32>>,
        setups: Rc<Cell<u32>>,
    }

    impl GameHooks for TestHooks {
        fn load(&mut self) -> AssetManifest {
            self.loads.set(self.loads.get() + 1);
            let mut manifest = AssetManifest::new();
            manifest.add("card-back.png");
            manifest
        }

        fn setup_scenes(&mut self, setup: &mut SetupContext<'_>) {
            self.setups.set(self.setups.get() + 1);

            let mut play = Scene::new(Box::new(SwitchOnKey), Rc::clone(setup.resources));
            play.bind(
                EventKind::KeyDown,
                Box::new(|event, services| match event.key() {
                    Some(KeyCode::KeyX) => services
                        .commands
                        .push(GameCommand::GoToScene("test".to_string())),
                    Some(KeyCode::KeyF) => services.commands.push(GameCommand::TogglePause),
                    _ => {}
                }),
            );
            setup.scenes.add_scene("play", play);

            let test = Scene::new(Box::new(NullHooks), Rc::clone(setup.resources));
            setup.scenes.add_scene("test", test);

            setup.go_to_scene("play");
        }
    }

    fn test_game() -> (Game, Rc<Cell<u32>>, Rc<Cell<u32>>, Rc<SurfaceLog>) {
        let loads = Rc::new(Cell::new(0));
        let setups = Rc::new(Cell::new(0));
        let mut game = Game::new(Box::new(TestHooks {
            loads: Rc::clone(&loads),
            setups: Rc::clone(&setups),
        }));

        let (surface, log) = recording_surface();
        game.init(surface, Box::new(NullAudio), StageMetrics::new(1280.0, 720.0));
        (game, loads, setups, log)
    }

    //--- Precondition Tests -----------------------------------------------

    #[test]
    fn init_is_one_time() {
        let (mut game, loads, _, _) = test_game();
        assert_eq!(game.phase(), GamePhase::Ready);
        assert_eq!(loads.get(), 1);

        let (surface, _) = recording_surface();
        game.init(surface, Box::new(NullAudio), StageMetrics::new(64.0, 64.0));

        // Second init is a logged no-op: load() not called again.
        assert_eq!(loads.get(), 1);
        assert_eq!(game.requested_size(), StageMetrics::new(1280.0, 720.0));
    }

    #[test]
    fn start_before_init_is_noop() {
        let mut game = Game::new(Box::new(TestHooks {
            loads: Rc::new(Cell::new(0)),
            setups: Rc::new(Cell::new(0)),
        }));

        game.start(Box::new(InstantLoader));
        assert_eq!(game.phase(), GamePhase::Created);
    }

    #[test]
    fn start_without_assets_is_noop() {
        struct EmptyHooks;

        impl GameHooks for EmptyHooks {
            fn load(&mut self) -> AssetManifest {
                AssetManifest::new()
            }
            fn setup_scenes(&mut self, _setup: &mut SetupContext<'_>) {}
        }

        let mut game = Game::new(Box::new(EmptyHooks));
        let (surface, _) = recording_surface();
        game.init(surface, Box::new(NullAudio), StageMetrics::new(64.0, 64.0));

        game.start(Box::new(InstantLoader));
        assert_eq!(game.phase(), GamePhase::Ready);
    }

    #[test]
    fn stage_metrics_zeroed_before_init() {
        let game = Game::new(Box::new(TestHooks {
            loads: Rc::new(Cell::new(0)),
            setups: Rc::new(Cell::new(0)),
        }));
        assert_eq!(game.stage_metrics(), StageMetrics::default());
    }

    #[test]
    fn stage_metrics_reports_surface_size_after_init() {
        let (game, _, _, _) = test_game();
        assert_eq!(game.stage_metrics(), StageMetrics::new(1280.0, 720.0));
    }

    //--- Loading Tests ----------------------------------------------------

    #[test]
    fn loading_completes_and_sets_up_scenes() {
        let (mut game, _, setups, log) = test_game();

        game.start(Box::new(InstantLoader));
        assert_eq!(game.phase(), GamePhase::Loading);
        assert_eq!(setups.get(), 0);

        game.tick(0.016);
        assert_eq!(game.phase(), GamePhase::Running);
        assert_eq!(setups.get(), 1);
        assert_eq!(game.scene_manager().current_name(), Some("play"));

        // Surface holds exactly the play scene's root.
        let current = game.scene_manager().current().expect("current");
        let root = current.borrow().root().expect("root");
        assert_eq!(*log.children.borrow(), vec![root]);
    }

    #[test]
    fn loading_polls_until_complete() {
        let (mut game, _, setups, _) = test_game();
        game.start(Box::new(SlowLoader { polls: 0 }));

        game.tick(0.016);
        game.tick(0.016);
        assert_eq!(game.phase(), GamePhase::Loading);

        game.tick(0.016);
        assert_eq!(game.phase(), GamePhase::Running);
        assert_eq!(setups.get(), 1);
    }

    //--- Frame Tests ------------------------------------------------------

    fn running_game() -> (Game, Rc<SurfaceLog>) {
        let (mut game, _, _, log) = test_game();
        game.start(Box::new(InstantLoader));
        game.tick(0.016);
        (game, log)
    }

    #[test]
    fn key_command_switches_scene() {
        let (mut game, log) = running_game();

        game.publish_event(InputEvent::KeyDown(KeyCode::KeyX));
        game.tick(0.016);

        assert_eq!(game.scene_manager().current_name(), Some("test"));

        let current = game.scene_manager().current().expect("current");
        assert!(current.borrow().is_running());
        let root = current.borrow().root().expect("root");
        assert_eq!(*log.children.borrow(), vec![root]);
    }

    #[test]
    fn toggle_pause_round_trips_current_scene() {
        let (mut game, _) = running_game();

        game.publish_event(InputEvent::KeyDown(KeyCode::KeyF));
        game.tick(0.016);
        {
            let current = game.scene_manager().current().expect("current");
            assert!(current.borrow().is_paused());
        }

        // Pause keeps bindings attached (only stop detaches), so the
        // toggle works back.
        game.publish_event(InputEvent::KeyDown(KeyCode::KeyF));
        game.tick(0.016);
        let current = game.scene_manager().current().expect("current");
        assert!(current.borrow().is_running());
    }

    #[test]
    fn events_for_unbound_kinds_are_dropped() {
        let (mut game, _) = running_game();

        game.publish_event(InputEvent::KeyUp(KeyCode::KeyX));
        game.tick(0.016);

        assert_eq!(game.scene_manager().current_name(), Some("play"));
    }

    #[test]
    fn go_to_unknown_scene_returns_false() {
        let (mut game, _) = running_game();
        assert!(!game.go_to_scene("missing"));
        assert_eq!(game.scene_manager().current_name(), Some("play"));
    }

    //--- Destroy Tests ----------------------------------------------------

    #[test]
    fn destroy_clears_scenes_and_goes_inert() {
        let (mut game, log) = running_game();

        game.destroy();
        assert_eq!(game.phase(), GamePhase::Destroyed);
        assert!(game.scene_manager().is_empty());
        assert!(log.children.borrow().is_empty());
        assert!(log.clears.get() >= 1);

        // Inert afterwards.
        game.tick(0.016);
        assert!(!game.go_to_scene("play"));
        assert_eq!(game.stage_metrics(), StageMetrics::default());
    }

    #[test]
    fn destroy_twice_is_noop() {
        let (mut game, _) = running_game();
        game.destroy();
        game.destroy();
        assert_eq!(game.phase(), GamePhase::Destroyed);
    }

    #[test]
    fn destroy_before_init_is_noop() {
        let mut game = Game::new(Box::new(TestHooks {
            loads: Rc::new(Cell::new(0)),
            setups: Rc::new(Cell::new(0)),
        }));
        game.destroy();
        assert_eq!(game.phase(), GamePhase::Created);
    }

    #[test]
    fn independent_games_coexist_in_one_process() {
        let (mut first, _) = running_game();
        let (mut second, _) = running_game();

        first.publish_event(InputEvent::KeyDown(KeyCode::KeyX));
        first.tick(0.016);

        // Only the game that saw the key switched scenes.
        assert_eq!(first.scene_manager().current_name(), Some("test"));
        second.tick(0.016);
        assert_eq!(second.scene_manager().current_name(), Some("play"));
    }

    //--- Debug Overlay Tests ----------------------------------------------

    #[test]
    fn debug_mode_keeps_overlay_on_surface() {
        let loads = Rc::new(Cell::new(0));
        let setups = Rc::new(Cell::new(0));
        let mut game = Game::new(Box::new(TestHooks {
            loads: Rc::clone(&loads),
            setups: Rc::clone(&setups),
        }));
        game.set_debug_mode(true);

        let (surface, log) = recording_surface();
        game.init(surface, Box::new(NullAudio), StageMetrics::new(1280.0, 720.0));
        game.start(Box::new(InstantLoader));
        game.tick(0.016);

        // Overlay first, then the scene root.
        assert_eq!(log.children.borrow().len(), 2);

        game.publish_event(InputEvent::KeyDown(KeyCode::KeyX));
        game.tick(0.016);

        // Overlay persists across transitions.
        assert_eq!(log.children.borrow().len(), 2);
    }
}
