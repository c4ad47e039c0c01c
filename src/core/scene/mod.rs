//=========================================================================
// Scene System
//=========================================================================
//
// Scene lifecycle state machine and scene-facing services.
//
// Architecture:
//   Scene
//     ├─ state: Stopped → Running ⇄ Paused, Running/Paused → Stopped
//     ├─ hooks: Box<dyn SceneHooks>   (game-specific behavior)
//     ├─ bindings: InputBindings      (kind → handler, last bind wins)
//     └─ tweens: TweenGroup           (in-flight animations)
//
// Flow:
//   Game tick → SceneManager → Scene::update / Scene::dispatch
//
// Bindings are attached to the global event source on start and
// detached on stop; cleanup detaches unconditionally and is idempotent.
//
//=========================================================================

//=== Module Declarations =================================================

mod command_queue;
mod scene_manager;

//=== Public API ==========================================================

pub use command_queue::{CommandQueue, GameCommand};
pub use scene_manager::SceneManager;

//=== External Dependencies ===============================================

use std::rc::Rc;

use log::debug;

//=== Internal Dependencies ===============================================

use crate::core::assets::{Resource, ResourceMap};
use crate::core::audio::AudioMixer;
use crate::core::game::GameContext;
use crate::core::input::event::{EventKind, InputEvent};
use crate::core::input::{BindingHandler, EventSource, InputBindings};
use crate::core::surface::{NodeHandle, RenderSurface};
use crate::core::tween::{Tween, TweenGroup};

//=== SceneState ==========================================================

/// Lifecycle state of a scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneState {
    /// Registered but inactive; bindings detached.
    Stopped,

    /// Active: receives updates and input, tweens advance.
    Running,

    /// Active but frozen: no updates, tweens and audio held.
    Paused,
}

//=== SceneServices =======================================================

/// Capabilities handed to scene hooks and input handlers.
///
/// Borrows the scene's own tween group and resource lookup alongside the
/// game-wide command queue, audio mixer, and render surface, so scene
/// code never needs a back-reference to the scene or the game.
pub struct SceneServices<'a> {
    /// The owning scene's in-flight animations.
    pub tweens: &'a mut TweenGroup,

    /// Read-only lookup of loaded asset handles.
    pub resources: &'a ResourceMap,

    /// Deferred commands (pause, resume, scene transitions), processed
    /// at the tick boundary.
    pub commands: &'a mut CommandQueue,

    /// The audio collaborator.
    pub audio: &'a mut dyn AudioMixer,

    /// The render surface collaborator.
    pub surface: &'a mut dyn RenderSurface,
}

impl SceneServices<'_> {
    /// Looks up a loaded resource; absent keys yield `None`.
    pub fn get_resource(&self, key: &str) -> Option<&Resource> {
        self.resources.get(key)
    }
}

//=== SceneHooks ==========================================================

/// Game-specific scene behavior.
///
/// Every hook has a default empty implementation, so a scene type only
/// implements the hooks it needs:
///
/// ```
/// use cardstage::core::scene::{SceneHooks, SceneServices};
///
/// struct TitleScene;
///
/// impl SceneHooks for TitleScene {
///     fn on_start(&mut self, _services: &mut SceneServices<'_>) {
///         // Only this hook is overridden.
///     }
/// }
/// ```
pub trait SceneHooks {
    /// Called when the scene transitions Stopped → Running.
    fn on_start(&mut self, _services: &mut SceneServices<'_>) {}

    /// Called when the scene transitions to Stopped.
    fn on_stop(&mut self, _services: &mut SceneServices<'_>) {}

    /// Called when the scene transitions Running → Paused.
    fn on_pause(&mut self, _services: &mut SceneServices<'_>) {}

    /// Called when the scene transitions Paused → Running.
    fn on_resume(&mut self, _services: &mut SceneServices<'_>) {}

    /// Called every tick while Running, before tweens advance.
    fn on_update(&mut self, _delta: f32, _services: &mut SceneServices<'_>) {}
}

//=== Scene ===============================================================

/// A self-contained visual/interactive mode of the game.
///
/// Owns its lifecycle state, input bindings, and in-flight tweens;
/// game-specific behavior is composed in through [`SceneHooks`]. Created
/// once, registered with the [`SceneManager`], and driven entirely
/// through explicit lifecycle calls.
pub struct Scene {
    state: SceneState,
    hooks: Box<dyn SceneHooks>,
    bindings: InputBindings,
    tweens: TweenGroup,
    resources: Rc<ResourceMap>,
    root: Option<NodeHandle>,
    interactive_children: bool,
}

impl Scene {
    //--- Construction -----------------------------------------------------

    /// Creates a stopped scene with the given behavior and resources.
    ///
    /// A fresh root node handle is minted for the scene's subtree on the
    /// render surface.
    pub fn new(hooks: Box<dyn SceneHooks>, resources: Rc<ResourceMap>) -> Self {
        Self {
            state: SceneState::Stopped,
            hooks,
            bindings: InputBindings::new(),
            tweens: TweenGroup::new(),
            resources,
            root: Some(NodeHandle::next()),
            interactive_children: false,
        }
    }

    /// Binds a handler for an event kind; re-binding replaces (last
    /// writer wins). Effective from the next `start`.
    pub fn bind(&mut self, kind: EventKind, handler: BindingHandler) {
        self.bindings.bind(kind, handler);
    }

    //--- Lifecycle --------------------------------------------------------

    /// Starts the scene. Valid only from Stopped; otherwise a no-op.
    ///
    /// Attaches all bound event kinds to the global event source,
    /// enables child interactivity, marks Running, and invokes the
    /// `on_start` hook.
    pub fn start(&mut self, events: &mut EventSource, ctx: &mut GameContext) {
        if self.state != SceneState::Stopped {
            debug!("scene start ignored in state {:?}", self.state);
            return;
        }

        for kind in self.bindings.kinds() {
            events.subscribe(kind);
        }

        self.interactive_children = true;
        self.state = SceneState::Running;
        self.with_services(ctx, |hooks, services| hooks.on_start(services));
    }

    /// Stops the scene. Valid from Running or Paused; otherwise a no-op.
    ///
    /// Detaches all bound event kinds, disables interactivity, marks
    /// Stopped, and invokes the `on_stop` hook.
    pub fn stop(&mut self, events: &mut EventSource, ctx: &mut GameContext) {
        if self.state == SceneState::Stopped {
            debug!("scene stop ignored in state {:?}", self.state);
            return;
        }

        for kind in self.bindings.kinds() {
            events.unsubscribe(kind);
        }

        self.interactive_children = false;
        self.state = SceneState::Stopped;
        self.with_services(ctx, |hooks, services| hooks.on_stop(services));
    }

    /// Pauses the scene. Valid only from Running; otherwise a silent
    /// no-op (no log, no hook).
    ///
    /// Holds all in-flight tweens and audio, disables interactivity,
    /// and invokes the `on_pause` hook.
    pub fn pause(&mut self, ctx: &mut GameContext) {
        if self.state != SceneState::Running {
            return;
        }

        self.state = SceneState::Paused;
        self.tweens.pause_all();
        ctx.audio.pause_all();
        self.interactive_children = false;
        self.with_services(ctx, |hooks, services| hooks.on_pause(services));
    }

    /// Resumes the scene. Valid only from Paused; otherwise a silent
    /// no-op.
    ///
    /// Releases tweens and audio, re-enables interactivity, and invokes
    /// the `on_resume` hook.
    pub fn resume(&mut self, ctx: &mut GameContext) {
        if self.state != SceneState::Paused {
            return;
        }

        self.state = SceneState::Running;
        self.tweens.resume_all();
        ctx.audio.resume_all();
        self.interactive_children = true;
        self.with_services(ctx, |hooks, services| hooks.on_resume(services));
    }

    /// Advances the scene by one frame. No-op unless Running.
    ///
    /// Invokes the `on_update` hook, then advances in-flight tweens by
    /// `delta` seconds.
    pub fn update(&mut self, delta: f32, ctx: &mut GameContext) {
        if self.state != SceneState::Running {
            return;
        }

        self.with_services(ctx, |hooks, services| hooks.on_update(delta, services));
        self.tweens.advance(delta);
    }

    /// Routes an input event to its bound handler.
    ///
    /// Bindings stay attached across pause (only `stop` detaches), so
    /// keyboard events reach their handler while Paused — that is how a
    /// pause toggle resumes. Pointer events additionally require child
    /// interactivity, which pause disables.
    pub fn dispatch(&mut self, event: &InputEvent, ctx: &mut GameContext) {
        if self.state == SceneState::Stopped {
            return;
        }

        if event.kind().is_pointer() && !self.interactive_children {
            return;
        }

        let GameContext { surface, audio, commands } = ctx;
        if let Some(handler) = self.bindings.handler_mut(event.kind()) {
            let mut services = SceneServices {
                tweens: &mut self.tweens,
                resources: &self.resources,
                commands,
                audio: audio.as_mut(),
                surface: surface.as_mut(),
            };
            handler(event, &mut services);
        }
    }

    /// Releases everything the scene holds: detaches bindings
    /// unconditionally (a no-op if nothing was attached), discards
    /// in-flight tweens, and drops the surface root handle. Idempotent.
    pub fn cleanup(&mut self, events: &mut EventSource) {
        for kind in self.bindings.kinds() {
            events.unsubscribe(kind);
        }

        self.bindings.clear();
        self.tweens.clear();
        self.root = None;
    }

    //--- Queries ----------------------------------------------------------

    pub fn state(&self) -> SceneState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == SceneState::Running
    }

    pub fn is_paused(&self) -> bool {
        self.state == SceneState::Paused
    }

    /// Whether child visuals currently accept interaction.
    pub fn interactive_children(&self) -> bool {
        self.interactive_children
    }

    /// The scene's root node on the render surface, until cleanup.
    pub fn root(&self) -> Option<NodeHandle> {
        self.root
    }

    /// Looks up a loaded resource; absent keys yield `None` and callers
    /// must check before use.
    pub fn get_resource(&self, key: &str) -> Option<&Resource> {
        self.resources.get(key)
    }

    /// Number of in-flight tweens.
    pub fn tween_count(&self) -> usize {
        self.tweens.len()
    }

    /// Starts a tween in this scene's group outside of a dispatch.
    pub fn start_tween(&mut self, tween: Tween) {
        self.tweens.start(tween);
    }

    //--- Internal Helpers -------------------------------------------------

    /// Runs a hook with services borrowed from the scene and context.
    fn with_services<F>(&mut self, ctx: &mut GameContext, f: F)
    where
        F: FnOnce(&mut dyn SceneHooks, &mut SceneServices<'_>),
    {
        let GameContext { surface, audio, commands } = ctx;
        let mut services = SceneServices {
            tweens: &mut self.tweens,
            resources: &self.resources,
            commands,
            audio: audio.as_mut(),
            surface: surface.as_mut(),
        };
        f(self.hooks.as_mut(), &mut services);
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
