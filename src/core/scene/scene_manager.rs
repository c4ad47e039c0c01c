//=========================================================================
// Scene Manager
//=========================================================================
//
// Manages scene registration and single-active-scene transitions.
//
// Scenes are stored in a HashMap by name and shared via Rc so the
// current reference can outlive registry removal, matching the observed
// behavior of the registry this reimplements. At most one scene is
// Running at a time; switching stops the outgoing scene before the
// incoming one starts.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use log::{debug, warn};

//=== Internal Dependencies ===============================================

use super::Scene;
use crate::core::game::GameContext;
use crate::core::input::event::InputEvent;
use crate::core::input::EventSource;

//=== SceneManager ========================================================

/// Registry of named scenes enforcing the single-active-scene invariant.
///
/// Scenes are registered once under a unique name and activated via
/// [`go_to_scene`](Self::go_to_scene). Failed lookups are reported with
/// sentinel returns, never panics.
#[derive(Default)]
pub struct SceneManager {
    scenes: HashMap<String, Rc<RefCell<Scene>>>,
    current: Option<Rc<RefCell<Scene>>>,
    current_name: Option<String>,
}

impl SceneManager {
    //--- Construction -----------------------------------------------------

    /// Creates a manager with no scenes and no current scene.
    pub fn new() -> Self {
        Self {
            scenes: HashMap::new(),
            current: None,
            current_name: None,
        }
    }

    //--- Registration -----------------------------------------------------

    /// Registers a scene under `name`.
    ///
    /// An already-registered name is NOT overwritten: the prior scene is
    /// preserved, a warning is logged, and `false` is returned.
    pub fn add_scene(&mut self, name: impl Into<String>, scene: Scene) -> bool {
        let name = name.into();

        if self.scenes.contains_key(&name) {
            warn!("scene {:?} is already registered; keeping the existing scene", name);
            return false;
        }

        debug!("registered scene {:?}", name);
        self.scenes.insert(name, Rc::new(RefCell::new(scene)));
        true
    }

    /// Whether a scene is registered under `name`.
    pub fn has_scene(&self, name: &str) -> bool {
        self.scenes.contains_key(name)
    }

    //--- Transitions ------------------------------------------------------

    /// Makes the named scene current.
    ///
    /// Returns `false` (current scene unchanged) if `name` is not
    /// registered. Otherwise the outgoing scene, if any, is stopped
    /// before the target starts; exactly one scene is Running
    /// afterwards.
    pub fn go_to_scene(
        &mut self,
        name: &str,
        events: &mut EventSource,
        ctx: &mut GameContext,
    ) -> bool {
        let Some(next) = self.scenes.get(name) else {
            return false;
        };
        let next = Rc::clone(next);

        if let Some(current) = self.current.take() {
            current.borrow_mut().stop(events, ctx);
        }

        debug!("transitioning to scene {:?}", name);
        next.borrow_mut().start(events, ctx);
        self.current = Some(next);
        self.current_name = Some(name.to_string());

        true
    }

    /// Removes the named scene from the registry after cleaning it up.
    ///
    /// Returns `false` if absent. Removing the current scene leaves the
    /// live current reference in place; only the registry entry is
    /// dropped, so a later `go_to_scene` with the same name fails.
    pub fn remove_scene(&mut self, name: &str, events: &mut EventSource) -> bool {
        let Some(scene) = self.scenes.remove(name) else {
            return false;
        };

        debug!("removing scene {:?}", name);
        scene.borrow_mut().cleanup(events);
        true
    }

    /// Cleans up every registered scene exactly once and empties the
    /// registry. Used on game teardown.
    pub fn clear_all(&mut self, events: &mut EventSource) {
        debug!("clearing all {} registered scenes", self.scenes.len());

        for scene in self.scenes.values() {
            scene.borrow_mut().cleanup(events);
        }

        self.scenes.clear();
    }

    //--- Frame Forwarding -------------------------------------------------

    /// Advances the current scene, if any.
    pub fn update(&mut self, delta: f32, ctx: &mut GameContext) {
        if let Some(current) = &self.current {
            current.borrow_mut().update(delta, ctx);
        }
    }

    /// Routes an input event to the current scene, if any.
    pub fn dispatch(&mut self, event: &InputEvent, ctx: &mut GameContext) {
        if let Some(current) = &self.current {
            current.borrow_mut().dispatch(event, ctx);
        }
    }

    //--- Queries ----------------------------------------------------------

    /// The current scene, shared with the registry.
    pub fn current(&self) -> Option<Rc<RefCell<Scene>>> {
        self.current.clone()
    }

    /// The name the current scene was activated under.
    pub fn current_name(&self) -> Option<&str> {
        self.current_name.as_deref()
    }

    pub fn len(&self) -> usize {
        self.scenes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scenes.is_empty()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
