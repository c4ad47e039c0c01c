//=========================================================================
// Input Binding System
//
// Maps enumerated event kinds to scene handlers, and models the global
// event source scenes attach to while running.
//
// Architecture:
//   Platform → EventSource (pending + subscriptions) → Scene dispatch
//                                                         ↓
//                                           InputBindings (kind → handler)
//
// Responsibilities:
// - Hold at most one handler per event kind (re-binding replaces)
// - Track which kinds the running scene is subscribed to
// - Drop events nobody is subscribed to at drain time
//
//=========================================================================

//=== Submodules ==========================================================

pub mod event;

//=== External Dependencies ===============================================

use std::collections::{HashMap, HashSet};

//=== Internal Dependencies ===============================================

use crate::core::scene::SceneServices;
use event::{EventKind, InputEvent};

//=== BindingHandler ======================================================

/// Callback invoked when a bound event kind fires on a running scene.
///
/// Handlers receive the event plus the scene's services so they can
/// start tweens, play audio, or queue game commands (pause, scene
/// transitions) without re-entering the scene itself.
pub type BindingHandler = Box<dyn FnMut(&InputEvent, &mut SceneServices<'_>)>;

//=== InputBindings =======================================================

/// Event-kind → handler table owned by a scene.
///
/// Keys are unique: binding a kind that already has a handler replaces
/// the previous one (last writer wins).
#[derive(Default)]
pub struct InputBindings {
    handlers: HashMap<EventKind, BindingHandler>,
}

impl InputBindings {
    /// Creates an empty binding table.
    pub fn new() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }

    //--- Binding API ------------------------------------------------------

    /// Associates a handler with an event kind.
    ///
    /// Replaces any previous handler for the same kind.
    pub fn bind(&mut self, kind: EventKind, handler: BindingHandler) {
        self.handlers.insert(kind, handler);
    }

    /// Removes the handler for a kind, if any.
    pub fn unbind(&mut self, kind: EventKind) {
        self.handlers.remove(&kind);
    }

    /// Removes every handler.
    pub fn clear(&mut self) {
        self.handlers.clear();
    }

    //--- Queries ----------------------------------------------------------

    /// Returns the kinds that currently have handlers.
    pub fn kinds(&self) -> Vec<EventKind> {
        self.handlers.keys().copied().collect()
    }

    /// Returns a mutable reference to the handler for a kind, if bound.
    pub fn handler_mut(&mut self, kind: EventKind) -> Option<&mut BindingHandler> {
        self.handlers.get_mut(&kind)
    }

    pub fn has(&self, kind: EventKind) -> bool {
        self.handlers.contains_key(&kind)
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

//=== EventSource =========================================================

/// The global event source scenes attach to.
///
/// The platform layer publishes events here each frame; the game drains
/// them at the tick boundary and routes them to the current scene. Only
/// events whose kind is subscribed survive the drain — a scene that is
/// not running has unsubscribed its kinds and receives nothing.
///
/// Subscriptions are a set: subscribing a kind twice is a no-op, and
/// unsubscribing a kind that was never attached is a no-op as well.
#[derive(Default)]
pub struct EventSource {
    pending: Vec<InputEvent>,
    subscriptions: HashSet<EventKind>,
}

impl EventSource {
    /// Creates an event source with no pending events or subscriptions.
    pub fn new() -> Self {
        Self {
            pending: Vec::new(),
            subscriptions: HashSet::new(),
        }
    }

    //--- Publishing -------------------------------------------------------

    /// Queues an event for the next drain.
    pub fn publish(&mut self, event: InputEvent) {
        self.pending.push(event);
    }

    //--- Subscription Management ------------------------------------------

    /// Subscribes a kind. Returns `false` if it was already subscribed.
    pub fn subscribe(&mut self, kind: EventKind) -> bool {
        self.subscriptions.insert(kind)
    }

    /// Unsubscribes a kind. Returns `false` if it was not subscribed.
    pub fn unsubscribe(&mut self, kind: EventKind) -> bool {
        self.subscriptions.remove(&kind)
    }

    pub fn is_subscribed(&self, kind: EventKind) -> bool {
        self.subscriptions.contains(&kind)
    }

    pub fn subscription_count(&self) -> usize {
        self.subscriptions.len()
    }

    //--- Draining ---------------------------------------------------------

    /// Takes all pending events whose kind is subscribed.
    ///
    /// Unsubscribed events are discarded — they belong to no attached
    /// scene and would otherwise pile up across transitions.
    pub fn drain(&mut self) -> Vec<InputEvent> {
        let pending = std::mem::take(&mut self.pending);
        pending
            .into_iter()
            .filter(|event| self.subscriptions.contains(&event.kind()))
            .collect()
    }

    /// Discards all pending events without routing them.
    pub fn clear_pending(&mut self) {
        self.pending.clear();
    }

    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
