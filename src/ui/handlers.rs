//=========================================================================
// Widget Event Handlers
//=========================================================================
//
// Enumerated widget events and the per-widget handler table.
//
// Mirrors the scene binding table at widget granularity: at most one
// handler per event, re-registering replaces (last writer wins).
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashMap;

//=== WidgetEvent =========================================================

/// Events a widget can route to user handlers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WidgetEvent {
    //--- Pointer ----------------------------------------------------------
    PointerDown,
    PointerUp,
    PointerOver,
    PointerOut,

    //--- Window Lifecycle -------------------------------------------------
    /// Fired before a window becomes visible.
    BeforeOpen,

    /// Fired after a window becomes visible.
    Open,

    /// Fired before a window is hidden.
    BeforeClose,

    /// Fired after a window is hidden.
    Close,

    //--- Dialog Outcomes --------------------------------------------------
    Confirm,
    Cancel,
}

//=== WidgetHandler =======================================================

/// Callback attached to a widget event.
pub type WidgetHandler = Box<dyn FnMut()>;

//=== HandlerMap ==========================================================

/// Event → handler table owned by a widget.
#[derive(Default)]
pub struct HandlerMap {
    handlers: HashMap<WidgetEvent, WidgetHandler>,
}

impl HandlerMap {
    pub fn new() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }

    /// Registers a handler; replaces any previous one for the event.
    pub fn set(&mut self, event: WidgetEvent, handler: WidgetHandler) {
        self.handlers.insert(event, handler);
    }

    /// Runs the handler for an event, if registered. Returns whether a
    /// handler ran.
    pub fn fire(&mut self, event: WidgetEvent) -> bool {
        if let Some(handler) = self.handlers.get_mut(&event) {
            handler();
            true
        } else {
            false
        }
    }

    pub fn has(&self, event: WidgetEvent) -> bool {
        self.handlers.contains_key(&event)
    }

    pub fn clear(&mut self) {
        self.handlers.clear();
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
