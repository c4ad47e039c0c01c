//=========================================================================
// Input Event Types
//
// Defines the internal representation of low-level input events.
//
// This module abstracts platform-specific input (e.g. Winit) into a
// unified, engine-friendly format used by scene input bindings.
//
// Responsibilities:
// - Represent keyboard and pointer inputs in a stable, portable way
// - Classify every event under an enumerated `EventKind`, the key type
//   used by the binding table (one handler per kind, last bind wins)
//
//=========================================================================

//=== PointerButton =======================================================

/// Physical pointer button identifier.
///
/// Abstracts platform-specific button representations (e.g., Winit's
/// `MouseButton`, a browser's `button` index) into a stable enum.
/// `Other` covers side buttons and any non-standard inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerButton {
    /// Primary button (typically left, or a touch contact).
    Primary,

    /// Secondary button (typically right).
    Secondary,

    /// Middle button (wheel click).
    Middle,

    /// Any other button.
    Other,
}

//=== KeyCode =============================================================

/// Physical keyboard key identifier.
///
/// Represents the physical key location, not the character produced, so
/// bindings stay stable across keyboard layouts.
///
/// Coverage: alphanumeric keys, arrows, and the common special keys the
/// game layer binds. Additional codes can be added without breaking
/// existing code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    //--- Numeric Keys -----------------------------------------------------

    /// Number row: 0-9
    Digit0, Digit1, Digit2, Digit3, Digit4,
    Digit5, Digit6, Digit7, Digit8, Digit9,

    //--- Alphabetic Keys --------------------------------------------------

    /// Letter keys: A-Z (physical location, not character)
    KeyA, KeyB, KeyC, KeyD, KeyE, KeyF, KeyG, KeyH, KeyI,
    KeyJ, KeyK, KeyL, KeyM, KeyN, KeyO, KeyP, KeyQ, KeyR,
    KeyS, KeyT, KeyU, KeyV, KeyW, KeyX, KeyY, KeyZ,

    //--- Arrow Keys -------------------------------------------------------

    ArrowDown,
    ArrowLeft,
    ArrowRight,
    ArrowUp,

    //--- Special Keys -----------------------------------------------------

    Space,
    Enter,
    Escape,
    Tab,
    Backspace,
    Delete,

    /// Fallback for keys not explicitly mapped by the platform layer.
    Unidentified,
}

//=== EventKind ===========================================================

/// Enumerated classification of input events.
///
/// This is the key type of the binding table: a scene binds at most one
/// handler per kind, and subscribes kinds with the global event source
/// while running.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    KeyDown,
    KeyUp,
    PointerDown,
    PointerUp,
    PointerMove,
}

impl EventKind {
    /// Whether this kind targets child visuals rather than the whole
    /// scene. Pointer kinds are muted while a scene's interactivity is
    /// disabled; keyboard kinds are not.
    pub fn is_pointer(self) -> bool {
        matches!(self, Self::PointerDown | Self::PointerUp | Self::PointerMove)
    }
}

//=== InputEvent ==========================================================

/// Low-level input event from the platform layer.
///
/// Pointer coordinates are in stage space (pixels, top-left origin).
/// Button events carry the cursor position at the time of the press so
/// hit testing does not depend on a separate move event.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Key pressed down.
    KeyDown(KeyCode),

    /// Key released.
    KeyUp(KeyCode),

    /// Pointer button pressed.
    PointerDown { x: f32, y: f32, button: PointerButton },

    /// Pointer button released.
    PointerUp { x: f32, y: f32, button: PointerButton },

    /// Pointer moved to a new position.
    PointerMove { x: f32, y: f32 },
}

impl InputEvent {
    /// Returns the binding-table kind this event routes under.
    pub fn kind(&self) -> EventKind {
        match self {
            Self::KeyDown(_) => EventKind::KeyDown,
            Self::KeyUp(_) => EventKind::KeyUp,
            Self::PointerDown { .. } => EventKind::PointerDown,
            Self::PointerUp { .. } => EventKind::PointerUp,
            Self::PointerMove { .. } => EventKind::PointerMove,
        }
    }

    /// Returns the pointer position, or `None` for keyboard events.
    pub fn position(&self) -> Option<(f32, f32)> {
        match *self {
            Self::PointerDown { x, y, .. }
            | Self::PointerUp { x, y, .. }
            | Self::PointerMove { x, y } => Some((x, y)),
            _ => None,
        }
    }

    /// Returns the key code for keyboard events, `None` otherwise.
    pub fn key(&self) -> Option<KeyCode> {
        match *self {
            Self::KeyDown(key) | Self::KeyUp(key) => Some(key),
            _ => None,
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
