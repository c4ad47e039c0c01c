//=========================================================================
// Platform Event Mapper
//
// Converts Winit input events to engine-level `InputEvent` types.
// Provides a clean separation between OS-specific input and the
// framework's internal event representation.
//
// Responsibilities:
// - Translate keyboard and mouse events
// - Attach the tracked cursor position to button events (Winit mouse
//   button events carry no coordinates)
// - Drop unmapped keys (F13-F24, numpad, media keys)
//
//=========================================================================

//=== External Dependencies ===============================================

use winit::event::{ElementState, KeyEvent, MouseButton as WinitMouseButton};
use winit::keyboard::{KeyCode as WinitKeyCode, PhysicalKey};

//=== Internal Dependencies ===============================================

use crate::core::input::event::{InputEvent, KeyCode, PointerButton};

//=== Keyboard Mapping ====================================================

/// Converts a Winit key event; unmapped keys yield `None`.
pub(crate) fn map_key_event(event: &KeyEvent) -> Option<InputEvent> {
    let PhysicalKey::Code(code) = event.physical_key else {
        return None;
    };

    let key = KeyCode::from(code);
    if matches!(key, KeyCode::Unidentified) {
        return None;
    }

    Some(match event.state {
        ElementState::Pressed => InputEvent::KeyDown(key),
        ElementState::Released => InputEvent::KeyUp(key),
    })
}

//=== Mouse Mapping =======================================================

/// Converts a Winit mouse button event, stamping it with the cursor
/// position tracked by the platform.
pub(crate) fn map_mouse_button(
    button: WinitMouseButton,
    state: ElementState,
    cursor: (f32, f32),
) -> InputEvent {
    let button = PointerButton::from(button);
    let (x, y) = cursor;

    match state {
        ElementState::Pressed => InputEvent::PointerDown { x, y, button },
        ElementState::Released => InputEvent::PointerUp { x, y, button },
    }
}

//=== Winit Conversions ===================================================

/// Converts Winit physical key codes to engine key codes.
///
/// Maps A-Z, 0-9, arrows, and common special keys. Everything else
/// returns `KeyCode::Unidentified` and is filtered by the caller.
impl From<WinitKeyCode> for KeyCode {
    fn from(code: WinitKeyCode) -> Self {
        use WinitKeyCode::*;
        match code {
            //--- Digits -------------------------------------------------------

            Digit0 => KeyCode::Digit0, Digit1 => KeyCode::Digit1,
            Digit2 => KeyCode::Digit2, Digit3 => KeyCode::Digit3,
            Digit4 => KeyCode::Digit4, Digit5 => KeyCode::Digit5,
            Digit6 => KeyCode::Digit6, Digit7 => KeyCode::Digit7,
            Digit8 => KeyCode::Digit8, Digit9 => KeyCode::Digit9,

            //--- Letters ------------------------------------------------------

            KeyA => KeyCode::KeyA, KeyB => KeyCode::KeyB, KeyC => KeyCode::KeyC,
            KeyD => KeyCode::KeyD, KeyE => KeyCode::KeyE, KeyF => KeyCode::KeyF,
            KeyG => KeyCode::KeyG, KeyH => KeyCode::KeyH, KeyI => KeyCode::KeyI,
            KeyJ => KeyCode::KeyJ, KeyK => KeyCode::KeyK, KeyL => KeyCode::KeyL,
            KeyM => KeyCode::KeyM, KeyN => KeyCode::KeyN, KeyO => KeyCode::KeyO,
            KeyP => KeyCode::KeyP, KeyQ => KeyCode::KeyQ, KeyR => KeyCode::KeyR,
            KeyS => KeyCode::KeyS, KeyT => KeyCode::KeyT, KeyU => KeyCode::KeyU,
            KeyV => KeyCode::KeyV, KeyW => KeyCode::KeyW, KeyX => KeyCode::KeyX,
            KeyY => KeyCode::KeyY, KeyZ => KeyCode::KeyZ,

            //--- Arrows -------------------------------------------------------

            ArrowDown => KeyCode::ArrowDown,
            ArrowLeft => KeyCode::ArrowLeft,
            ArrowRight => KeyCode::ArrowRight,
            ArrowUp => KeyCode::ArrowUp,

            //--- Specials -----------------------------------------------------

            Space => KeyCode::Space,
            Enter => KeyCode::Enter,
            Escape => KeyCode::Escape,
            Tab => KeyCode::Tab,
            Backspace => KeyCode::Backspace,
            Delete => KeyCode::Delete,

            _ => KeyCode::Unidentified,
        }
    }
}

/// Converts Winit mouse buttons to engine pointer buttons.
impl From<WinitMouseButton> for PointerButton {
    fn from(button: WinitMouseButton) -> Self {
        match button {
            WinitMouseButton::Left => PointerButton::Primary,
            WinitMouseButton::Right => PointerButton::Secondary,
            WinitMouseButton::Middle => PointerButton::Middle,
            _ => PointerButton::Other,
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
