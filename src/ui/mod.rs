//=========================================================================
// Widget Toolkit
//
// Small GUI layer composed over the framework core: buttons, windows,
// and dialogs that draw through the injected `Canvas` capability and
// consume `InputEvent`s routed to them by scene code.
//
// Widgets are plain values with explicit configuration structs; there
// is no retained widget tree beyond a window's own children.
//
//=========================================================================

//=== Module Declarations =================================================

pub mod button;
pub mod config;
pub mod confirm_dialog;
pub mod draggable_window;
pub mod handlers;
pub mod window;

//=== Public API ==========================================================

pub use button::Button;
pub use config::{ButtonConfig, ConfirmDialogConfig, DraggableWindowConfig, WindowConfig};
pub use confirm_dialog::ConfirmDialog;
pub use draggable_window::DraggableWindow;
pub use handlers::{HandlerMap, WidgetEvent, WidgetHandler};
pub use window::WindowFrame;

//=== Internal Dependencies ===============================================

use crate::core::input::event::InputEvent;
use crate::core::surface::Canvas;

//=== Widget Trait ========================================================

/// Common surface of every toolkit widget.
pub trait Widget {
    /// Identity within a parent container.
    fn id(&self) -> &str;

    fn is_visible(&self) -> bool;

    fn set_visible(&mut self, visible: bool);

    /// Paints the widget through the canvas capability. Hidden widgets
    /// draw nothing.
    fn draw(&self, canvas: &mut dyn Canvas);

    /// Offers a pointer event to the widget. Returns `true` if the
    /// widget consumed it.
    fn handle_pointer(&mut self, event: &InputEvent) -> bool;
}
