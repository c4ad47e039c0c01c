//=========================================================================
// Confirm Dialog
//=========================================================================
//
// Modal yes/no window: a message, a confirm button, and a cancel
// button. A hit on either button fires the matching handler and then
// closes the dialog through the window's two-phase close.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::input::event::InputEvent;
use crate::core::surface::Canvas;
use crate::ui::button::Button;
use crate::ui::config::{ButtonConfig, ConfirmDialogConfig};
use crate::ui::handlers::{HandlerMap, WidgetEvent, WidgetHandler};
use crate::ui::window::WindowFrame;
use crate::ui::Widget;

//=== Layout Constants ====================================================

const BUTTON_HEIGHT: f32 = 50.0;
const BUTTON_MARGIN: f32 = 5.0;

//=== ConfirmDialog =======================================================

pub struct ConfirmDialog {
    frame: WindowFrame,
    message: String,
    confirm_button: Button,
    cancel_button: Button,
    handlers: HandlerMap,
}

impl ConfirmDialog {
    //--- Construction -----------------------------------------------------

    /// Builds a hidden dialog; buttons are laid out along the window's
    /// bottom edge, cancel left and confirm right.
    pub fn new(config: ConfirmDialogConfig) -> Self {
        let frame = WindowFrame::new(config.window);
        let bounds = frame.bounds();

        let half_width = bounds.width / 2.0 - BUTTON_MARGIN * 2.0;
        let button_y = bounds.y + bounds.height - BUTTON_HEIGHT - BUTTON_MARGIN;

        let cancel_button = Button::new(ButtonConfig {
            id: "cancel".to_string(),
            text: Some(config.cancel_text.unwrap_or_else(|| "Cancel".to_string())),
            background_color: 0x666666,
            x: bounds.x + BUTTON_MARGIN,
            y: button_y,
            width: half_width,
            height: BUTTON_HEIGHT,
            ..ButtonConfig::default()
        });

        let confirm_button = Button::new(ButtonConfig {
            id: "confirm".to_string(),
            text: Some(config.confirm_text.unwrap_or_else(|| "Ok".to_string())),
            background_color: 0x00AAFF,
            x: bounds.x + BUTTON_MARGIN + half_width + BUTTON_MARGIN,
            y: button_y,
            width: half_width,
            height: BUTTON_HEIGHT,
            ..ButtonConfig::default()
        });

        Self {
            frame,
            message: config.message.unwrap_or_else(|| "Are you sure?".to_string()),
            confirm_button,
            cancel_button,
            handlers: HandlerMap::new(),
        }
    }

    //--- Handlers ---------------------------------------------------------

    pub fn on_confirm(&mut self, handler: WidgetHandler) {
        self.handlers.set(WidgetEvent::Confirm, handler);
    }

    pub fn on_cancel(&mut self, handler: WidgetHandler) {
        self.handlers.set(WidgetEvent::Cancel, handler);
    }

    //--- Window Access ----------------------------------------------------

    pub fn open(&mut self) {
        self.frame.open();
    }

    pub fn close(&mut self) {
        self.frame.close();
    }

    /// The underlying window, for lifecycle hooks and geometry.
    pub fn window_mut(&mut self) -> &mut WindowFrame {
        &mut self.frame
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

//=== Widget Implementation ===============================================

impl Widget for ConfirmDialog {
    fn id(&self) -> &str {
        self.frame.id()
    }

    fn is_visible(&self) -> bool {
        self.frame.is_visible()
    }

    fn set_visible(&mut self, visible: bool) {
        self.frame.set_visible(visible);
    }

    fn draw(&self, canvas: &mut dyn Canvas) {
        if !self.is_visible() {
            return;
        }

        self.frame.draw(canvas);

        let bounds = self.frame.bounds();
        canvas.draw_text(
            &self.message,
            bounds.x + bounds.width / 2.0,
            bounds.y + (bounds.height - BUTTON_HEIGHT) / 2.0,
            24.0,
            0x000000,
        );

        self.cancel_button.draw(canvas);
        self.confirm_button.draw(canvas);
    }

    fn handle_pointer(&mut self, event: &InputEvent) -> bool {
        if !self.is_visible() {
            return false;
        }

        // Keep hover states live on both buttons.
        self.confirm_button.handle_pointer(event);
        self.cancel_button.handle_pointer(event);

        if let InputEvent::PointerUp { x, y, .. } = *event {
            if self.cancel_button.bounds().contains(x, y) {
                self.handlers.fire(WidgetEvent::Cancel);
                self.frame.close();
                return true;
            }

            if self.confirm_button.bounds().contains(x, y) {
                self.handlers.fire(WidgetEvent::Confirm);
                self.frame.close();
                return true;
            }
        }

        // A visible modal swallows pointer events over its own bounds.
        event
            .position()
            .is_some_and(|(x, y)| self.frame.bounds().contains(x, y))
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::input::event::PointerButton;
    use crate::ui::config::WindowConfig;
    use std::cell::Cell;
    use std::rc::Rc;

    fn dialog() -> ConfirmDialog {
        ConfirmDialog::new(ConfirmDialogConfig {
            window: WindowConfig {
                id: "quit-confirm".to_string(),
                x: 100.0,
                y: 100.0,
                width: 300.0,
                height: 200.0,
                ..WindowConfig::default()
            },
            ..ConfirmDialogConfig::default()
        })
    }

    fn pointer_up(x: f32, y: f32) -> InputEvent {
        InputEvent::PointerUp { x, y, button: PointerButton::Primary }
    }

    #[test]
    fn defaults_fill_in_texts() {
        let dialog = dialog();
        assert_eq!(dialog.message(), "Are you sure?");
        assert_eq!(dialog.confirm_button.text(), Some("Ok"));
        assert_eq!(dialog.cancel_button.text(), Some("Cancel"));
    }

    #[test]
    fn confirm_hit_fires_handler_and_closes() {
        let mut dialog = dialog();
        let confirms = Rc::new(Cell::new(0));
        let counter = Rc::clone(&confirms);
        dialog.on_confirm(Box::new(move || counter.set(counter.get() + 1)));

        dialog.open();

        let bounds = dialog.confirm_button.bounds();
        let hit = pointer_up(bounds.x + 1.0, bounds.y + 1.0);
        assert!(dialog.handle_pointer(&hit));

        assert_eq!(confirms.get(), 1);
        assert!(!dialog.is_visible());
    }

    #[test]
    fn cancel_hit_fires_handler_and_closes() {
        let mut dialog = dialog();
        let cancels = Rc::new(Cell::new(0));
        let counter = Rc::clone(&cancels);
        dialog.on_cancel(Box::new(move || counter.set(counter.get() + 1)));

        dialog.open();

        let bounds = dialog.cancel_button.bounds();
        let hit = pointer_up(bounds.x + 1.0, bounds.y + 1.0);
        assert!(dialog.handle_pointer(&hit));

        assert_eq!(cancels.get(), 1);
        assert!(!dialog.is_visible());
    }

    #[test]
    fn buttons_do_not_overlap() {
        let dialog = dialog();
        let cancel = dialog.cancel_button.bounds();
        let confirm = dialog.confirm_button.bounds();

        assert!(cancel.x + cancel.width <= confirm.x);
        assert_eq!(cancel.y, confirm.y);
    }

    #[test]
    fn hidden_dialog_ignores_input() {
        let mut dialog = dialog();
        let bounds = dialog.confirm_button.bounds();
        assert!(!dialog.handle_pointer(&pointer_up(bounds.x + 1.0, bounds.y + 1.0)));
    }

    #[test]
    fn visible_dialog_swallows_hits_inside_its_bounds() {
        let mut dialog = dialog();
        dialog.open();

        // Inside the window, away from both buttons.
        assert!(dialog.handle_pointer(&pointer_up(150.0, 120.0)));
        assert!(dialog.is_visible());

        // Outside the window entirely.
        assert!(!dialog.handle_pointer(&pointer_up(10.0, 10.0)));
    }

    #[test]
    fn close_without_hit_keeps_handlers_for_reopen() {
        let mut dialog = dialog();
        let confirms = Rc::new(Cell::new(0));
        let counter = Rc::clone(&confirms);
        dialog.on_confirm(Box::new(move || counter.set(counter.get() + 1)));

        dialog.open();
        dialog.close();
        dialog.open();

        let bounds = dialog.confirm_button.bounds();
        dialog.handle_pointer(&pointer_up(bounds.x + 1.0, bounds.y + 1.0));
        assert_eq!(confirms.get(), 1);
    }
}
