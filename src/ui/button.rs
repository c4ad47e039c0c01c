//=========================================================================
// Button
//=========================================================================
//
// Rectangular push button with a hover highlight and optional label.
//
// Hit testing works in stage coordinates; the button redraws with its
// hover color while the pointer is over it and fires pointer handlers
// on hits.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::input::event::InputEvent;
use crate::core::surface::{Canvas, Rect};
use crate::ui::config::{clamped_dimension, ButtonConfig};
use crate::ui::handlers::{HandlerMap, WidgetEvent, WidgetHandler};
use crate::ui::Widget;

//=== Button ==============================================================

pub struct Button {
    config: ButtonConfig,
    visible: bool,
    hovered: bool,
    pressed: bool,
    handlers: HandlerMap,
}

impl Button {
    //--- Construction -----------------------------------------------------

    /// Builds a button, clamping degenerate dimensions.
    pub fn new(mut config: ButtonConfig) -> Self {
        config.width = clamped_dimension(config.width, "width", &config.id);
        config.height = clamped_dimension(config.height, "height", &config.id);

        Self {
            config,
            visible: true,
            hovered: false,
            pressed: false,
            handlers: HandlerMap::new(),
        }
    }

    //--- Handlers ---------------------------------------------------------

    /// Registers a handler; re-registering an event replaces it.
    pub fn on(&mut self, event: WidgetEvent, handler: WidgetHandler) {
        self.handlers.set(event, handler);
    }

    pub fn on_pointer_down(&mut self, handler: WidgetHandler) {
        self.on(WidgetEvent::PointerDown, handler);
    }

    pub fn on_pointer_up(&mut self, handler: WidgetHandler) {
        self.on(WidgetEvent::PointerUp, handler);
    }

    //--- State ------------------------------------------------------------

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.config.text = Some(text.into());
    }

    pub fn text(&self) -> Option<&str> {
        self.config.text.as_deref()
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(self.config.x, self.config.y, self.config.width, self.config.height)
    }

    pub fn set_position(&mut self, x: f32, y: f32) {
        self.config.x = x;
        self.config.y = y;
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    /// Whether a pointer press began on the button and has not been
    /// released yet.
    pub fn is_pressed(&self) -> bool {
        self.pressed
    }
}

//=== Widget Implementation ===============================================

impl Widget for Button {
    fn id(&self) -> &str {
        &self.config.id
    }

    fn is_visible(&self) -> bool {
        self.visible
    }

    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    fn draw(&self, canvas: &mut dyn Canvas) {
        if !self.visible {
            return;
        }

        let color = if self.hovered {
            self.config.hover_color
        } else {
            self.config.background_color
        };
        canvas.fill_rect(self.bounds(), color, 1.0);

        if let Some(text) = &self.config.text {
            canvas.draw_text(
                text,
                self.config.x + self.config.width / 2.0,
                self.config.y + self.config.height / 2.0,
                18.0,
                self.config.text_color,
            );
        }
    }

    fn handle_pointer(&mut self, event: &InputEvent) -> bool {
        if !self.visible {
            return false;
        }

        match event {
            InputEvent::PointerMove { x, y } => {
                let inside = self.bounds().contains(*x, *y);
                if inside && !self.hovered {
                    self.hovered = true;
                    self.handlers.fire(WidgetEvent::PointerOver);
                } else if !inside && self.hovered {
                    self.hovered = false;
                    self.handlers.fire(WidgetEvent::PointerOut);
                }
                false
            }

            InputEvent::PointerDown { x, y, .. } => {
                if self.bounds().contains(*x, *y) {
                    self.pressed = true;
                    self.handlers.fire(WidgetEvent::PointerDown);
                    true
                } else {
                    false
                }
            }

            InputEvent::PointerUp { x, y, .. } => {
                let inside = self.bounds().contains(*x, *y);
                self.pressed = false;
                if inside {
                    self.handlers.fire(WidgetEvent::PointerUp);
                    true
                } else {
                    false
                }
            }

            _ => false,
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    fn button_at(x: f32, y: f32, w: f32, h: f32) -> Button {
        Button::new(ButtonConfig {
            id: "btn".to_string(),
            x,
            y,
            width: w,
            height: h,
            ..ButtonConfig::default()
        })
    }

    #[test]
    fn pointer_up_inside_fires_handler() {
        let mut button = button_at(10.0, 10.0, 100.0, 50.0);
        let hits = Rc::new(Cell::new(0));
        let counter = Rc::clone(&hits);
        button.on_pointer_up(Box::new(move || counter.set(counter.get() + 1)));

        let consumed = button.handle_pointer(&InputEvent::PointerUp {
            x: 50.0,
            y: 30.0,
            button: crate::core::input::event::PointerButton::Primary,
        });

        assert!(consumed);
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn pointer_up_outside_is_ignored() {
        let mut button = button_at(10.0, 10.0, 100.0, 50.0);
        let hits = Rc::new(Cell::new(0));
        let counter = Rc::clone(&hits);
        button.on_pointer_up(Box::new(move || counter.set(counter.get() + 1)));

        let consumed = button.handle_pointer(&InputEvent::PointerUp {
            x: 500.0,
            y: 30.0,
            button: crate::core::input::event::PointerButton::Primary,
        });

        assert!(!consumed);
        assert_eq!(hits.get(), 0);
    }

    #[test]
    fn hover_transitions_fire_over_and_out() {
        let mut button = button_at(0.0, 0.0, 100.0, 50.0);
        let overs = Rc::new(Cell::new(0));
        let outs = Rc::new(Cell::new(0));

        let c = Rc::clone(&overs);
        button.on(WidgetEvent::PointerOver, Box::new(move || c.set(c.get() + 1)));
        let c = Rc::clone(&outs);
        button.on(WidgetEvent::PointerOut, Box::new(move || c.set(c.get() + 1)));

        button.handle_pointer(&InputEvent::PointerMove { x: 10.0, y: 10.0 });
        assert!(button.is_hovered());
        assert_eq!((overs.get(), outs.get()), (1, 0));

        // Moving within the button fires no further events.
        button.handle_pointer(&InputEvent::PointerMove { x: 20.0, y: 20.0 });
        assert_eq!((overs.get(), outs.get()), (1, 0));

        button.handle_pointer(&InputEvent::PointerMove { x: 200.0, y: 200.0 });
        assert!(!button.is_hovered());
        assert_eq!((overs.get(), outs.get()), (1, 1));
    }

    #[test]
    fn press_state_tracks_down_and_up() {
        let mut button = button_at(0.0, 0.0, 100.0, 50.0);
        let primary = crate::core::input::event::PointerButton::Primary;

        button.handle_pointer(&InputEvent::PointerDown { x: 10.0, y: 10.0, button: primary });
        assert!(button.is_pressed());

        // Releasing outside still clears the press.
        button.handle_pointer(&InputEvent::PointerUp { x: 500.0, y: 10.0, button: primary });
        assert!(!button.is_pressed());
    }

    #[test]
    fn hidden_button_ignores_input() {
        let mut button = button_at(0.0, 0.0, 100.0, 50.0);
        button.set_visible(false);

        let consumed = button.handle_pointer(&InputEvent::PointerDown {
            x: 10.0,
            y: 10.0,
            button: crate::core::input::event::PointerButton::Primary,
        });

        assert!(!consumed);
    }

    #[test]
    fn degenerate_size_is_clamped() {
        let button = Button::new(ButtonConfig {
            width: -10.0,
            height: 0.0,
            ..ButtonConfig::default()
        });

        let bounds = button.bounds();
        assert_eq!(bounds.width, 1.0);
        assert_eq!(bounds.height, 1.0);
    }

    #[test]
    fn set_text_replaces_label() {
        let mut button = button_at(0.0, 0.0, 10.0, 10.0);
        assert_eq!(button.text(), None);

        button.set_text("Ok");
        assert_eq!(button.text(), Some("Ok"));
    }
}
