//=========================================================================
// Window Frame
//=========================================================================
//
// Base window: background fill, visibility, child widgets, and a
// two-phase open/close.
//
// Opening and closing are explicit two-phase operations:
//   begin (guard) → pre-hook (BeforeOpen/BeforeClose)
//                 → commit the visibility change
//                 → post-hook (Open/Close)
// There is no timeout on the pre-hook; it runs to completion inline.
//
// Windows start hidden; callers open them explicitly.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::warn;

//=== Internal Dependencies ===============================================

use crate::core::input::event::InputEvent;
use crate::core::surface::{Canvas, Rect};
use crate::ui::config::{clamped_alpha, clamped_dimension, WindowConfig};
use crate::ui::handlers::{HandlerMap, WidgetEvent, WidgetHandler};
use crate::ui::Widget;

//=== WindowFrame =========================================================

pub struct WindowFrame {
    config: WindowConfig,
    position: (f32, f32),
    alpha: f32,
    visible: bool,
    handlers: HandlerMap,
    children: Vec<Box<dyn Widget>>,
}

impl WindowFrame {
    //--- Construction -----------------------------------------------------

    /// Builds a hidden window, clamping degenerate dimensions and alpha.
    pub fn new(mut config: WindowConfig) -> Self {
        config.width = clamped_dimension(config.width, "width", &config.id);
        config.height = clamped_dimension(config.height, "height", &config.id);
        config.alpha = clamped_alpha(config.alpha, &config.id);

        Self {
            position: (config.x, config.y),
            alpha: config.alpha,
            config,
            visible: false,
            handlers: HandlerMap::new(),
            children: Vec::new(),
        }
    }

    //--- Two-Phase Open / Close -------------------------------------------

    /// Opens the window. A no-op if already visible.
    ///
    /// Runs the `BeforeOpen` pre-hook, commits visibility, then fires
    /// `Open`.
    pub fn open(&mut self) {
        if self.visible {
            return;
        }

        self.handlers.fire(WidgetEvent::BeforeOpen);
        self.visible = true;
        self.handlers.fire(WidgetEvent::Open);
    }

    /// Closes the window. A no-op if already hidden.
    ///
    /// Runs the `BeforeClose` pre-hook, commits visibility, then fires
    /// `Close`.
    pub fn close(&mut self) {
        if !self.visible {
            return;
        }

        self.handlers.fire(WidgetEvent::BeforeClose);
        self.visible = false;
        self.handlers.fire(WidgetEvent::Close);
    }

    //--- Handlers ---------------------------------------------------------

    pub fn on(&mut self, event: WidgetEvent, handler: WidgetHandler) {
        self.handlers.set(event, handler);
    }

    pub fn on_before_open(&mut self, handler: WidgetHandler) {
        self.on(WidgetEvent::BeforeOpen, handler);
    }

    pub fn on_open(&mut self, handler: WidgetHandler) {
        self.on(WidgetEvent::Open, handler);
    }

    pub fn on_before_close(&mut self, handler: WidgetHandler) {
        self.on(WidgetEvent::BeforeClose, handler);
    }

    pub fn on_close(&mut self, handler: WidgetHandler) {
        self.on(WidgetEvent::Close, handler);
    }

    //--- Children ---------------------------------------------------------

    /// Adds a child widget. A duplicate id warns and the child is still
    /// added under the duplicate id, preserving both.
    pub fn add_child(&mut self, child: Box<dyn Widget>) {
        if self.children.iter().any(|c| c.id() == child.id()) {
            warn!(
                "window {:?} already has a child with id {:?}",
                self.config.id,
                child.id()
            );
        }
        self.children.push(child);
    }

    /// Removes a child by id. Returns whether anything was removed.
    pub fn remove_child(&mut self, id: &str) -> bool {
        let before = self.children.len();
        self.children.retain(|c| c.id() != id);
        self.children.len() != before
    }

    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    //--- Geometry ---------------------------------------------------------

    pub fn bounds(&self) -> Rect {
        Rect::new(self.position.0, self.position.1, self.config.width, self.config.height)
    }

    pub fn position(&self) -> (f32, f32) {
        self.position
    }

    pub fn set_position(&mut self, x: f32, y: f32) {
        self.position = (x, y);
    }

    pub fn alpha(&self) -> f32 {
        self.alpha
    }

    pub fn set_alpha(&mut self, alpha: f32) {
        self.alpha = clamped_alpha(alpha, &self.config.id);
    }

    pub fn configured_alpha(&self) -> f32 {
        self.config.alpha
    }
}

//=== Widget Implementation ===============================================

impl Widget for WindowFrame {
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

        canvas.fill_rect(self.bounds(), self.config.background_color, self.alpha);

        for child in &self.children {
            child.draw(canvas);
        }
    }

    fn handle_pointer(&mut self, event: &InputEvent) -> bool {
        if !self.visible {
            return false;
        }

        for child in &mut self.children {
            if child.handle_pointer(event) {
                return true;
            }
        }

        false
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::button::Button;
    use crate::ui::config::ButtonConfig;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn window() -> WindowFrame {
        WindowFrame::new(WindowConfig {
            id: "win".to_string(),
            x: 100.0,
            y: 100.0,
            width: 200.0,
            height: 150.0,
            ..WindowConfig::default()
        })
    }

    fn phase_recorder(frame: &mut WindowFrame) -> Rc<RefCell<Vec<&'static str>>> {
        let phases = Rc::new(RefCell::new(Vec::new()));

        let p = Rc::clone(&phases);
        frame.on_before_open(Box::new(move || p.borrow_mut().push("before-open")));
        let p = Rc::clone(&phases);
        frame.on_open(Box::new(move || p.borrow_mut().push("open")));
        let p = Rc::clone(&phases);
        frame.on_before_close(Box::new(move || p.borrow_mut().push("before-close")));
        let p = Rc::clone(&phases);
        frame.on_close(Box::new(move || p.borrow_mut().push("close")));

        phases
    }

    #[test]
    fn windows_start_hidden() {
        assert!(!window().is_visible());
    }

    #[test]
    fn open_runs_pre_hook_before_commit_and_post_hook_after() {
        let mut frame = window();
        let phases = phase_recorder(&mut frame);

        frame.open();

        assert!(frame.is_visible());
        assert_eq!(*phases.borrow(), vec!["before-open", "open"]);
    }

    #[test]
    fn close_mirrors_the_phases() {
        let mut frame = window();
        let phases = phase_recorder(&mut frame);

        frame.open();
        frame.close();

        assert!(!frame.is_visible());
        assert_eq!(
            *phases.borrow(),
            vec!["before-open", "open", "before-close", "close"]
        );
    }

    #[test]
    fn reopening_visible_window_is_noop() {
        let mut frame = window();
        let phases = phase_recorder(&mut frame);

        frame.open();
        frame.open();

        assert_eq!(*phases.borrow(), vec!["before-open", "open"]);
    }

    #[test]
    fn closing_hidden_window_is_noop() {
        let mut frame = window();
        let phases = phase_recorder(&mut frame);

        frame.close();

        assert!(phases.borrow().is_empty());
    }

    #[test]
    fn duplicate_child_id_warns_but_keeps_both() {
        let mut frame = window();
        frame.add_child(Box::new(Button::new(ButtonConfig {
            id: "ok".to_string(),
            ..ButtonConfig::default()
        })));
        frame.add_child(Box::new(Button::new(ButtonConfig {
            id: "ok".to_string(),
            ..ButtonConfig::default()
        })));

        assert_eq!(frame.child_count(), 2);
        assert!(frame.remove_child("ok"));
        assert_eq!(frame.child_count(), 0);
    }

    #[test]
    fn hidden_window_swallows_no_input() {
        let mut frame = window();
        let mut button = Button::new(ButtonConfig {
            id: "ok".to_string(),
            x: 110.0,
            y: 110.0,
            width: 50.0,
            height: 20.0,
            ..ButtonConfig::default()
        });
        button.on_pointer_up(Box::new(|| {}));
        frame.add_child(Box::new(button));

        let event = InputEvent::PointerUp {
            x: 120.0,
            y: 115.0,
            button: crate::core::input::event::PointerButton::Primary,
        };

        assert!(!frame.handle_pointer(&event));

        frame.open();
        assert!(frame.handle_pointer(&event));
    }
}
