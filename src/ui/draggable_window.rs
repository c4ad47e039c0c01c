//=========================================================================
// Draggable Window
//=========================================================================
//
// Window with a title bar that can be dragged around the stage.
//
// Drag protocol:
//   PointerDown on the title bar → begin drag (dim, record grab offset)
//   PointerMove while dragging   → reposition relative to the grab
//   PointerUp anywhere           → end drag (restore opacity)
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::input::event::InputEvent;
use crate::core::surface::{Canvas, Rect};
use crate::ui::config::DraggableWindowConfig;
use crate::ui::window::WindowFrame;
use crate::ui::Widget;

//=== Layout Constants ====================================================

const TITLEBAR_HEIGHT: f32 = 25.0;
const DRAG_ALPHA: f32 = 0.5;

//=== DraggableWindow =====================================================

pub struct DraggableWindow {
    frame: WindowFrame,
    title: String,
    titlebar_color: u32,
    dragging: bool,
    grab_offset: (f32, f32),
}

impl DraggableWindow {
    //--- Construction -----------------------------------------------------

    pub fn new(config: DraggableWindowConfig) -> Self {
        Self {
            frame: WindowFrame::new(config.window),
            title: config.title,
            titlebar_color: config.titlebar_color,
            dragging: false,
            grab_offset: (0.0, 0.0),
        }
    }

    //--- Window Access ----------------------------------------------------

    pub fn open(&mut self) {
        self.frame.open();
    }

    pub fn close(&mut self) {
        self.frame.close();
    }

    pub fn window_mut(&mut self) -> &mut WindowFrame {
        &mut self.frame
    }

    pub fn position(&self) -> (f32, f32) {
        self.frame.position()
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    //--- Geometry ---------------------------------------------------------

    fn titlebar_bounds(&self) -> Rect {
        let bounds = self.frame.bounds();
        Rect::new(bounds.x, bounds.y, bounds.width, TITLEBAR_HEIGHT)
    }
}

//=== Widget Implementation ===============================================

impl Widget for DraggableWindow {
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
        canvas.fill_rect(self.titlebar_bounds(), self.titlebar_color, self.frame.alpha());

        let bar = self.titlebar_bounds();
        canvas.draw_text(
            &self.title,
            bar.x + 4.0,
            bar.y + TITLEBAR_HEIGHT / 2.0,
            14.0,
            0xFFFFFF,
        );
    }

    fn handle_pointer(&mut self, event: &InputEvent) -> bool {
        if !self.is_visible() {
            return false;
        }

        match *event {
            InputEvent::PointerDown { x, y, .. } => {
                if self.titlebar_bounds().contains(x, y) {
                    let (wx, wy) = self.frame.position();
                    self.dragging = true;
                    self.grab_offset = (x - wx, y - wy);
                    self.frame.set_alpha(DRAG_ALPHA);
                    return true;
                }
                self.frame.handle_pointer(event)
            }

            InputEvent::PointerMove { x, y } => {
                if self.dragging {
                    self.frame
                        .set_position(x - self.grab_offset.0, y - self.grab_offset.1);
                    return true;
                }
                self.frame.handle_pointer(event)
            }

            InputEvent::PointerUp { .. } => {
                if self.dragging {
                    self.dragging = false;
                    self.frame.set_alpha(self.frame.configured_alpha());
                    return true;
                }
                self.frame.handle_pointer(event)
            }

            _ => false,
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
