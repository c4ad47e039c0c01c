//=========================================================================
// Platform Subsystem
//
// Bridges Winit (OS-level events) with the game's cooperative tick.
//
// Architecture:
// ```text
//  Winit Event Loop (main thread)
//    ↓ window_event
//  event_mapper  ── Winit types → InputEvent
//    ↓
//  frame buffer  ── input collected between frames
//    ↓ RedrawRequested (frame boundary)
//  Game::publish_event + Game::tick(delta)
// ```
//
// Everything runs on one thread: the platform owns the game and drives
// it from inside the event loop, so scene and tween mutation happens
// only in the tick or in an input dispatch.
//
// Key design decisions:
// - **RedrawRequested = frame boundary**: buffered input is published
//   in order, then the game ticks with a measured delta
// - **Cursor tracking**: the last CursorMoved position is stamped onto
//   button events, which carry no coordinates in Winit
// - **Main thread requirement**: Winit mandates the main thread on
//   macOS/iOS, so `run()` must be called from the thread that owns the
//   process entry point
//
//=========================================================================

//=== Submodules ==========================================================

mod event_mapper;

//=== External Dependencies ===============================================

use std::time::Instant;

use log::{debug, error, info, trace};
use winit::{
    application::ApplicationHandler,
    dpi::LogicalSize,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, EventLoop},
    window::{Window, WindowAttributes},
};

//=== Internal Dependencies ===============================================

use crate::core::game::Game;
use crate::core::input::event::InputEvent;

//=== PlatformError =======================================================

/// Platform initialization and runtime errors.
///
/// These are fatal: if the event loop cannot be created, the game
/// cannot run.
#[derive(Debug)]
pub enum PlatformError {
    /// Failed to create the event loop (OS-level issue).
    EventLoopCreation(winit::error::EventLoopError),

    /// Event loop execution error.
    EventLoopExecution(winit::error::EventLoopError),
}

impl std::fmt::Display for PlatformError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EventLoopCreation(e) => write!(f, "Event loop creation failed: {}", e),
            Self::EventLoopExecution(e) => write!(f, "Event loop error: {}", e),
        }
    }
}

impl std::error::Error for PlatformError {}

//=== Platform ============================================================

/// Window manager and game driver.
///
/// # Lifecycle
///
/// 1. **Construction**: `Platform::new(game)`
/// 2. **Execution**: `platform.run()` — blocks in the Winit event loop
/// 3. **Event processing**: Winit calls `ApplicationHandler` methods
/// 4. **Shutdown**: window close exits the loop
pub struct Platform {
    /// OS window handle (None until `resumed()` is called).
    window: Option<Window>,

    /// The game driven by this platform.
    game: Game,

    /// Input collected since the last frame boundary.
    buffer: Vec<InputEvent>,

    /// Last known cursor position, stamped onto button events.
    cursor: (f32, f32),

    /// Previous frame timestamp for delta measurement.
    last_tick: Option<Instant>,

    title: String,
    size: (u32, u32),
}

impl Platform {
    //--- Construction -----------------------------------------------------

    /// Wraps a game for execution under a Winit window.
    pub fn new(game: Game) -> Self {
        info!("platform subsystem initialized");
        Self {
            window: None,
            game,
            buffer: Vec::new(),
            cursor: (0.0, 0.0),
            last_tick: None,
            title: "cardstage".to_string(),
            size: (1280, 720),
        }
    }

    /// Sets the window title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the window's logical size.
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.size = (width, height);
        self
    }

    //--- Execution --------------------------------------------------------

    /// Starts the event loop and blocks until the window closes.
    ///
    /// # Errors
    ///
    /// Returns [`PlatformError`] if the event loop cannot be created or
    /// exits abnormally.
    ///
    /// # Panics
    ///
    /// Panics if called off the main thread (macOS/iOS Winit
    /// requirement).
    pub fn run(mut self) -> Result<(), PlatformError> {
        debug!("starting Winit event loop");

        let event_loop = EventLoop::new().map_err(PlatformError::EventLoopCreation)?;

        event_loop
            .run_app(&mut self)
            .map_err(PlatformError::EventLoopExecution)
    }

    //--- Internal Helpers -------------------------------------------------

    /// Publishes buffered input and ticks the game with a measured
    /// delta. Called on every `RedrawRequested`.
    fn frame(&mut self) {
        if !self.buffer.is_empty() {
            trace!("publishing {} buffered input events", self.buffer.len());
        }
        for event in self.buffer.drain(..) {
            self.game.publish_event(event);
        }

        let now = Instant::now();
        let delta = self
            .last_tick
            .map(|last| (now - last).as_secs_f32())
            .unwrap_or(0.0);
        self.last_tick = Some(now);

        self.game.tick(delta);
    }
}

//=== Winit Integration ===================================================

impl ApplicationHandler for Platform {
    /// Called when the app becomes active (startup or mobile resume).
    ///
    /// Creates the window if it doesn't exist yet.
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            debug!("window already exists (mobile resume?)");
            return;
        }

        let attrs = WindowAttributes::default()
            .with_title(self.title.clone())
            .with_inner_size(LogicalSize::new(self.size.0, self.size.1));

        match event_loop.create_window(attrs) {
            Ok(window) => {
                info!(
                    "window created: {}x{} @ {}x DPI",
                    window.inner_size().width,
                    window.inner_size().height,
                    window.scale_factor()
                );
                window.request_redraw();
                self.window = Some(window);
            }
            Err(e) => {
                error!("window creation failed: {}", e);
                event_loop.exit();
            }
        }
    }

    /// Handles per-window events.
    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: winit::window::WindowId,
        event: WindowEvent,
    ) {
        match &event {
            WindowEvent::CloseRequested => {
                info!("window close requested");
                self.game.destroy();
                event_loop.exit();
            }

            WindowEvent::CursorMoved { position, .. } => {
                self.cursor = (position.x as f32, position.y as f32);
                self.buffer.push(InputEvent::PointerMove {
                    x: self.cursor.0,
                    y: self.cursor.1,
                });
            }

            WindowEvent::KeyboardInput { event: key_event, .. } => {
                if let Some(event) = event_mapper::map_key_event(key_event) {
                    self.buffer.push(event);
                } else {
                    trace!("unmapped key ignored");
                }
            }

            WindowEvent::MouseInput { state, button, .. } => {
                self.buffer
                    .push(event_mapper::map_mouse_button(*button, *state, self.cursor));
            }

            WindowEvent::RedrawRequested => {
                // Frame boundary: deliver input, tick, schedule the next
                // frame.
                self.frame();

                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }

            _ => {
                // Ignore: Resized, Focused, etc. (not needed for input)
            }
        }
    }
}
