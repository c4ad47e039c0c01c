//=========================================================================
// Render Surface Interface
//=========================================================================
//
// Capability traits for the external rendering collaborator.
//
// The framework never draws; it manipulates an injected surface through
// an opaque child list of node handles and queries its size. Widgets
// additionally paint through a minimal canvas capability.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::sync::atomic::{AtomicU64, Ordering};

//=== NodeHandle ==========================================================

static NEXT_NODE: AtomicU64 = AtomicU64::new(1);

/// Opaque identity of a display node on the render surface.
///
/// Handles are minted process-wide and never reused; the rendering
/// collaborator maps them to whatever display objects it manages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeHandle(u64);

impl NodeHandle {
    /// Mints a fresh, unique handle.
    pub fn next() -> Self {
        Self(NEXT_NODE.fetch_add(1, Ordering::Relaxed))
    }

    pub fn raw(&self) -> u64 {
        self.0
    }
}

//=== StageMetrics ========================================================

/// Logical size of the drawable stage, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct StageMetrics {
    pub width: f32,
    pub height: f32,
}

impl StageMetrics {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

//=== RenderSurface =======================================================

/// The injected drawable surface the game renders into.
///
/// The game mutates the child list exclusively when switching scenes;
/// scenes only ever touch their own subtree behind their root handle.
pub trait RenderSurface {
    /// Appends a node to the surface's child list.
    fn add_child(&mut self, node: NodeHandle);

    /// Removes a node from the child list, if present.
    fn remove_child(&mut self, node: NodeHandle);

    /// Removes every child.
    fn clear_children(&mut self);

    /// Reports the stage size.
    fn metrics(&self) -> StageMetrics;
}

//=== Rect ================================================================

/// Axis-aligned rectangle in stage space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    /// Hit test against a point.
    pub fn contains(&self, px: f32, py: f32) -> bool {
        px >= self.x && px < self.x + self.width && py >= self.y && py < self.y + self.height
    }
}

//=== Canvas ==============================================================

/// Minimal painting capability for the widget toolkit.
///
/// Colors are packed 0xRRGGBB. Implemented by the rendering
/// collaborator; widgets describe themselves through it and never draw
/// directly.
pub trait Canvas {
    /// Fills a rectangle with a solid color at the given opacity.
    fn fill_rect(&mut self, rect: Rect, color: u32, alpha: f32);

    /// Draws a text run anchored at the given position.
    fn draw_text(&mut self, text: &str, x: f32, y: f32, size: f32, color: u32);
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn node_handles_are_unique() {
        let a = NodeHandle::next();
        let b = NodeHandle::next();
        assert_ne!(a, b);
    }

    #[test]
    fn rect_contains_its_interior() {
        let rect = Rect::new(10.0, 10.0, 100.0, 50.0);

        assert!(rect.contains(10.0, 10.0));
        assert!(rect.contains(50.0, 30.0));
        assert!(!rect.contains(9.9, 10.0));
        assert!(!rect.contains(110.0, 30.0));
        assert!(!rect.contains(50.0, 60.0));
    }

    #[test]
    fn zero_sized_rect_contains_nothing() {
        let rect = Rect::new(5.0, 5.0, 0.0, 0.0);
        assert!(!rect.contains(5.0, 5.0));
    }
}
