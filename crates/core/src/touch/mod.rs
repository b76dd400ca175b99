//! Touch-state tracking for the basic touch sketch.

use serde::Serialize;

/// Tracks whether the surface is currently touched and how many touches
/// have happened so far. Mouse presses are folded into the same state so
/// the sketch behaves identically on desktop.
#[derive(Debug, Default)]
pub struct TouchTracker {
    touching: bool,
    touches: u32,
}

/// Snapshot of the tracker for the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TouchSummary {
    pub touching: bool,
    pub touches: u32,
}

impl TouchSummary {
    /// Center-screen label the sketch displays.
    pub fn label(&self) -> &'static str {
        if self.touching {
            "TOUCHED"
        } else {
            "NOT TOUCHED"
        }
    }
}

impl TouchTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// A finger landed on the surface.
    pub fn touch_started(&mut self) {
        self.touching = true;
        self.touches = self.touches.saturating_add(1);
    }

    /// The last finger lifted off the surface.
    pub fn touch_ended(&mut self) {
        self.touching = false;
    }

    /// Desktop fallback, same behavior as a touch start.
    pub fn mouse_pressed(&mut self) {
        self.touch_started();
    }

    /// Desktop fallback, same behavior as a touch end.
    pub fn mouse_released(&mut self) {
        self.touch_ended();
    }

    pub fn summary(&self) -> TouchSummary {
        TouchSummary {
            touching: self.touching,
            touches: self.touches,
        }
    }
}
