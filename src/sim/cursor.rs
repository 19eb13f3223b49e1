//! Evasive cursor controller
//!
//! A virtual cursor marker flees the real pointer: full speed when the
//! pointer is close, decaying smoothly with distance, and parked once the
//! pointer is far enough away. The marker is what the user has to aim with,
//! so clicks go through `redirect` at this position instead of the pointer's.

use glam::Vec2;

/// Marker radius in px; doubles as the viewport clamp margin.
pub const RADIUS: f32 = 20.0;
/// Base flee speed per tick, px.
pub const SPEED: f32 = 3.0;
/// At or below this pointer distance the flee step is at full strength.
pub const MIN_DISTANCE: f32 = 100.0;
/// Beyond this pointer distance the marker stops fleeing entirely.
pub const MAX_DISTANCE: f32 = 600.0;

/// Viewport bounds in screen pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }
}

/// Evasive cursor state: the real pointer plus the fleeing virtual marker.
///
/// One owned value, handed to both the pointer-move handler and the tick.
#[derive(Debug, Clone)]
pub struct CursorSim {
    pointer: Vec2,
    cursor: Vec2,
    viewport: Viewport,
}

impl CursorSim {
    /// Both positions start at the viewport center.
    pub fn new(viewport: Viewport) -> Self {
        let center = viewport.center();
        Self {
            pointer: center,
            cursor: center,
            viewport,
        }
    }

    /// Real pointer position, as last reported.
    pub fn pointer(&self) -> Vec2 {
        self.pointer
    }

    /// Current virtual cursor position.
    pub fn cursor(&self) -> Vec2 {
        self.cursor
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Record the real pointer position (screen px). Read-only to the tick.
    pub fn pointer_moved(&mut self, x: f32, y: f32) {
        self.pointer = Vec2::new(x, y);
    }

    /// Viewport changed; the marker is re-clamped into the new bounds.
    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.cursor = self.clamp(self.cursor);
    }

    /// Advance one 60 Hz tick: step directly away from the pointer, scaled
    /// by the distance falloff, then clamp into the viewport.
    pub fn tick(&mut self) {
        let d = self.cursor - self.pointer;
        let distance = d.length();
        // No flee direction is defined with the pointer exactly on the marker.
        if distance == 0.0 {
            return;
        }

        let step = d / distance * step_magnitude(distance);
        self.cursor = self.clamp(self.cursor + step);
    }

    fn clamp(&self, p: Vec2) -> Vec2 {
        Vec2::new(
            p.x.clamp(RADIUS, self.viewport.width - RADIUS),
            p.y.clamp(RADIUS, self.viewport.height - RADIUS),
        )
    }
}

/// Flee step length for a given pointer distance.
///
/// Constant `SPEED` is scaled by a squared falloff factor: 1 inside
/// `MIN_DISTANCE`, `MIN_DISTANCE / d` beyond it, 0 past `MAX_DISTANCE`.
/// The factor never exceeds 1, so the step never exceeds `SPEED`.
pub fn step_magnitude(distance: f32) -> f32 {
    if distance <= 0.0 {
        return 0.0;
    }
    let factor = if distance > MAX_DISTANCE {
        0.0
    } else {
        MIN_DISTANCE / distance.max(MIN_DISTANCE)
    };
    SPEED * factor * factor
}
