// SPDX-License-Identifier: MPL-2.0
//! Pointer-driven tilt state.
//!
//! Every pointer move recomputes a two-axis rotation from the cursor's
//! offset relative to the window center. There is no smoothing, clamping,
//! or debouncing; rapid moves may jitter and that is accepted.

use iced::{Point, Size};

/// Divisor converting pixel offset from the window center into degrees.
pub const TILT_DIVISOR: f32 = 50.0;

/// Two-axis rotation in degrees. `x` tips the card forward or backward from
/// vertical pointer travel; `y` turns it left or right from horizontal
/// travel.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Tilt {
    pub x: f32,
    pub y: f32,
}

impl Tilt {
    /// No rotation.
    pub const LEVEL: Self = Self { x: 0.0, y: 0.0 };

    /// Rotation for a pointer position within a viewport. Pure: the same
    /// inputs always produce the same angles. Values are unclamped.
    #[must_use]
    pub fn from_pointer(pointer: Point, viewport: Size) -> Self {
        Self {
            x: (pointer.y - viewport.height / 2.0) / TILT_DIVISOR,
            y: (pointer.x - viewport.width / 2.0) / TILT_DIVISOR,
        }
    }
}

/// Current rotation plus the window size it is computed against. The size
/// is seeded from the initial window settings and follows resize events.
#[derive(Debug, Clone, PartialEq)]
pub struct TiltState {
    pub rotation: Tilt,
    window_size: Size,
}

impl TiltState {
    #[must_use]
    pub fn new(window_size: Size) -> Self {
        Self {
            rotation: Tilt::LEVEL,
            window_size,
        }
    }

    /// Recomputes the rotation for a new pointer position.
    pub fn pointer_moved(&mut self, position: Point) {
        self.rotation = Tilt::from_pointer(position, self.window_size);
    }

    /// Records a new window size. The rotation keeps its last value until
    /// the next pointer move.
    pub fn window_resized(&mut self, size: Size) {
        self.window_size = size;
    }

    #[must_use]
    pub fn window_size(&self) -> Size {
        self.window_size
    }
}
