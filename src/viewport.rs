use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Window size in physical pixels, used to map pointer positions into
/// normalized device coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    /// Zero dimensions (a minimized window) are clamped to one pixel.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width: width.max(1),
            height: height.max(1),
        }
    }

    /// Map a pixel position (origin top-left, y down) to [-1, 1] with y up.
    ///
    /// Positions outside the window map outside [-1, 1]; the trackball
    /// projection handles those.
    pub fn normalize(&self, x: f32, y: f32) -> Vec2 {
        let w = self.width.max(1) as f32;
        let h = self.height.max(1) as f32;
        Vec2::new((2.0 * x - w) / w, (h - 2.0 * y) / h)
    }

    pub fn aspect_ratio(&self) -> f32 {
        self.width.max(1) as f32 / self.height.max(1) as f32
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(500, 500)
    }
}
