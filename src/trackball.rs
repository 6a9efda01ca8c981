use glam::{Mat4, Quat, Vec2};

use crate::config::TrackballConfig;
use crate::math::{arcball_rotation, compose, to_matrix};
use crate::types::RotationUniform;
use crate::viewport::Viewport;

/// Pointer drag state
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragState {
    #[default]
    Idle,
    /// Button held; `last` is the previous pointer position in NDC.
    Dragging { last: Vec2 },
}

/// Arcball rotation controller.
///
/// Owns the accumulated rotation for one interactive session. The host feeds
/// pointer events through `begin_drag` / `update_drag` / `end_drag` and calls
/// `tick` once per animation frame; the renderer reads `matrix` or `uniform`.
#[derive(Debug, Clone)]
pub struct Trackball {
    config: TrackballConfig,
    viewport: Viewport,
    /// Accumulated rotation
    rotation: Quat,
    /// Most recent drag increment, re-applied while spinning
    last_increment: Quat,
    drag: DragState,
    spinning: bool,
}

impl Trackball {
    /// Create a controller at the identity rotation
    pub fn new(viewport: Viewport, config: TrackballConfig) -> Self {
        Self {
            config: config.sanitized(),
            viewport,
            rotation: Quat::IDENTITY,
            last_increment: Quat::IDENTITY,
            drag: DragState::Idle,
            spinning: false,
        }
    }

    pub fn config(&self) -> &TrackballConfig {
        &self.config
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.viewport = Viewport::new(width, height);
        log::debug!("Trackball viewport resized to {}x{}", width, height);
    }

    /// Start a drag at `(x, y)` in normalized device coordinates.
    ///
    /// Stops any spin in progress.
    pub fn begin_drag(&mut self, x: f32, y: f32) {
        self.drag = DragState::Dragging {
            last: Vec2::new(x, y),
        };
        self.spinning = false;
        self.last_increment = Quat::IDENTITY;
        log::trace!("Drag started at ({:.3}, {:.3})", x, y);
    }

    /// Start a drag at a pixel position.
    pub fn begin_drag_px(&mut self, x: f32, y: f32) {
        let p = self.viewport.normalize(x, y);
        self.begin_drag(p.x, p.y);
    }

    /// Move the pointer to `(x, y)` in normalized device coordinates.
    ///
    /// Returns the rotation from the previous pointer position to this one,
    /// after composing it into the accumulated rotation. Outside a drag this
    /// is a no-op returning the identity.
    pub fn update_drag(&mut self, x: f32, y: f32) -> Quat {
        let DragState::Dragging { last } = self.drag else {
            log::trace!("Pointer moved to ({:.3}, {:.3}) without a drag", x, y);
            return Quat::IDENTITY;
        };

        let current = Vec2::new(x, y);
        let increment = arcball_rotation(
            self.config.radius,
            self.config.sensitivity,
            last,
            current,
        );

        self.rotation = compose(self.rotation, increment);
        self.last_increment = increment;
        self.drag = DragState::Dragging { last: current };

        increment
    }

    /// Move the pointer to a pixel position.
    pub fn update_drag_px(&mut self, x: f32, y: f32) -> Quat {
        let p = self.viewport.normalize(x, y);
        self.update_drag(p.x, p.y)
    }

    /// Release the pointer. Starts spinning if enabled and the last move
    /// actually rotated something.
    pub fn end_drag(&mut self) {
        if self.drag == DragState::Idle {
            return;
        }

        self.drag = DragState::Idle;
        self.spinning = self.config.spin && self.last_increment != Quat::IDENTITY;
        log::debug!("Drag ended, spinning: {}", self.spinning);
    }

    /// Advance one animation step. Returns true if the rotation changed.
    pub fn tick(&mut self) -> bool {
        if !self.spinning || self.is_dragging() {
            return false;
        }

        self.rotation = compose(self.rotation, self.last_increment);
        true
    }

    /// Back to the identity rotation, idle and not spinning.
    pub fn reset(&mut self) {
        self.rotation = Quat::IDENTITY;
        self.last_increment = Quat::IDENTITY;
        self.drag = DragState::Idle;
        self.spinning = false;
        log::debug!("Trackball reset");
    }

    pub fn stop_spinning(&mut self) {
        self.spinning = false;
    }

    pub fn rotation(&self) -> Quat {
        self.rotation
    }

    pub fn last_increment(&self) -> Quat {
        self.last_increment
    }

    pub fn drag_state(&self) -> DragState {
        self.drag
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.drag, DragState::Dragging { .. })
    }

    pub fn is_spinning(&self) -> bool {
        self.spinning
    }

    pub fn matrix(&self) -> Mat4 {
        to_matrix(self.rotation)
    }

    pub fn uniform(&self) -> RotationUniform {
        RotationUniform::from_quat(self.rotation)
    }
}
