use winit::event::{ElementState, MouseButton, WindowEvent};

use crate::trackball::Trackball;

/// Adapter that bridges Winit pointer events to a [`Trackball`]
#[derive(Debug, Clone, Default)]
pub struct PointerInput {
    /// Current cursor position in physical pixels (relative to window)
    cursor_position: Option<(f32, f32)>,
}

impl PointerInput {
    /// Create an adapter that has not seen the cursor yet
    pub fn new() -> Self {
        Self {
            cursor_position: None,
        }
    }

    /// Process a Winit WindowEvent and drive the trackball.
    /// Returns true if the rotation or drag state may have changed.
    pub fn process_event(&mut self, trackball: &mut Trackball, event: &WindowEvent) -> bool {
        match event {
            WindowEvent::MouseInput {
                state,
                button: MouseButton::Left,
                ..
            } => match state {
                ElementState::Pressed => self.press(trackball),
                ElementState::Released => self.release(trackball),
            },
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor_moved(trackball, position.x as f32, position.y as f32)
            }
            WindowEvent::Resized(size) => {
                trackball.resize(size.width, size.height);
                false
            }
            _ => false,
        }
    }

    /// Primary button pressed at the last known cursor position.
    /// Ignored until the cursor has been seen.
    pub fn press(&mut self, trackball: &mut Trackball) -> bool {
        match self.cursor_position {
            Some((x, y)) => {
                trackball.begin_drag_px(x, y);
                true
            }
            None => false,
        }
    }

    /// Primary button released
    pub fn release(&mut self, trackball: &mut Trackball) -> bool {
        let was_dragging = trackball.is_dragging();
        trackball.end_drag();
        was_dragging
    }

    /// Cursor moved to a pixel position
    pub fn cursor_moved(&mut self, trackball: &mut Trackball, x: f32, y: f32) -> bool {
        self.cursor_position = Some((x, y));
        if trackball.is_dragging() {
            trackball.update_drag_px(x, y);
            true
        } else {
            false
        }
    }

    /// Get current cursor position (if available)
    pub fn cursor_position(&self) -> Option<(f32, f32)> {
        self.cursor_position
    }
}
