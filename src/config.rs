use serde::{Deserialize, Serialize};

pub const DEFAULT_RADIUS: f32 = 1.0;
pub const DEFAULT_SENSITIVITY: f32 = 1.0;
pub const MIN_RADIUS: f32 = 1e-3;

/// Tunables for the trackball controller.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackballConfig {
    /// Radius of the virtual sphere in normalized device coordinates.
    pub radius: f32,
    /// Multiplier applied to the angle between the two projected points.
    pub sensitivity: f32,
    /// Keep re-applying the last drag increment after the pointer is released.
    pub spin: bool,
}

impl TrackballConfig {
    /// Replace values the projection cannot work with.
    pub fn sanitized(self) -> Self {
        let radius = if self.radius.is_finite() {
            self.radius.max(MIN_RADIUS)
        } else {
            DEFAULT_RADIUS
        };
        let sensitivity = if self.sensitivity.is_finite() {
            self.sensitivity
        } else {
            DEFAULT_SENSITIVITY
        };

        if radius != self.radius || sensitivity != self.sensitivity {
            log::warn!(
                "Adjusted trackball config: radius {} -> {}, sensitivity {} -> {}",
                self.radius,
                radius,
                self.sensitivity,
                sensitivity
            );
        }

        Self {
            radius,
            sensitivity,
            spin: self.spin,
        }
    }
}

impl Default for TrackballConfig {
    fn default() -> Self {
        Self {
            radius: DEFAULT_RADIUS,
            sensitivity: DEFAULT_SENSITIVITY,
            spin: true,
        }
    }
}
