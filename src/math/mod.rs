mod projection;
mod rotation;

pub use projection::{project_to_sphere, SHEET_BOUNDARY};
pub use rotation::{arcball_rotation, axis_angle, compose, renormalize, to_matrix};
