use glam::{Vec2, Vec3};

/// Distance from the center, as a fraction of the radius, where the sphere
/// cap hands over to the hyperbolic sheet.
pub const SHEET_BOUNDARY: f32 = std::f32::consts::FRAC_1_SQRT_2;

/// Lift a 2D point onto the virtual trackball surface.
///
/// Points outside the circle of the given radius are first pulled radially
/// onto its edge. Inside `radius / sqrt(2)` the point lands on a sphere of
/// the given radius. Further out it lands on the hyperbola
/// `z = (radius / sqrt(2))^2 / d`, which meets the sphere with matching
/// height at the boundary and falls off smoothly instead of hitting the
/// silhouette edge.
///
/// `radius` must be positive.
pub fn project_to_sphere(radius: f32, point: Vec2) -> Vec3 {
    let mut point = point;
    let mut d = point.length();
    if d > radius {
        point *= radius / d;
        d = radius;
    }

    let t = radius * SHEET_BOUNDARY;
    let z = if d < t {
        (radius * radius - d * d).sqrt()
    } else {
        t * t / d
    };

    point.extend(z)
}
