use glam::{Mat4, Quat, Vec2, Vec3};

use super::projection::project_to_sphere;

/// Relative cross-product length below which two sphere points count as coincident.
const DEGENERATE_EPSILON: f32 = 1e-7;

/// Quaternions shorter than this cannot be renormalized meaningfully.
const NORMALIZE_EPSILON: f32 = 1e-6;

/// Rotation that drags the trackball surface from `from` to `to`.
///
/// Both points are in normalized device coordinates. They are lifted onto
/// the trackball with [`project_to_sphere`]; the rotation axis is the cross
/// product of the lifted points and the angle comes from their dot product,
/// multiplied by `sensitivity`. Coincident points give the identity.
pub fn arcball_rotation(radius: f32, sensitivity: f32, from: Vec2, to: Vec2) -> Quat {
    if from == to {
        return Quat::IDENTITY;
    }

    let p1 = project_to_sphere(radius, from);
    let p2 = project_to_sphere(radius, to);

    let axis = p1.cross(p2);
    let axis_len = axis.length();
    if !axis_len.is_finite() || axis_len <= DEGENERATE_EPSILON * p1.length() * p2.length() {
        return Quat::IDENTITY;
    }

    let angle = axis_len.atan2(p1.dot(p2)) * sensitivity;
    let axis = axis / axis_len;

    // q = (axis * sin(angle / 2), cos(angle / 2))
    let (sin, cos) = (angle * 0.5).sin_cos();
    Quat::from_xyzw(axis.x * sin, axis.y * sin, axis.z * sin, cos)
}

/// Apply `incremental` after `accumulated`, in view space.
///
/// The product is renormalized so repeated composition does not drift off
/// the unit sphere.
pub fn compose(accumulated: Quat, incremental: Quat) -> Quat {
    renormalize(incremental * accumulated)
}

/// Scale `q` back to unit length, falling back to the identity when it has
/// collapsed to (near) zero or picked up NaN/Inf.
pub fn renormalize(q: Quat) -> Quat {
    let len = q.length();
    if !len.is_finite() || len < NORMALIZE_EPSILON {
        return Quat::IDENTITY;
    }
    q * (1.0 / len)
}

/// Column-major rotation matrix for a unit quaternion.
pub fn to_matrix(q: Quat) -> Mat4 {
    Mat4::from_quat(q)
}

/// Axis and angle (radians) of a unit quaternion; the identity reports +X and 0.
pub fn axis_angle(q: Quat) -> (Vec3, f32) {
    let v = q.xyz();
    let sin_half = v.length();
    if !sin_half.is_finite() || sin_half < NORMALIZE_EPSILON {
        return (Vec3::X, 0.0);
    }
    (v / sin_half, 2.0 * sin_half.atan2(q.w))
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-5;

    fn assert_quat_near(a: Quat, b: Quat) {
        // q and -q encode the same rotation
        let same = (a - b).length() < 1e-4 || (a + b).length() < 1e-4;
        assert!(same, "{:?} != {:?}", a, b);
    }

    #[test]
    fn test_no_motion_is_identity() {
        let p = Vec2::new(0.3, -0.2);
        assert_eq!(arcball_rotation(1.0, 1.0, p, p), Quat::IDENTITY);
    }

    #[test]
    fn test_rotation_is_unit() {
        let q = arcball_rotation(1.0, 1.0, Vec2::new(-0.4, 0.1), Vec2::new(0.6, 0.7));
        assert!((q.length() - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_horizontal_drag_rotates_about_y() {
        let q = arcball_rotation(1.0, 1.0, Vec2::ZERO, Vec2::new(0.5, 0.0));
        let (axis, angle) = axis_angle(q);
        assert!((axis - Vec3::Y).length() < EPSILON);
        assert!((angle - 30f32.to_radians()).abs() < EPSILON);
    }

    #[test]
    fn test_vertical_drag_rotates_about_negative_x() {
        // Dragging up tips the front of the ball upward
        let q = arcball_rotation(1.0, 1.0, Vec2::ZERO, Vec2::new(0.0, 0.5));
        let (axis, _) = axis_angle(q);
        assert!((axis + Vec3::X).length() < EPSILON);
    }

    #[test]
    fn test_sensitivity_scales_angle() {
        let from = Vec2::ZERO;
        let to = Vec2::new(0.5, 0.0);
        let (_, base) = axis_angle(arcball_rotation(1.0, 1.0, from, to));
        let (_, doubled) = axis_angle(arcball_rotation(1.0, 2.0, from, to));
        assert!((doubled - 2.0 * base).abs() < EPSILON);
    }

    #[test]
    fn test_reverse_drag_is_inverse() {
        let a = Vec2::new(0.1, 0.2);
        let b = Vec2::new(0.5, -0.3);
        let forward = arcball_rotation(1.0, 1.0, a, b);
        let backward = arcball_rotation(1.0, 1.0, b, a);
        assert_quat_near(forward * backward, Quat::IDENTITY);
    }

    #[test]
    fn test_drag_outside_circle_matches_edge_drag() {
        let outside = arcball_rotation(1.0, 1.0, Vec2::new(2.0, 0.0), Vec2::new(0.0, 2.0));
        let edge = arcball_rotation(1.0, 1.0, Vec2::new(1.0, 0.0), Vec2::new(0.0, 1.0));
        assert_quat_near(outside, edge);
    }

    #[test]
    fn test_radial_drag_outside_circle_is_identity() {
        let q = arcball_rotation(1.0, 1.0, Vec2::new(2.0, 0.0), Vec2::new(4.0, 0.0));
        assert_eq!(q, Quat::IDENTITY);
    }

    #[test]
    fn test_compose_with_identity() {
        let q = Quat::from_rotation_z(0.7);
        assert_quat_near(compose(q, Quat::IDENTITY), q);
        assert_quat_near(compose(Quat::IDENTITY, q), q);
    }

    #[test]
    fn test_compose_applies_increment_last() {
        let acc = Quat::from_rotation_x(std::f32::consts::FRAC_PI_2);
        let inc = Quat::from_rotation_y(std::f32::consts::FRAC_PI_2);
        let combined = compose(acc, inc);

        // +Z goes to -Y under the accumulated rotation; the increment about Y leaves it there
        let v = combined * Vec3::Z;
        assert!((v - Vec3::NEG_Y).length() < EPSILON);
    }

    #[test]
    fn test_renormalize_rescales() {
        let q = Quat::from_xyzw(0.0, 0.0, 0.0, 3.0);
        assert_quat_near(renormalize(q), Quat::IDENTITY);

        let q = Quat::from_xyzw(1.0, 1.0, 1.0, 1.0);
        assert!((renormalize(q).length() - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_renormalize_degenerate_falls_back_to_identity() {
        assert_eq!(renormalize(Quat::from_xyzw(0.0, 0.0, 0.0, 0.0)), Quat::IDENTITY);
        assert_eq!(renormalize(Quat::from_xyzw(1e-9, 0.0, 0.0, 0.0)), Quat::IDENTITY);
        assert_eq!(renormalize(Quat::from_xyzw(f32::NAN, 0.0, 0.0, 1.0)), Quat::IDENTITY);
        assert_eq!(renormalize(Quat::from_xyzw(f32::INFINITY, 0.0, 0.0, 1.0)), Quat::IDENTITY);
    }

    #[test]
    fn test_identity_matrix() {
        assert_eq!(to_matrix(Quat::IDENTITY), Mat4::IDENTITY);
    }

    #[test]
    fn test_matrix_is_orthonormal() {
        let q = arcball_rotation(0.8, 1.0, Vec2::new(-0.7, 0.2), Vec2::new(0.4, 0.9));
        let m = to_matrix(q);
        let product = m * m.transpose();
        assert!(product.abs_diff_eq(Mat4::IDENTITY, EPSILON));
        assert!((m.determinant() - 1.0).abs() < EPSILON);
        assert_eq!(m.w_axis, glam::Vec4::W);
    }

    #[test]
    fn test_axis_angle_identity() {
        assert_eq!(axis_angle(Quat::IDENTITY), (Vec3::X, 0.0));
    }
}
