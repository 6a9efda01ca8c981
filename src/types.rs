use glam::{Mat4, Quat};

use crate::math::to_matrix;

/// Rotation uniform buffer data for GPU (column-major 4x4)
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct RotationUniform {
    pub matrix: [[f32; 4]; 4],
}

impl RotationUniform {
    pub fn from_matrix(matrix: Mat4) -> Self {
        Self {
            matrix: matrix.to_cols_array_2d(),
        }
    }

    pub fn from_quat(rotation: Quat) -> Self {
        Self::from_matrix(to_matrix(rotation))
    }
}

impl Default for RotationUniform {
    fn default() -> Self {
        Self::from_matrix(Mat4::IDENTITY)
    }
}
