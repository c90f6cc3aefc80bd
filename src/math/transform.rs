use glam::{EulerRot, Mat4, Quat, Vec3};

/// Placement of a mesh in world space; becomes the model matrix uploaded each frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform {
    pub const IDENTITY: Self = Self {
        position: Vec3::ZERO,
        rotation: Quat::IDENTITY,
        scale: Vec3::ONE,
    };

    pub fn new(position: Vec3, rotation: Quat, scale: Vec3) -> Self {
        Self {
            position,
            rotation,
            scale,
        }
    }

    /// Rotation from euler radians applied in X, then Y, then Z order.
    pub fn from_euler(angles: Vec3) -> Self {
        Self {
            rotation: Quat::from_euler(EulerRot::XYZ, angles.x, angles.y, angles.z),
            ..Self::IDENTITY
        }
    }

    pub fn with_position(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }

    pub fn with_scale(mut self, scale: Vec3) -> Self {
        self.scale = scale;
        self
    }

    pub fn to_matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.scale, self.rotation, self.position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_is_identity_matrix() {
        assert_eq!(Transform::default().to_matrix(), Mat4::IDENTITY);
    }

    #[test]
    fn single_axis_euler_matches_axis_rotation() {
        let pitch = Transform::from_euler(Vec3::new(0.5, 0.0, 0.0)).to_matrix();
        assert!(pitch.abs_diff_eq(Mat4::from_rotation_x(0.5), 1e-5));

        let yaw = Transform::from_euler(Vec3::new(0.0, 0.7, 0.0)).to_matrix();
        assert!(yaw.abs_diff_eq(Mat4::from_rotation_y(0.7), 1e-5));
    }

    #[test]
    fn translation_lands_in_last_column() {
        let m = Transform::IDENTITY
            .with_position(Vec3::new(1.0, 2.0, 3.0))
            .with_scale(Vec3::splat(2.0))
            .to_matrix();
        assert_eq!(m.w_axis.truncate(), Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(m.transform_vector3(Vec3::X), Vec3::new(2.0, 0.0, 0.0));
    }
}
