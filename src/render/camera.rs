use glam::{Mat4, Vec3};

use crate::config::CameraSettings;

/// Free-fly camera.
///
/// Position and euler rotation are the only state; the view matrix is rebuilt
/// from them after every mutation and the projection matrix only when one of
/// its parameters changes.
#[derive(Debug, Clone)]
pub struct Camera {
    settings: CameraSettings,
    position: Vec3,
    rotation: Vec3,
    view: Mat4,
    projection: Mat4,
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(CameraSettings::default())
    }
}

impl Camera {
    pub fn new(settings: CameraSettings) -> Self {
        let mut camera = Self {
            settings,
            position: settings.home_position,
            rotation: settings.home_rotation,
            view: Mat4::IDENTITY,
            projection: Mat4::IDENTITY,
        };
        camera.initialize();
        camera
    }

    /// Returns to the home pose and rebuilds both matrices.
    pub fn initialize(&mut self) {
        self.position = self.settings.home_position;
        self.rotation = self.settings.home_rotation;
        self.update_projection_matrix();
        self.update_view_matrix();
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn rotation(&self) -> Vec3 {
        self.rotation
    }

    pub fn view_matrix(&self) -> Mat4 {
        self.view
    }

    pub fn projection_matrix(&self) -> Mat4 {
        self.projection
    }

    pub fn settings(&self) -> &CameraSettings {
        &self.settings
    }

    pub fn max_distance(&self) -> f32 {
        self.settings.max_distance
    }

    /// Teleports the camera. Unlike the `move_*` operations this does not clamp.
    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
        self.update_view_matrix();
    }

    pub fn set_rotation(&mut self, rotation: Vec3) {
        self.rotation = rotation;
        self.update_view_matrix();
    }

    pub fn set_aspect(&mut self, aspect: f32) {
        if aspect == self.settings.aspect {
            return;
        }
        self.settings.aspect = aspect;
        self.update_projection_matrix();
    }

    pub fn set_perspective(&mut self, fov_degrees: f32, near: f32, far: f32) {
        self.settings.fov_degrees = fov_degrees;
        self.settings.near = near;
        self.settings.far = far;
        self.update_projection_matrix();
    }

    pub fn move_forward(&mut self, distance: f32) {
        let forward = self.view.inverse().z_axis.truncate();
        self.translate_along(forward, distance);
    }

    pub fn move_right(&mut self, distance: f32) {
        let right = self.view.inverse().x_axis.truncate();
        self.translate_along(right, distance);
    }

    pub fn move_up(&mut self, distance: f32) {
        let up = self.view.inverse().y_axis.truncate();
        self.translate_along(up, distance);
    }

    /// Accumulates pitch (`x`) and yaw (`y`). No gimbal clamp is applied.
    pub fn rotate_xy(&mut self, x: f32, y: f32) {
        self.rotation.x += x;
        self.rotation.y += y;
        self.update_view_matrix();
    }

    fn translate_along(&mut self, axis: Vec3, distance: f32) {
        let offset = axis.normalize_or_zero() * distance;
        let bound = Vec3::splat(self.settings.max_distance);
        self.position = (self.position + offset).clamp(-bound, bound);
        self.update_view_matrix();
    }

    fn update_view_matrix(&mut self) {
        self.view = view_matrix(self.position, self.rotation);
    }

    fn update_projection_matrix(&mut self) {
        self.projection = Mat4::perspective_rh(
            self.settings.fov_radians(),
            self.settings.aspect,
            self.settings.near,
            self.settings.far,
        );
    }
}

/// `Rx · Ry · Rz · T(position)`.
pub fn view_matrix(position: Vec3, rotation: Vec3) -> Mat4 {
    Mat4::from_rotation_x(rotation.x)
        * Mat4::from_rotation_y(rotation.y)
        * Mat4::from_rotation_z(rotation.z)
        * Mat4::from_translation(position)
}
