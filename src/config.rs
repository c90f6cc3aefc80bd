//! Tunable settings for the camera, the input mapping and the demo scene.

use glam::Vec3;

/// Projection parameters and reset pose of the fly camera.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraSettings {
    pub fov_degrees: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
    /// Bound applied per axis to the position after every relative move.
    pub max_distance: f32,
    pub home_position: Vec3,
    pub home_rotation: Vec3,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            fov_degrees: 45.0,
            aspect: 1.0,
            near: 0.1,
            far: 100.0,
            max_distance: 20.0,
            home_position: Vec3::new(0.0, 0.0, -10.0),
            home_rotation: Vec3::ZERO,
        }
    }
}

impl CameraSettings {
    pub fn fov_radians(&self) -> f32 {
        self.fov_degrees.to_radians()
    }
}

/// Scaling applied when raw input deltas are turned into camera motion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InputSettings {
    pub move_speed: f32,
    /// Pointer movement is divided by this before being applied as radians.
    pub look_divisor: f32,
    /// Wheel delta (browser pixel units) is divided by this before moving.
    pub wheel_divisor: f32,
}

impl Default for InputSettings {
    fn default() -> Self {
        Self {
            move_speed: 0.3,
            look_divisor: 100.0,
            wheel_divisor: 100.0,
        }
    }
}

/// Canonical shapes the demo can put on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(not(target_arch = "wasm32"), derive(clap::ValueEnum))]
pub enum Shape {
    Triangle,
    Square,
    #[default]
    Box,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DemoSettings {
    pub canvas_size: u32,
    pub shape: Shape,
    pub scale: f32,
    /// Euler angles (radians) applied to the demo mesh's model transform.
    pub model_rotation: Vec3,
}

impl Default for DemoSettings {
    fn default() -> Self {
        Self {
            canvas_size: 800,
            shape: Shape::Box,
            scale: 0.7,
            model_rotation: Vec3::new(0.5, 0.7, 0.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_camera_settings() {
        let settings = CameraSettings::default();
        assert_eq!(settings.home_position, Vec3::new(0.0, 0.0, -10.0));
        assert_eq!(settings.max_distance, 20.0);
        assert!((settings.fov_radians() - std::f32::consts::FRAC_PI_4).abs() < 1e-6);
    }
}
