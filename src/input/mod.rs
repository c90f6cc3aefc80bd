//! Maps pointer, keyboard and wheel events onto [`Camera`] operations.

mod platform;

pub use platform::WinitInput;

use crate::config::InputSettings;
use crate::render::Camera;

/// Button id of the primary (usually left) pointer button.
pub const PRIMARY_BUTTON: u8 = 0;

/// Keys the camera controls react to; everything else arrives as `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    W,
    S,
    A,
    D,
    Q,
    E,
    Backquote,
    Other,
}

/// Platform-neutral input event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Relative pointer movement in pixels.
    PointerMove { dx: f32, dy: f32 },
    PointerDown { button: u8 },
    PointerUp { button: u8 },
    KeyDown(Key),
    KeyUp(Key),
    /// Vertical wheel delta in pixels, positive when scrolling down.
    Wheel { delta_y: f32 },
}

#[derive(Debug, Clone, Default)]
pub struct InputManager {
    settings: InputSettings,
    dragging: bool,
}

impl InputManager {
    pub fn new(settings: InputSettings) -> Self {
        Self {
            settings,
            dragging: false,
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn handle(&mut self, event: &InputEvent, camera: &mut Camera) {
        match *event {
            InputEvent::PointerMove { dx, dy } => {
                if self.dragging {
                    let divisor = self.settings.look_divisor;
                    camera.rotate_xy(dy / divisor, dx / divisor);
                }
            }
            InputEvent::PointerDown { button } if button == PRIMARY_BUTTON => {
                self.dragging = true;
            }
            InputEvent::PointerUp { button } if button == PRIMARY_BUTTON => {
                self.dragging = false;
            }
            InputEvent::KeyDown(key) => self.on_key_down(key, camera),
            InputEvent::Wheel { delta_y } => {
                camera.move_forward(delta_y / self.settings.wheel_divisor);
            }
            InputEvent::PointerDown { .. } | InputEvent::PointerUp { .. } | InputEvent::KeyUp(_) => {}
        }
    }

    fn on_key_down(&mut self, key: Key, camera: &mut Camera) {
        let speed = self.settings.move_speed;
        match key {
            Key::Backquote => camera.initialize(),
            Key::W => camera.move_forward(speed),
            Key::S => camera.move_forward(-speed),
            Key::A => camera.move_right(speed),
            Key::D => camera.move_right(-speed),
            Key::Q => camera.move_up(-speed),
            Key::E => camera.move_up(speed),
            Key::Other => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    const EPS: f32 = 1e-5;

    #[test]
    fn look_requires_primary_drag() {
        let mut input = InputManager::default();
        let mut cam = Camera::default();

        input.handle(&InputEvent::PointerMove { dx: 50.0, dy: 20.0 }, &mut cam);
        assert_eq!(cam.rotation(), Vec3::ZERO);

        input.handle(&InputEvent::PointerDown { button: 2 }, &mut cam);
        input.handle(&InputEvent::PointerMove { dx: 50.0, dy: 20.0 }, &mut cam);
        assert_eq!(cam.rotation(), Vec3::ZERO);

        input.handle(&InputEvent::PointerDown { button: PRIMARY_BUTTON }, &mut cam);
        assert!(input.is_dragging());
        input.handle(&InputEvent::PointerMove { dx: 50.0, dy: 20.0 }, &mut cam);
        // vertical movement pitches, horizontal movement yaws
        assert!((cam.rotation().x - 0.2).abs() < EPS);
        assert!((cam.rotation().y - 0.5).abs() < EPS);

        input.handle(&InputEvent::PointerUp { button: PRIMARY_BUTTON }, &mut cam);
        input.handle(&InputEvent::PointerMove { dx: 50.0, dy: 20.0 }, &mut cam);
        assert!((cam.rotation().y - 0.5).abs() < EPS);
    }

    #[test]
    fn movement_keys() {
        let mut input = InputManager::default();
        let mut cam = Camera::default();

        input.handle(&InputEvent::KeyDown(Key::W), &mut cam);
        assert!((cam.position() - Vec3::new(0.0, 0.0, -9.7)).length() < EPS);
        input.handle(&InputEvent::KeyDown(Key::S), &mut cam);
        assert!((cam.position() - Vec3::new(0.0, 0.0, -10.0)).length() < EPS);

        input.handle(&InputEvent::KeyDown(Key::A), &mut cam);
        assert!((cam.position().x - 0.3).abs() < EPS);
        input.handle(&InputEvent::KeyDown(Key::D), &mut cam);
        assert!(cam.position().x.abs() < EPS);

        input.handle(&InputEvent::KeyDown(Key::E), &mut cam);
        assert!((cam.position().y - 0.3).abs() < EPS);
        input.handle(&InputEvent::KeyDown(Key::Q), &mut cam);
        assert!(cam.position().y.abs() < EPS);

        let before = cam.position();
        input.handle(&InputEvent::KeyUp(Key::W), &mut cam);
        input.handle(&InputEvent::KeyDown(Key::Other), &mut cam);
        assert_eq!(cam.position(), before);
    }

    #[test]
    fn backquote_resets_camera() {
        let mut input = InputManager::default();
        let mut cam = Camera::default();
        cam.rotate_xy(1.0, 2.0);
        cam.move_up(3.0);

        input.handle(&InputEvent::KeyDown(Key::Backquote), &mut cam);
        assert_eq!(cam.position(), Vec3::new(0.0, 0.0, -10.0));
        assert_eq!(cam.rotation(), Vec3::ZERO);
    }

    #[test]
    fn wheel_moves_forward() {
        let mut input = InputManager::default();
        let mut cam = Camera::default();
        input.handle(&InputEvent::Wheel { delta_y: 100.0 }, &mut cam);
        assert!((cam.position().z + 9.0).abs() < EPS);
        input.handle(&InputEvent::Wheel { delta_y: -250.0 }, &mut cam);
        assert!((cam.position().z + 11.5).abs() < EPS);
    }
}
