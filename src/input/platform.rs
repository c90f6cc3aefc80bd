use winit::dpi::PhysicalPosition;
use winit::event::{ElementState, MouseButton, MouseScrollDelta, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

use super::{InputEvent, Key};

/// Pixels one wheel "line" is worth, matching what browsers report.
pub const PIXELS_PER_LINE: f32 = 100.0;

/// Turns winit window events into [`InputEvent`]s.
///
/// Cursor positions are absolute in winit, so the previous one is kept to
/// produce relative pointer movement.
#[derive(Debug, Default)]
pub struct WinitInput {
    last_cursor: Option<PhysicalPosition<f64>>,
}

impl WinitInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn translate(&mut self, event: &WindowEvent) -> Option<InputEvent> {
        match event {
            WindowEvent::CursorMoved { position, .. } => {
                let previous = self.last_cursor.replace(*position)?;
                Some(InputEvent::PointerMove {
                    dx: (position.x - previous.x) as f32,
                    dy: (position.y - previous.y) as f32,
                })
            }
            WindowEvent::CursorLeft { .. } => {
                self.last_cursor = None;
                None
            }
            WindowEvent::MouseInput { state, button, .. } => {
                let button = button_id(*button);
                Some(match state {
                    ElementState::Pressed => InputEvent::PointerDown { button },
                    ElementState::Released => InputEvent::PointerUp { button },
                })
            }
            WindowEvent::KeyboardInput { event, .. } => {
                let key = match event.physical_key {
                    PhysicalKey::Code(code) => key_from_code(code),
                    PhysicalKey::Unidentified(_) => Key::Other,
                };
                Some(match event.state {
                    ElementState::Pressed => InputEvent::KeyDown(key),
                    ElementState::Released => InputEvent::KeyUp(key),
                })
            }
            WindowEvent::MouseWheel { delta, .. } => Some(InputEvent::Wheel {
                delta_y: wheel_delta_y(*delta),
            }),
            _ => None,
        }
    }
}

/// DOM numbering: 0 primary, 1 middle, 2 secondary.
pub fn button_id(button: MouseButton) -> u8 {
    match button {
        MouseButton::Left => 0,
        MouseButton::Middle => 1,
        MouseButton::Right => 2,
        MouseButton::Back => 3,
        MouseButton::Forward => 4,
        MouseButton::Other(id) => u8::try_from(id).unwrap_or(u8::MAX),
    }
}

pub fn key_from_code(code: KeyCode) -> Key {
    match code {
        KeyCode::KeyW => Key::W,
        KeyCode::KeyS => Key::S,
        KeyCode::KeyA => Key::A,
        KeyCode::KeyD => Key::D,
        KeyCode::KeyQ => Key::Q,
        KeyCode::KeyE => Key::E,
        KeyCode::Backquote => Key::Backquote,
        _ => Key::Other,
    }
}

/// winit reports scrolling up as positive; browsers report scrolling down as positive.
pub fn wheel_delta_y(delta: MouseScrollDelta) -> f32 {
    match delta {
        MouseScrollDelta::LineDelta(_, y) => -y * PIXELS_PER_LINE,
        MouseScrollDelta::PixelDelta(pos) => -pos.y as f32,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wheel_uses_browser_sign_and_units() {
        assert_eq!(wheel_delta_y(MouseScrollDelta::LineDelta(0.0, -1.0)), 100.0);
        assert_eq!(wheel_delta_y(MouseScrollDelta::LineDelta(0.0, 2.0)), -200.0);
        assert_eq!(
            wheel_delta_y(MouseScrollDelta::PixelDelta(PhysicalPosition::new(0.0, 30.0))),
            -30.0
        );
    }

    #[test]
    fn camera_keys_map_from_physical_codes() {
        assert_eq!(key_from_code(KeyCode::KeyW), Key::W);
        assert_eq!(key_from_code(KeyCode::KeyQ), Key::Q);
        assert_eq!(key_from_code(KeyCode::Backquote), Key::Backquote);
        assert_eq!(key_from_code(KeyCode::KeyR), Key::Other);
    }

    #[test]
    fn buttons_use_dom_numbering() {
        assert_eq!(button_id(MouseButton::Left), super::super::PRIMARY_BUTTON);
        assert_eq!(button_id(MouseButton::Right), 2);
        assert_eq!(button_id(MouseButton::Other(900)), u8::MAX);
    }
}
