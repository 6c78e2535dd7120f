//! Keyboard-driven camera movement.

use sdl2::keyboard::{KeyboardState, Scancode};

use crate::camera::Camera;

/// Movement speed in world units per second.
pub const BASE_SPEED: f32 = 5.0;
/// Speed multiplier while sprinting.
pub const SPRINT_MULTIPLIER: f32 = 3.0;

/// Which movement keys are held this frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MovementKeys {
    pub forward: bool,
    pub back: bool,
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
    pub sprint: bool,
}

impl MovementKeys {
    /// Samples the held keys from the SDL keyboard state.
    pub fn from_keyboard(keyboard: &KeyboardState) -> Self {
        Self {
            forward: keyboard.is_scancode_pressed(Scancode::W),
            back: keyboard.is_scancode_pressed(Scancode::S),
            left: keyboard.is_scancode_pressed(Scancode::A),
            right: keyboard.is_scancode_pressed(Scancode::D),
            up: keyboard.is_scancode_pressed(Scancode::Space),
            down: keyboard.is_scancode_pressed(Scancode::LCtrl),
            sprint: keyboard.is_scancode_pressed(Scancode::LShift),
        }
    }

    pub fn any(&self) -> bool {
        self.forward || self.back || self.left || self.right || self.up || self.down
    }
}

/// Moves the camera eye along its basis vectors for every held key.
///
/// Opposing keys cancel out; each key contributes `speed * delta_time` along
/// its axis.
pub fn apply_movement(camera: &mut Camera, keys: &MovementKeys, delta_time: f32) {
    let mut speed = BASE_SPEED;
    if keys.sprint {
        speed *= SPRINT_MULTIPLIER;
    }
    let step = speed * delta_time;

    if keys.forward {
        camera.eye_position += step * camera.front;
    }
    if keys.back {
        camera.eye_position -= step * camera.front;
    }
    if keys.left {
        camera.eye_position -= step * camera.right;
    }
    if keys.right {
        camera.eye_position += step * camera.right;
    }
    if keys.up {
        camera.eye_position += step * camera.up;
    }
    if keys.down {
        camera.eye_position -= step * camera.up;
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;

    fn camera() -> Camera {
        Camera::new(Vec3::new(2.0, 5.0, 8.0), Vec3::ZERO)
    }

    #[test]
    fn test_forward_moves_along_front() {
        let mut camera = camera();
        let keys = MovementKeys {
            forward: true,
            ..Default::default()
        };
        apply_movement(&mut camera, &keys, 0.1);
        assert!(camera.eye_position.abs_diff_eq(Vec3::new(2.0, 5.0, 7.5), 1e-6));
    }

    #[test]
    fn test_sprint_triples_displacement() {
        let mut walking = camera();
        let mut sprinting = camera();
        let walk = MovementKeys {
            forward: true,
            ..Default::default()
        };
        let sprint = MovementKeys {
            sprint: true,
            ..walk
        };
        apply_movement(&mut walking, &walk, 0.25);
        apply_movement(&mut sprinting, &sprint, 0.25);

        let start = camera().eye_position;
        let walked = walking.eye_position - start;
        let sprinted = sprinting.eye_position - start;
        assert!(sprinted.abs_diff_eq(walked * 3.0, 1e-5));
        assert!((sprinted.length() - 3.75).abs() < 1e-5);
    }

    #[test]
    fn test_each_axis() {
        let cases = [
            (MovementKeys { back: true, ..Default::default() }, Vec3::Z),
            (MovementKeys { left: true, ..Default::default() }, Vec3::NEG_X),
            (MovementKeys { right: true, ..Default::default() }, Vec3::X),
            (MovementKeys { up: true, ..Default::default() }, Vec3::Y),
            (MovementKeys { down: true, ..Default::default() }, Vec3::NEG_Y),
        ];
        for (keys, direction) in cases {
            let mut camera = camera();
            apply_movement(&mut camera, &keys, 0.2);
            let moved = camera.eye_position - Vec3::new(2.0, 5.0, 8.0);
            assert!(moved.abs_diff_eq(direction * BASE_SPEED * 0.2, 1e-5), "{keys:?}");
        }
    }

    #[test]
    fn test_opposing_keys_cancel() {
        let mut camera = camera();
        let keys = MovementKeys {
            forward: true,
            back: true,
            left: true,
            right: true,
            ..Default::default()
        };
        apply_movement(&mut camera, &keys, 1.0);
        assert!(camera.eye_position.abs_diff_eq(Vec3::new(2.0, 5.0, 8.0), 1e-6));
    }

    #[test]
    fn test_sprint_alone_does_not_move() {
        let mut camera = camera();
        let keys = MovementKeys {
            sprint: true,
            ..Default::default()
        };
        assert!(!keys.any());
        apply_movement(&mut camera, &keys, 1.0);
        assert_eq!(camera.eye_position, Vec3::new(2.0, 5.0, 8.0));
    }
}
