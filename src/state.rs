//! Mutable application state owned by the render loop.

use glam::Vec3;

use crate::{
    camera::Camera,
    input::{MovementKeys, apply_movement},
    scene::{Object, default_objects},
};

/// Initial eye position of the camera.
pub const CAMERA_EYE: Vec3 = Vec3::new(2.0, 5.0, 8.0);
/// Initial target of the camera.
pub const CAMERA_TARGET: Vec3 = Vec3::ZERO;

/// Tracks the time between loop iterations.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameClock {
    pub previous_time: f32,
    pub delta_time: f32,
}

impl FrameClock {
    /// Advances the clock to `time` (seconds since start) and returns the
    /// elapsed time since the previous tick.
    pub fn tick(&mut self, time: f32) -> f32 {
        self.delta_time = time - self.previous_time;
        self.previous_time = time;
        self.delta_time
    }
}

/// Everything the loop mutates between frames.
pub struct AppState {
    pub camera: Camera,
    pub clock: FrameClock,
    pub objects: Vec<Object>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Camera::new(CAMERA_EYE, CAMERA_TARGET), default_objects())
    }
}

impl AppState {
    pub fn new(camera: Camera, objects: Vec<Object>) -> Self {
        Self {
            camera,
            clock: FrameClock::default(),
            objects,
        }
    }

    /// Advances the clock, applies held movement keys and recomputes the
    /// camera matrices for this frame.
    pub fn update(&mut self, time: f32, keys: &MovementKeys) {
        let delta_time = self.clock.tick(time);
        apply_movement(&mut self.camera, keys, delta_time);
        self.camera.calculate_matrices();
    }
}
