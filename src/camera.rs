//! The free-flying camera.
//!
//! The [`Camera`] keeps an eye position and a fixed orthonormal basis, and
//! turns them into view and projection matrices once per frame. The projection
//! parameters are fixed constants and are never derived from the window size.

use glam::{Mat4, Vec3};

/// Vertical field of view, in degrees.
pub const FOV_DEGREES: f32 = 90.0;
/// Aspect ratio used for the projection matrix.
pub const ASPECT_RATIO: f32 = 1920.0 / 1080.0;
/// Near clipping plane distance.
pub const Z_NEAR: f32 = 0.2;
/// Far clipping plane distance.
pub const Z_FAR: f32 = 100.0;

/// A camera looking down its `front` vector from `eye_position`.
#[derive(Debug, Clone)]
pub struct Camera {
    pub eye_position: Vec3,
    pub right: Vec3,
    pub up: Vec3,
    pub front: Vec3,
    target: Vec3,
    fov: f32,
    view: Mat4,
    projection: Mat4,
}

impl Camera {
    /// Creates a camera at `eye`. The `target` is stored but the camera always
    /// looks along its `front` vector.
    pub fn new(eye: Vec3, target: Vec3) -> Self {
        Self {
            eye_position: eye,
            right: Vec3::X,
            up: Vec3::Y,
            front: Vec3::NEG_Z,
            target,
            fov: FOV_DEGREES.to_radians(),
            view: Mat4::IDENTITY,
            projection: Mat4::IDENTITY,
        }
    }

    /// Recomputes the view and projection matrices. Must run once per frame
    /// before any [`Camera::mvp`] call in that frame.
    pub fn calculate_matrices(&mut self) {
        self.view = Mat4::look_at_rh(self.eye_position, self.eye_position + self.front, Vec3::Y);
        self.projection = Mat4::perspective_rh_gl(self.fov, ASPECT_RATIO, Z_NEAR, Z_FAR);
    }

    /// Returns `projection * view * model`.
    pub fn mvp(&self, model: Mat4) -> Mat4 {
        self.projection * self.view * model
    }

    pub fn view_matrix(&self) -> Mat4 {
        self.view
    }

    pub fn projection_matrix(&self) -> Mat4 {
        self.projection
    }

    pub fn target(&self) -> Vec3 {
        self.target
    }

    /// Field of view in radians.
    pub fn fov(&self) -> f32 {
        self.fov
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    #[test]
    fn test_defaults() {
        let camera = Camera::new(Vec3::new(1.0, 2.0, 3.0), Vec3::ZERO);
        assert_eq!(camera.right, Vec3::new(1.0, 0.0, 0.0));
        assert_eq!(camera.up, Vec3::new(0.0, 1.0, 0.0));
        assert_eq!(camera.front, Vec3::new(0.0, 0.0, -1.0));
        assert!((camera.fov() - std::f32::consts::FRAC_PI_2).abs() < EPS);
        assert_eq!(camera.view_matrix(), Mat4::IDENTITY);
        assert_eq!(camera.projection_matrix(), Mat4::IDENTITY);
    }

    #[test]
    fn test_view_looks_along_front() {
        let mut camera = Camera::new(Vec3::new(2.0, 5.0, 8.0), Vec3::ZERO);
        camera.calculate_matrices();

        let expected = Mat4::look_at_rh(
            Vec3::new(2.0, 5.0, 8.0),
            Vec3::new(2.0, 5.0, 7.0),
            Vec3::new(0.0, 1.0, 0.0),
        );
        assert!(camera.view_matrix().abs_diff_eq(expected, EPS));
        // The target has no influence on the view.
        assert_eq!(camera.target(), Vec3::ZERO);
    }

    #[test]
    fn test_projection_constants() {
        let mut camera = Camera::new(Vec3::ZERO, Vec3::ZERO);
        camera.calculate_matrices();

        let expected = Mat4::perspective_rh_gl(90.0f32.to_radians(), 1920.0 / 1080.0, 0.2, 100.0);
        assert!(camera.projection_matrix().abs_diff_eq(expected, EPS));
    }

    #[test]
    fn test_mvp_identity_model() {
        let eye = Vec3::new(-3.0, 1.5, 4.0);
        let mut camera = Camera::new(eye, Vec3::ZERO);
        camera.calculate_matrices();

        let expected = camera.projection_matrix()
            * Mat4::look_at_rh(eye, eye + Vec3::NEG_Z, Vec3::Y);
        assert!(camera.mvp(Mat4::IDENTITY).abs_diff_eq(expected, EPS));
    }

    #[test]
    fn test_moving_eye_only_changes_view() {
        let mut camera = Camera::new(Vec3::new(2.0, 5.0, 8.0), Vec3::ZERO);
        camera.calculate_matrices();
        let view_before = camera.view_matrix();
        let projection_before = camera.projection_matrix();

        camera.eye_position += Vec3::new(0.5, -1.0, 2.0);
        camera.calculate_matrices();

        assert!(!camera.view_matrix().abs_diff_eq(view_before, EPS));
        assert_eq!(camera.projection_matrix(), projection_before);
    }

    #[test]
    fn test_mvp_composes_model_products() {
        let mut camera = Camera::new(Vec3::new(0.0, 1.0, 10.0), Vec3::ZERO);
        camera.calculate_matrices();

        let a = Mat4::from_translation(Vec3::new(1.0, -2.0, 0.5));
        let b = Mat4::from_scale(Vec3::new(0.5, 2.0, 1.0))
            * Mat4::from_rotation_y(0.3);

        let lhs = camera.mvp(a * b);
        let rhs = camera.projection_matrix() * camera.view_matrix() * a * b;
        assert!(lhs.abs_diff_eq(rhs, 1e-4));
    }
}
