//! The fixed set of objects drawn every frame.

use glam::{Mat4, Vec3};

/// A single placed instance of the box mesh.
///
/// `rotation_axis` and `angle` are kept with the object but do not take part
/// in [`Object::model_matrix`].
#[derive(Debug, Clone, PartialEq)]
pub struct Object {
    pub position: Vec3,
    pub rotation_axis: Vec3,
    pub scale: Vec3,
    pub angle: f32,
    pub name: String,
}

impl Default for Object {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation_axis: Vec3::Y,
            scale: Vec3::ONE,
            angle: 0.0,
            name: String::new(),
        }
    }
}

impl Object {
    /// Returns `translate(position) * scale(scale)`.
    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_translation(self.position) * Mat4::from_scale(self.scale)
    }
}

/// Spacing between neighbouring objects in the grid.
const GRID_SPACING: f32 = 2.0;
/// Objects per row and per column.
const GRID_SIZE: usize = 4;

/// Builds the 4x4 grid of half-scale boxes in the `z = 0` plane, filled row
/// by row from the bottom.
pub fn default_objects() -> Vec<Object> {
    let template = Object {
        rotation_axis: Vec3::ONE,
        scale: Vec3::splat(0.5),
        angle: 20.0f32.to_radians(),
        name: "rectangle".to_string(),
        ..Default::default()
    };

    (0..GRID_SIZE)
        .flat_map(|row| (0..GRID_SIZE).map(move |col| (row, col)))
        .map(|(row, col)| Object {
            position: Vec3::new(col as f32 * GRID_SPACING, row as f32 * GRID_SPACING, 0.0),
            ..template.clone()
        })
        .collect()
}
