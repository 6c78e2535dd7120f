//! Geometry for the textured box drawn at every object position.

use std::sync::Arc;

use glam::{Vec2, Vec3};
use glow::HasContext;

use crate::abs::{Mesh, Vertex};

/// Half-extents of the box along x, y and z.
pub const BOX_HALF_EXTENTS: Vec3 = Vec3::new(2.0, 1.0, 3.0);
/// Vertices per face: two triangles, no shared vertices.
pub const VERTICES_PER_FACE: usize = 6;
pub const BOX_VERTEX_COUNT: usize = VERTICES_PER_FACE * 6;

#[derive(Clone, Copy, Debug, PartialEq)]
#[repr(C)]
pub struct BoxVertex {
    pub position: Vec3,
    pub uv: Vec2,
}

impl Vertex for BoxVertex {
    fn vertex_attribs(gl: &glow::Context) {
        unsafe {
            let stride = std::mem::size_of::<BoxVertex>() as i32;

            // Position attribute
            gl.enable_vertex_attrib_array(0);
            gl.vertex_attrib_pointer_f32(0, 3, glow::FLOAT, false, stride, 0);

            // Texture coordinate attribute
            gl.enable_vertex_attrib_array(1);
            gl.vertex_attrib_pointer_f32(
                1,
                2,
                glow::FLOAT,
                false,
                stride,
                std::mem::size_of::<Vec3>() as i32,
            );
        }
    }
}

/// Texture coordinates shared by every face.
const FACE_UVS: [Vec2; VERTICES_PER_FACE] = [
    Vec2::new(0.0, 0.0),
    Vec2::new(1.0, 0.0),
    Vec2::new(1.0, 1.0),
    Vec2::new(0.0, 0.0),
    Vec2::new(1.0, 1.0),
    Vec2::new(0.0, 1.0),
];

/// Builds the 36 box vertices, face by face: front, right, back, left,
/// bottom, top.
pub fn box_vertices() -> Vec<BoxVertex> {
    let (w, h, d) = BOX_HALF_EXTENTS.into();
    let faces: [[Vec3; VERTICES_PER_FACE]; 6] = [
        // front
        [
            Vec3::new(-w, -h, d),
            Vec3::new(w, -h, d),
            Vec3::new(w, h, d),
            Vec3::new(-w, -h, d),
            Vec3::new(w, h, d),
            Vec3::new(-w, h, d),
        ],
        // right
        [
            Vec3::new(w, -h, d),
            Vec3::new(w, -h, -d),
            Vec3::new(w, h, -d),
            Vec3::new(w, -h, d),
            Vec3::new(w, h, -d),
            Vec3::new(w, h, d),
        ],
        // back
        [
            Vec3::new(w, -h, -d),
            Vec3::new(-w, -h, -d),
            Vec3::new(-w, h, -d),
            Vec3::new(w, -h, -d),
            Vec3::new(-w, h, -d),
            Vec3::new(w, h, -d),
        ],
        // left
        [
            Vec3::new(-w, -h, -d),
            Vec3::new(-w, -h, d),
            Vec3::new(-w, h, d),
            Vec3::new(-w, -h, -d),
            Vec3::new(-w, h, d),
            Vec3::new(-w, h, -d),
        ],
        // bottom
        [
            Vec3::new(-w, -h, -d),
            Vec3::new(w, -h, -d),
            Vec3::new(w, -h, d),
            Vec3::new(-w, -h, -d),
            Vec3::new(w, -h, d),
            Vec3::new(-w, -h, d),
        ],
        // top
        [
            Vec3::new(-w, h, d),
            Vec3::new(w, h, d),
            Vec3::new(w, h, -d),
            Vec3::new(-w, h, d),
            Vec3::new(w, h, -d),
            Vec3::new(-w, h, -d),
        ],
    ];

    faces
        .iter()
        .flat_map(|face| {
            face.iter()
                .zip(FACE_UVS)
                .map(|(&position, uv)| BoxVertex { position, uv })
        })
        .collect()
}

/// One index per vertex, in order.
pub fn box_indices() -> Vec<u32> {
    (0..BOX_VERTEX_COUNT as u32).collect()
}

/// Uploads the box to the GPU.
pub fn box_mesh(gl: &Arc<glow::Context>) -> Result<Mesh, String> {
    Mesh::new(gl, &box_vertices(), &box_indices(), glow::TRIANGLES)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_layout() {
        assert_eq!(std::mem::size_of::<BoxVertex>(), 5 * std::mem::size_of::<f32>());
    }

    #[test]
    fn test_box_vertices() {
        let vertices = box_vertices();
        assert_eq!(vertices.len(), 36);
        for vertex in &vertices {
            assert_eq!(vertex.position.abs(), Vec3::new(2.0, 1.0, 3.0));
        }

        // Every face lies on one side of the box.
        let sides = [(2, 3.0), (0, 2.0), (2, -3.0), (0, -2.0), (1, -1.0), (1, 1.0)];
        for (face, (axis, value)) in vertices.chunks(VERTICES_PER_FACE).zip(sides) {
            for vertex in face {
                assert_eq!(vertex.position[axis], value);
            }
            let uvs: Vec<Vec2> = face.iter().map(|v| v.uv).collect();
            assert_eq!(uvs, FACE_UVS);
        }
    }

    #[test]
    fn test_faces_wind_outward() {
        let vertices = box_vertices();
        for triangle in vertices.chunks(3) {
            let [a, b, c] = [triangle[0].position, triangle[1].position, triangle[2].position];
            let normal = (b - a).cross(c - a);
            let centroid = (a + b + c) / 3.0;
            assert!(normal.dot(centroid) > 0.0, "{triangle:?}");
        }
    }

    #[test]
    fn test_box_indices() {
        let indices = box_indices();
        assert_eq!(indices.len(), 36);
        assert!(indices.iter().enumerate().all(|(i, &index)| index == i as u32));
    }
}
