//! Thin wrappers over SDL2 and OpenGL: the application window and context,
//! GPU meshes, shader programs and textures.

pub mod app;
pub mod mesh;
pub mod shader;
pub mod texture;

pub use app::*;
pub use mesh::*;
pub use shader::*;
pub use texture::*;
