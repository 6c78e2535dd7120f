//! Per-frame drawing of the object grid.

pub mod meshing;

use std::sync::Arc;

use glow::HasContext;

use crate::{
    abs::{Mesh, Shader, ShaderProgram, Texture},
    camera::Camera,
    config::Config,
    error::SetupError,
    scene::Object,
};

/// Texture unit the box texture is bound to.
pub const TEXTURE_UNIT: u32 = 0;

const CHECKERBOARD_SIZE: u32 = 256;
const CHECKERBOARD_CELLS: u32 = 8;

macro_rules! builtin_shader {
    ($gl:expr, $kind:expr, $name:literal, $file:literal) => {
        Shader::new(
            $gl,
            $kind,
            include_str!(concat!("shaders/", $name, "/", $file)),
        )
    };
}

/// GPU resources needed to draw the scene. Fields drop in reverse order of
/// acquisition.
pub struct SceneRenderer {
    gl: Arc<glow::Context>,
    texture: Texture,
    program: ShaderProgram,
    mesh: Mesh,
    clear_color: [f32; 4],
}

impl SceneRenderer {
    /// Uploads the box mesh, builds the shader program and loads the texture.
    pub fn new(gl: &Arc<glow::Context>, config: &Config) -> Result<Self, SetupError> {
        let mesh = meshing::box_mesh(gl).map_err(SetupError::Mesh)?;
        log::debug!("Uploaded box mesh with {} indices", mesh.index_count());

        let program = load_program(gl, config).map_err(SetupError::Shader)?;

        let texture = match Texture::load(gl, &config.texture_path) {
            Ok(texture) => {
                log::info!(
                    "Loaded texture {} ({}x{})",
                    config.texture_path.display(),
                    texture.width(),
                    texture.height()
                );
                texture
            }
            Err(e) => {
                log::warn!("Failed to load texture, using checkerboard: {}", e);
                Texture::checkerboard(gl, CHECKERBOARD_SIZE, CHECKERBOARD_CELLS)
                    .map_err(SetupError::Texture)?
            }
        };

        program.use_program();
        program.set_uniform("texture", TEXTURE_UNIT as i32);

        unsafe {
            gl.enable(glow::DEPTH_TEST);
        }

        Ok(Self {
            gl: Arc::clone(gl),
            texture,
            program,
            mesh,
            clear_color: config.clear_color,
        })
    }

    /// Clears the frame and draws every object with its MVP. The camera
    /// matrices must already be up to date for this frame.
    pub fn draw(&self, camera: &Camera, objects: &[Object]) {
        let [r, g, b, a] = self.clear_color;
        unsafe {
            self.gl.clear_color(r, g, b, a);
            self.gl
                .clear(glow::COLOR_BUFFER_BIT | glow::DEPTH_BUFFER_BIT);
        }

        self.program.use_program();
        self.texture.bind(TEXTURE_UNIT);

        for object in objects {
            let mvp = camera.mvp(object.model_matrix());
            self.program.set_uniform("MVP", mvp);
            self.mesh.draw();
        }
    }
}

/// Builds the box shader program from the configured files, or from the
/// built-in sources for any stage without a configured path.
fn load_program(gl: &Arc<glow::Context>, config: &Config) -> Result<ShaderProgram, String> {
    let vert = match &config.vertex_shader {
        Some(path) => Shader::from_file(gl, glow::VERTEX_SHADER, path)?,
        None => builtin_shader!(gl, glow::VERTEX_SHADER, "box", "vert.glsl")?,
    };
    let frag = match &config.fragment_shader {
        Some(path) => Shader::from_file(gl, glow::FRAGMENT_SHADER, path)?,
        None => builtin_shader!(gl, glow::FRAGMENT_SHADER, "box", "frag.glsl")?,
    };
    ShaderProgram::new(gl, &[&vert, &frag])
}
