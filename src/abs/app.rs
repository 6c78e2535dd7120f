//! SDL2 and OpenGL application management.
//!
//! This module defines the [`App`] struct which owns the SDL2 window and the
//! OpenGL 3.3 core context used for rendering.

use std::sync::Arc;

use glow::HasContext;

use crate::{config::Config, error::SetupError};

/// The [`App`] struct encapsulates the SDL2 and OpenGL context.
///
/// Field order is drop order: the GL function table goes first and SDL last.
pub struct App {
    pub gl: Arc<glow::Context>,
    pub event_pump: sdl2::EventPump,
    _gl_context: sdl2::video::GLContext,
    pub window: sdl2::video::Window,
    _video_subsystem: sdl2::VideoSubsystem,
    _sdl: sdl2::Sdl,
}

impl App {
    /// Creates a fixed-size window with an OpenGL 3.3 core context as
    /// described by `config`.
    pub fn new(config: &Config) -> Result<Self, SetupError> {
        let sdl = sdl2::init().map_err(SetupError::Windowing)?;
        let video_subsystem = sdl.video().map_err(SetupError::Windowing)?;

        let gl_attr = video_subsystem.gl_attr();
        gl_attr.set_context_profile(sdl2::video::GLProfile::Core);
        gl_attr.set_context_version(3, 3);
        gl_attr.set_context_flags().forward_compatible().set();
        if config.msaa_samples > 0 {
            gl_attr.set_multisample_buffers(1);
            gl_attr.set_multisample_samples(config.msaa_samples);
        }

        let window = video_subsystem
            .window(&config.window_title, config.window_width, config.window_height)
            .opengl()
            .position_centered()
            .build()
            .map_err(|e| SetupError::Window(e.to_string()))?;

        let gl_context = window.gl_create_context().map_err(SetupError::Window)?;
        window
            .gl_make_current(&gl_context)
            .map_err(SetupError::Window)?;

        let gl = unsafe {
            glow::Context::from_loader_function(|s| {
                video_subsystem.gl_get_proc_address(s) as *const _
            })
        };
        let version = gl.version();
        if version.major < 3 || (version.major == 3 && version.minor < 3) {
            return Err(SetupError::Loader(format!(
                "OpenGL 3.3 required, got {}.{} ({})",
                version.major, version.minor, version.vendor_info
            )));
        }
        log::info!(
            "OpenGL {}.{} ({}) on {}",
            version.major,
            version.minor,
            version.vendor_info,
            unsafe { gl.get_parameter_string(glow::RENDERER) }
        );

        let event_pump = sdl.event_pump().map_err(SetupError::Windowing)?;

        Ok(Self {
            gl: Arc::new(gl),
            event_pump,
            _gl_context: gl_context,
            window,
            _video_subsystem: video_subsystem,
            _sdl: sdl,
        })
    }
}
