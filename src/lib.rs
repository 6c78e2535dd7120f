//! A textured grid of boxes viewed through a keyboard-driven free camera.
//! The camera math, scene and input handling live here; `main.rs` owns the
//! window and runs the render loop.

pub mod abs;
pub mod camera;
pub mod config;
pub mod error;
pub mod input;
pub mod logging;
pub mod render;
pub mod scene;
pub mod state;
