use std::time::Instant;

use sdl2::{event::Event, keyboard::Scancode};

use cubegrid::{
    abs::App, config::Config, error::SetupError, input::MovementKeys, logging,
    render::SceneRenderer, state::AppState,
};

fn main() {
    if let Err(e) = run() {
        eprintln!("{e}");
        std::process::exit(-1);
    }
}

fn run() -> Result<(), SetupError> {
    let config = Config::load().map_err(SetupError::Config)?;
    logging::init(config.level_filter().map_err(SetupError::Config)?)?;

    let mut app = App::new(&config)?;
    let renderer = SceneRenderer::new(&app.gl, &config)?;
    let mut state = AppState::default();
    log::info!(
        "Rendering {} objects from eye {}",
        state.objects.len(),
        state.camera.eye_position
    );

    let start = Instant::now();

    'running: loop {
        for event in app.event_pump.poll_iter() {
            if let Event::Quit { .. } = event {
                log::info!("Close requested");
                break 'running;
            }
        }

        let keyboard = app.event_pump.keyboard_state();
        if keyboard.is_scancode_pressed(Scancode::Escape) {
            log::info!("Escape pressed");
            break 'running;
        }
        let keys = MovementKeys::from_keyboard(&keyboard);

        state.update(start.elapsed().as_secs_f32(), &keys);
        if keys.any() {
            log::trace!("Eye at {}", state.camera.eye_position);
        }

        renderer.draw(&state.camera, &state.objects);
        app.window.gl_swap_window();
    }

    log::info!("Releasing GPU resources");
    drop(renderer);
    drop(app);
    Ok(())
}
