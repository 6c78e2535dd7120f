use thiserror::Error;

/// Fatal errors raised while setting up the window and GPU resources.
#[derive(Debug, Error)]
pub enum SetupError {
    #[error("Failed to initialize SDL: {0}")]
    Windowing(String),
    #[error("Failed to open window: {0}")]
    Window(String),
    #[error("Failed to initialize OpenGL function loader: {0}")]
    Loader(String),
    #[error("Failed to build shader program: {0}")]
    Shader(String),
    #[error("Failed to create mesh: {0}")]
    Mesh(String),
    #[error("Failed to create texture: {0}")]
    Texture(String),
    #[error("Failed to load configuration: {0}")]
    Config(String),
    #[error("Failed to install logger: {0}")]
    Logger(#[from] log::SetLoggerError),
}
