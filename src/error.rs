use thiserror::Error;

/// Crate-wide result type alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Failures of the animation collaborator: no display, no GPU, or a lost surface.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("could not start the windowing event loop: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),

    #[error("could not open a window: {0}")]
    Window(#[from] winit::error::OsError),

    #[error("could not create a drawing surface: {0}")]
    Surface(#[from] wgpu::CreateSurfaceError),

    #[error("no compatible graphics adapter found")]
    NoAdapter,

    #[error("the graphics adapter cannot present to this window")]
    IncompatibleSurface,

    #[error("could not acquire a graphics device: {0}")]
    Device(#[from] wgpu::RequestDeviceError),

    #[error("could not acquire the next frame: {0}")]
    Frame(#[from] wgpu::SurfaceError),
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("animation unavailable: {0}")]
    Render(#[from] RenderError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Process exit status: 2 when the animation could not run, 1 otherwise.
    pub fn exit_code(&self) -> u8 {
        match self {
            Error::Render(_) => 2,
            Error::Io(_) | Error::Json(_) => 1,
        }
    }
}
