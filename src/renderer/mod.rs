pub mod mesh;
pub mod renderer;
pub mod vertex;
pub mod view;

use crate::error::RenderError;
use glam::DVec2;

/// One animation frame: electron positions in plot units, in atom order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Frame {
    pub index: usize,
    pub positions: Vec<DVec2>,
}

impl Frame {
    pub fn new(index: usize, positions: Vec<DVec2>) -> Self {
        Self { index, positions }
    }

    /// Backdrop only, drawn before the first tick.
    pub fn empty() -> Self {
        Self::default()
    }
}

/// Anything that can put a frame of electron positions on screen.
pub trait FrameRenderer {
    fn render_frame(&mut self, frame: &Frame) -> Result<(), RenderError>;
}
