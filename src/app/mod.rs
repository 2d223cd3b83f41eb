pub mod report;

use crate::constants::{DEFAULT_FRAMES, DEFAULT_INTERVAL_MS, DEFAULT_TIME_STEP, SHELL_RADIUS_SCALE};
use crate::error::RenderError;
use crate::renderer::{Frame, FrameRenderer};
use crate::simulation::atom::Atom;
use log::debug;
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimationConfig {
    pub frames: usize,
    pub interval: Duration,
    pub dt: f64,
    pub radius_scale: f64,
    /// Restart the frame counter after `frames`; the atom itself keeps moving.
    pub repeat: bool,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            frames: DEFAULT_FRAMES,
            interval: Duration::from_millis(DEFAULT_INTERVAL_MS),
            dt: DEFAULT_TIME_STEP,
            radius_scale: SHELL_RADIUS_SCALE,
            repeat: true,
        }
    }
}

/// Drives an atom frame by frame: step, then snapshot positions.
pub struct Animation {
    atom: Atom,
    config: AnimationConfig,
    frame_index: usize,
}

impl Animation {
    pub fn new(atom: Atom, config: AnimationConfig) -> Self {
        Self {
            atom,
            config,
            frame_index: 0,
        }
    }

    pub fn atom(&self) -> &Atom {
        &self.atom
    }

    pub fn config(&self) -> &AnimationConfig {
        &self.config
    }

    pub fn is_finished(&self) -> bool {
        !self.config.repeat && self.frame_index >= self.config.frames
    }

    /// Advances one frame, or returns `None` once a non-repeating run is over.
    pub fn next_frame(&mut self) -> Option<Frame> {
        if self.config.frames == 0 || self.is_finished() {
            return None;
        }
        if self.frame_index >= self.config.frames {
            debug!("animation cycle complete; restarting frame counter");
            self.frame_index = 0;
        }

        self.atom.step(self.config.dt);
        let frame = Frame::new(self.frame_index, self.atom.positions(self.config.radius_scale));
        self.frame_index += 1;
        Some(frame)
    }

    /// Pushes one full cycle of frames into `renderer` without pacing.
    ///
    /// Starts with the empty backdrop frame, like the windowed loop does.
    pub fn drive<R: FrameRenderer>(&mut self, renderer: &mut R) -> Result<usize, RenderError> {
        renderer.render_frame(&Frame::empty())?;
        let mut rendered = 0;
        while rendered < self.config.frames {
            let Some(frame) = self.next_frame() else {
                break;
            };
            renderer.render_frame(&frame)?;
            rendered += 1;
        }
        Ok(rendered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[derive(Default)]
    struct RecordingRenderer {
        frames: Vec<Frame>,
        fail_at: Option<usize>,
    }

    impl FrameRenderer for RecordingRenderer {
        fn render_frame(&mut self, frame: &Frame) -> Result<(), RenderError> {
            if self.fail_at == Some(self.frames.len()) {
                return Err(RenderError::NoAdapter);
            }
            self.frames.push(frame.clone());
            Ok(())
        }
    }

    fn config(frames: usize, repeat: bool) -> AnimationConfig {
        AnimationConfig {
            frames,
            repeat,
            ..AnimationConfig::default()
        }
    }

    #[test]
    fn defaults_match_the_plot_cadence() {
        let config = AnimationConfig::default();
        assert_eq!(config.frames, 600);
        assert_eq!(config.interval, Duration::from_millis(50));
        assert_eq!(config.dt, 1.0);
        assert_eq!(config.radius_scale, 1.5);
    }

    #[test]
    fn each_frame_steps_before_snapshotting() {
        let mut animation = Animation::new(Atom::oxygen(), config(3, false));
        let frame = animation.next_frame().unwrap();
        assert_eq!(frame.index, 0);
        assert_eq!(frame.positions.len(), 8);
        // First electron has moved 0.12 rad on a 1.5-radius circle.
        assert_relative_eq!(frame.positions[0].x, 1.5 * 0.12f64.cos(), epsilon = 1e-12);
        assert_relative_eq!(frame.positions[0].y, 1.5 * 0.12f64.sin(), epsilon = 1e-12);
    }

    #[test]
    fn non_repeating_run_stops_after_frame_count() {
        let mut animation = Animation::new(Atom::oxygen(), config(2, false));
        assert!(animation.next_frame().is_some());
        assert!(animation.next_frame().is_some());
        assert!(animation.next_frame().is_none());
        assert!(animation.is_finished());
    }

    #[test]
    fn repeating_run_restarts_counter_but_keeps_moving() {
        let mut animation = Animation::new(Atom::oxygen(), config(2, true));
        let indices: Vec<usize> = (0..5).map(|_| animation.next_frame().unwrap().index).collect();
        assert_eq!(indices, [0, 1, 0, 1, 0]);
        assert_relative_eq!(animation.atom().electrons()[0].angle(), 5.0 * 0.12, epsilon = 1e-12);
    }

    #[test]
    fn drive_renders_backdrop_then_every_frame() {
        let mut renderer = RecordingRenderer::default();
        let mut animation = Animation::new(Atom::oxygen(), config(4, true));
        let rendered = animation.drive(&mut renderer).unwrap();
        assert_eq!(rendered, 4);
        assert_eq!(renderer.frames.len(), 5);
        assert!(renderer.frames[0].positions.is_empty());
        let indices: Vec<usize> = renderer.frames[1..].iter().map(|f| f.index).collect();
        assert_eq!(indices, [0, 1, 2, 3]);
    }

    #[test]
    fn drive_propagates_renderer_failure() {
        let mut renderer = RecordingRenderer {
            fail_at: Some(2),
            ..Default::default()
        };
        let mut animation = Animation::new(Atom::oxygen(), config(10, false));
        let err = animation.drive(&mut renderer).unwrap_err();
        assert!(matches!(err, RenderError::NoAdapter));
        assert_eq!(renderer.frames.len(), 2);
    }

    #[test]
    fn zero_frames_renders_backdrop_only() {
        let mut renderer = RecordingRenderer::default();
        let mut animation = Animation::new(Atom::oxygen(), config(0, true));
        assert_eq!(animation.drive(&mut renderer).unwrap(), 0);
        assert_eq!(renderer.frames.len(), 1);
    }
}
