use crate::app::Animation;
use crate::constants::WINDOW_SIZE;
use crate::error::RenderError;
use crate::renderer::renderer::Renderer;
use crate::renderer::{Frame, FrameRenderer};
use crate::simulation::atom::Atom;
use log::{debug, error, info};
use pollster::block_on;
use std::sync::Arc;
use std::time::Instant;
use winit::dpi::PhysicalSize;
use winit::event::{Event, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::WindowBuilder;

pub fn window_title(atom: &Atom) -> String {
    format!(
        "Simulation simple : {} (Z={})",
        atom.element().name(),
        atom.atomic_number()
    )
}

/// Opens a window and plays `animation` at its configured interval until the
/// window is closed.
///
/// A missing display or GPU surfaces as a `RenderError` before any frame is shown.
pub fn run_animation(mut animation: Animation) -> Result<(), RenderError> {
    let event_loop = EventLoop::new()?;
    let window = Arc::new(
        WindowBuilder::new()
            .with_title(window_title(animation.atom()))
            .with_inner_size(PhysicalSize::new(WINDOW_SIZE, WINDOW_SIZE))
            .build(&event_loop)?,
    );

    let mut renderer = block_on(Renderer::new(window.clone()))?;
    info!("animation window ready ({} frames per cycle)", animation.config().frames);

    let interval = animation.config().interval;
    let mut current = Frame::empty();
    let mut next_tick = Instant::now() + interval;
    let mut failure: Option<RenderError> = None;

    window.request_redraw();
    event_loop.run(|event, target| match event {
        Event::WindowEvent { window_id, event } if window_id == window.id() => match event {
            WindowEvent::CloseRequested => target.exit(),
            WindowEvent::Resized(new_size) => {
                renderer.resize(new_size);
                window.request_redraw();
            }
            WindowEvent::RedrawRequested => {
                if let Err(e) = renderer.render_frame(&current) {
                    error!("render failed at frame {}: {e}", current.index);
                    failure = Some(e);
                    target.exit();
                }
            }
            _ => {}
        },
        Event::AboutToWait => {
            let now = Instant::now();
            if now >= next_tick {
                // Fall behind by at most one frame instead of bursting to catch up.
                next_tick = (next_tick + interval).max(now);
                if let Some(frame) = animation.next_frame() {
                    current = frame;
                    window.request_redraw();
                }
            }

            if animation.is_finished() {
                target.set_control_flow(ControlFlow::Wait);
            } else {
                target.set_control_flow(ControlFlow::WaitUntil(next_tick));
            }
        }
        Event::LoopExiting => debug!("animation window closed"),
        _ => {}
    })?;

    match failure {
        Some(e) => Err(e),
        None => Ok(()),
    }
}
