pub mod app;
pub mod cli;
pub mod constants;
pub mod error;
pub mod physics;
pub mod platform;
pub mod renderer;
pub mod simulation;

use crate::app::Animation;
use crate::app::report;
use crate::cli::{Args, Mode};
use crate::constants::SHELL_RADIUS_SCALE;
use crate::error::Result;
use crate::simulation::atom::Atom;
use log::info;
use std::io::Write;

/// Builds the oxygen atom and runs the mode selected on the command line.
pub fn run(args: &Args) -> Result<()> {
    let atom = Atom::oxygen();

    match args.mode() {
        Mode::Print => {
            let stdout = std::io::stdout();
            let mut out = stdout.lock();
            if args.json {
                report::write_json(&mut out, &atom, SHELL_RADIUS_SCALE)?;
            } else {
                report::write_text(&mut out, &atom, SHELL_RADIUS_SCALE)?;
            }
            out.flush()?;
        }
        Mode::Animate => {
            info!("starting animation");
            let animation = Animation::new(atom, args.animation_config());
            platform::run_animation(animation)?;
        }
    }

    Ok(())
}
