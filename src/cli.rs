use crate::app::AnimationConfig;
use crate::constants::{DEFAULT_FRAMES, DEFAULT_INTERVAL_MS};
use clap::Parser;
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(
    version,
    about = "Simulation simple de l'atome d'oxygène (illustratif)",
    long_about = None
)]
pub struct Args {
    /// Open a window animating the electrons on their shells
    #[arg(long)]
    pub animate: bool,

    /// Print the configuration and initial positions (default; wins over --animate)
    #[arg(long = "print")]
    pub print: bool,

    /// Print the snapshot as JSON instead of text
    #[arg(long)]
    pub json: bool,

    /// Frames per animation cycle
    #[arg(long, default_value_t = DEFAULT_FRAMES)]
    pub frames: usize,

    /// Delay between frames, in milliseconds
    #[arg(long, default_value_t = DEFAULT_INTERVAL_MS)]
    pub interval_ms: u64,

    /// Stop after one cycle instead of looping
    #[arg(long)]
    pub once: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    Print,
    Animate,
}

impl Args {
    pub fn mode(&self) -> Mode {
        if self.animate && !self.print {
            Mode::Animate
        } else {
            Mode::Print
        }
    }

    pub fn animation_config(&self) -> AnimationConfig {
        AnimationConfig {
            frames: self.frames,
            interval: Duration::from_millis(self.interval_ms),
            repeat: !self.once,
            ..AnimationConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("oxygen-sim").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn print_is_the_default() {
        assert_eq!(parse(&[]).mode(), Mode::Print);
        assert_eq!(parse(&["--print"]).mode(), Mode::Print);
    }

    #[test]
    fn animate_selects_the_window() {
        assert_eq!(parse(&["--animate"]).mode(), Mode::Animate);
    }

    #[test]
    fn print_wins_over_animate() {
        assert_eq!(parse(&["--animate", "--print"]).mode(), Mode::Print);
        assert_eq!(parse(&["--print", "--animate"]).mode(), Mode::Print);
    }

    #[test]
    fn animation_options_feed_the_config() {
        let config = parse(&["--animate", "--frames", "10", "--interval-ms", "20", "--once"])
            .animation_config();
        assert_eq!(config.frames, 10);
        assert_eq!(config.interval, Duration::from_millis(20));
        assert!(!config.repeat);
        assert_eq!(config.radius_scale, 1.5);
    }

    #[test]
    fn defaults_loop_forever_at_fifty_ms() {
        let config = parse(&[]).animation_config();
        assert_eq!(config.frames, 600);
        assert_eq!(config.interval, Duration::from_millis(50));
        assert!(config.repeat);
    }

    #[test]
    fn unknown_flags_are_rejected() {
        assert!(Args::try_parse_from(["oxygen-sim", "--explode"]).is_err());
    }
}
